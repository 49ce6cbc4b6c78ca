//! Empirical rarity classification of structural traits.
//!
//! Maps a trait value (evenness ratio, passage count, or crown descriptor)
//! to an ordinal rarity tier using fixed per-bit-width tables. The crown
//! tables hold observed frequencies from 50 000-hash reference samples per
//! width; evenness and passage tables are breakpoint/bucket tables tuned on
//! the same samples. All tables are embedded constants — nothing is
//! regenerated at runtime — and every classifier is total: values outside a
//! table deterministically map to [`RarityTier::OffScale`].

use crate::features::Crown;
use crate::input::HashBits;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal rarity of an observed trait value.
///
/// `Modal` marks the most common (modal) classes of the reference sample and
/// `UltraRare` the scarcest observed ones. `OffScale` is the overflow tier
/// for values outside the sampled range entirely; it sorts above every
/// in-range tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RarityTier {
    /// The modal class: what a typical hash looks like.
    Modal,
    /// Common but off the mode.
    Common,
    /// Uncommon.
    Uncommon,
    /// Rare.
    Rare,
    /// Very rare.
    VeryRare,
    /// Ultra-rare: at the edge of the observed sample.
    UltraRare,
    /// Beyond the observed sample range.
    OffScale,
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RarityTier::Modal => "modal",
            RarityTier::Common => "common",
            RarityTier::Uncommon => "uncommon",
            RarityTier::Rare => "rare",
            RarityTier::VeryRare => "very rare",
            RarityTier::UltraRare => "ultra rare",
            RarityTier::OffScale => "off scale",
        };
        f.write_str(name)
    }
}

/// A trait value submitted for classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraitValue {
    /// Evenness ratio in `[0, 1]`.
    Evenness(f64),
    /// Passage count.
    Passages(usize),
    /// Dominant symmetry class.
    Crown(Crown),
}

/// Classifies a trait value against the tables for the given width.
///
/// Total: never fails, even for out-of-range or unseen values.
pub fn classify(value: &TraitValue, bits: HashBits) -> RarityTier {
    match value {
        TraitValue::Evenness(ratio) => classify_evenness(*ratio, bits),
        TraitValue::Passages(count) => classify_passages(*count, bits),
        TraitValue::Crown(crown) => classify_crown(crown, bits),
    }
}

/* ---------------- evenness ---------------- */

// Descending breakpoints: the first entry whose threshold the ratio meets
// decides the tier. Ratios below the last breakpoint are off scale. The
// achievable balance distribution depends on the grid size, hence separate
// tables per width.
const EVENNESS_256: &[(f64, RarityTier)] = &[
    (0.99, RarityTier::Uncommon), // exact 1.00 is less common than the wing
    (0.93, RarityTier::Modal),    // modal right wing 0.93–0.98
    (0.89, RarityTier::Common),
    (0.83, RarityTier::Uncommon),
    (0.78, RarityTier::Rare),
    (0.72, RarityTier::VeryRare),
    (0.68, RarityTier::UltraRare),
];

const EVENNESS_160: &[(f64, RarityTier)] = &[
    (0.99, RarityTier::Uncommon),
    (0.95, RarityTier::Modal),
    (0.90, RarityTier::Common),
    (0.85, RarityTier::Uncommon),
    (0.80, RarityTier::Rare),
    (0.75, RarityTier::VeryRare),
    (0.70, RarityTier::UltraRare),
];

/// Buckets an evenness ratio. NaN and out-of-range ratios are off scale.
pub fn classify_evenness(ratio: f64, bits: HashBits) -> RarityTier {
    if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
        return RarityTier::OffScale;
    }
    let table = match bits {
        HashBits::B256 => EVENNESS_256,
        HashBits::B160 => EVENNESS_160,
    };
    for &(threshold, tier) in table {
        if ratio >= threshold {
            return tier;
        }
    }
    RarityTier::OffScale
}

/* ---------------- passages ---------------- */

// Indexed by passage count; counts past the end are off scale.
// 256-bit: symmetric around the mode at 5.
const PASSAGES_256: &[RarityTier] = &[
    RarityTier::UltraRare, // 0
    RarityTier::VeryRare,  // 1
    RarityTier::Rare,      // 2
    RarityTier::Uncommon,  // 3
    RarityTier::Common,    // 4
    RarityTier::Modal,     // 5 (mode)
    RarityTier::Common,    // 6
    RarityTier::Uncommon,  // 7
    RarityTier::Rare,      // 8
    RarityTier::VeryRare,  // 9
    RarityTier::UltraRare, // 10
    RarityTier::UltraRare, // 11
];

// 160-bit: mode at 3, short left tail, long right tail.
const PASSAGES_160: &[RarityTier] = &[
    RarityTier::VeryRare,  // 0  (~0.75 %)
    RarityTier::Uncommon,  // 1  (~7.65 %)
    RarityTier::Common,    // 2  (~24.23 %)
    RarityTier::Modal,     // 3  (~34.32 %, mode)
    RarityTier::Common,    // 4  (~23.26 %)
    RarityTier::Uncommon,  // 5  (~8.18 %)
    RarityTier::VeryRare,  // 6  (~1.47 %)
    RarityTier::UltraRare, // 7  (~0.13 %)
    RarityTier::UltraRare, // 8
];

/// Looks up a passage count in the fixed table for the width.
pub fn classify_passages(count: usize, bits: HashBits) -> RarityTier {
    let table = match bits {
        HashBits::B256 => PASSAGES_256,
        HashBits::B160 => PASSAGES_160,
    };
    table.get(count).copied().unwrap_or(RarityTier::OffScale)
}

/* ---------------- crown ---------------- */

// Observed fractions of each "<length>:<count>" crown class over 50k
// uniformly random hashes per width. "—" is the no-symmetry class.
const CROWN_FREQ_256: &[(&str, f64)] = &[
    ("2:1", 0.00084),
    ("2:2", 0.00184),
    ("2:3", 0.00320),
    ("2:4", 0.00258),
    ("2:5", 0.00214),
    ("2:6", 0.00140),
    ("2:7", 0.00060),
    ("2:8", 0.00014),
    ("2:9", 0.00014),
    ("2:10", 0.00004),
    ("3:1", 0.04944),
    ("3:2", 0.09764),
    ("3:3", 0.12696),
    ("3:4", 0.12238),
    ("3:5", 0.09138),
    ("3:6", 0.05516),
    ("3:7", 0.02806),
    ("3:8", 0.01280),
    ("3:9", 0.00488),
    ("3:10", 0.00164),
    ("3:11", 0.00052),
    ("3:12", 0.00010),
    ("3:13", 0.00004),
    ("4:1", 0.14348),
    ("4:2", 0.01568),
    ("4:3", 0.00138),
    ("4:4", 0.00002),
    ("5:1", 0.18222),
    ("5:2", 0.02046),
    ("5:3", 0.00162),
    ("5:4", 0.00012),
    ("6:1", 0.01420),
    ("6:2", 0.00016),
    ("7:1", 0.01434),
    ("7:2", 0.00002),
    ("8:1", 0.00120),
    ("9:1", 0.00086),
    ("10:1", 0.00004),
    ("11:1", 0.00004),
    ("13:1", 0.00002),
    ("—", 0.00022),
];

const CROWN_FREQ_160: &[(&str, f64)] = &[
    ("2:1", 0.01356),
    ("2:2", 0.01820),
    ("2:3", 0.01564),
    ("2:4", 0.00808),
    ("2:5", 0.00352),
    ("2:6", 0.00094),
    ("2:7", 0.00018),
    ("2:8", 0.00002),
    ("3:1", 0.15942),
    ("3:2", 0.19666),
    ("3:3", 0.15892),
    ("3:4", 0.09080),
    ("3:5", 0.04116),
    ("3:6", 0.01486),
    ("3:7", 0.00404),
    ("3:8", 0.00114),
    ("3:9", 0.00020),
    ("4:1", 0.10628),
    ("4:2", 0.00770),
    ("4:3", 0.00028),
    ("5:1", 0.12406),
    ("5:2", 0.00912),
    ("5:3", 0.00044),
    ("6:1", 0.00910),
    ("6:2", 0.00010),
    ("7:1", 0.00992),
    ("7:2", 0.00014),
    ("8:1", 0.00054),
    ("9:1", 0.00046),
    ("10:1", 0.00002),
    ("11:1", 0.00002),
    ("—", 0.00448),
];

/// Non-linear probability breakpoints, identical across widths.
fn tier_for_frequency(p: f64) -> RarityTier {
    if p >= 0.12 {
        RarityTier::Modal
    } else if p >= 0.05 {
        RarityTier::Common
    } else if p >= 0.018 {
        RarityTier::Uncommon
    } else if p >= 0.005 {
        RarityTier::Rare
    } else if p >= 0.0012 {
        RarityTier::VeryRare
    } else {
        RarityTier::UltraRare
    }
}

/// Classifies a crown class by its sampled frequency.
///
/// Crown keys never seen in the reference sample are off scale.
pub fn classify_crown(crown: &Crown, bits: HashBits) -> RarityTier {
    let table = match bits {
        HashBits::B256 => CROWN_FREQ_256,
        HashBits::B160 => CROWN_FREQ_160,
    };
    let key = crown.key();
    match table.iter().find(|(k, _)| *k == key) {
        Some(&(_, p)) => tier_for_frequency(p),
        None => RarityTier::OffScale,
    }
}
