//! Feature aggregation: one pass over a hash, all structural traits.
//!
//! `analyze` builds the grid once and runs every analysis over it, bundling
//! the results into a [`FeatureSnapshot`]. Snapshots are derived fresh per
//! call and never cached or mutated.

use crate::bitmath::{evenness_ratio, is_balanced, popcount};
use crate::grid::BitGrid;
use crate::input::HashInput;
use crate::passage::count_passages;
use crate::symmetry::{find_symmetries, symmetry_ranks, Symmetry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The dominant symmetry class of a hash: the highest span length present
/// among the maximal symmetries, paired with how many spans share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crown {
    /// No symmetric spans were found.
    None,
    /// At least one maximal span exists; `length` is the highest present.
    Ranked {
        /// Span length of the dominant class.
        length: usize,
        /// Number of maximal spans at that length.
        count: usize,
    },
}

impl Crown {
    /// Derives the crown from a rank histogram: highest length wins.
    pub fn from_ranks(ranks: &BTreeMap<usize, usize>) -> Self {
        match ranks.iter().next_back() {
            Some((&length, &count)) => Crown::Ranked { length, count },
            None => Crown::None,
        }
    }

    /// Canonical table key: `"<length>:<count>"`, or `"—"` when absent.
    ///
    /// This is the key form used by the empirical rarity tables.
    pub fn key(&self) -> String {
        match self {
            Crown::Ranked { length, count } => format!("{}:{}", length, count),
            Crown::None => "—".to_owned(),
        }
    }
}

impl fmt::Display for Crown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// All structural features of one hash, computed in a single analysis pass.
///
/// # Invariants
/// - `symmetries` is sorted by start ascending and contains only maximal spans
/// - `ranks` is the length histogram of `symmetries`
/// - `crown` is derived from `ranks`
/// - `balanced` holds iff `ones` is exactly half the bit-width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSnapshot {
    /// Number of one-bits.
    pub ones: u32,
    /// Exact 50 % balance.
    pub balanced: bool,
    /// `min(ones, zeros) / max(ones, zeros)`, in `[0, 1]`.
    pub evenness: f64,
    /// Count of zero-bit corridors reaching the outermost ring.
    pub passages: usize,
    /// Maximal symmetric spans, by start ascending.
    pub symmetries: Vec<Symmetry>,
    /// Histogram: span length → count over `symmetries`.
    pub ranks: BTreeMap<usize, usize>,
    /// Dominant symmetry class.
    pub crown: Crown,
}

/// Runs every structural analysis over one validated input.
///
/// The grid is built once and shared by the passage and symmetry analyses;
/// the bit counter reads the hex nibbles directly.
pub fn analyze(input: &HashInput) -> FeatureSnapshot {
    let grid = BitGrid::build(input);
    let symmetries = find_symmetries(&grid, input);
    let ranks = symmetry_ranks(&symmetries);
    let crown = Crown::from_ranks(&ranks);
    FeatureSnapshot {
        ones: popcount(input),
        balanced: is_balanced(input),
        evenness: evenness_ratio(input),
        passages: count_passages(&grid),
        symmetries,
        ranks,
        crown,
    }
}
