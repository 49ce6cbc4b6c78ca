//! String-boundary operations: the engine surface for collaborators.
//!
//! Every function here takes the raw `(hex, bits)` pair a caller holds,
//! validates it exactly once, and delegates to the typed core. Validation
//! failures surface immediately as [`InputError`]; nothing downstream of a
//! successful parse can fail. Formatting and rendering of the returned
//! structures are caller responsibilities.

use crate::bitmath;
use crate::features::{self, FeatureSnapshot};
use crate::grid::BitGrid;
use crate::input::{HashBits, HashInput, InputError};
use crate::passage;
use crate::rarity::{self, RarityTier, TraitValue};
use crate::symmetry::{self, Symmetry};
use std::collections::BTreeMap;

/// Builds the 4 × N bit grid for a hex hash.
pub fn build_grid(hex: &str, bits: HashBits) -> Result<BitGrid, InputError> {
    let input = HashInput::parse(hex, bits)?;
    Ok(BitGrid::build(&input))
}

/// Counts one-bits in a hex hash.
pub fn popcount(hex: &str, bits: HashBits) -> Result<u32, InputError> {
    let input = HashInput::parse(hex, bits)?;
    Ok(bitmath::popcount(&input))
}

/// Returns true iff the hash has exactly 50 % one-bits.
pub fn is_balanced(hex: &str, bits: HashBits) -> Result<bool, InputError> {
    let input = HashInput::parse(hex, bits)?;
    Ok(bitmath::is_balanced(&input))
}

/// Counts zero-bit corridors connecting the innermost ring to the rim.
pub fn count_passages(hex: &str, bits: HashBits) -> Result<usize, InputError> {
    let input = HashInput::parse(hex, bits)?;
    Ok(passage::count_passages(&BitGrid::build(&input)))
}

/// Finds all maximal circular-palindromic spans, by start ascending.
pub fn find_symmetries(hex: &str, bits: HashBits) -> Result<Vec<Symmetry>, InputError> {
    let input = HashInput::parse(hex, bits)?;
    let grid = BitGrid::build(&input);
    Ok(symmetry::find_symmetries(&grid, &input))
}

/// Histogram of maximal-symmetry lengths, e.g. `{2: 4, 3: 1}`.
pub fn symmetry_ranks(hex: &str, bits: HashBits) -> Result<BTreeMap<usize, usize>, InputError> {
    Ok(symmetry::symmetry_ranks(&find_symmetries(hex, bits)?))
}

/// Classifies a trait value against the rarity tables for the width.
///
/// Total over its inputs; provided here so callers of the string boundary
/// need only this module.
pub fn classify_rarity(value: &TraitValue, bits: HashBits) -> RarityTier {
    rarity::classify(value, bits)
}

/// Computes the full feature snapshot of a hash in one pass.
pub fn analyze(hex: &str, bits: HashBits) -> Result<FeatureSnapshot, InputError> {
    let input = HashInput::parse(hex, bits)?;
    Ok(features::analyze(&input))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every entry point rejects malformed input before analysis.
    #[test]
    fn entry_points_validate_first() {
        let bad = "xyz";
        assert!(build_grid(bad, HashBits::B256).is_err());
        assert!(popcount(bad, HashBits::B256).is_err());
        assert!(is_balanced(bad, HashBits::B256).is_err());
        assert!(count_passages(bad, HashBits::B256).is_err());
        assert!(find_symmetries(bad, HashBits::B256).is_err());
        assert!(symmetry_ranks(bad, HashBits::B256).is_err());
        assert!(analyze(bad, HashBits::B256).is_err());
    }

    /// The `0x` prefix is accepted at the string boundary.
    #[test]
    fn prefixed_input_accepted() {
        let hex = format!("0x{}", "f0".repeat(32));
        assert_eq!(popcount(&hex, HashBits::B256).unwrap(), 128);
        assert!(is_balanced(&hex, HashBits::B256).unwrap());
    }

    /// String-boundary results agree with the typed core.
    #[test]
    fn boundary_agrees_with_core() {
        let hex = "1f2e3d4c5b6a79881f2e3d4c5b6a79881f2e3d4c";
        let input = HashInput::parse(hex, HashBits::B160).unwrap();
        let snap = analyze(hex, HashBits::B160).unwrap();
        assert_eq!(snap, features::analyze(&input));
        assert_eq!(count_passages(hex, HashBits::B160).unwrap(), snap.passages);
        assert_eq!(find_symmetries(hex, HashBits::B160).unwrap(), snap.symmetries);
        assert_eq!(symmetry_ranks(hex, HashBits::B160).unwrap(), snap.ranks);
    }
}
