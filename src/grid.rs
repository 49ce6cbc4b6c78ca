//! The circular bit grid underlying all structural analyses.
//!
//! A hash of `b` bits becomes a grid of 4 concentric rings × `b / 4` angular
//! sectors, one bit per cell. Each hex digit owns one sector: the digit
//! expands to its 4-bit binary form most-significant bit first, and ring `r`
//! takes bit `r` of that expansion (ring 0, the innermost, takes the MSB).
//!
//! Renderers of this grid may reverse the per-sector nibble when mapping
//! rings to visual layers. That reversal is a presentation concern and is
//! deliberately absent here: passage and symmetry analysis must observe one
//! consistent ring assignment, which is the non-reversed mapping below.
//! Visual overlays that need to align exactly with analysis results must
//! account for the difference on their side.

use crate::input::HashInput;
use serde::{Deserialize, Serialize};

/// Number of concentric rings in every mandala grid.
pub const RINGS: usize = 4;

/// A 4 × N grid of single bits derived from a hash.
///
/// Ring index 0 is innermost, `RINGS - 1` outermost. Sector indices are
/// circular: sector `N - 1` is adjacent to sector 0. The grid is immutable
/// once built and owned by the analysis call that created it.
///
/// # Invariants
/// - every ring holds exactly `sectors` bits
/// - `sectors == input.sectors()` for the input it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitGrid {
    sectors: usize,
    rings: [Vec<bool>; RINGS],
}

impl BitGrid {
    /// Builds the grid for a validated hash input.
    ///
    /// Deterministic: the same input always yields the same grid. A fresh
    /// grid is allocated per call; nothing is cached.
    pub fn build(input: &HashInput) -> Self {
        let sectors = input.sectors();
        let mut rings: [Vec<bool>; RINGS] = std::array::from_fn(|_| vec![false; sectors]);
        for sector in 0..sectors {
            let nibble = input.nibble(sector);
            for (ring, row) in rings.iter_mut().enumerate() {
                // MSB-first: ring 0 reads bit 3 of the nibble value.
                row[sector] = (nibble >> (RINGS - 1 - ring)) & 1 == 1;
            }
        }
        Self { sectors, rings }
    }

    /// Returns the number of sectors (grid columns).
    #[inline]
    pub const fn sectors(&self) -> usize {
        self.sectors
    }

    /// Returns the bit at `(ring, sector)`.
    ///
    /// # Panics
    /// Panics if `ring >= RINGS` or `sector >= self.sectors()`.
    #[inline]
    pub fn bit(&self, ring: usize, sector: usize) -> bool {
        self.rings[ring][sector]
    }

    /// Returns true iff the cell is open (bit 0). Walls carry bit 1.
    #[inline]
    pub fn is_open(&self, ring: usize, sector: usize) -> bool {
        !self.rings[ring][sector]
    }
}
