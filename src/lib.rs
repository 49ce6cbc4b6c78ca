//! Hashmandala: structural analysis of cryptographic hashes rendered as
//! circular bit-grid "mandalas".
//!
//! A hash of 160 or 256 bits becomes a grid of 4 concentric rings × N
//! angular sectors (N = bits / 4, one hex digit per sector). This crate
//! computes the structural features of that grid:
//!
//! - **Balance** — whether one-bits and zero-bits split exactly 50/50, plus
//!   the evenness ratio `min(ones, zeros) / max(ones, zeros)`.
//! - **Passages** — zero-bit corridors connecting the innermost ring to the
//!   outermost, counted by breadth-first flood fill.
//! - **Symmetries** — maximal circular-palindromic spans of sectors, where
//!   the palindrome property must hold in all four rings simultaneously.
//! - **Rarity** — an empirical classification of each feature value against
//!   fixed per-width tables sampled from 50 000 random hashes.
//!
//! Every analysis is a pure, synchronous function of `(hex, bits)`: no
//! caching, no shared state, no I/O. Rendering, export, and layout are
//! collaborator responsibilities; the engine's contract ends at the
//! structured values returned here.
//!
//! # Example
//!
//! ```
//! use hashmandala::prelude::*;
//!
//! let hex = format!("0x{}", "0".repeat(64));
//! let snapshot = analyze(&hex, HashBits::B256).unwrap();
//! assert_eq!(snapshot.ones, 0);
//! assert!(!snapshot.balanced);
//! // The fully open disc is a single corridor touching the rim.
//! assert_eq!(snapshot.passages, 1);
//! // One whole-ring palindrome dominates.
//! assert_eq!(snapshot.symmetries.len(), 1);
//! assert_eq!(snapshot.crown, Crown::Ranked { length: 64, count: 1 });
//! ```

pub mod bitmath;
pub mod features;
pub mod grid;
pub mod input;
pub mod operations;
pub mod passage;
pub mod rarity;
pub mod symmetry;

pub use features::{Crown, FeatureSnapshot};
pub use grid::{BitGrid, RINGS};
pub use input::{HashBits, HashInput, InputError};
pub use rarity::{RarityTier, TraitValue};
pub use symmetry::Symmetry;

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::features::{Crown, FeatureSnapshot};
    pub use crate::grid::{BitGrid, RINGS};
    pub use crate::input::{HashBits, HashInput, InputError};
    pub use crate::operations::{
        analyze, build_grid, classify_rarity, count_passages, find_symmetries, is_balanced,
        popcount, symmetry_ranks,
    };
    pub use crate::rarity::{RarityTier, TraitValue};
    pub use crate::symmetry::Symmetry;
}
