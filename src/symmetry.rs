//! Circular-palindrome symmetry detection over the mandala grid.
//!
//! A span of sectors is *symmetric* when, for every ring independently, the
//! bit sequence over the span reads identically forward and backward under
//! circular indexing. The finder enumerates every candidate span and then
//! reduces the set to *maximal* spans: a span fully contained (circularly)
//! in a kept span of equal or greater length is suppressed as redundant.
//!
//! Enumeration is the O(N³) brute force over `(start, length)` pairs, which
//! is deliberate: N ≤ 64 keeps the search in the tens of thousands of bit
//! comparisons, and the simultaneous four-ring constraint does not fit the
//! classic single-sequence linear-time machinery.
//!
//! # Citations
//! - Palindrome detection: Manacher, "A new linear-time on-line algorithm for
//!   finding the smallest initial palindrome of a string" (1975)

use crate::grid::{BitGrid, RINGS};
use crate::input::HashInput;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A maximal circular-palindromic span of sectors.
///
/// # Invariants
/// - `2 <= length <= N` and `start < N` for the grid it was found in
/// - `slice.len() == length`, quoting the source hex across the wrap
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symmetry {
    /// Index of the first sector (0-based, circular).
    pub start: usize,
    /// Number of sectors covered (the rank of the figure).
    pub length: usize,
    /// Hex subsequence over the span, wrap-aware.
    pub slice: String,
}

/// Finds all maximal circular palindromes of the grid, sorted by start.
///
/// Every `(start ∈ [0, N), length ∈ [2, N])` pair is tested; survivors of
/// the maximality reduction are returned in ascending start order. The
/// result is deterministic: candidates are sorted by length (descending)
/// before the containment pass, so no enumeration order leaks through.
pub fn find_symmetries(grid: &BitGrid, input: &HashInput) -> Vec<Symmetry> {
    let sectors = grid.sectors();
    let mut all = Vec::new();

    for start in 0..sectors {
        for length in 2..=sectors {
            if is_circular_palindrome(grid, start, length) {
                all.push(Symmetry {
                    start,
                    length,
                    slice: input.circular_slice(start, length),
                });
            }
        }
    }
    maximal_only(all, sectors)
}

/// Histogram of maximal-symmetry lengths, e.g. `{2: 4, 3: 1}`.
pub fn symmetry_ranks(symmetries: &[Symmetry]) -> BTreeMap<usize, usize> {
    let mut ranks = BTreeMap::new();
    for sym in symmetries {
        *ranks.entry(sym.length).or_insert(0) += 1;
    }
    ranks
}

/// Checks whether `[start, start + length)` is a palindrome in all rings.
fn is_circular_palindrome(grid: &BitGrid, start: usize, length: usize) -> bool {
    let sectors = grid.sectors();
    let half = length / 2;
    for ring in 0..RINGS {
        for k in 0..half {
            let left = (start + k) % sectors;
            let right = (start + length - 1 - k) % sectors;
            if grid.bit(ring, left) != grid.bit(ring, right) {
                return false;
            }
        }
    }
    true
}

/// True iff span `b` lies entirely within span `a` under circular wrap.
fn covers(
    a_start: usize,
    a_len: usize,
    b_start: usize,
    b_len: usize,
    sectors: usize,
) -> bool {
    for k in 0..b_len {
        let pos = (b_start + k) % sectors;
        let rel = (pos + sectors - a_start) % sectors;
        if rel >= a_len {
            return false;
        }
    }
    true
}

/// Keeps only maximal spans: longest first, suppress anything contained in
/// an already-kept span. Stable sort keeps equal-length handling
/// deterministic; the final result is re-sorted by start.
fn maximal_only(mut candidates: Vec<Symmetry>, sectors: usize) -> Vec<Symmetry> {
    candidates.sort_by(|a, b| b.length.cmp(&a.length));
    let mut kept: Vec<Symmetry> = Vec::new();
    for cand in candidates {
        let nested = kept
            .iter()
            .any(|s| covers(s.start, s.length, cand.start, cand.length, sectors));
        if !nested {
            kept.push(cand);
        }
    }
    kept.sort_by_key(|s| s.start);
    kept
}
