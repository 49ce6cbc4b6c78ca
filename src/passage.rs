//! Passage analysis: zero-bit corridors from the center to the rim.
//!
//! A cell is *open* iff its bit is 0 and a *wall* iff its bit is 1. A
//! passage is a connected component of open cells, discovered from an open
//! cell in the innermost ring, that touches the outermost ring somewhere.
//! Adjacency is 4-directional: rings are linear (0↔1↔2↔3, no wrap), sectors
//! are circular (`N − 1` adjacent to 0).
//!
//! # Invariants
//! - every open cell is visited at most once across the whole scan
//! - components are mutually exclusive, so the count is order-independent
//! - `0 ≤ count ≤ N` (at most one start per innermost-ring sector)
//!
//! # Citations
//! - Breadth-first flood fill: Moore, "The shortest path through a maze" (1959)
//! - Connected components: Cormen et al., "Introduction to Algorithms", Section 22.2 (2009)

use crate::grid::{BitGrid, RINGS};
use std::collections::VecDeque;

/// Counts zero-bit corridors connecting ring 0 to ring `RINGS - 1`.
///
/// Scans innermost-ring sectors left to right; each unvisited open start
/// seeds one breadth-first flood fill. The component counts iff it reaches
/// the outermost ring. A hash with no open innermost cells yields 0
/// ("sealed"). Runs in O(cells): each cell enters the queue a bounded
/// number of times and is expanded once.
pub fn count_passages(grid: &BitGrid) -> usize {
    let sectors = grid.sectors();
    let mut visited = vec![[false; RINGS]; sectors];
    let mut passages = 0;

    for start in 0..sectors {
        if grid.bit(0, start) || visited[start][0] {
            continue;
        }

        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
        queue.push_back((0, start));
        let mut reached_rim = false;

        while let Some((ring, sector)) = queue.pop_front() {
            if visited[sector][ring] || grid.bit(ring, sector) {
                continue;
            }
            visited[sector][ring] = true;
            if ring == RINGS - 1 {
                reached_rim = true;
            }

            if ring + 1 < RINGS && !visited[sector][ring + 1] && grid.is_open(ring + 1, sector) {
                queue.push_back((ring + 1, sector));
            }
            if ring > 0 && !visited[sector][ring - 1] && grid.is_open(ring - 1, sector) {
                queue.push_back((ring - 1, sector));
            }
            let next = (sector + 1) % sectors;
            if !visited[next][ring] && grid.is_open(ring, next) {
                queue.push_back((ring, next));
            }
            let prev = (sector + sectors - 1) % sectors;
            if !visited[prev][ring] && grid.is_open(ring, prev) {
                queue.push_back((ring, prev));
            }
        }

        if reached_rim {
            passages += 1;
        }
    }
    passages
}
