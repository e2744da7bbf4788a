//! Breadth-first reachability over the board.
//!
//! Used by the placement validator to make sure no fence ever seals a pawn
//! off from its goal row. Pure: the fence set is read, never written, so it
//! is safe to run against a speculative overlay.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::trace;

use super::blocking::is_blocked;
use crate::core::{FenceSet, Position};

/// True if a pawn at `start` can walk to any cell on `target_row` through
/// orthogonal steps not blocked by `fences`.
///
/// Other pawns are ignored: they move, fences do not.
#[must_use]
pub fn path_exists(fences: &FenceSet, start: Position, target_row: u8) -> bool {
    let mut visited: FxHashSet<Position> = FxHashSet::default();
    let mut queue = VecDeque::from([start]);
    visited.insert(start);

    while let Some(cell) = queue.pop_front() {
        if cell.y() == target_row {
            trace!(%start, target_row, %cell, "path found");
            return true;
        }

        for next in cell.neighbors() {
            if !visited.contains(&next) && !is_blocked(fences, cell, next) {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }

    trace!(%start, target_row, explored = visited.len(), "no path");
    false
}
