//! Fence blocking geometry.
//!
//! A fence anchored at `(x, y)` covers two unit walls:
//!
//! - Vertical: between columns `x` and `x + 1`, on rows `y` and `y + 1`.
//! - Horizontal: between rows `y` and `y + 1`, on columns `x` and `x + 1`.
//!
//! So a step between two adjacent cells is blocked by a fence anchored on
//! the wall it crosses, or by one anchored one cell earlier along the wall.

use crate::core::{FenceSet, Orientation, Position};

/// True if a fence obstructs the step between two adjacent cells.
///
/// Cells that are not orthogonally adjacent are reported as not blocked;
/// callers only ask about single steps.
#[must_use]
pub fn is_blocked(fences: &FenceSet, from: Position, to: Position) -> bool {
    let (x1, y1) = (i32::from(from.x()), i32::from(from.y()));
    let (x2, y2) = (i32::from(to.x()), i32::from(to.y()));

    if from.manhattan(to) != 1 {
        return false;
    }

    if x1 != x2 {
        let fence_x = x1.min(x2);
        fences.contains_at(fence_x, y1, Orientation::Vertical)
            || fences.contains_at(fence_x, y1 - 1, Orientation::Vertical)
    } else {
        let fence_y = y1.min(y2);
        fences.contains_at(x1, fence_y, Orientation::Horizontal)
            || fences.contains_at(x1 - 1, fence_y, Orientation::Horizontal)
    }
}
