//! Pawn movement rules.
//!
//! A pawn may:
//!
//! - **Step** one cell orthogonally, unless a fence is in the way or the
//!   opponent stands there.
//! - **Jump** two cells straight over an adjacent opponent, when neither
//!   half of the jump crosses a fence.
//! - **Side-step** diagonally to one of the two cells flanking an adjacent
//!   opponent, but only when the cell behind the opponent is off the board
//!   or fenced off from it.
//!
//! The side-step does not re-check the fence between the pawn and the
//! opponent; only the cell behind the opponent decides it.

use tracing::debug;

use super::blocking::is_blocked;
use crate::core::{GameState, Player, Position};
use crate::error::{RuleResult, RuleViolation};

/// Which rule admitted a pawn move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// One orthogonal cell.
    Step,
    /// Two cells straight over the opponent.
    Jump,
    /// Diagonal around a blocked opponent.
    Diagonal,
}

/// Classify a proposed destination for `player`'s pawn.
///
/// Returns `None` if the move is illegal under every rule, including when
/// `(x, y)` is off the board.
#[must_use]
pub fn classify_pawn_move(state: &GameState, player: Player, x: i32, y: i32) -> Option<MoveKind> {
    let target = Position::checked(x, y)?;
    let pawn = state.pawn(player);
    let opponent = state.opponent_pawn(player);
    let (dx, dy) = pawn.delta_to(target);

    match (dx.abs(), dy.abs()) {
        (1, 0) | (0, 1) => (target != opponent && !is_blocked(&state.fences, pawn, target))
            .then_some(MoveKind::Step),
        (2, 0) | (0, 2) => {
            is_valid_jump(state, pawn, opponent, target, dx, dy).then_some(MoveKind::Jump)
        }
        (1, 1) => is_valid_diagonal(state, pawn, opponent, target).then_some(MoveKind::Diagonal),
        _ => None,
    }
}

/// True if `player` may move their pawn to `(x, y)`.
#[must_use]
pub fn is_valid_pawn_move(state: &GameState, player: Player, x: i32, y: i32) -> bool {
    validate_pawn_move(state, player, x, y).is_ok()
}

/// Like `is_valid_pawn_move`, but as a `Result` for callers that propagate
/// rule violations with `?`.
pub fn validate_pawn_move(
    state: &GameState,
    player: Player,
    x: i32,
    y: i32,
) -> RuleResult<MoveKind> {
    classify_pawn_move(state, player, x, y).ok_or_else(|| {
        debug!(%player, from = %state.pawn(player), x, y, "pawn move rejected");
        RuleViolation::InvalidMove
    })
}

fn is_valid_jump(
    state: &GameState,
    pawn: Position,
    opponent: Position,
    target: Position,
    dx: i32,
    dy: i32,
) -> bool {
    pawn.offset(dx / 2, dy / 2).is_some_and(|mid| {
        mid == opponent
            && !is_blocked(&state.fences, pawn, mid)
            && !is_blocked(&state.fences, opponent, target)
    })
}

fn is_valid_diagonal(
    state: &GameState,
    pawn: Position,
    opponent: Position,
    target: Position,
) -> bool {
    if pawn.manhattan(opponent) != 1 {
        return false;
    }

    // Perpendicular to the approach, either side of the opponent.
    let (dir_x, dir_y) = pawn.delta_to(opponent);
    let flanks = [
        opponent.offset(dir_y, dir_x),
        opponent.offset(-dir_y, -dir_x),
    ];
    if !flanks.contains(&Some(target)) || state.is_occupied(target) {
        return false;
    }

    match opponent.offset(dir_x, dir_y) {
        None => true,
        Some(behind) => is_blocked(&state.fences, opponent, behind),
    }
}
