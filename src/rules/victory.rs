//! Win condition.

use crate::core::{GameState, Player};

/// True if `player`'s pawn stands on their goal row.
///
/// Declaring the winner is left to the caller.
#[must_use]
pub fn check_win(state: &GameState, player: Player) -> bool {
    state.pawn(player).y() == player.goal_row()
}
