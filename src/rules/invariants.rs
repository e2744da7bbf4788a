//! State invariants - sanity checks for snapshots loaded from outside.
//!
//! A state built by `GameState::new` and advanced only through
//! `RulesEngine::apply_action` never trips these. They exist for callers
//! that deserialize a stored game and want to know it is playable before
//! handing it to the validators.
//!
//! Cell and fence ranges, fence uniqueness, and non-negative fence counts
//! are guaranteed by the types and are not re-checked here.

use thiserror::Error;

use super::reachability::path_exists;
use super::victory::check_win;
use crate::core::{GameState, Player};

/// Invariant violation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Check all state invariants.
///
/// Returns every violation found, or an empty list if the state is sound.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if state.pawn(Player::First) == state.pawn(Player::Second) {
        violations.push(InvariantViolation::new(format!(
            "both pawns on {}",
            state.pawn(Player::First)
        )));
    }

    for player in Player::ALL {
        if !path_exists(&state.fences, state.pawn(player), player.goal_row()) {
            violations.push(InvariantViolation::new(format!(
                "{player}'s pawn at {} cannot reach row {}",
                state.pawn(player),
                player.goal_row()
            )));
        }
    }

    if let Some(winner) = state.winner {
        if !check_win(state, winner) {
            violations.push(InvariantViolation::new(format!(
                "{winner} declared winner but pawn is at {}",
                state.pawn(winner)
            )));
        }
    }

    violations
}
