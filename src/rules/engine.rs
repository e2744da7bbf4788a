//! Rules engine trait and the commit layer.
//!
//! The validators in this module's siblings never mutate state. A caller
//! that wants the usual sequence (check the turn, validate, commit, check
//! for a win, pass the move) gets it from `RulesEngine::apply_action`:
//!
//! - `validate`: Pure; reports what the action would do
//! - `apply_action`: Validates, then commits to the given state
//! - `is_terminal`: `Some` once a winner is declared
//!
//! Callers still own serialization of actions per game: run one
//! `apply_action` at a time against a given state.

use tracing::info;

use super::movement::validate_pawn_move;
use super::placement::validate_fence_placement;
use super::victory::check_win;
use crate::core::{Action, ActionRecord, Fence, GameConfig, GameState, Player, Position};
use crate::error::{RuleResult, RuleViolation};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// The player whose pawn reached their goal row.
    pub winner: Player,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }
}

/// An action that passed validation, reduced to the mutation it causes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidatedAction {
    /// Move the pawn to this cell.
    MovePawn(Position),
    /// Add this fence and spend one from stock.
    PlaceFence(Fence),
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate` must not mutate anything; `apply_action` relies on a
///   rejected action leaving the state untouched
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Check whether `player` may take `action` in `state`.
    fn validate(
        &self,
        state: &GameState,
        player: Player,
        action: &Action,
    ) -> RuleResult<ValidatedAction>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Opening state for this engine's configuration.
    fn initial_state(&self) -> GameState {
        GameState::from_config(self.config())
    }

    /// Validate and commit an action.
    ///
    /// On success the state has advanced by one turn and the return value
    /// says whether the game ended. On failure the state is unchanged.
    fn apply_action(
        &self,
        state: &mut GameState,
        player: Player,
        action: &Action,
    ) -> RuleResult<Option<GameResult>> {
        match self.validate(state, player, action)? {
            ValidatedAction::MovePawn(to) => {
                state.pawns[player] = to;
            }
            ValidatedAction::PlaceFence(fence) => {
                state.fences.insert(fence);
                state.fences_remaining[player] -= 1;
            }
        }

        if check_win(state, player) {
            info!(%player, cell = %state.pawn(player), turn = state.turn_number, "goal row reached");
            state.winner = Some(player);
        }

        let record = ActionRecord::new(player, action.clone(), state.turn_number);
        info!(%player, ?action, turn = state.turn_number, "action applied");
        state.end_turn(record);

        Ok(self.is_terminal(state))
    }
}

/// The standard rules.
#[derive(Clone, Debug, Default)]
pub struct QuoridorRules {
    config: GameConfig,
}

impl QuoridorRules {
    /// Create an engine for a configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl RulesEngine for QuoridorRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn validate(
        &self,
        state: &GameState,
        player: Player,
        action: &Action,
    ) -> RuleResult<ValidatedAction> {
        if state.is_finished() {
            return Err(RuleViolation::GameOver);
        }
        if state.to_move != player {
            return Err(RuleViolation::NotYourTurn(player));
        }

        match action {
            Action::MovePawn { x, y } => {
                validate_pawn_move(state, player, *x, *y)?;
                let to = Position::checked(*x, *y).ok_or(RuleViolation::InvalidMove)?;
                Ok(ValidatedAction::MovePawn(to))
            }
            Action::PlaceFence(request) => {
                validate_fence_placement(state, player, request).map(ValidatedAction::PlaceFence)
            }
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner.map(|winner| GameResult { winner })
    }
}
