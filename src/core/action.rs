//! Actions a player can propose, and the record kept once one is applied.
//!
//! Actions carry raw caller input: a pawn destination that may be off the
//! board, a fence request with an unchecked orientation tag. The validators
//! turn them into checked values or reject them.

use serde::{Deserialize, Serialize};

use super::fence::FenceRequest;
use super::player::Player;

/// A proposed action.
///
/// ## Example
///
/// ```
/// use quoridor_rules::core::{Action, FenceRequest};
///
/// let step = Action::move_pawn(4, 1);
/// let wall = Action::PlaceFence(FenceRequest::new(3, 4, "h"));
///
/// assert!(step.is_pawn_move());
/// assert!(!wall.is_pawn_move());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Move the acting player's pawn to `(x, y)`.
    MovePawn {
        /// Destination column.
        x: i32,
        /// Destination row.
        y: i32,
    },
    /// Place a fence.
    PlaceFence(FenceRequest),
}

impl Action {
    /// Pawn move to `(x, y)`.
    #[must_use]
    pub fn move_pawn(x: i32, y: i32) -> Self {
        Action::MovePawn { x, y }
    }

    /// Fence placement.
    #[must_use]
    pub fn place_fence(x: i32, y: i32, orientation: impl Into<String>) -> Self {
        Action::PlaceFence(FenceRequest::new(x, y, orientation))
    }

    /// Check if this is a pawn move.
    #[must_use]
    pub fn is_pawn_move(&self) -> bool {
        matches!(self, Action::MovePawn { .. })
    }
}

/// An applied action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
