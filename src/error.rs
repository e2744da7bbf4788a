//! Rule violations reported by the validators and the commit layer.
//!
//! Every variant is a rejected action, not a system fault. A rejected
//! action leaves the game state exactly as it was.

use thiserror::Error;

use crate::core::Player;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum RuleViolation {
    /// The acting player has no fences left to place.
    #[error("no fences remaining")]
    NoFencesRemaining,

    /// The orientation tag was neither horizontal nor vertical.
    #[error("invalid orientation, must be 'h' or 'v'")]
    InvalidOrientation,

    /// A coordinate fell outside the board.
    #[error("coordinates out of bounds")]
    OutOfBounds,

    /// An identical fence is already on the board.
    #[error("fence already exists at this position")]
    FenceOverlap,

    /// The fence would cut a pawn off from its goal row.
    #[error("fence would block a player's path to their goal row")]
    PathBlocked,

    /// The pawn move breaks the movement rules.
    #[error("invalid pawn move")]
    InvalidMove,

    /// The action came from the player who is not on move.
    #[error("it is not {0}'s turn")]
    NotYourTurn(Player),

    /// The game already has a winner.
    #[error("game is over")]
    GameOver,
}

/// Result type for rule checks.
pub type RuleResult<T> = Result<T, RuleViolation>;
