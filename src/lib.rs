//! # quoridor-rules
//!
//! Rules and validation engine for a two-player race game on a 9×9 board:
//! pawns step, jump and side-step toward the far row while players drop
//! two-cell fences to slow each other down, never sealing anyone off.
//!
//! ## Design Principles
//!
//! 1. **Validators are pure**: Every check takes the state by shared
//!    reference and returns a `Result` or `bool`. Nothing is mutated, even
//!    speculatively.
//!
//! 2. **Checked values**: `Position` and `Fence` can only hold on-board
//!    coordinates. Raw caller input goes through `Position::checked` or
//!    `FenceRequest`.
//!
//! 3. **Cheap snapshots**: `GameState` uses `im` persistent collections, so
//!    cloning is O(1) and a fence overlay shares structure with the base set.
//!
//! ## Modules
//!
//! - `core`: Cells, fences, players, state, actions, configuration
//! - `rules`: Blocking, reachability, movement, placement, victory, engine
//! - `error`: Rule violations
//!
//! ## Example
//!
//! ```
//! use quoridor_rules::{Action, Player, QuoridorRules, RulesEngine, RuleViolation};
//!
//! let rules = QuoridorRules::default();
//! let mut state = rules.initial_state();
//!
//! rules.apply_action(&mut state, Player::First, &Action::move_pawn(4, 1)).unwrap();
//! rules.apply_action(&mut state, Player::Second, &Action::place_fence(3, 1, "h")).unwrap();
//!
//! assert_eq!(
//!     rules.apply_action(&mut state, Player::First, &Action::move_pawn(4, 2)),
//!     Err(RuleViolation::InvalidMove)
//! );
//! ```

pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Fence, FenceRequest, FenceSet, GameConfig, GameState, Orientation,
    Player, PlayerMap, Position,
};

pub use crate::error::{RuleResult, RuleViolation};

pub use crate::rules::{
    check_fence, check_invariants, check_win, classify_pawn_move, is_blocked, is_valid_pawn_move,
    path_exists, validate_fence_placement, validate_pawn_move, GameResult, InvariantViolation,
    MoveKind, QuoridorRules, RulesEngine, ValidatedAction,
};
