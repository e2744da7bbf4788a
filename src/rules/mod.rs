//! The rules engine.
//!
//! Leaves first:
//! - `blocking`: Does a fence obstruct a single step
//! - `reachability`: Can a pawn still reach a row
//! - `movement`: Pawn step / jump / diagonal legality
//! - `placement`: Fence legality, including the always-a-path rule
//! - `victory`: Win condition
//! - `invariants`: Sanity checks for externally loaded states
//! - `engine`: `RulesEngine` trait and the commit layer
//!
//! Everything except `RulesEngine::apply_action` is a pure function of the
//! state it is given.

pub mod blocking;
pub mod reachability;
pub mod movement;
pub mod placement;
pub mod victory;
pub mod invariants;
pub mod engine;

pub use blocking::is_blocked;
pub use reachability::path_exists;
pub use movement::{classify_pawn_move, is_valid_pawn_move, validate_pawn_move, MoveKind};
pub use placement::{check_fence, validate_fence_placement};
pub use victory::check_win;
pub use invariants::{check_invariants, InvariantViolation};
pub use engine::{GameResult, QuoridorRules, RulesEngine, ValidatedAction};
