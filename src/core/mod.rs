//! Core engine types: cells, fences, players, state, actions, configuration.
//!
//! These are plain value types. Range checks happen at construction, so a
//! `Position` or `Fence` in hand is always on the board.

pub mod position;
pub mod fence;
pub mod player;
pub mod config;
pub mod action;
pub mod state;

pub use position::{Position, BOARD_MAX, BOARD_SIZE};
pub use fence::{Fence, FenceRequest, FenceSet, Orientation, FENCE_MAX};
pub use player::{Player, PlayerMap};
pub use config::{GameConfig, DEFAULT_FENCES_PER_PLAYER};
pub use action::{Action, ActionRecord};
pub use state::GameState;
