//! Game state snapshot.
//!
//! `GameState` is what callers hold between actions: pawn cells, fence
//! stock, placed fences, whose move it is, and the winner once there is
//! one. Validators only ever see it by shared reference; the commit layer
//! in `rules::engine` is the one place that mutates it.
//!
//! Uses `im` persistent collections so a snapshot clones in O(1), which
//! lets a caller keep the pre-action state around cheaply.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::GameConfig;
use super::fence::FenceSet;
use super::player::{Player, PlayerMap};
use super::position::Position;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Pawn cell per player. Never equal.
    pub pawns: PlayerMap<Position>,

    /// Fences each player may still place.
    pub fences_remaining: PlayerMap<u8>,

    /// Fences on the board.
    pub fences: FenceSet,

    /// Player to move.
    pub to_move: Player,

    /// Set once a pawn reaches its goal row.
    pub winner: Option<Player>,

    /// Turn number (starts at 1, advances after every applied action).
    pub turn_number: u32,

    /// Applied actions, oldest first.
    pub history: Vector<ActionRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl GameState {
    /// Standard opening position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opening position for a custom setup.
    ///
    /// # Panics
    ///
    /// Panics if both pawns are configured to start on the same cell.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        assert_ne!(
            config.start[Player::First],
            config.start[Player::Second],
            "pawns must start on different cells"
        );

        Self {
            pawns: config.start,
            fences_remaining: PlayerMap::with_value(config.fences_per_player),
            fences: FenceSet::new(),
            to_move: Player::First,
            winner: None,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// A player's pawn cell.
    #[must_use]
    pub fn pawn(&self, player: Player) -> Position {
        self.pawns[player]
    }

    /// The cell of the other player's pawn.
    #[must_use]
    pub fn opponent_pawn(&self, player: Player) -> Position {
        self.pawns[player.opponent()]
    }

    /// True if either pawn stands on `cell`.
    #[must_use]
    pub fn is_occupied(&self, cell: Position) -> bool {
        self.pawns.iter().any(|(_, &p)| p == cell)
    }

    /// Fences a player may still place.
    #[must_use]
    pub fn fences_left(&self, player: Player) -> u8 {
        self.fences_remaining[player]
    }

    /// True once a winner has been declared.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    // === Turn Advancement ===

    /// Record an applied action and hand the move to the other player.
    pub fn end_turn(&mut self, record: ActionRecord) {
        self.history.push_back(record);
        self.turn_number += 1;
        self.to_move = self.to_move.opponent();
    }
}
