//! Game configuration.
//!
//! The board is always 9×9. What a caller may tune is how many fences each
//! player starts with and where the pawns start, which is enough for
//! handicap games and puzzle setups.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerMap};
use super::position::Position;

/// Fences each player starts with in a standard game.
pub const DEFAULT_FENCES_PER_PLAYER: u8 = 10;

/// Starting setup for a game.
///
/// ## Example
///
/// ```
/// use quoridor_rules::core::{GameConfig, Player, Position};
///
/// let config = GameConfig::default().with_fences_per_player(5);
/// assert_eq!(config.fences_per_player, 5);
/// assert_eq!(config.start[Player::First], Position::new(4, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fences each player starts with.
    pub fences_per_player: u8,

    /// Starting cell per player.
    pub start: PlayerMap<Position>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fences_per_player: DEFAULT_FENCES_PER_PLAYER,
            start: PlayerMap::from_pair(Position::new(4, 0), Position::new(4, 8)),
        }
    }
}

impl GameConfig {
    /// Set the number of fences each player starts with.
    #[must_use]
    pub fn with_fences_per_player(mut self, count: u8) -> Self {
        self.fences_per_player = count;
        self
    }

    /// Set a player's starting cell.
    #[must_use]
    pub fn with_start(mut self, player: Player, position: Position) -> Self {
        self.start[player] = position;
        self
    }
}
