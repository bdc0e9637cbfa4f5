//! Player identification and per-player records.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. A game seats 1-4 players, so a `u8`
//! is plenty.
//!
//! ## Player
//!
//! The mutable record the engine advances: board position, money,
//! career, marital status. Players are created once per game and only
//! ever replaced wholesale by the engine.

use serde::{Deserialize, Serialize};

use super::career::Career;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use career_life::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Display color for a player's token.
///
/// Assigned round-robin from a fixed four-entry palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerColor(pub &'static str);

impl PlayerColor {
    /// The palette, in seat order.
    pub const PALETTE: [PlayerColor; 4] = [
        PlayerColor("#86bc25"),
        PlayerColor("#435b14"),
        PlayerColor("#a6d353"),
        PlayerColor("#a6a6a6"),
    ];

    /// Color for the player seated at `index`.
    #[must_use]
    pub const fn for_seat(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// Hex string, e.g. `#86bc25`.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        self.0
    }
}

/// A player's full record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    /// Stable identifier.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Index into the board. Never decreases within a game.
    pub position: usize,

    /// Currency units. No floor: debt is allowed.
    pub money: i64,

    /// Current rank.
    pub career: Career,

    /// One-way flag, set by the first MARRIAGE landing.
    pub is_married: bool,

    /// Child count. No square currently changes it.
    pub children: u32,

    /// Held items. No square currently changes it.
    pub inventory: Vec<String>,

    /// Token color.
    pub color: PlayerColor,
}

impl Player {
    /// Create a player at the START square with the starting purse.
    pub fn new(id: PlayerId, name: impl Into<String>, starting_money: i64) -> Self {
        Self {
            id,
            name: name.into(),
            position: 0,
            money: starting_money,
            career: Career::Analyst,
            is_married: false,
            children: 0,
            inventory: Vec::new(),
            color: PlayerColor::for_seat(id.index()),
        }
    }

    /// Whether this player stands on `goal_index`.
    #[must_use]
    pub fn has_reached(&self, goal_index: usize) -> bool {
        self.position >= goal_index
    }

    /// Salary at the player's current rank.
    #[must_use]
    pub fn salary(&self) -> i64 {
        self.career.salary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "p1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    }

    #[test]
    fn test_color_cycles_by_seat() {
        assert_eq!(PlayerColor::for_seat(0).hex(), "#86bc25");
        assert_eq!(PlayerColor::for_seat(3).hex(), "#a6a6a6");
        assert_eq!(PlayerColor::for_seat(4), PlayerColor::for_seat(0));
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new(PlayerId::new(2), "Aoi", 100_000);

        assert_eq!(player.name, "Aoi");
        assert_eq!(player.position, 0);
        assert_eq!(player.money, 100_000);
        assert_eq!(player.career, Career::Analyst);
        assert!(!player.is_married);
        assert_eq!(player.children, 0);
        assert!(player.inventory.is_empty());
        assert_eq!(player.color, PlayerColor::for_seat(2));
    }

    #[test]
    fn test_has_reached() {
        let mut player = Player::new(PlayerId::new(0), "A", 0);
        assert!(!player.has_reached(59));
        player.position = 59;
        assert!(player.has_reached(59));
    }
}
