use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A participant in the game, or the "independent" pseudo-player that owns
/// everything nobody else does.
///
/// Equality ignores `current`: which player is current is a property of
/// the map a player record was loaded from, not of the player.
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub independent: bool,
    #[serde(default)]
    pub current: bool,
}

impl Player {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            independent: false,
            current: false,
        }
    }

    pub fn independent(id: i32) -> Self {
        Self {
            id,
            name: "Independent".to_string(),
            independent: true,
            current: false,
        }
    }

    pub fn with_current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.independent == other.independent
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

/// The players known to one map, keyed by player id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerCollection {
    players: BTreeMap<i32, Player>,
}

impl PlayerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the player with the same id.
    pub fn insert(&mut self, player: Player) -> Option<Player> {
        self.players.insert(player.id, player)
    }

    pub fn get(&self, id: i32) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn independent(&self) -> Option<&Player> {
        self.players.values().find(|player| player.independent)
    }

    pub fn current(&self) -> Option<&Player> {
        self.players.values().find(|player| player.current)
    }
}

impl FromIterator<Player> for PlayerCollection {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        let mut collection = Self::new();
        for player in iter {
            collection.insert(player);
        }
        collection
    }
}
