//! Annotation fixtures that carry no lasting information about the world.

use serde::{Deserialize, Serialize};

/// Free-form note a player pinned to a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNote {
    #[serde(default = "anonymous_id")]
    pub id: i32,
    pub text: String,
    #[serde(default)]
    pub turn: Option<i32>,
}

impl TextNote {
    pub fn new(text: impl Into<String>, turn: Option<i32>) -> Self {
        Self {
            id: anonymous_id(),
            text: text.into(),
            turn,
        }
    }
}

/// A hidden stash of something.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cache {
    pub id: i32,
    pub kind: String,
    pub contents: String,
}

impl Cache {
    pub fn new(id: i32, kind: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            contents: contents.into(),
        }
    }
}

/// Signs that an animal passed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalTracks {
    #[serde(default = "anonymous_id")]
    pub id: i32,
    pub kind: String,
}

impl AnimalTracks {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            id: anonymous_id(),
            kind: kind.into(),
        }
    }
}

fn anonymous_id() -> i32 {
    -1
}
