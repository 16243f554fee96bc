use serde::{Deserialize, Serialize};

use crate::number::Number;

/// The visible ground of a tile: bedrock or soil kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ground {
    pub id: i32,
    pub kind: String,
    pub exposed: bool,
}

impl Ground {
    pub fn new(id: i32, kind: impl Into<String>, exposed: bool) -> Self {
        Self {
            id,
            kind: kind.into(),
            exposed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    pub id: i32,
    pub kind: String,
    /// Planted in rows rather than grown wild.
    pub rows: bool,
    /// Negative when unknown.
    pub acres: Number,
}

impl Forest {
    pub fn new(id: i32, kind: impl Into<String>, rows: bool, acres: impl Into<Number>) -> Self {
        Self {
            id,
            kind: kind.into(),
            rows,
            acres: acres.into(),
        }
    }

    pub fn redacted(&self) -> Self {
        Self {
            acres: Number::Integer(-1),
            ..self.clone()
        }
    }
}

/// Attribute-free terrain feature (mountain, hill, oasis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: i32,
}

impl Landmark {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}
