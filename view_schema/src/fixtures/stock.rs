use serde::{Deserialize, Serialize};

use crate::number::{Number, Quantity};

/// A stack of identical pieces of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implement {
    pub id: i32,
    pub kind: String,
    pub count: i32,
}

impl Implement {
    pub fn new(id: i32, kind: impl Into<String>, count: i32) -> Self {
        Self {
            id,
            kind: kind.into(),
            count,
        }
    }
}

/// A measured pile of some resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePile {
    pub id: i32,
    pub kind: String,
    pub contents: String,
    pub quantity: Quantity,
    /// Turn the pile was produced, when known.
    #[serde(default)]
    pub created: Option<i32>,
}

impl ResourcePile {
    pub fn new(
        id: i32,
        kind: impl Into<String>,
        contents: impl Into<String>,
        quantity: Quantity,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            contents: contents.into(),
            quantity,
            created: None,
        }
    }

    pub fn with_created(mut self, turn: i32) -> Self {
        self.created = Some(turn);
        self
    }

    /// Keeps what the pile is and its unit of measure; drops how much and when.
    pub fn redacted(&self) -> Self {
        Self {
            quantity: Quantity {
                number: Number::zero(),
                units: self.quantity.units.clone(),
            },
            created: None,
            ..self.clone()
        }
    }
}
