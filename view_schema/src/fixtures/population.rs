use std::fmt;

use serde::{Deserialize, Serialize};

use crate::number::Number;

/// Orchard or wild grove of trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grove {
    pub id: i32,
    pub kind: String,
    pub orchard: bool,
    pub cultivated: bool,
    /// Number of trees; negative when unknown.
    pub population: i32,
}

impl Grove {
    pub fn new(
        id: i32,
        kind: impl Into<String>,
        orchard: bool,
        cultivated: bool,
        population: i32,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            orchard,
            cultivated,
            population,
        }
    }

    pub fn redacted(&self) -> Self {
        Self {
            population: -1,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Fallow,
    Seeding,
    Growing,
    Bearing,
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldStatus::Fallow => "fallow",
            FieldStatus::Seeding => "seeding",
            FieldStatus::Growing => "growing",
            FieldStatus::Bearing => "bearing",
        };
        f.write_str(label)
    }
}

/// A field (planted) or meadow (grass).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meadow {
    pub id: i32,
    pub kind: String,
    pub field: bool,
    pub cultivated: bool,
    pub status: FieldStatus,
    /// Negative when unknown.
    pub acres: Number,
}

impl Meadow {
    pub fn new(
        id: i32,
        kind: impl Into<String>,
        field: bool,
        cultivated: bool,
        status: FieldStatus,
        acres: impl Into<Number>,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            field,
            cultivated,
            status,
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shrub {
    pub id: i32,
    pub kind: String,
    pub population: i32,
}

impl Shrub {
    pub fn new(id: i32, kind: impl Into<String>, population: i32) -> Self {
        Self {
            id,
            kind: kind.into(),
            population,
        }
    }

    pub fn redacted(&self) -> Self {
        Self {
            population: -1,
            ..self.clone()
        }
    }
}

/// A herd or individual animal, wild or kept by a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: i32,
    pub kind: String,
    #[serde(default)]
    pub talking: bool,
    pub status: String,
    /// Turn of birth, when known.
    #[serde(default)]
    pub born: Option<i32>,
    pub population: i32,
}

impl Animal {
    pub fn new(
        id: i32,
        kind: impl Into<String>,
        status: impl Into<String>,
        population: i32,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            talking: false,
            status: status.into(),
            born: None,
            population,
        }
    }

    pub fn redacted(&self) -> Self {
        Self {
            born: None,
            population: -1,
            ..self.clone()
        }
    }
}
