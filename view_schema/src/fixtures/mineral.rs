use std::fmt;

use serde::{Deserialize, Serialize};

use super::settlement::TownStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineralVein {
    pub id: i32,
    pub kind: String,
    pub exposed: bool,
    /// Perception difficulty; never part of what a view "knows".
    #[serde(default)]
    pub dc: u32,
}

impl MineralVein {
    pub fn new(id: i32, kind: impl Into<String>, exposed: bool, dc: u32) -> Self {
        Self {
            id,
            kind: kind.into(),
            exposed,
            dc,
        }
    }

    pub fn redacted(&self) -> Self {
        Self {
            dc: 0,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoneKind {
    Limestone,
    Marble,
    Slate,
    Pumice,
    Conglomerate,
    Sandstone,
    Laterite,
    Shale,
}

impl fmt::Display for StoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StoneKind::Limestone => "limestone",
            StoneKind::Marble => "marble",
            StoneKind::Slate => "slate",
            StoneKind::Pumice => "pumice",
            StoneKind::Conglomerate => "conglomerate",
            StoneKind::Sandstone => "sandstone",
            StoneKind::Laterite => "laterite",
            StoneKind::Shale => "shale",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneDeposit {
    pub id: i32,
    pub stone: StoneKind,
    #[serde(default)]
    pub dc: u32,
}

impl StoneDeposit {
    pub fn new(id: i32, stone: StoneKind, dc: u32) -> Self {
        Self { id, stone, dc }
    }

    pub fn redacted(&self) -> Self {
        Self { dc: 0, ..*self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mine {
    pub id: i32,
    pub kind: String,
    pub status: TownStatus,
}

impl Mine {
    pub fn new(id: i32, kind: impl Into<String>, status: TownStatus) -> Self {
        Self {
            id,
            kind: kind.into(),
            status,
        }
    }
}
