use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::stock::ResourcePile;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TownStatus {
    Active,
    Abandoned,
    Ruined,
    Burned,
}

impl fmt::Display for TownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TownStatus::Active => "active",
            TownStatus::Abandoned => "abandoned",
            TownStatus::Ruined => "ruined",
            TownStatus::Burned => "burned",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TownSize {
    Small,
    Medium,
    Large,
}

impl fmt::Display for TownSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TownSize::Small => "small",
            TownSize::Medium => "medium",
            TownSize::Large => "large",
        };
        f.write_str(label)
    }
}

/// Shared body of towns, cities and fortifications. Which of the three a
/// settlement is lives in the [`Fixture`](crate::Fixture) variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: i32,
    pub name: String,
    pub status: TownStatus,
    pub size: TownSize,
    pub owner: Player,
    #[serde(default)]
    pub dc: u32,
    #[serde(default)]
    pub population: Option<CommunityStats>,
}

impl Settlement {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        status: TownStatus,
        size: TownSize,
        owner: Player,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            size,
            owner,
            dc: 0,
            population: None,
        }
    }

    pub fn with_dc(mut self, dc: u32) -> Self {
        self.dc = dc;
        self
    }

    pub fn with_population(mut self, stats: CommunityStats) -> Self {
        self.population = Some(stats);
        self
    }

    pub fn redacted(&self) -> Self {
        Self {
            dc: 0,
            population: None,
            ..self.clone()
        }
    }
}

/// Population detail a settlement may or may not reveal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityStats {
    pub population: i32,
    /// Ids of the fields and meadows the community works.
    #[serde(default)]
    pub worked_fields: BTreeSet<i32>,
    /// Highest level any resident holds in each skill.
    #[serde(default)]
    pub skill_levels: BTreeMap<String, i32>,
    #[serde(default)]
    pub yearly_production: Vec<ResourcePile>,
    #[serde(default)]
    pub yearly_consumption: Vec<ResourcePile>,
}

impl CommunityStats {
    pub fn new(population: i32) -> Self {
        Self {
            population,
            ..Self::default()
        }
    }
}
