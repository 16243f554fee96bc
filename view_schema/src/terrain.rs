use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Base terrain of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainType {
    Tundra,
    Desert,
    Mountain,
    BorealForest,
    TemperateForest,
    Ocean,
    Plains,
    Jungle,
    Steppe,
    Swamp,
}

impl TerrainType {
    pub const ALL: [TerrainType; 10] = [
        TerrainType::Tundra,
        TerrainType::Desert,
        TerrainType::Mountain,
        TerrainType::BorealForest,
        TerrainType::TemperateForest,
        TerrainType::Ocean,
        TerrainType::Plains,
        TerrainType::Jungle,
        TerrainType::Steppe,
        TerrainType::Swamp,
    ];

    /// Version 2 maps express mountains and forests as fixtures, so those
    /// terrains only exist in version 1.
    pub fn valid_in_version(self, version: u8) -> bool {
        match self {
            TerrainType::Mountain | TerrainType::BorealForest | TerrainType::TemperateForest => {
                version == 1
            }
            TerrainType::Steppe => version >= 2,
            _ => version >= 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TerrainType::Tundra => "tundra",
            TerrainType::Desert => "desert",
            TerrainType::Mountain => "mountain",
            TerrainType::BorealForest => "boreal_forest",
            TerrainType::TemperateForest => "temperate_forest",
            TerrainType::Ocean => "ocean",
            TerrainType::Plains => "plains",
            TerrainType::Jungle => "jungle",
            TerrainType::Steppe => "steppe",
            TerrainType::Swamp => "swamp",
        }
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Directions in which a river leaves a tile, plus the lake marker.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Rivers: u8 {
        const LAKE = 0b0000_0001;
        const NORTH = 0b0000_0010;
        const EAST = 0b0000_0100;
        const SOUTH = 0b0000_1000;
        const WEST = 0b0001_0000;
    }
}

impl fmt::Display for Rivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        f.write_str(&names.join("|").to_lowercase())
    }
}
