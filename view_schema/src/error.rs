use thiserror::Error;

use crate::point::{MapDimensions, Point};
use crate::terrain::TerrainType;

/// A snapshot that cannot exist: rejected while building or loading a map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("point {point} lies outside the {dimensions} map")]
    OutOfBounds {
        point: Point,
        dimensions: MapDimensions,
    },
    #[error("fixture id {id} placed at {point} is already used at {existing}")]
    DuplicateId {
        id: i32,
        point: Point,
        existing: Point,
    },
    #[error("{terrain} terrain is not valid in version {version} maps")]
    TerrainVersion { terrain: TerrainType, version: u8 },
    #[error("map declares {expected} tiles but holds {actual}")]
    TileCount { expected: usize, actual: usize },
    #[error("player {0} is not registered")]
    UnknownPlayer(i32),
    #[error("failed to parse map: {0}")]
    Parse(#[from] serde_json::Error),
}
