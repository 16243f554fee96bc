//! Shared data model for world snapshots and the per-player views cut from them.
//!
//! Every type here is a plain serde value; nothing in this crate decides
//! whether one snapshot is a legitimate view of another (see `view_core`).

mod error;
pub mod fixtures;
mod map;
mod number;
mod player;
mod point;
mod terrain;

pub use error::MapError;
pub use fixtures::*;
pub use map::{Tile, WorldMap};
pub use number::{Number, NumberParseError, Quantity, Scalar};
pub use player::{Player, PlayerCollection};
pub use point::{MapDimensions, Point};
pub use terrain::{Rivers, TerrainType};
