use std::collections::HashMap;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::fixtures::Fixture;
use crate::player::{Player, PlayerCollection};
use crate::point::{MapDimensions, Point};
use crate::terrain::{Rivers, TerrainType};

/// Everything known about one map cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    #[serde(default)]
    pub terrain: Option<TerrainType>,
    #[serde(default)]
    pub rivers: Rivers,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
}

impl Tile {
    pub fn is_empty(&self) -> bool {
        self.terrain.is_none() && self.rivers.is_empty() && self.fixtures.is_empty()
    }
}

/// One snapshot of the world: either the master copy or a player's view of it.
///
/// Construction goes through methods that enforce the snapshot invariants
/// (points in bounds, terrain legal for the map version, unique non-negative
/// fixture ids); deserialization runs the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WorldMapRecord")]
pub struct WorldMap {
    dimensions: MapDimensions,
    #[serde(default)]
    players: PlayerCollection,
    #[serde(default)]
    current_turn: i32,
    #[serde(default)]
    current_player: Option<i32>,
    tiles: Vec<Tile>,
    #[serde(skip)]
    locations: HashMap<i32, Point, RandomState>,
}

impl WorldMap {
    pub fn new(dimensions: MapDimensions, players: PlayerCollection) -> Self {
        Self {
            dimensions,
            players,
            current_turn: -1,
            current_player: None,
            tiles: vec![Tile::default(); dimensions.point_count()],
            locations: HashMap::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, MapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn players(&self) -> &PlayerCollection {
        &self.players
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.insert(player);
    }

    pub fn current_turn(&self) -> i32 {
        self.current_turn
    }

    pub fn set_current_turn(&mut self, turn: i32) {
        self.current_turn = turn;
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_player.and_then(|id| self.players.get(id))
    }

    pub fn set_current_player(&mut self, id: i32) -> Result<(), MapError> {
        if self.players.get(id).is_none() {
            return Err(MapError::UnknownPlayer(id));
        }
        self.current_player = Some(id);
        Ok(())
    }

    fn index(&self, point: Point) -> Result<usize, MapError> {
        self.dimensions.index(point).ok_or(MapError::OutOfBounds {
            point,
            dimensions: self.dimensions,
        })
    }

    pub fn tile(&self, point: Point) -> Option<&Tile> {
        self.dimensions
            .index(point)
            .and_then(|idx| self.tiles.get(idx))
    }

    pub fn terrain(&self, point: Point) -> Option<TerrainType> {
        self.tile(point).and_then(|tile| tile.terrain)
    }

    pub fn rivers(&self, point: Point) -> Rivers {
        self.tile(point)
            .map(|tile| tile.rivers)
            .unwrap_or_default()
    }

    pub fn fixtures(&self, point: Point) -> &[Fixture] {
        self.tile(point)
            .map(|tile| tile.fixtures.as_slice())
            .unwrap_or(&[])
    }

    /// Where the fixture (or container member) with this id sits.
    pub fn locate(&self, id: i32) -> Option<Point> {
        self.locations.get(&id).copied()
    }

    pub fn set_terrain(
        &mut self,
        point: Point,
        terrain: Option<TerrainType>,
    ) -> Result<(), MapError> {
        let idx = self.index(point)?;
        if let Some(terrain) = terrain {
            check_terrain(terrain, self.dimensions.version)?;
        }
        self.tiles[idx].terrain = terrain;
        Ok(())
    }

    pub fn add_rivers(&mut self, point: Point, rivers: Rivers) -> Result<(), MapError> {
        let idx = self.index(point)?;
        self.tiles[idx].rivers |= rivers;
        Ok(())
    }

    pub fn add_fixture(&mut self, point: Point, fixture: Fixture) -> Result<(), MapError> {
        let idx = self.index(point)?;
        let mut claimed = Vec::new();
        let mut conflict = None;
        fixture.visit_ids(&mut |id| {
            if id < 0 || conflict.is_some() {
                return;
            }
            if let Some(existing) = self.locations.get(&id) {
                conflict = Some((id, *existing));
            } else if claimed.contains(&id) {
                conflict = Some((id, point));
            } else {
                claimed.push(id);
            }
        });
        if let Some((id, existing)) = conflict {
            return Err(MapError::DuplicateId {
                id,
                point,
                existing,
            });
        }
        for id in claimed {
            self.locations.insert(id, point);
        }
        self.tiles[idx].fixtures.push(fixture);
        Ok(())
    }

    /// Remove the first fixture at `point` with the given id.
    pub fn remove_fixture(&mut self, point: Point, id: i32) -> Option<Fixture> {
        let idx = self.dimensions.index(point)?;
        let fixtures = &mut self.tiles[idx].fixtures;
        let position = fixtures.iter().position(|fixture| fixture.id() == id)?;
        let removed = fixtures.remove(position);
        removed.visit_ids(&mut |nested| {
            if nested >= 0 {
                self.locations.remove(&nested);
            }
        });
        Some(removed)
    }

    /// Iterate over all tiles with their coordinates, row-major.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (Point, &Tile)> {
        self.dimensions.points().zip(self.tiles.iter())
    }

    /// Points that carry any terrain, river or fixture.
    pub fn locations(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter_tiles()
            .filter(|(_, tile)| !tile.is_empty())
            .map(|(point, _)| point)
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(Tile::is_empty)
    }

    /// The copy handed to `viewer`: fixtures the viewer owns are kept whole,
    /// everything else is redacted.
    pub fn view_for(&self, viewer: i32) -> Self {
        let mut view = self.clone();
        for tile in &mut view.tiles {
            for fixture in &mut tile.fixtures {
                if owner_id(fixture) != Some(viewer) {
                    *fixture = fixture.redacted();
                }
            }
        }
        view.current_player = self.players.get(viewer).map(|player| player.id);
        view
    }
}

fn owner_id(fixture: &Fixture) -> Option<i32> {
    match fixture {
        Fixture::Town(settlement)
        | Fixture::City(settlement)
        | Fixture::Fortification(settlement) => Some(settlement.owner.id),
        Fixture::Fortress(fortress) => Some(fortress.owner.id),
        Fixture::Unit(unit) => Some(unit.owner.id),
        _ => None,
    }
}

fn check_terrain(terrain: TerrainType, version: u8) -> Result<(), MapError> {
    if terrain.valid_in_version(version) {
        Ok(())
    } else {
        Err(MapError::TerrainVersion { terrain, version })
    }
}

/// Serialized shape of [`WorldMap`], validated on the way in.
#[derive(Deserialize)]
struct WorldMapRecord {
    dimensions: MapDimensions,
    #[serde(default)]
    players: PlayerCollection,
    #[serde(default)]
    current_turn: i32,
    #[serde(default)]
    current_player: Option<i32>,
    tiles: Vec<Tile>,
}

impl TryFrom<WorldMapRecord> for WorldMap {
    type Error = MapError;

    fn try_from(record: WorldMapRecord) -> Result<Self, Self::Error> {
        let expected = record.dimensions.point_count();
        if record.tiles.len() != expected {
            return Err(MapError::TileCount {
                expected,
                actual: record.tiles.len(),
            });
        }
        let mut map = WorldMap::new(record.dimensions, record.players);
        map.current_turn = record.current_turn;
        if let Some(id) = record.current_player {
            map.set_current_player(id)?;
        }
        let points: Vec<Point> = record.dimensions.points().collect();
        for (point, tile) in points.into_iter().zip(record.tiles) {
            map.set_terrain(point, tile.terrain)?;
            map.add_rivers(point, tile.rivers)?;
            for fixture in tile.fixtures {
                map.add_fixture(point, fixture)?;
            }
        }
        Ok(map)
    }
}
