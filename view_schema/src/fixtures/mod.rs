//! Everything that can sit on a map tile.

mod fortress;
mod landscape;
mod marker;
mod mineral;
mod population;
mod settlement;
mod stock;
mod unit;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use fortress::{Fortress, FortressMember};
pub use landscape::{Forest, Ground, Landmark};
pub use marker::{AnimalTracks, Cache, TextNote};
pub use mineral::{Mine, MineralVein, StoneDeposit, StoneKind};
pub use population::{Animal, FieldStatus, Grove, Meadow, Shrub};
pub use settlement::{CommunityStats, Settlement, TownSize, TownStatus};
pub use stock::{Implement, ResourcePile};
pub use unit::{Job, Skill, Unit, UnitMember, Worker, WorkerStats};

/// A fixture placed on a tile. Negative ids mark anonymous fixtures that
/// have no lasting identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fixture {
    Ground(Ground),
    Forest(Forest),
    Mountain(Landmark),
    Hill(Landmark),
    Oasis(Landmark),
    MineralVein(MineralVein),
    StoneDeposit(StoneDeposit),
    Mine(Mine),
    TextNote(TextNote),
    Cache(Cache),
    AnimalTracks(AnimalTracks),
    Grove(Grove),
    Meadow(Meadow),
    Shrub(Shrub),
    Animal(Animal),
    Implement(Implement),
    ResourcePile(ResourcePile),
    Town(Settlement),
    City(Settlement),
    Fortification(Settlement),
    Fortress(Fortress),
    Unit(Unit),
}

/// Field-less mirror of [`Fixture`]'s variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureKind {
    Ground,
    Forest,
    Mountain,
    Hill,
    Oasis,
    MineralVein,
    StoneDeposit,
    Mine,
    TextNote,
    Cache,
    AnimalTracks,
    Grove,
    Meadow,
    Shrub,
    Animal,
    Implement,
    ResourcePile,
    Town,
    City,
    Fortification,
    Fortress,
    Unit,
}

impl FixtureKind {
    pub fn label(self) -> &'static str {
        match self {
            FixtureKind::Ground => "ground",
            FixtureKind::Forest => "forest",
            FixtureKind::Mountain => "mountain",
            FixtureKind::Hill => "hill",
            FixtureKind::Oasis => "oasis",
            FixtureKind::MineralVein => "mineral vein",
            FixtureKind::StoneDeposit => "stone deposit",
            FixtureKind::Mine => "mine",
            FixtureKind::TextNote => "text note",
            FixtureKind::Cache => "cache",
            FixtureKind::AnimalTracks => "animal tracks",
            FixtureKind::Grove => "grove",
            FixtureKind::Meadow => "meadow",
            FixtureKind::Shrub => "shrub",
            FixtureKind::Animal => "animal",
            FixtureKind::Implement => "implement",
            FixtureKind::ResourcePile => "resource pile",
            FixtureKind::Town => "town",
            FixtureKind::City => "city",
            FixtureKind::Fortification => "fortification",
            FixtureKind::Fortress => "fortress",
            FixtureKind::Unit => "unit",
        }
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Fixture {
    pub fn id(&self) -> i32 {
        match self {
            Fixture::Ground(ground) => ground.id,
            Fixture::Forest(forest) => forest.id,
            Fixture::Mountain(landmark) | Fixture::Hill(landmark) | Fixture::Oasis(landmark) => {
                landmark.id
            }
            Fixture::MineralVein(vein) => vein.id,
            Fixture::StoneDeposit(deposit) => deposit.id,
            Fixture::Mine(mine) => mine.id,
            Fixture::TextNote(note) => note.id,
            Fixture::Cache(cache) => cache.id,
            Fixture::AnimalTracks(tracks) => tracks.id,
            Fixture::Grove(grove) => grove.id,
            Fixture::Meadow(meadow) => meadow.id,
            Fixture::Shrub(shrub) => shrub.id,
            Fixture::Animal(animal) => animal.id,
            Fixture::Implement(implement) => implement.id,
            Fixture::ResourcePile(pile) => pile.id,
            Fixture::Town(settlement)
            | Fixture::City(settlement)
            | Fixture::Fortification(settlement) => settlement.id,
            Fixture::Fortress(fortress) => fortress.id,
            Fixture::Unit(unit) => unit.id,
        }
    }

    pub fn kind(&self) -> FixtureKind {
        match self {
            Fixture::Ground(_) => FixtureKind::Ground,
            Fixture::Forest(_) => FixtureKind::Forest,
            Fixture::Mountain(_) => FixtureKind::Mountain,
            Fixture::Hill(_) => FixtureKind::Hill,
            Fixture::Oasis(_) => FixtureKind::Oasis,
            Fixture::MineralVein(_) => FixtureKind::MineralVein,
            Fixture::StoneDeposit(_) => FixtureKind::StoneDeposit,
            Fixture::Mine(_) => FixtureKind::Mine,
            Fixture::TextNote(_) => FixtureKind::TextNote,
            Fixture::Cache(_) => FixtureKind::Cache,
            Fixture::AnimalTracks(_) => FixtureKind::AnimalTracks,
            Fixture::Grove(_) => FixtureKind::Grove,
            Fixture::Meadow(_) => FixtureKind::Meadow,
            Fixture::Shrub(_) => FixtureKind::Shrub,
            Fixture::Animal(_) => FixtureKind::Animal,
            Fixture::Implement(_) => FixtureKind::Implement,
            Fixture::ResourcePile(_) => FixtureKind::ResourcePile,
            Fixture::Town(_) => FixtureKind::Town,
            Fixture::City(_) => FixtureKind::City,
            Fixture::Fortification(_) => FixtureKind::Fortification,
            Fixture::Fortress(_) => FixtureKind::Fortress,
            Fixture::Unit(_) => FixtureKind::Unit,
        }
    }

    /// The same fixture under another id.
    pub fn with_id(&self, id: i32) -> Self {
        let mut copy = self.clone();
        match &mut copy {
            Fixture::Ground(ground) => ground.id = id,
            Fixture::Forest(forest) => forest.id = id,
            Fixture::Mountain(landmark) | Fixture::Hill(landmark) | Fixture::Oasis(landmark) => {
                landmark.id = id
            }
            Fixture::MineralVein(vein) => vein.id = id,
            Fixture::StoneDeposit(deposit) => deposit.id = id,
            Fixture::Mine(mine) => mine.id = id,
            Fixture::TextNote(note) => note.id = id,
            Fixture::Cache(cache) => cache.id = id,
            Fixture::AnimalTracks(tracks) => tracks.id = id,
            Fixture::Grove(grove) => grove.id = id,
            Fixture::Meadow(meadow) => meadow.id = id,
            Fixture::Shrub(shrub) => shrub.id = id,
            Fixture::Animal(animal) => animal.id = id,
            Fixture::Implement(implement) => implement.id = id,
            Fixture::ResourcePile(pile) => pile.id = id,
            Fixture::Town(settlement)
            | Fixture::City(settlement)
            | Fixture::Fortification(settlement) => settlement.id = id,
            Fixture::Fortress(fortress) => fortress.id = id,
            Fixture::Unit(unit) => unit.id = id,
        }
        copy
    }

    /// Visit this fixture's id and the ids of everything nested inside it.
    pub fn visit_ids(&self, visit: &mut impl FnMut(i32)) {
        visit(self.id());
        match self {
            Fixture::Fortress(fortress) => {
                for member in &fortress.members {
                    visit(member.id());
                    if let FortressMember::Unit(unit) = member {
                        unit.members.iter().for_each(|inner| visit(inner.id()));
                    }
                }
            }
            Fixture::Unit(unit) => unit.members.iter().for_each(|member| visit(member.id())),
            _ => {}
        }
    }

    /// The copy another player would be handed: identity and categorical
    /// facts survive, precise magnitudes and perception difficulty do not.
    pub fn redacted(&self) -> Self {
        match self {
            Fixture::Forest(forest) => Fixture::Forest(forest.redacted()),
            Fixture::MineralVein(vein) => Fixture::MineralVein(vein.redacted()),
            Fixture::StoneDeposit(deposit) => Fixture::StoneDeposit(deposit.redacted()),
            Fixture::Grove(grove) => Fixture::Grove(grove.redacted()),
            Fixture::Meadow(meadow) => Fixture::Meadow(meadow.redacted()),
            Fixture::Shrub(shrub) => Fixture::Shrub(shrub.redacted()),
            Fixture::Animal(animal) => Fixture::Animal(animal.redacted()),
            Fixture::ResourcePile(pile) => Fixture::ResourcePile(pile.redacted()),
            Fixture::Town(settlement) => Fixture::Town(settlement.redacted()),
            Fixture::City(settlement) => Fixture::City(settlement.redacted()),
            Fixture::Fortification(settlement) => Fixture::Fortification(settlement.redacted()),
            Fixture::Fortress(fortress) => Fixture::Fortress(fortress.redacted()),
            Fixture::Unit(unit) => Fixture::Unit(unit.redacted()),
            Fixture::Ground(_)
            | Fixture::Mountain(_)
            | Fixture::Hill(_)
            | Fixture::Oasis(_)
            | Fixture::Mine(_)
            | Fixture::TextNote(_)
            | Fixture::Cache(_)
            | Fixture::AnimalTracks(_)
            | Fixture::Implement(_) => self.clone(),
        }
    }
}
