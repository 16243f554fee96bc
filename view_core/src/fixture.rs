//! Dispatch over every kind of tile fixture.

use view_schema::{Fixture, FixtureKind};

use crate::leaf::landmark_is_subset;
use crate::relation::{capitalize, Subset};
use crate::report::Report;
use crate::settlement::settlement_is_subset;

impl Subset for Fixture {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        match (self, specific) {
            (Fixture::Ground(ours), Fixture::Ground(theirs)) => ours.is_subset(theirs, report),
            (Fixture::Forest(ours), Fixture::Forest(theirs)) => ours.is_subset(theirs, report),
            (Fixture::Mountain(ours), Fixture::Mountain(theirs)) => {
                landmark_is_subset("mountain", ours, theirs, report)
            }
            (Fixture::Hill(ours), Fixture::Hill(theirs)) => {
                landmark_is_subset("hill", ours, theirs, report)
            }
            (Fixture::Oasis(ours), Fixture::Oasis(theirs)) => {
                landmark_is_subset("oasis", ours, theirs, report)
            }
            (Fixture::MineralVein(ours), Fixture::MineralVein(theirs)) => {
                ours.is_subset(theirs, report)
            }
            (Fixture::StoneDeposit(ours), Fixture::StoneDeposit(theirs)) => {
                ours.is_subset(theirs, report)
            }
            (Fixture::Mine(ours), Fixture::Mine(theirs)) => ours.is_subset(theirs, report),
            (Fixture::TextNote(ours), Fixture::TextNote(theirs)) => ours.is_subset(theirs, report),
            (Fixture::Cache(ours), Fixture::Cache(theirs)) => ours.is_subset(theirs, report),
            (Fixture::AnimalTracks(ours), Fixture::AnimalTracks(theirs)) => {
                ours.is_subset(theirs, report)
            }
            (Fixture::Grove(ours), Fixture::Grove(theirs)) => ours.is_subset(theirs, report),
            (Fixture::Meadow(ours), Fixture::Meadow(theirs)) => ours.is_subset(theirs, report),
            (Fixture::Shrub(ours), Fixture::Shrub(theirs)) => ours.is_subset(theirs, report),
            (Fixture::Animal(ours), Fixture::Animal(theirs)) => ours.is_subset(theirs, report),
            (Fixture::Implement(ours), Fixture::Implement(theirs)) => {
                ours.is_subset(theirs, report)
            }
            (Fixture::ResourcePile(ours), Fixture::ResourcePile(theirs)) => {
                ours.is_subset(theirs, report)
            }
            (Fixture::Town(ours), Fixture::Town(theirs)) => {
                settlement_is_subset("town", ours, theirs, report)
            }
            (Fixture::City(ours), Fixture::City(theirs)) => {
                settlement_is_subset("city", ours, theirs, report)
            }
            (Fixture::Fortification(ours), Fixture::Fortification(theirs)) => {
                settlement_is_subset("fortification", ours, theirs, report)
            }
            (Fixture::Fortress(ours), Fixture::Fortress(theirs)) => ours.is_subset(theirs, report),
            (Fixture::Unit(ours), Fixture::Unit(theirs)) => ours.is_subset(theirs, report),
            (ours, theirs) => {
                report.line(format!(
                    "{} #{}: different fixture types: master has {}, view has {}",
                    capitalize(ours.kind().label()),
                    ours.id(),
                    ours.kind(),
                    theirs.kind()
                ));
                false
            }
        }
    }
}

/// Whether two fixtures are equal apart from their ids.
pub fn same_ignoring_id(general: &Fixture, specific: &Fixture) -> bool {
    general.kind() == specific.kind() && *general == specific.with_id(general.id())
}

/// Whether an anonymous `specific` fits `general`. Markers have to match
/// outright; anything else is compared as though it carried `general`'s id.
pub(crate) fn fits_anonymously(
    general: &Fixture,
    specific: &Fixture,
    report: &dyn Report,
) -> bool {
    match specific.kind() {
        FixtureKind::TextNote | FixtureKind::Cache | FixtureKind::AnimalTracks => {
            let same = same_ignoring_id(general, specific);
            if !same {
                report.line(format!("extra anonymous {}", specific.kind()));
            }
            same
        }
        _ => general.is_subset(&specific.with_id(general.id()), report),
    }
}
