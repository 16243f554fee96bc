//! Relation properties checked over generated worlds.

mod common;

use common::check;
use view_core::sample::generate_world;
use view_schema::{
    AnimalTracks, Fixture, Forest, MapDimensions, Player, Point, Settlement, TextNote,
    TownSize, TownStatus, WorldMap,
};

const SEEDS: [u64; 4] = [1, 17, 256, 9001];

fn world(seed: u64) -> WorldMap {
    generate_world(MapDimensions::new(12, 12, 2), seed).expect("sample world should build")
}

/// First empty point of the map, for planting fixtures.
fn free_point(map: &WorldMap) -> Point {
    map.iter_tiles()
        .find(|(_, tile)| tile.fixtures.is_empty())
        .map(|(point, _)| point)
        .unwrap_or(Point::new(0, 0))
}

#[test]
fn every_world_is_a_subset_of_itself() {
    for seed in SEEDS {
        let map = world(seed);
        let (subset, lines) = check(&map, &map);
        assert!(subset, "seed {seed}: {lines:?}");
    }
}

#[test]
fn removing_fixtures_keeps_subset() {
    for seed in SEEDS {
        let master = world(seed);
        let mut view = master.clone();
        let located: Vec<(Point, i32)> = master
            .iter_tiles()
            .flat_map(|(point, tile)| tile.fixtures.iter().map(move |f| (point, f.id())))
            .filter(|(_, id)| id % 3 == 0)
            .collect();
        for (point, id) in located {
            view.remove_fixture(point, id);
        }
        let (subset, lines) = check(&master, &view);
        assert!(subset, "seed {seed}: {lines:?}");
    }
}

#[test]
fn adding_a_fixture_breaks_subset() {
    for seed in SEEDS {
        let master = world(seed);
        let mut view = master.clone();
        let point = free_point(&master);
        view.add_fixture(
            point,
            Fixture::Forest(Forest::new(1_000_000, "pine", false, 20)),
        )
        .unwrap();
        let (subset, lines) = check(&master, &view);
        assert!(!subset);
        assert_eq!(lines, vec![format!("At {point}: extra forest #1000000")]);
    }
}

#[test]
fn redacted_views_are_subsets() {
    for seed in SEEDS {
        let master = world(seed);
        for viewer in 0..=3 {
            let (subset, lines) = check(&master, &master.view_for(viewer));
            assert!(subset, "seed {seed} viewer {viewer}: {lines:?}");
        }
    }
}

#[test]
fn skipped_fixtures_never_matter() {
    let master = world(5);
    let mut view = master.clone();
    let point = free_point(&master);
    view.add_fixture(point, Fixture::TextNote(TextNote::new("scribbles", Some(3))))
        .unwrap();
    view.add_fixture(point, Fixture::AnimalTracks(AnimalTracks::new("bear")))
        .unwrap();
    assert!(check(&master, &view).0);
    assert!(check(&view, &master).0);
}

#[test]
fn name_wildcard_only_applies_to_the_view() {
    let base = world(8);
    let point = free_point(&base);
    let settlement = |name: &str| {
        Fixture::City(Settlement::new(
            2_000_000,
            name,
            TownStatus::Active,
            TownSize::Large,
            Player::new(1, "Ana"),
        ))
    };
    let mut named = base.clone();
    named.add_fixture(point, settlement("Highgate")).unwrap();
    let mut unnamed = base;
    unnamed.add_fixture(point, settlement("unknown")).unwrap();

    assert!(check(&named, &unnamed).0);
    assert!(!check(&unnamed, &named).0);
}
