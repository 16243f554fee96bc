mod common;

use anyhow::Result;
use common::{check, load_map};
use view_core::{DiagnosticBuffer, Subset};
use view_schema::{
    Animal, Fixture, Fortress, Grove, MapDimensions, Player, PlayerCollection, Point, Quantity,
    ResourcePile, Settlement, Shrub, TerrainType, TownSize, TownStatus, Unit, Worker, WorldMap,
};

fn two_player_map() -> WorldMap {
    let players: PlayerCollection = [Player::independent(0), Player::new(1, "Ana")]
        .into_iter()
        .collect();
    WorldMap::new(MapDimensions::new(3, 3, 2), players)
}

#[test]
fn saved_view_is_subset_of_saved_master() -> Result<()> {
    let master = load_map("riverside_master.json")?;
    let view = load_map("riverside_view.json")?;

    let (subset, lines) = check(&master, &view);
    assert!(subset, "unexpected problems: {lines:?}");
    assert!(lines.is_empty());

    let (subset, lines) = check(&view, &master);
    assert!(!subset);
    assert!(lines.iter().any(|line| line == "Extra player Independent (#0)"));
    assert!(lines
        .iter()
        .any(|line| line.starts_with("At (0, 0): Town #7: name differs")));
    assert!(lines
        .iter()
        .any(|line| line == "At (1, 0): view has swamp terrain where the master has none"));
    assert!(lines
        .iter()
        .any(|line| line == "At (1, 0): Fortress #20 (Keep): extra unit #21"));
    Ok(())
}

#[test]
fn extra_ocean_tile_breaks_subset_until_master_matches() {
    let mut world_a = two_player_map();
    let mut world_b = two_player_map();
    world_b
        .set_terrain(Point::new(1, 1), Some(TerrainType::Ocean))
        .unwrap();

    let (subset, lines) = check(&world_a, &world_b);
    assert!(!subset);
    assert_eq!(
        lines,
        vec!["At (1, 1): view has ocean terrain where the master has none".to_string()]
    );

    world_a
        .set_terrain(Point::new(1, 1), Some(TerrainType::Ocean))
        .unwrap();
    assert!(check(&world_a, &world_b).0);
}

#[test]
fn grove_population_only_shrinks() {
    let buffer = DiagnosticBuffer::new();
    let five = Fixture::Grove(Grove::new(5, "oak", false, false, 5));
    let ten = Fixture::Grove(Grove::new(5, "oak", false, false, 10));
    assert!(ten.is_subset(&five, &buffer));
    assert!(buffer.is_empty());
    assert!(!five.is_subset(&ten, &buffer));
    assert!(!buffer.is_empty());
}

#[test]
fn unknown_town_name_and_difficulty() {
    let owner = Player::new(1, "Ana");
    let unknown = Fixture::Town(
        Settlement::new(3, "unknown", TownStatus::Active, TownSize::Small, owner.clone())
            .with_dc(3),
    );
    let riverside = Fixture::Town(
        Settlement::new(3, "riverside", TownStatus::Active, TownSize::Small, owner).with_dc(10),
    );
    let buffer = DiagnosticBuffer::new();
    assert!(riverside.is_subset(&unknown, &buffer));
    assert!(buffer.is_empty());
    assert!(!unknown.is_subset(&riverside, &buffer));
    assert_eq!(buffer.len(), 1);
}

#[test]
fn fortress_membership_is_one_directional() {
    let owner = Player::new(1, "Ana");
    let empty = Fortress::new(4, owner.clone(), "Keep", TownSize::Medium);
    let manned = empty
        .clone()
        .with_member(Unit::new(5, owner, "workers", "Crew").with_member(Worker::new(6, "Bo", "human")));

    let mut master = two_player_map();
    master
        .add_fixture(Point::new(2, 2), Fixture::Fortress(manned.clone()))
        .unwrap();
    let mut view = two_player_map();
    view.add_fixture(Point::new(2, 2), Fixture::Fortress(empty))
        .unwrap();

    assert!(check(&master, &view).0);
    let (subset, lines) = check(&view, &master);
    assert!(!subset);
    assert_eq!(
        lines,
        vec!["At (2, 2): Fortress #4 (Keep): extra unit #5".to_string()]
    );
}

#[test]
fn redacted_view_of_saved_master_is_subset() -> Result<()> {
    let master = load_map("riverside_master.json")?;
    for viewer in [0, 1, 2] {
        let (subset, lines) = check(&master, &master.view_for(viewer));
        assert!(subset, "view for {viewer}: {lines:?}");
    }
    Ok(())
}

#[test]
fn anonymous_fixtures_follow_the_usual_rules() {
    let mut master = two_player_map();
    let grove = Grove::new(-1, "apple", true, true, 3);
    master
        .add_fixture(Point::new(0, 0), Fixture::Grove(grove.clone()))
        .unwrap();
    master
        .add_fixture(Point::new(0, 0), Fixture::Animal(Animal::new(-1, "deer", "wild", 3)))
        .unwrap();
    let grain = ResourcePile::new(-1, "food", "grain", Quantity::new(30, "bushels"));
    master
        .add_fixture(
            Point::new(1, 1),
            Fixture::Fortress(
                Fortress::new(3, Player::new(1, "Ana"), "Keep", TownSize::Small).with_member(grain),
            ),
        )
        .unwrap();

    let (subset, lines) = check(&master, &master.view_for(0));
    assert!(subset, "unexpected problems: {lines:?}");

    let mut renumbered = two_player_map();
    let mut other_id = grove;
    other_id.id = -5;
    renumbered
        .add_fixture(Point::new(0, 0), Fixture::Grove(other_id))
        .unwrap();
    assert!(check(&master, &renumbered).0);

    let mut inflated = two_player_map();
    inflated
        .add_fixture(Point::new(0, 0), Fixture::Animal(Animal::new(-1, "deer", "wild", 50)))
        .unwrap();
    inflated
        .add_fixture(Point::new(0, 0), Fixture::Shrub(Shrub::new(-1, "hazel", 1)))
        .unwrap();
    let (subset, lines) = check(&master, &inflated);
    assert!(!subset);
    assert_eq!(
        lines,
        vec![
            "At (0, 0): Animal #-1: population is larger than in the master (50 > 3)".to_string(),
            "At (0, 0): extra anonymous shrub".to_string(),
        ]
    );
}
