//! Deterministic sample worlds for tests, benchmarks and demos.

use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use view_schema::{
    Animal, AnimalTracks, Cache, CommunityStats, FieldStatus, Fixture, Forest, Fortress, Grove,
    Implement, Job, Landmark, MapDimensions, MapError, Meadow, Mine, MineralVein, Player,
    PlayerCollection, Point, Quantity, ResourcePile, Rivers, Settlement, Shrub, Skill,
    StoneDeposit, StoneKind, TerrainType, TextNote, TownSize, TownStatus, Unit, Worker,
    WorkerStats, WorldMap,
};

const SAMPLE_SEED_SALT: u64 = 0x5EED_0F_3A95_u64;

const GROVE_KINDS: [&str; 4] = ["oak", "apple", "maple", "olive"];
const CROPS: [&str; 3] = ["wheat", "barley", "hay"];
const MINERALS: [&str; 3] = ["iron", "copper", "gold"];
const ANIMALS: [&str; 4] = ["horse", "deer", "wolf", "goat"];
const RACES: [&str; 3] = ["human", "dwarf", "elf"];
const JOBS: [&str; 4] = ["farmer", "miner", "hunter", "smith"];
const SKILLS: [&str; 3] = ["hauling", "tracking", "forging"];
const STONES: [StoneKind; 3] = [StoneKind::Limestone, StoneKind::Marble, StoneKind::Slate];
const STATUSES: [TownStatus; 3] = [TownStatus::Active, TownStatus::Abandoned, TownStatus::Ruined];
const SIZES: [TownSize; 3] = [TownSize::Small, TownSize::Medium, TownSize::Large];

/// The players every sample world is played by; id 0 is the independent owner.
pub fn sample_players() -> PlayerCollection {
    [
        Player::independent(0),
        Player::new(1, "Ana"),
        Player::new(2, "Bram"),
        Player::new(3, "Cela"),
    ]
    .into_iter()
    .collect()
}

/// Build a world of the given size. The same seed always yields the same map.
pub fn generate_world(dimensions: MapDimensions, seed: u64) -> Result<WorldMap, MapError> {
    let mut rng = SmallRng::seed_from_u64(seed ^ SAMPLE_SEED_SALT);
    let players = sample_players();
    let owners: Vec<Player> = players.iter().cloned().collect();
    let terrains: Vec<TerrainType> = TerrainType::ALL
        .into_iter()
        .filter(|terrain| terrain.valid_in_version(dimensions.version))
        .collect();

    let mut world = WorldMap::new(dimensions, players);
    world.set_current_turn(rng.gen_range(0..200));
    let mut ids = IdSource::default();
    let points: Vec<Point> = dimensions.points().collect();
    for point in points {
        if rng.gen_bool(0.1) {
            continue;
        }
        world.set_terrain(point, terrains.choose(&mut rng).copied())?;
        if rng.gen_bool(0.125) {
            world.add_rivers(point, Rivers::from_bits_truncate(rng.gen::<u8>()))?;
        }
        for _ in 0..rng.gen_range(0..=3) {
            let fixture = random_fixture(&mut rng, &mut ids, &owners);
            world.add_fixture(point, fixture)?;
        }
    }
    tracing::debug!(
        target: "world_views::sample",
        seed,
        rows = dimensions.rows,
        columns = dimensions.columns,
        fixtures = ids.issued(),
        "sample_world.generated"
    );
    Ok(world)
}

#[derive(Default)]
struct IdSource {
    next: i32,
}

impl IdSource {
    fn take(&mut self) -> i32 {
        self.next += 1;
        self.next
    }

    /// A fresh id, or now and then the anonymous id.
    fn take_or_anonymous(&mut self, rng: &mut SmallRng) -> i32 {
        if rng.gen_bool(0.2) {
            -1
        } else {
            self.take()
        }
    }

    fn issued(&self) -> i32 {
        self.next
    }
}

fn pick<'a, T>(rng: &mut SmallRng, options: &'a [T]) -> &'a T {
    &options[rng.gen_range(0..options.len())]
}

fn random_fixture(rng: &mut SmallRng, ids: &mut IdSource, owners: &[Player]) -> Fixture {
    match rng.gen_range(0..14) {
        0 => Fixture::Grove(Grove::new(
            ids.take_or_anonymous(rng),
            *pick(rng, &GROVE_KINDS),
            rng.gen_bool(0.5),
            rng.gen_bool(0.5),
            rng.gen_range(1..200),
        )),
        1 => Fixture::Meadow(Meadow::new(
            ids.take(),
            *pick(rng, &CROPS),
            rng.gen_bool(0.5),
            rng.gen_bool(0.5),
            *pick(
                rng,
                &[
                    FieldStatus::Fallow,
                    FieldStatus::Seeding,
                    FieldStatus::Growing,
                    FieldStatus::Bearing,
                ],
            ),
            rng.gen_range(1..80),
        )),
        2 => Fixture::Forest(Forest::new(
            ids.take(),
            *pick(rng, &GROVE_KINDS),
            rng.gen_bool(0.2),
            rng.gen_range(5..400),
        )),
        3 => Fixture::MineralVein(MineralVein::new(
            ids.take(),
            *pick(rng, &MINERALS),
            rng.gen_bool(0.5),
            rng.gen_range(5..30),
        )),
        4 => Fixture::StoneDeposit(StoneDeposit::new(
            ids.take(),
            *pick(rng, &STONES),
            rng.gen_range(5..30),
        )),
        5 => Fixture::Mine(Mine::new(ids.take(), *pick(rng, &MINERALS), *pick(rng, &STATUSES))),
        6 => Fixture::Animal(Animal::new(
            ids.take_or_anonymous(rng),
            *pick(rng, &ANIMALS),
            "wild",
            rng.gen_range(1..12),
        )),
        7 => Fixture::Shrub(Shrub::new(
            ids.take_or_anonymous(rng),
            "hazel",
            rng.gen_range(1..60),
        )),
        8 => random_settlement(rng, ids, owners),
        9 => Fixture::Unit(random_unit(rng, ids, owners)),
        10 => {
            let owner = pick(rng, owners).clone();
            let size = *pick(rng, &SIZES);
            let mut fortress = Fortress::new(ids.take(), owner.clone(), "Stronghold", size)
                .with_member(Implement::new(ids.take(), "ballista", rng.gen_range(1..4)));
            if rng.gen_bool(0.4) {
                let grain = Quantity::new(rng.gen_range(1..90), "bushels");
                fortress = fortress.with_member(ResourcePile::new(-1, "food", "grain", grain));
            }
            if rng.gen_bool(0.7) {
                let mut garrison = random_unit(rng, ids, owners);
                garrison.owner = owner;
                fortress = fortress.with_member(garrison);
            }
            Fixture::Fortress(fortress)
        }
        11 => Fixture::Hill(Landmark::new(ids.take())),
        12 => Fixture::Cache(Cache::new(ids.take(), "buried", "coins")),
        _ => {
            if rng.gen_bool(0.5) {
                Fixture::TextNote(TextNote::new("the old road ends here", None))
            } else {
                Fixture::AnimalTracks(AnimalTracks::new(*pick(rng, &ANIMALS)))
            }
        }
    }
}

fn random_settlement(rng: &mut SmallRng, ids: &mut IdSource, owners: &[Player]) -> Fixture {
    let id = ids.take();
    let mut settlement = Settlement::new(
        id,
        format!("Settlement {id}"),
        *pick(rng, &STATUSES),
        *pick(rng, &SIZES),
        pick(rng, owners).clone(),
    )
    .with_dc(rng.gen_range(5..25));
    if rng.gen_bool(0.5) {
        let mut stats = CommunityStats::new(rng.gen_range(10..500));
        stats.worked_fields.insert(rng.gen_range(1..1000));
        stats
            .skill_levels
            .insert(pick(rng, &JOBS).to_string(), rng.gen_range(1..10));
        stats.yearly_production.push(ResourcePile::new(
            -1,
            "food",
            *pick(rng, &CROPS),
            Quantity::new(rng.gen_range(10..300), "bushels"),
        ));
        settlement = settlement.with_population(stats);
    }
    match rng.gen_range(0..3) {
        0 => Fixture::Town(settlement),
        1 => Fixture::City(settlement),
        _ => Fixture::Fortification(settlement),
    }
}

fn random_unit(rng: &mut SmallRng, ids: &mut IdSource, owners: &[Player]) -> Unit {
    let id = ids.take();
    let mut unit = Unit::new(id, pick(rng, owners).clone(), "band", format!("Band {id}"));
    for _ in 0..rng.gen_range(1..=3) {
        let job = Job::new(*pick(rng, &JOBS), rng.gen_range(1..6)).with_skill(Skill::new(
            *pick(rng, &SKILLS),
            rng.gen_range(0..5),
            rng.gen_range(0..100),
        ));
        let mut worker =
            Worker::new(ids.take(), format!("Worker {}", ids.issued()), *pick(rng, &RACES))
                .with_job(job);
        if rng.gen_bool(0.5) {
            worker = worker.with_stats(WorkerStats {
                hit_points: rng.gen_range(1..20),
                max_hit_points: 20,
                strength: rng.gen_range(3..19),
                dexterity: rng.gen_range(3..19),
                constitution: rng.gen_range(3..19),
                intelligence: rng.gen_range(3..19),
                wisdom: rng.gen_range(3..19),
                charisma: rng.gen_range(3..19),
            });
        }
        unit = unit.with_member(worker);
    }
    if rng.gen_bool(0.3) {
        let id = ids.take_or_anonymous(rng);
        unit = unit.with_member(Animal::new(id, "horse", "domesticated", rng.gen_range(1..4)));
    }
    if rng.gen_bool(0.3) {
        let rations = Quantity::new(rng.gen_range(1..40), "pounds");
        unit = unit.with_member(
            ResourcePile::new(ids.take_or_anonymous(rng), "food", "rations", rations)
                .with_created(rng.gen_range(0..100)),
        );
    }
    unit
}
