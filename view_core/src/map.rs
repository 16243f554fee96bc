//! Whole-map comparison.

use std::{
    io::{self, Write},
    thread,
    time::Instant,
};

use rayon::prelude::*;
use view_schema::{Fixture, Point, WorldMap};

use crate::config::SubsetConfig;
use crate::fixture::fits_anonymously;
use crate::relation::{Findings, Subset};
use crate::report::{ChannelReport, Counted, Report, Silent};

/// Whether `specific` is a legitimate view of `general`.
///
/// Maps of different dimensions fail at once. Otherwise players and every
/// tile are checked and all problems are reported. The current turn is
/// not compared. Tiles may be checked in parallel, so line order across
/// tiles is not fixed.
pub fn check_map(
    general: &WorldMap,
    specific: &WorldMap,
    report: &dyn Report,
    config: &SubsetConfig,
) -> bool {
    if general.dimensions() != specific.dimensions() {
        report.line(format!(
            "Dimension mismatch: master is {}, view is {}",
            general.dimensions(),
            specific.dimensions()
        ));
        return false;
    }
    let started = Instant::now();
    let counted = Counted::new(report);
    let players_ok = general.players().is_subset(specific.players(), &counted);

    let points: Vec<Point> = specific.locations().collect();
    let parallel = config.runs_parallel(general.dimensions().point_count());
    let failed_points = if parallel {
        points
            .par_iter()
            .filter(|point| !check_point(general, specific, **point, &counted, config))
            .count()
    } else {
        points
            .iter()
            .filter(|point| !check_point(general, specific, **point, &counted, config))
            .count()
    };

    tracing::debug!(
        target: "world_views::map",
        points = points.len(),
        failed_points,
        lines = counted.count(),
        parallel,
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "map_subset.completed"
    );
    players_ok && failed_points == 0
}

/// Run [`check_map`] with each line written to `out` by a printer thread as
/// soon as it is found. Returns the verdict and the number of lines written.
pub fn stream_check(
    general: &WorldMap,
    specific: &WorldMap,
    config: &SubsetConfig,
    out: &mut (dyn Write + Send),
) -> io::Result<(bool, usize)> {
    let (report, lines) = ChannelReport::channel();
    thread::scope(|scope| {
        let printer = scope.spawn(move || -> io::Result<usize> {
            let mut written = 0;
            for line in lines {
                writeln!(out, "{line}")?;
                written += 1;
            }
            out.flush()?;
            Ok(written)
        });
        let subset = check_map(general, specific, &report, config);
        drop(report);
        let written = printer
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "diagnostic printer panicked"))??;
        Ok((subset, written))
    })
}

impl Subset for WorldMap {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        check_map(self, specific, report, &SubsetConfig::default())
    }
}

fn check_point(
    general: &WorldMap,
    specific: &WorldMap,
    point: Point,
    report: &dyn Report,
    config: &SubsetConfig,
) -> bool {
    let mut findings = Findings::new(report, format!("At {point}"));

    let ours = general.rivers(point);
    let theirs = specific.rivers(point);
    match specific.terrain(point) {
        Some(terrain) => {
            match general.terrain(point) {
                Some(other) if other == terrain => {}
                Some(other) => findings.fail(format!(
                    "terrain differs: master has {other}, view has {terrain}"
                )),
                None => findings.fail(format!(
                    "view has {terrain} terrain where the master has none"
                )),
            }
            findings.require(ours == theirs, || {
                format!("rivers differ: master has {ours}, view has {theirs}")
            });
        }
        // Unexplored in the view: only the rivers it does show must be real.
        None => findings.require(ours.contains(theirs), || {
            format!(
                "view shows rivers ({}) the master lacks",
                theirs.difference(ours)
            )
        }),
    }

    let candidates = general.fixtures(point);
    for fixture in specific.fixtures(point) {
        if config.skips(fixture.kind()) {
            continue;
        }
        if fixture.id() < 0 {
            anonymous_fixture(&mut findings, candidates, fixture);
            continue;
        }
        let same_id: Vec<&Fixture> = candidates
            .iter()
            .filter(|ours| ours.id() == fixture.id())
            .collect();
        match same_id.as_slice() {
            [] => findings.fail(missing_fixture(general, fixture, point, config)),
            [only] => findings.nested(|report| only.is_subset(fixture, report)),
            [first, ..] => {
                if !same_id.iter().any(|ours| ours.is_subset(fixture, &Silent)) {
                    findings.nested(|report| first.is_subset(fixture, report));
                }
            }
        }
    }
    findings.finish()
}

/// An anonymous fixture fits if any master fixture of its kind on the tile
/// accepts it; otherwise the first such fixture explains why not.
fn anonymous_fixture(findings: &mut Findings<'_>, candidates: &[Fixture], fixture: &Fixture) {
    let same_kind: Vec<&Fixture> = candidates
        .iter()
        .filter(|ours| ours.kind() == fixture.kind())
        .collect();
    match same_kind.as_slice() {
        [] => findings.fail(format!("extra anonymous {}", fixture.kind())),
        [only] => findings.nested(|report| fits_anonymously(only, fixture, report)),
        [first, ..] => {
            if !same_kind
                .iter()
                .any(|ours| fits_anonymously(ours, fixture, &Silent))
            {
                findings.nested(|report| fits_anonymously(first, fixture, report));
            }
        }
    }
}

fn missing_fixture(
    general: &WorldMap,
    fixture: &Fixture,
    point: Point,
    config: &SubsetConfig,
) -> String {
    let kind = fixture.kind();
    let id = fixture.id();
    let elsewhere = general.locate(id).filter(|_| config.relocation_hints);
    match elsewhere {
        Some(held) if held == point => {
            format!("{kind} #{id} is held inside another fixture here in the master")
        }
        Some(held) => format!("{kind} #{id} is at {held} in the master"),
        None => format!("extra {kind} #{id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DiagnosticBuffer;
    use view_schema::{
        Animal, Grove, MapDimensions, Player, PlayerCollection, Rivers, Shrub, TerrainType,
        TextNote, Unit,
    };

    fn blank() -> WorldMap {
        let players: PlayerCollection = [Player::new(1, "Ana"), Player::independent(0)]
            .into_iter()
            .collect();
        WorldMap::new(MapDimensions::new(4, 4, 2), players)
    }

    fn check(general: &WorldMap, specific: &WorldMap) -> (bool, DiagnosticBuffer) {
        let buffer = DiagnosticBuffer::new();
        let ok = check_map(general, specific, &buffer, &SubsetConfig::default().sequential());
        (ok, buffer)
    }

    #[test]
    fn different_dimensions_stop_immediately() {
        let other = WorldMap::new(MapDimensions::new(5, 4, 2), PlayerCollection::new());
        let (ok, buffer) = check(&blank(), &other);
        assert!(!ok);
        assert_eq!(buffer.len(), 1);
        assert!(buffer.mentions("Dimension mismatch"));
    }

    #[test]
    fn extra_ocean_tile() {
        let mut master = blank();
        let mut view = blank();
        view.set_terrain(Point::new(1, 1), Some(TerrainType::Ocean))
            .unwrap();
        let (ok, buffer) = check(&master, &view);
        assert!(!ok);
        insta::assert_debug_snapshot!(buffer.lines(), @r###"
        [
            "At (1, 1): view has ocean terrain where the master has none",
        ]
        "###);

        master
            .set_terrain(Point::new(1, 1), Some(TerrainType::Ocean))
            .unwrap();
        assert!(check(&master, &view).0);
    }

    #[test]
    fn rivers_exact_on_known_tiles_subset_on_unexplored() {
        let mut master = blank();
        let point = Point::new(2, 2);
        master.set_terrain(point, Some(TerrainType::Plains)).unwrap();
        master.add_rivers(point, Rivers::NORTH | Rivers::EAST).unwrap();

        let mut unexplored = blank();
        unexplored.add_rivers(point, Rivers::NORTH).unwrap();
        assert!(check(&master, &unexplored).0);

        let mut partial = blank();
        partial.set_terrain(point, Some(TerrainType::Plains)).unwrap();
        partial.add_rivers(point, Rivers::NORTH).unwrap();
        let (ok, buffer) = check(&master, &partial);
        assert!(!ok);
        assert!(buffer.mentions("At (2, 2): rivers differ"));

        unexplored.add_rivers(point, Rivers::LAKE).unwrap();
        let (ok, buffer) = check(&master, &unexplored);
        assert!(!ok);
        assert!(buffer.mentions("view shows rivers (lake) the master lacks"));
    }

    #[test]
    fn skipped_kinds_ignored_both_ways() {
        let mut master = blank();
        let mut view = blank();
        master
            .add_fixture(Point::new(0, 0), Fixture::TextNote(TextNote::new("ours", Some(2))))
            .unwrap();
        view.add_fixture(Point::new(0, 0), Fixture::TextNote(TextNote::new("theirs", None)))
            .unwrap();
        assert!(check(&master, &view).0);
        assert!(check(&view, &master).0);
    }

    #[test]
    fn fixtures_compare_by_id_with_relocation_hint() {
        let mut master = blank();
        master
            .add_fixture(Point::new(0, 1), Fixture::Grove(Grove::new(5, "oak", false, false, 10)))
            .unwrap();

        let mut smaller = blank();
        smaller
            .add_fixture(Point::new(0, 1), Fixture::Grove(Grove::new(5, "oak", false, false, 5)))
            .unwrap();
        assert!(check(&master, &smaller).0);
        let (ok, buffer) = check(&smaller, &master);
        assert!(!ok);
        assert_eq!(
            buffer.lines(),
            vec!["At (0, 1): Grove #5: population is larger than in the master (10 > 5)".to_string()]
        );

        let mut moved = blank();
        moved
            .add_fixture(Point::new(3, 3), Fixture::Grove(Grove::new(5, "oak", false, false, 5)))
            .unwrap();
        moved
            .add_fixture(Point::new(3, 3), Fixture::Grove(Grove::new(6, "elm", false, false, 1)))
            .unwrap();
        let (ok, buffer) = check(&master, &moved);
        assert!(!ok);
        let mut lines = buffer.into_lines();
        lines.sort();
        insta::assert_debug_snapshot!(lines, @r###"
        [
            "At (3, 3): extra grove #6",
            "At (3, 3): grove #5 is at (0, 1) in the master",
        ]
        "###);
    }

    #[test]
    fn anonymous_fixtures_match_by_content_not_id() {
        let point = Point::new(1, 0);
        let mut master = blank();
        master
            .add_fixture(point, Fixture::Grove(Grove::new(-1, "apple", true, true, 3)))
            .unwrap();
        master
            .add_fixture(point, Fixture::Grove(Grove::new(-1, "oak", false, false, 9)))
            .unwrap();
        assert!(check(&master, &master).0);
        assert!(check(&master, &master.view_for(1)).0);

        let mut renumbered = blank();
        renumbered
            .add_fixture(point, Fixture::Grove(Grove::new(-5, "oak", false, false, 4)))
            .unwrap();
        assert!(check(&master, &renumbered).0);

        let mut inflated = blank();
        inflated
            .add_fixture(point, Fixture::Grove(Grove::new(-1, "apple", true, true, 30)))
            .unwrap();
        inflated
            .add_fixture(point, Fixture::Shrub(Shrub::new(-1, "hazel", 2)))
            .unwrap();
        let (ok, buffer) = check(&master, &inflated);
        assert!(!ok);
        let mut lines = buffer.into_lines();
        lines.sort();
        insta::assert_debug_snapshot!(lines, @r###"
        [
            "At (1, 0): Orchard #-1: population is larger than in the master (30 > 3)",
            "At (1, 0): extra anonymous shrub",
        ]
        "###);
    }

    #[test]
    fn anonymous_herd_cannot_be_inflated() {
        let point = Point::new(2, 3);
        let mut master = blank();
        master
            .add_fixture(point, Fixture::Animal(Animal::new(-1, "deer", "wild", 3)))
            .unwrap();
        let mut view = blank();
        view.add_fixture(point, Fixture::Animal(Animal::new(-1, "deer", "wild", 50)))
            .unwrap();
        let (ok, buffer) = check(&master, &view);
        assert!(!ok);
        assert_eq!(
            buffer.lines(),
            vec!["At (2, 3): Animal #-1: population is larger than in the master (50 > 3)".to_string()]
        );
    }

    #[test]
    fn empty_map_is_subset_of_everything_but_not_the_reverse() {
        let mut master = blank();
        master
            .set_terrain(Point::new(0, 0), Some(TerrainType::Desert))
            .unwrap();
        master
            .add_fixture(
                Point::new(0, 0),
                Fixture::Unit(Unit::new(9, Player::new(1, "Ana"), "scouts", "Eyes")),
            )
            .unwrap();
        master.set_current_turn(12);
        let empty = blank();
        assert!(check(&master, &empty).0);
        assert!(check(&empty, &empty).0);
        assert!(!check(&empty, &master).0);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let mut master = blank();
        let mut view = blank();
        for column in 0..4 {
            let point = Point::new(3, column);
            master.set_terrain(point, Some(TerrainType::Tundra)).unwrap();
            view.set_terrain(point, Some(TerrainType::Jungle)).unwrap();
        }
        let eager = SubsetConfig {
            parallel_min_points: 0,
            ..SubsetConfig::default()
        };
        let parallel = DiagnosticBuffer::new();
        assert!(!check_map(&master, &view, &parallel, &eager));
        let (ok, sequential) = check(&master, &view);
        assert!(!ok);
        let mut left = parallel.into_lines();
        let mut right = sequential.into_lines();
        left.sort();
        right.sort();
        assert_eq!(left, right);
        assert_eq!(left.len(), 4);
    }
}
