use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use view_core::{check_map, sample::generate_world, Silent, SubsetConfig};
use view_schema::MapDimensions;

fn bench_check_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_map");
    let parallel = SubsetConfig {
        parallel_min_points: 0,
        ..SubsetConfig::default()
    };
    let sequential = parallel.sequential();

    for size in [16i32, 32, 64, 128] {
        let master = generate_world(MapDimensions::new(size, size, 2), 42)
            .expect("sample world should build");
        let view = master.view_for(1);
        for (label, config) in [("sequential", &sequential), ("parallel", &parallel)] {
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| check_map(&master, &view, &Silent, config))
            });
        }
    }

    group.finish();
}

fn bench_view_for(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_for");

    for size in [32i32, 128] {
        group.bench_with_input(BenchmarkId::new("grid", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    generate_world(MapDimensions::new(size, size, 2), 7)
                        .expect("sample world should build")
                },
                |master| master.view_for(2),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(subset_benches, bench_check_map, bench_view_for);
criterion_main!(subset_benches);
