//! Criterion benchmarks for the grid searches and 2-opt hill climbing.
//!
//! Instances are generated from fixed seeds so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_gridsearch::grid::{build_costs, Cell};
use u_gridsearch::random::create_rng;
use u_gridsearch::search::{astar, bfs, ucs, HeuristicKind};
use u_gridsearch::tsp::{generate_cities, HillClimbRunner, RestartConfig};

// ===========================================================================
// Grid search
// ===========================================================================

fn bench_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs");

    for &size in &[10usize, 25, 50] {
        let goal = Cell::new(size as i64 - 1, size as i64 - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter(|| black_box(bfs(Cell::new(0, 0), black_box(goal), n, n)))
        });
    }
    group.finish();
}

fn bench_ucs(c: &mut Criterion) {
    let mut group = c.benchmark_group("ucs");

    for &size in &[10usize, 25, 50] {
        let costs = build_costs(size, size, 1, 9, 42).expect("valid grid");
        let goal = Cell::new(size as i64 - 1, size as i64 - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &costs, |b, costs| {
            b.iter(|| {
                let result = ucs(Cell::new(0, 0), goal, size, size, black_box(costs));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_astar(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar");

    for &size in &[10usize, 25, 50] {
        let costs = build_costs(size, size, 1, 9, 42).expect("valid grid");
        let goal = Cell::new(size as i64 - 1, size as i64 - 1);
        for kind in HeuristicKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &costs, |b, costs| {
                b.iter(|| {
                    let result = astar(size, size, Cell::new(0, 0), goal, black_box(costs), &kind);
                    black_box(result)
                })
            });
        }
    }
    group.finish();
}

// ===========================================================================
// TSP
// ===========================================================================

fn bench_hill_climbing(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp_hill_climbing");
    group.sample_size(10);

    for &n in &[20usize, 30, 50] {
        let mut rng = create_rng(42);
        let cities = generate_cities(n, &mut rng, 0.0, 100.0);
        let config = RestartConfig::default().with_restarts(5).with_seed(42);
        let input = (cities, config);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, (cities, config)| {
            b.iter(|| {
                let mut rng = create_rng(7);
                let result = HillClimbRunner::run(black_box(cities), black_box(config), &mut rng);
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bfs, bench_ucs, bench_astar, bench_hill_climbing);
criterion_main!(benches);
