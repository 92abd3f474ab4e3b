//! Bulk vs incremental propagator throughput on a striped checkerboard adjacency, scaled up to
//! a size where the fixed-point sweep cost actually shows. Grounded on criterion's standard
//! `criterion_group!`/`criterion_main!` harness (the `harness = false` bench the corpus itself
//! reaches for rather than the nightly `#[bench]` macro fast-wfc-rs still uses).

use coord_2d::Size;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use wfc_core::adjacency::{cardinal_offsets, AdjacencyTable, DirectionAdjacency};
use wfc_core::location_heuristic::LexicalLocationHeuristic;
use wfc_core::pattern_heuristic::LexicalPatternHeuristic;
use wfc_core::solver::{self, Observers, PropagatorKind, SolverConfig};

/// Two patterns, each direction only admitting the other: a checkerboard that is deterministic
/// and contradiction-free on an even-sized grid, so both propagators run to completion without
/// ever touching `solve`'s backtracking path.
fn checkerboard_adjacency() -> AdjacencyTable {
    let offsets = cardinal_offsets();
    let dirs = offsets
        .iter()
        .map(|&offset| DirectionAdjacency { offset, allowed_neighbours: vec![vec![1], vec![0]] })
        .collect();
    AdjacencyTable::compile(2, dirs).expect("checkerboard adjacency is well-formed")
}

fn bench_propagator(c: &mut Criterion, size: Size) {
    let adjacency = checkerboard_adjacency();
    let mut group = c.benchmark_group("propagate");
    let (width, height) = (size.width() as usize, size.height() as usize);

    for propagator in [PropagatorKind::Bulk, PropagatorKind::Incremental] {
        let label = match propagator {
            PropagatorKind::Bulk => "bulk",
            PropagatorKind::Incremental => "incremental",
        };
        group.bench_with_input(BenchmarkId::new(label, width * height), &(width, height), |b, &(width, height)| {
            b.iter(|| {
                let mut rng = XorShiftRng::seed_from_u64(0);
                let mut location_heuristic = LexicalLocationHeuristic;
                let mut pattern_heuristic = LexicalPatternHeuristic;
                let config = SolverConfig { propagator, ..SolverConfig::default() };
                let grid = solver::solve(
                    2,
                    width,
                    height,
                    &adjacency,
                    &mut location_heuristic,
                    &mut pattern_heuristic,
                    &mut rng,
                    config,
                    None,
                    Observers::default(),
                )
                .expect("checkerboard adjacency never contradicts");
                black_box(grid);
            });
        });
    }
    group.finish();
}

fn propagate_benchmark(c: &mut Criterion) {
    bench_propagator(c, Size::new(16, 16));
    bench_propagator(c, Size::new(64, 64));
}

criterion_group!(benches, propagate_benchmark);
criterion_main!(benches);
