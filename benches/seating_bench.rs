//! Criterion benchmarks for the seating search.
//!
//! Measures fitness evaluation (the quadratic pair scan) and a full
//! generation step at several theater and population sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_seating::random::create_rng;
use u_seating::{fitness, Geometry, Layout, SeatingConfig, SeatingEngine};

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");
    let geometry = Geometry::new(30, 40);
    for (rows, seats) in [(10usize, 20usize), (20, 30), (30, 40)] {
        let mut rng = create_rng(42);
        let layout = Layout::random(rows, seats, &mut rng);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{seats}")),
            &layout,
            |b, layout| {
                b.iter(|| fitness::score(black_box(layout), &geometry));
            },
        );
    }
    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    for population in [20usize, 60] {
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &population,
            |b, &population| {
                let config = SeatingConfig::new(12, 18)
                    .with_population_size(population)
                    .with_seat_pitch_in(30)
                    .with_row_pitch_in(40)
                    .with_mutation_rate(10)
                    .with_seed(42);
                let mut engine = SeatingEngine::new(config);
                b.iter(|| black_box(engine.step()));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_generation);
criterion_main!(benches);
