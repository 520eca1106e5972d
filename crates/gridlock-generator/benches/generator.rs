//! Benchmarks for puzzle generation.
//!
//! Measures the full generation pipeline (grid synthesis plus carving) over
//! a handful of fixed seeds, so runs are reproducible while still covering
//! several backtracking paths.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridlock_generator::{Mulberry32, PuzzleGenerator, fill_grid};

const SEEDS: [u32; 3] = [42, 0xDEAD_BEEF, 123_456_789];

fn bench_fill_grid(c: &mut Criterion) {
    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("fill_grid", format!("seed_{seed}")),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || Mulberry32::new(hint::black_box(seed)),
                    |mut rng| fill_grid(&mut rng),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();
    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("generate", format!("seed_{seed}")),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || hint::black_box(seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_fill_grid, bench_generate);
criterion_main!(benches);
