//! Benchmarks for dungeon generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delver::{factories, generate_dungeon, tunnel_between, GenerationConfig, Position};
use rand::{rngs::StdRng, SeedableRng};

fn bench_generate_dungeon(c: &mut Criterion) {
    let config = GenerationConfig::default();

    c.bench_function("generate_dungeon 80x45", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(config.seed);
            generate_dungeon(black_box(&config), factories::player().instantiate(), &mut rng)
        })
    });
}

fn bench_tunnel_between(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("tunnel_between", |b| {
        b.iter(|| tunnel_between(black_box(Position::new(3, 40)), black_box(Position::new(76, 2)), &mut rng))
    });
}

criterion_group!(benches, bench_generate_dungeon, bench_tunnel_between);
criterion_main!(benches);
