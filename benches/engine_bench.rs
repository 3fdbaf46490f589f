//! Criterion benchmarks for the maze GA engine.
//!
//! Measures one full generation step on the classic maze and the raw
//! decode-and-walk fitness evaluation it is built on.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use maze_ga::engine::{Engine, EngineConfig};
use maze_ga::genome::{self, Genome};
use maze_ga::maze::Maze;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn classic_maze() -> Maze {
    Maze::from_tags(&[
        vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        vec![1, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1],
        vec![8, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1],
        vec![1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1],
        vec![1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1],
        vec![1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1],
        vec![1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 5],
        vec![1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ])
    .expect("classic maze is well-formed")
}

fn bench_generation_step(c: &mut Criterion) {
    let maze = classic_maze();
    let config = EngineConfig::default().with_seed(42);

    c.bench_function("engine_step", |b| {
        b.iter_batched_ref(
            || {
                let mut engine = Engine::new(maze.clone(), config.clone())
                    .expect("valid config");
                engine.run();
                engine
            },
            |engine| engine.step(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_route_fitness(c: &mut Criterion) {
    let maze = classic_maze();
    let mut rng = StdRng::seed_from_u64(42);
    let genome = Genome::random(70, &mut rng);
    let directions = genome::decode(&genome).expect("even length");

    c.bench_function("route_fitness", |b| {
        b.iter(|| maze.route_fitness(black_box(&directions)));
    });

    c.bench_function("decode", |b| {
        b.iter(|| genome::decode(black_box(&genome)));
    });
}

criterion_group!(benches, bench_generation_step, bench_route_fitness);
criterion_main!(benches);
