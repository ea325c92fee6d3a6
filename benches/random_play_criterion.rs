use std::time::Instant;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use toroidal_snake::{
    dimensions::{Dimensions, Fixed},
    game::Game,
    types::Direction,
    StepResult,
};

fn run<D: Dimensions, const BOARD_SIZE: usize>(
    game: &mut Game<D, BOARD_SIZE>,
    rng: &mut SmallRng,
    total_iterations: &mut u64,
) {
    let input = Direction::all()[rng.gen_range(0..4)];
    if black_box(game.step(input, rng)) == StepResult::Fail {
        game.prepare_level(rng);
    }
    *total_iterations += 1;
}

fn bench_game<D: Dimensions, const BOARD_SIZE: usize>(b: &mut Bencher) {
    b.iter_custom(|iter_count| {
        let mut rng = SmallRng::from_entropy();
        let mut game = Game::<D, BOARD_SIZE>::new();
        game.prepare_level(&mut rng);
        let mut total_iterations = 0;

        let start = Instant::now();

        while total_iterations < iter_count {
            run(&mut game, &mut rng, &mut total_iterations);
        }

        start.elapsed()
    });
}

use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let mut g = c.benchmark_group("Games");
    g.bench_function("Standard 32x8", |b| {
        bench_game::<Fixed<32, 8>, { 32 * 8 }>(b);
    });
    g.bench_function("Square 11x11", |b| {
        bench_game::<Fixed<11, 11>, { 11 * 11 }>(b);
    });
    g.bench_function("Big 64x32", |b| {
        bench_game::<Fixed<64, 32>, { 64 * 32 }>(b);
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
