use std::fs::File;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use toroidal_snake::{types::Direction, StandardGame, StepResult};
use tracing::info;
use tracing_flame::FlameLayer;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

const LEVELS: usize = 1_000;
const MAX_STEPS_PER_LEVEL: u64 = 100_000;

fn play_till_fail(game: &mut StandardGame, rng: &mut SmallRng) -> u64 {
    let mut steps = 0;
    while steps < MAX_STEPS_PER_LEVEL {
        let input = Direction::all()[rng.gen_range(0..4)];
        steps += 1;
        if game.step(input, rng) == StepResult::Fail {
            break;
        }
    }
    steps
}

fn main() {
    let (flame_layer, _flame_guard) = FlameLayer::with_file("./tracing.folded").unwrap();
    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(LevelFilter::INFO))
        .with(flame_layer)
        .init();

    let profiler = pprof::ProfilerGuard::new(100).unwrap();

    let mut rng = SmallRng::from_entropy();
    let mut game = StandardGame::new();
    let mut total_steps = 0;
    let mut best_score = 0;

    for _ in 0..LEVELS {
        game.prepare_level(&mut rng);
        total_steps += play_till_fail(&mut game, &mut rng);
        best_score = best_score.max(game.score());
    }

    info!(levels = LEVELS, total_steps, best_score, "done");

    if let Ok(report) = profiler.report().build() {
        let file = File::create("flamegraph.svg").unwrap();
        report.flamegraph(file).unwrap();
    }
}
