use criterion::{black_box, criterion_group, criterion_main, Criterion};

use war_sim::cards::DeckBuilder;
use war_sim::core::{GameRng, SimConfig};
use war_sim::rules::{GameEngine, NoopObserver};
use war_sim::sim::BatchRunner;

fn single_game(c: &mut Criterion) {
    let builder = DeckBuilder::new(52).unwrap();
    let mut seed = 0u64;

    c.bench_function("single_game_52", |b| {
        b.iter(|| {
            seed += 1;
            let mut rng = GameRng::new(seed);
            let deal = builder.deal(&mut rng);
            black_box(GameEngine::new(deal, 10_000).play(&mut rng, &mut NoopObserver))
        })
    });
}

fn batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_1000");
    for parallel in [false, true] {
        let config = SimConfig::new().with_games(1_000).with_seed(1).with_parallel(parallel);
        let runner = BatchRunner::new(config).unwrap();
        let name = if parallel { "parallel" } else { "serial" };
        group.bench_function(name, |b| b.iter(|| black_box(runner.results())));
    }
    group.finish();
}

criterion_group!(benches, single_game, batch);
criterion_main!(benches);
