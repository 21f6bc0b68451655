//! Search benchmarks: how much work pruning saves at equal depth.

use adversarial_search::eval::ScoreEvaluation;
use adversarial_search::games::pursuit::PursuitState;
use adversarial_search::search::{
    AlphaBetaStrategy, ExpectimaxStrategy, MinimaxStrategy, SearchConfig, Strategy,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const ARENA: &str = "\
%%%%%%%%
%P..%..%
%.%...G%
%...%..%
%%%%%%%%";

fn bench_strategies(c: &mut Criterion) {
    let state = PursuitState::parse(ARENA);
    let config = SearchConfig::new(2).unwrap();

    c.bench_function("minimax_depth2", |b| {
        let mut strategy = MinimaxStrategy::new(config, ScoreEvaluation).unwrap();
        b.iter(|| strategy.decide(black_box(&state)).unwrap())
    });

    c.bench_function("alphabeta_depth2", |b| {
        let mut strategy = AlphaBetaStrategy::new(config, ScoreEvaluation).unwrap();
        b.iter(|| strategy.decide(black_box(&state)).unwrap())
    });

    c.bench_function("expectimax_depth2", |b| {
        let mut strategy = ExpectimaxStrategy::new(config, ScoreEvaluation).unwrap();
        b.iter(|| strategy.decide(black_box(&state)).unwrap())
    });
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
