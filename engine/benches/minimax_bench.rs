use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;
use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{BotDifficulty, GameStatus, Mark, TicTacToeGameState, calculate_move};

fn bench_exhaustive_opening_move() {
    let state = TicTacToeGameState::new();
    let mut rng = SessionRng::from_random();
    calculate_move(BotDifficulty::Hard, &state, Mark::X, &mut rng);
}

fn bench_exhaustive_self_play_game() {
    let mut state = TicTacToeGameState::new();
    let mut rng = SessionRng::from_random();

    while state.status == GameStatus::InProgress {
        let mark = state.current_mark;
        if let Some(cell) = calculate_move(BotDifficulty::Hard, &state, mark, &mut rng) {
            state.place_mark(cell).unwrap();
        } else {
            break;
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("opening_move", |b| b.iter(bench_exhaustive_opening_move));

    group.bench_function("self_play_game", |b| b.iter(bench_exhaustive_self_play_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
