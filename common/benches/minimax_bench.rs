use criterion::{Criterion, criterion_group, criterion_main};

use common::game::{Board, BotInput, GameState, Mark, calculate_minimax_move};

fn bench_single_move_empty_board() {
    let input = BotInput::new(Board::new(), Mark::X);
    calculate_minimax_move(&input);
}

fn bench_single_move_mid_game() {
    let mut board = Board::new();
    for (index, mark) in [(4, Mark::X), (0, Mark::O), (8, Mark::X), (2, Mark::O)] {
        board.place(index, mark);
    }

    let input = BotInput::new(board, Mark::X);
    calculate_minimax_move(&input);
}

fn bench_full_self_play_game() {
    let mut state = GameState::new();
    while !state.is_over() {
        let input = BotInput::new(*state.board(), state.current_mark());
        let index = calculate_minimax_move(&input).expect("live board has a move");
        state
            .place_mark(index, state.current_mark())
            .expect("minimax only proposes legal moves");
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("full_self_play_game", |b| {
        b.iter(bench_full_self_play_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
