use criterion::{Criterion, criterion_group, criterion_main};
use engine::{Board, GameSettings, SessionRng, apply_action, resolve_cascade, valid_actions};

fn bench_generate_board() {
    let settings = GameSettings::default();
    let mut rng = SessionRng::new(7);
    Board::generate(&settings, &mut rng);
}

fn bench_enumerate_actions(board: &Board) {
    valid_actions(board);
}

fn bench_play_move(board: &Board, settings: &GameSettings) {
    let action = valid_actions(board)[0];
    let swapped = apply_action(board, action);
    let mut rng = SessionRng::new(13);
    resolve_cascade(&swapped, settings, &mut rng);
}

fn cascade_bench(c: &mut Criterion) {
    let settings = GameSettings::default();
    let mut rng = SessionRng::new(7);
    let board = Board::generate(&settings, &mut rng);

    let mut group = c.benchmark_group("cascade");

    group.bench_function("generate_board", |b| b.iter(bench_generate_board));

    group.bench_function("enumerate_actions", |b| {
        b.iter(|| bench_enumerate_actions(&board))
    });

    group.bench_function("play_move", |b| b.iter(|| bench_play_move(&board, &settings)));

    group.finish();
}

criterion_group!(benches, cascade_bench);
criterion_main!(benches);
