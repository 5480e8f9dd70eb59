use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameConfig, GameSnapshot, GameState, LineClearPolicy};
use blockfall::types::Color;

fn started() -> GameState {
    let mut state = GameState::new(GameConfig::new().with_seed(12345)).unwrap();
    state.start();
    state
}

fn full_bottom_rows() -> Board {
    let mut board = Board::default();
    let color = Color::new(1);
    for y in 16..20 {
        for x in 0..10 {
            board.set(x, y, color);
        }
    }
    board
}

fn bench_tick(c: &mut Criterion) {
    let mut state = started();

    c.bench_function("tick_gravity", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.restart();
            }
            state.tick_gravity();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    for (name, policy) in [
        ("clear_4_lines_compacting", LineClearPolicy::Compacting),
        ("clear_4_lines_legacy", LineClearPolicy::Legacy),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut board = full_bottom_rows();
                black_box(board.clear_lines(policy));
            })
        });
    }
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = started();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.restart();
            }
            state.hard_drop();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = started();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            state.move_left();
            state.move_right();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = started();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = started();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
