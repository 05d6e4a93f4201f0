use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match3_engine::core::{Board, GameState};
use match3_engine::types::{BoardConfig, Position};

fn bench_initialize(c: &mut Criterion) {
    c.bench_function("board_initialize", |b| {
        let mut board = Board::new(BoardConfig::default(), 12345);
        b.iter(|| {
            board.initialize();
        })
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let mut board = Board::new(BoardConfig::default(), 12345);
    board.initialize();

    c.bench_function("find_matches", |b| {
        b.iter(|| {
            black_box(board.find_matches());
        })
    });
}

fn bench_has_any_legal_move(c: &mut Criterion) {
    let mut board = Board::new(BoardConfig::default(), 12345);
    board.initialize();

    c.bench_function("has_any_legal_move", |b| {
        b.iter(|| {
            black_box(board.has_any_legal_move());
        })
    });
}

fn bench_full_turn(c: &mut Criterion) {
    c.bench_function("swap_and_resolve", |b| {
        let mut game = GameState::new(BoardConfig::default(), 12345);
        b.iter(|| {
            // Probe for a legal swap, commit it, and resolve the cascade
            let mut probe = game.board().clone();
            let n = probe.size();
            'scan: for row in 0..n {
                for col in 0..n {
                    let here = Position::new(row, col);
                    let right = Position::new(row, col + 1);
                    let below = Position::new(row + 1, col);
                    if col + 1 < n && probe.would_create_match(here, right) {
                        game.attempt_swap(here, right);
                        break 'scan;
                    }
                    if row + 1 < n && probe.would_create_match(here, below) {
                        game.attempt_swap(here, below);
                        break 'scan;
                    }
                }
            }
            game.resolve();
            black_box(game.drain_events());
        })
    });
}

criterion_group!(
    benches,
    bench_initialize,
    bench_find_matches,
    bench_has_any_legal_move,
    bench_full_turn
);
criterion_main!(benches);
