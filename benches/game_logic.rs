use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{clear_lines, ghost_offset, spawn_random, ActivePiece, Grid, LcgSource, Session};
use blockfall::types::{GameIntent, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::with_seed(12345);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::empty();
            for row in 16..20 {
                for col in 0..10 {
                    grid.set(row, col, Some(PieceKind::I));
                }
            }
            black_box(clear_lines(&grid));
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut source = LcgSource::new(12345);

    c.bench_function("spawn_random", |b| {
        b.iter(|| {
            black_box(spawn_random(&mut source));
        })
    });
}

fn bench_ghost(c: &mut Criterion) {
    let grid = Grid::empty();
    let piece = ActivePiece::spawn(PieceKind::T);

    c.bench_function("ghost_offset", |b| {
        b.iter(|| {
            black_box(ghost_offset(&grid, &piece));
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = Session::with_seed(12345);

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            session.apply(GameIntent::MoveRight);
            session.apply(GameIntent::MoveLeft);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = Session::with_seed(12345);

    c.bench_function("apply_rotate", |b| {
        b.iter(|| {
            session.apply(GameIntent::Rotate);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn,
    bench_ghost,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
