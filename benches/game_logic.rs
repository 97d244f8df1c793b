use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pacman::core::{resolve, Level, Session, SimpleRng};
use tui_pacman::term::GameView;
use tui_pacman::types::{Direction, InputEvent, Position};

const MAZE: &str = include_str!("../maze01.txt");

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_maze01", |b| {
        b.iter(|| Level::parse(black_box(MAZE)).unwrap())
    });
}

fn bench_resolve(c: &mut Criterion) {
    let grid = Level::parse(MAZE).unwrap().grid;
    c.bench_function("resolve_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(resolve(black_box(Position::new(11, 0)), dir, &grid));
            }
        })
    });
}

fn bench_tick_phases(c: &mut Criterion) {
    let mut session = Session::from_map(MAZE).unwrap();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            session.apply_input(black_box(Some(InputEvent::Move(Direction::Left))));
            session.move_ghosts(&mut rng);
            for _ in session.collisions() {
                if session.register_hit() {
                    session.respawn_player();
                }
            }
            black_box(session.check_end());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = Session::from_map(MAZE).unwrap();
    let view = GameView::default();
    let mut fb = view.render(&session);

    c.bench_function("render_into", |b| {
        b.iter(|| view.render_into(black_box(&session), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_resolve,
    bench_tick_phases,
    bench_render
);
criterion_main!(benches);
