use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_keys::core::{resolve_move, GameSession, Inventory, Level, LevelGoal, LevelSet, SessionConfig, TileGrid};
use tile_keys::types::{Direction, DirectionSet, Position, TICK_MS};

const ROOM: [&str; 5] = ["#######", "#.~...#", "#..S..#", "#..D..#", "#######"];

fn room_session(cooldown_ms: u32) -> GameSession<LevelSet> {
    let grid = TileGrid::from_ascii(&ROOM).unwrap();
    let levels = LevelSet::new(vec![Level::new(grid, LevelGoal::new(DirectionSet::empty()))]);
    GameSession::new(levels, SessionConfig::default().with_move_cooldown_ms(cooldown_ms)).unwrap()
}

fn bench_idle_tick(c: &mut Criterion) {
    let mut session = room_session(200);

    c.bench_function("session_tick_idle_16ms", |b| {
        b.iter(|| {
            let _ = session.tick(black_box(TICK_MS), DirectionSet::empty());
        })
    });
}

fn bench_moving_tick(c: &mut Criterion) {
    let mut session = room_session(0);

    c.bench_function("session_tick_step", |b| {
        b.iter(|| {
            let _ = session.tick(TICK_MS, black_box(DirectionSet::LEFT));
            let _ = session.tick(TICK_MS, black_box(DirectionSet::RIGHT));
        })
    });
}

fn bench_resolve_slide(c: &mut Criterion) {
    let mut grid = TileGrid::from_ascii(&ROOM).unwrap();
    let goal = LevelGoal::new(DirectionSet::all());

    c.bench_function("resolve_move_slide", |b| {
        b.iter(|| {
            let mut inventory = Inventory::full();
            resolve_move(
                &mut grid,
                &mut inventory,
                black_box(Position::new(1, 1)),
                Direction::Right,
                &goal,
            )
        })
    });
}

fn bench_resolve_drop_pickup(c: &mut Criterion) {
    let mut grid = TileGrid::from_ascii(&ROOM).unwrap();
    let goal = LevelGoal::new(DirectionSet::all());
    let at = Position::new(3, 3);

    c.bench_function("resolve_move_drop_then_pickup", |b| {
        b.iter(|| {
            let mut inventory = Inventory::full();
            let _ = resolve_move(&mut grid, &mut inventory, at, Direction::Up, &goal);
            let _ = resolve_move(&mut grid, &mut inventory, at, Direction::Up, &goal);
        })
    });
}

criterion_group!(
    benches,
    bench_idle_tick,
    bench_moving_tick,
    bench_resolve_slide,
    bench_resolve_drop_pickup
);
criterion_main!(benches);
