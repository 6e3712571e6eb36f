use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tile_keys::core::{GameSession, Level, LevelGoal, LevelSet, SessionConfig, SessionSnapshot, TileGrid};
use tile_keys::types::{DirectionSet, TICK_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn session_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let grid = TileGrid::from_ascii(&["#######", "#.~...#", "#..S..#", "#.....#", "#######"]).unwrap();
    let levels = LevelSet::new(vec![Level::new(grid, LevelGoal::new(DirectionSet::empty()))]);
    let mut session = GameSession::new(levels, SessionConfig::default()).unwrap();
    let mut snapshot = SessionSnapshot::default();
    snapshot.markers.reserve(8);

    let allocs = with_alloc_counting(|| {
        // Idle ticks and cooldown ticks.
        for _ in 0..200 {
            let _ = session.tick(TICK_MS, DirectionSet::empty());
        }

        // Walking around, including blocked moves and slides.
        for _ in 0..50 {
            for pressed in [DirectionSet::LEFT, DirectionSet::UP, DirectionSet::RIGHT, DirectionSet::DOWN] {
                let _ = session.tick(TICK_MS, pressed);
                while session.is_moving() {
                    let _ = session.tick(TICK_MS, DirectionSet::empty());
                }
            }
            session.snapshot_into(&mut snapshot);
        }
    });

    assert!(allocs == 0);
}
