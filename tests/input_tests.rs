//! Input tests - terminal key stream driving a session

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tile_keys::core::{GameSession, Level, LevelGoal, LevelSet, SessionConfig, TileGrid};
use tile_keys::input::{direction_for_key, should_quit, should_restart, PressTracker};
use tile_keys::types::{DirectionSet, Position, TICK_MS};

fn corridor_session() -> GameSession<LevelSet> {
    let grid = TileGrid::from_ascii(&["#######", "#S....#", "#######"]).unwrap();
    let levels = LevelSet::new(vec![Level::new(grid, LevelGoal::new(DirectionSet::all()))]);
    let config = SessionConfig::default().with_move_cooldown_ms(0);
    GameSession::new(levels, config).unwrap()
}

#[test]
fn test_held_key_moves_only_once() {
    let mut session = corridor_session();
    let mut tracker = PressTracker::new();

    // Auto-repeat delivers the same press every tick; only the first counts.
    for _ in 0..5 {
        tracker.handle_key_press(KeyCode::Right);
        tracker.update(TICK_MS);
        session.tick(TICK_MS, tracker.take_pressed()).unwrap();
    }
    assert_eq!(session.position(), Position::new(2, 1));
}

#[test]
fn test_taps_move_once_each() {
    let mut session = corridor_session();
    let mut tracker = PressTracker::new();

    for _ in 0..3 {
        tracker.handle_key_press(KeyCode::Char('d'));
        session.tick(TICK_MS, tracker.take_pressed()).unwrap();
        tracker.handle_key_release(KeyCode::Char('d'));
        session.tick(TICK_MS, tracker.take_pressed()).unwrap();
    }
    assert_eq!(session.position(), Position::new(4, 1));
}

#[test]
fn test_release_timeout_turns_repeat_into_new_press() {
    let mut session = corridor_session();
    let mut tracker = PressTracker::new().with_key_release_timeout_ms(100);

    tracker.handle_key_press(KeyCode::Right);
    session.tick(TICK_MS, tracker.take_pressed()).unwrap();

    // No release event arrives; the key is dropped after the timeout.
    for _ in 0..10 {
        tracker.update(TICK_MS);
        session.tick(TICK_MS, tracker.take_pressed()).unwrap();
    }
    tracker.handle_key_press(KeyCode::Right);
    session.tick(TICK_MS, tracker.take_pressed()).unwrap();

    assert_eq!(session.position(), Position::new(3, 1));
}

#[test]
fn test_control_keys_are_not_directions() {
    let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(should_quit(quit));
    assert!(should_restart(KeyEvent::from(KeyCode::Char('r'))));
    assert_eq!(direction_for_key(KeyEvent::from(KeyCode::Char('q'))), None);
    assert_eq!(direction_for_key(KeyEvent::from(KeyCode::Char('r'))), None);
}
