//! Key mapping from terminal events to movement directions.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a movement direction.
pub fn direction_for_key(key: KeyEvent) -> Option<Direction> {
    direction_for_code(key.code)
}

pub fn direction_for_code(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Char(c) => direction_for_char(c),
        _ => None,
    }
}

/// Same mapping for text input: WASD and hjkl, either case.
pub fn direction_for_char(c: char) -> Option<Direction> {
    match c {
        'w' | 'W' | 'k' | 'K' => Some(Direction::Up),
        's' | 'S' | 'j' | 'J' => Some(Direction::Down),
        'a' | 'A' | 'h' | 'H' => Some(Direction::Left),
        'd' | 'D' | 'l' | 'L' => Some(Direction::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should restart the current level.
pub fn should_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
