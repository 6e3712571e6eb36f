//! Press tracking for terminal environments.
//!
//! The session reacts to keys that were *just* pressed. Terminals report
//! auto-repeat as a stream of press events and many never report releases,
//! so this handler debounces repeats and falls back to a timeout to decide
//! when a key has been let go.

use crossterm::event::KeyCode;

use crate::map::direction_for_code;
use crate::types::{Direction, DirectionSet};

// In terminals without key-release events, a held key is considered released
// once no press for it has arrived within this window.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Turns raw key presses into per-tick "just pressed" direction sets.
#[derive(Debug, Clone)]
pub struct PressTracker {
    held: DirectionSet,
    pressed: DirectionSet,
    since_last_press_ms: [u32; 4],
    key_release_timeout_ms: u32,
}

impl PressTracker {
    pub fn new() -> Self {
        Self {
            held: DirectionSet::empty(),
            pressed: DirectionSet::empty(),
            since_last_press_ms: [0; 4],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Keys currently considered down
    pub fn held(&self) -> DirectionSet {
        self.held
    }

    /// Record a press. Returns the direction only when the key was not already down.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Direction> {
        let direction = direction_for_code(code)?;
        self.since_last_press_ms[slot(direction)] = 0;

        if self.held.has(direction) {
            return None;
        }
        self.held |= DirectionSet::of(direction);
        self.pressed |= DirectionSet::of(direction);
        Some(direction)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(direction) = direction_for_code(code) {
            self.held.remove(DirectionSet::of(direction));
            self.since_last_press_ms[slot(direction)] = 0;
        }
    }

    /// Advance the release timers, auto-releasing stale keys.
    pub fn update(&mut self, elapsed_ms: u32) {
        for direction in self.held.directions() {
            let timer = &mut self.since_last_press_ms[slot(direction)];
            *timer = timer.saturating_add(elapsed_ms);
            if *timer > self.key_release_timeout_ms {
                self.held.remove(DirectionSet::of(direction));
                *timer = 0;
            }
        }
    }

    /// Drain the keys newly pressed since the previous call
    pub fn take_pressed(&mut self) -> DirectionSet {
        std::mem::take(&mut self.pressed)
    }

    pub fn reset(&mut self) {
        self.held = DirectionSet::empty();
        self.pressed = DirectionSet::empty();
        self.since_last_press_ms = [0; 4];
    }
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn slot(direction: Direction) -> usize {
    (direction.code() - 1) as usize
}
