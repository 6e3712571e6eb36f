//! Session configuration

use crate::types::{LevelId, DEFAULT_MOVE_COOLDOWN_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long the session stays Moving after a successful move.
    ///
    /// Zero disables the cooldown entirely.
    pub move_cooldown_ms: u32,
    /// Level the session starts on
    pub first_level: LevelId,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self {
            move_cooldown_ms: DEFAULT_MOVE_COOLDOWN_MS,
            first_level: LevelId(0),
        }
    }

    pub fn with_move_cooldown_ms(mut self, cooldown_ms: u32) -> Self {
        self.move_cooldown_ms = cooldown_ms;
        self
    }

    pub fn with_first_level(mut self, level: LevelId) -> Self {
        self.first_level = level;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
