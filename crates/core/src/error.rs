//! Error taxonomy for level data and movement resolution.
//!
//! Both families describe level-data integrity problems, never player
//! mistakes: walking into a wall or pressing a key that is not held is
//! ordinary control flow and simply yields no movement.

use thiserror::Error;

use crate::types::{LevelId, Position, TileKind};

/// Malformed level data. Fatal to loading that level, never to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("level has no start tile")]
    MissingStart,

    #[error("level has more than one start tile: {first} and {second}")]
    DuplicateStart { first: Position, second: Position },

    #[error("declared start {declared} is a {found:?} tile, not the start tile")]
    StartMismatch { declared: Position, found: TileKind },

    #[error("level {0} has no end goal")]
    MissingGoal(LevelId),

    #[error("invalid key code {0}, expected 1-4")]
    InvalidKeyCode(i64),

    #[error("unknown key name {0:?}")]
    UnknownKeyName(String),

    #[error("level {0} does not exist")]
    UnknownLevel(LevelId),

    #[error("level grid has no rows")]
    EmptyGrid,

    #[error("grid row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile glyph {glyph:?} at {at}")]
    UnknownGlyph { glyph: char, at: Position },

    #[error("pick-up tile at {0} has no stored key")]
    PickUpWithoutKey(Position),

    #[error("invalid tile setup: {0}")]
    Tile(#[from] TileMarkerError),
}

/// Inconsistent drop/pick-up marker state.
///
/// The step that hit it is refused and the player stays where they are.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileMarkerError {
    #[error("pick-up at {0} has no arrow marker")]
    MissingMarker(Position),

    #[error("pick-up at {0} holds no key")]
    MissingKey(Position),

    #[error("arrow marker already placed at {0}")]
    MarkerExists(Position),

    #[error("tile at {at} is {found:?}, expected {expected:?}")]
    WrongKind {
        at: Position,
        expected: TileKind,
        found: TileKind,
    },

    #[error("position {0} is outside the grid")]
    OutOfBounds(Position),
}

/// Errors surfaced by a running [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("level load failed: {0}")]
    Config(#[from] ConfigError),

    #[error("move refused: {0}")]
    Marker(#[from] TileMarkerError),
}
