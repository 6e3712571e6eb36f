//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the movement rules of the tile puzzle and the session
//! state machine that drives them. It has **no dependencies** on rendering,
//! input devices, files or networking, which makes it:
//!
//! - **Deterministic**: the same level and the same input always produce
//!   the same positions, keys and events
//! - **Testable**: every rule can be exercised from plain ASCII grids
//! - **Portable**: any front end (terminal, GUI, headless replay) can drive it
//!
//! # Module Structure
//!
//! - [`grid`]: the tile grid with drop/pick-up markers
//! - [`inventory`]: held keys and level goals
//! - [`resolver`]: single-move resolution (slides, drops, pick-ups, exits)
//! - [`completion`]: the exact-match goal check
//! - [`level`]: level definitions and the [`LevelProvider`] seam
//! - [`session`]: the tick-driven session with cooldown and level advance
//! - [`events`]: notifications for the presentation layer
//!
//! # Game Rules
//!
//! - The player moves one cell per key press, but only in directions whose
//!   key they hold
//! - **Walls** block movement
//! - **Slides** carry the player two cells, or one if a wall follows the slide
//! - Leaving a **Drop** tile stores the pressed key in it; leaving the
//!   resulting **PickUp** tile gives the key back
//! - Stepping onto an **End** or **Portal** tile completes the level when the
//!   held keys exactly equal the level goal
//!
//! # Example
//!
//! ```
//! use tile_keys_core::{GameSession, Level, LevelGoal, LevelSet, SessionConfig, TileGrid};
//! use tile_keys_core::types::{DirectionSet, Position, TICK_MS};
//!
//! let grid = TileGrid::from_ascii(&["#####", "#S~.E", "#####"]).unwrap();
//! let goal = LevelGoal::new(DirectionSet::all());
//! let levels = LevelSet::new(vec![Level::new(grid, goal)]);
//!
//! let mut session = GameSession::new(levels, SessionConfig::default()).unwrap();
//! session.tick(TICK_MS, DirectionSet::RIGHT).unwrap();
//!
//! // The slide carried the player two cells.
//! assert_eq!(session.position(), Position::new(3, 1));
//! ```

pub mod completion;
pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod inventory;
pub mod level;
pub mod resolver;
pub mod session;
pub mod snapshot;

pub use tile_keys_types as types;

// Re-export commonly used types for convenience
pub use completion::is_satisfied;
pub use config::SessionConfig;
pub use error::{ConfigError, SessionError, TileMarkerError};
pub use events::{dispatch_all, SessionEvent, SessionObserver, TickEvents, MAX_EVENTS_PER_TICK};
pub use grid::{Cell, TileGrid};
pub use inventory::{Inventory, LevelGoal};
pub use level::{Level, LevelProvider, LevelSet};
pub use resolver::{resolve_move, revert_leaving_effect, CellEffect, MoveOutcome};
pub use session::{GameSession, MotionState, PlayerState};
pub use snapshot::SessionSnapshot;
