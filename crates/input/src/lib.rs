//! Terminal input module (session-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::Direction`]s and provides a press tracker that
//! turns a raw key stream into the "just pressed" sets a session consumes,
//! including on terminals without key-release events.

pub mod handler;
pub mod map;

pub use tile_keys_types as types;

pub use handler::PressTracker;
pub use map::{direction_for_char, direction_for_code, direction_for_key, should_quit, should_restart};
