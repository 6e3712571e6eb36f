//! Tile Keys (workspace facade crate).
//!
//! This package exposes the `tile_keys::{core,input,levels,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tile_keys_core as core;
pub use tile_keys_input as input;
pub use tile_keys_levels as levels;
pub use tile_keys_types as types;
