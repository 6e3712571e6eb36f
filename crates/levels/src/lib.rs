//! JSON level packs for the tile-keys puzzle.
//!
//! A pack is a single JSON document holding an ordered list of levels. Each
//! level is an ASCII grid plus the keys that must be held on its exit:
//!
//! ```json
//! {
//!   "levels": [
//!     {
//!       "name": "first steps",
//!       "rows": ["#####", "#S.E#", "#####"],
//!       "goal": ["up", "down", "left", "right"]
//!     }
//!   ]
//! }
//! ```
//!
//! | Glyph | Tile |
//! |-------|------|
//! | `.` or space | Empty |
//! | `#` | Wall |
//! | `~` | Slide |
//! | `D` | Drop |
//! | `P` | PickUp (needs an entry in `pickups`) |
//! | `O` | Portal |
//! | `S` | Start |
//! | `E` | End |
//!
//! Keys may be written by name (`"up"`) or by their numeric code (`1`-`4`).

pub mod format;
pub mod loader;

pub use format::{KeyRef, LevelFile, LevelPackFile, PickupFile};
pub use loader::{build_level, build_level_set, load_level_pack, parse_level_pack, LevelPackError};
