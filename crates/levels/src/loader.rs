//! Level-pack loading and validation.
//!
//! Every level in a pack is converted and validated up front. A pack that
//! loads is therefore safe to hand to a session: every level has exactly one
//! start tile, a valid goal and a marker for every pre-placed pick-up.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use tile_keys_types::{Direction, DirectionSet, LevelId, Position, TileKind};
use tile_keys_core::{ConfigError, Level, LevelGoal, LevelProvider, LevelSet, TileGrid, TileMarkerError};

use crate::format::{KeyRef, LevelFile, LevelPackFile, PickupFile};

#[derive(Debug, Error)]
pub enum LevelPackError {
    #[error("failed to read level pack: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed level pack JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level pack contains no levels")]
    Empty,

    #[error("level {index}: {source}")]
    Level {
        index: usize,
        #[source]
        source: ConfigError,
    },
}

/// Read and validate a level pack from disk
pub fn load_level_pack(path: impl AsRef<Path>) -> Result<LevelSet, LevelPackError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let levels = parse_level_pack(&content)?;
    info!(path = %path.display(), levels = levels.level_count(), "level_pack_loaded");
    Ok(levels)
}

/// Parse and validate a level pack from a JSON string
pub fn parse_level_pack(json: &str) -> Result<LevelSet, LevelPackError> {
    let file: LevelPackFile = serde_json::from_str(json)?;
    build_level_set(&file)
}

pub fn build_level_set(file: &LevelPackFile) -> Result<LevelSet, LevelPackError> {
    if file.levels.is_empty() {
        return Err(LevelPackError::Empty);
    }

    file.levels
        .iter()
        .enumerate()
        .map(|(index, level)| {
            build_level(LevelId(index as u32), level)
                .map_err(|source| LevelPackError::Level { index, source })
        })
        .collect()
}

/// Convert one level description into a validated [`Level`]
pub fn build_level(id: LevelId, file: &LevelFile) -> Result<Level, ConfigError> {
    let mut grid = TileGrid::from_ascii(file.rows.as_slice())?;
    place_pickups(&mut grid, &file.pickups)?;

    let goal_refs = file.goal.as_deref().ok_or(ConfigError::MissingGoal(id))?;
    let goal = LevelGoal::new(parse_keys(goal_refs)?);

    let mut level = Level::new(grid, goal);
    if let Some(name) = &file.name {
        level = level.with_name(name.clone());
    }
    if let Some([x, y]) = file.start {
        level = level.with_declared_start(Position::new(x, y));
    }
    if let Some(keys) = &file.starting_keys {
        level = level.with_starting_keys(parse_keys(keys)?);
    }

    let start = level.start_position()?;
    debug!(
        level = %id,
        name = ?level.name,
        width = level.grid.width(),
        height = level.grid.height(),
        start = %start,
        goal = ?level.goal.keys(),
        "level_built"
    );
    Ok(level)
}

fn place_pickups(grid: &mut TileGrid, pickups: &[PickupFile]) -> Result<(), ConfigError> {
    // Pre-placed pick-ups are authored as a drop that already happened, so
    // their arrow markers exist from the start.
    for pickup in pickups {
        let at = Position::new(pickup.x, pickup.y);
        let found = grid.kind_at(at);
        if found != TileKind::PickUp {
            return Err(ConfigError::Tile(TileMarkerError::WrongKind {
                at,
                expected: TileKind::PickUp,
                found,
            }));
        }
        let key = parse_key(&pickup.key)?;
        grid.set_kind(at, TileKind::Drop)?;
        grid.set_drop(at, key)?;
    }

    let unkeyed = grid
        .positions_of(TileKind::PickUp)
        .find(|&at| grid.marker_at(at).is_none());
    match unkeyed {
        Some(at) => Err(ConfigError::PickUpWithoutKey(at)),
        None => Ok(()),
    }
}

fn parse_keys(refs: &[KeyRef]) -> Result<DirectionSet, ConfigError> {
    refs.iter().map(parse_key).collect()
}

fn parse_key(key: &KeyRef) -> Result<Direction, ConfigError> {
    match key {
        KeyRef::Code(code) => Direction::from_code(*code).ok_or(ConfigError::InvalidKeyCode(*code)),
        KeyRef::Name(name) => {
            Direction::from_str(name).ok_or_else(|| ConfigError::UnknownKeyName(name.clone()))
        }
    }
}
