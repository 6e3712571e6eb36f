//! Level definitions and the level provider seam
//!
//! A [`Level`] is static configuration: its grid as authored, the goal of its
//! exit tiles, an optional declared start and the keys the player starts
//! with. A [`LevelProvider`] hands out fresh copies by [`LevelId`], so
//! (re)entering a level always starts from the authored grid.

use tracing::debug;

use crate::error::ConfigError;
use crate::grid::TileGrid;
use crate::inventory::LevelGoal;
use crate::types::{DirectionSet, LevelId, Position, TileKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub name: Option<String>,
    pub grid: TileGrid,
    pub goal: LevelGoal,
    /// Start position recorded in level metadata, if any
    pub declared_start: Option<Position>,
    /// Keys held on level entry. Defaults to all four.
    pub starting_keys: DirectionSet,
}

impl Level {
    pub fn new(grid: TileGrid, goal: LevelGoal) -> Self {
        Self {
            name: None,
            grid,
            goal,
            declared_start: None,
            starting_keys: DirectionSet::all(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_declared_start(mut self, start: Position) -> Self {
        self.declared_start = Some(start);
        self
    }

    pub fn with_starting_keys(mut self, keys: DirectionSet) -> Self {
        self.starting_keys = keys;
        self
    }

    /// The validated player spawn
    ///
    /// The grid must hold exactly one start tile, and a declared start must
    /// point at it.
    pub fn start_position(&self) -> Result<Position, ConfigError> {
        let start = self.grid.start_position()?;
        if let Some(declared) = self.declared_start {
            let found = self.grid.kind_at(declared);
            if found != TileKind::Start {
                return Err(ConfigError::StartMismatch { declared, found });
            }
        }
        Ok(start)
    }
}

/// Source of level data for a session
pub trait LevelProvider {
    fn level_count(&self) -> usize;

    /// A fresh copy of level `id`
    fn load(&self, id: LevelId) -> Result<Level, ConfigError>;

    /// Keys required on the exit tiles of level `id`
    fn end_requirement(&self, id: LevelId) -> Result<LevelGoal, ConfigError> {
        self.load(id).map(|level| level.goal)
    }

    fn has_level(&self, id: LevelId) -> bool {
        id.index() < self.level_count()
    }
}

/// In-memory level provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    pub fn push(&mut self, level: Level) -> LevelId {
        self.levels.push(level);
        LevelId((self.levels.len() - 1) as u32)
    }

    pub fn get(&self, id: LevelId) -> Option<&Level> {
        self.levels.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (LevelId, &Level)> {
        self.levels
            .iter()
            .enumerate()
            .map(|(idx, level)| (LevelId(idx as u32), level))
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl LevelProvider for LevelSet {
    fn level_count(&self) -> usize {
        self.levels.len()
    }

    fn load(&self, id: LevelId) -> Result<Level, ConfigError> {
        let level = self.get(id).ok_or(ConfigError::UnknownLevel(id))?;
        debug!(level = %id, name = ?level.name, "level_loaded");
        Ok(level.clone())
    }

    fn end_requirement(&self, id: LevelId) -> Result<LevelGoal, ConfigError> {
        self.get(id)
            .map(|level| level.goal)
            .ok_or(ConfigError::UnknownLevel(id))
    }
}

impl FromIterator<Level> for LevelSet {
    fn from_iter<I: IntoIterator<Item = Level>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
