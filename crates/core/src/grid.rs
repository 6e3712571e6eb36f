//! Grid module - the level's tile map
//!
//! A rectangular grid of typed cells. Each cell has a [`TileKind`] and, for
//! drop/pick-up tiles, an optional bound key. Uses a flat row-major vector
//! for cache locality.
//!
//! The grid is total over all integer positions: reads outside the grid
//! return [`TileKind::Empty`] with no bound key and never fail.
//!
//! Arrow markers record which key is stored on a tile. They are the logical
//! side of the arrow sprites a presentation layer draws.

use std::collections::BTreeMap;

use crate::error::{ConfigError, TileMarkerError};
use crate::types::{Direction, Position, TileKind};

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub kind: TileKind,
    pub bound_key: Option<Direction>,
}

impl Cell {
    pub const fn new(kind: TileKind) -> Self {
        Self {
            kind,
            bound_key: None,
        }
    }
}

/// The level grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
    markers: BTreeMap<Position, Direction>,
}

impl TileGrid {
    /// Create a grid of empty cells
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
            markers: BTreeMap::new(),
        }
    }

    /// Build a grid from ASCII rows (see [`TileKind::from_glyph`])
    ///
    /// All rows must have the same width. Pick-up glyphs produce pick-up
    /// tiles with no key and no marker; use [`TileGrid::set_drop`] on a drop
    /// tile to author a stored key.
    pub fn from_ascii<S: AsRef<str>>(rows: &[S]) -> Result<Self, ConfigError> {
        let Some(first) = rows.first() else {
            return Err(ConfigError::EmptyGrid);
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        let mut grid = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(ConfigError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let at = Position::new(x as i32, y as i32);
                let kind = TileKind::from_glyph(glyph)
                    .ok_or(ConfigError::UnknownGlyph { glyph, at })?;
                grid.cells[y * width + x] = Cell::new(kind);
            }
        }
        Ok(grid)
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Cell at `pos`; out-of-bounds reads give an empty cell
    pub fn cell(&self, pos: Position) -> Cell {
        self.index(pos)
            .map(|idx| self.cells[idx])
            .unwrap_or_default()
    }

    pub fn kind_at(&self, pos: Position) -> TileKind {
        self.cell(pos).kind
    }

    /// Key exchanged at `pos`; only drop/pick-up tiles carry one
    pub fn bound_key_at(&self, pos: Position) -> Option<Direction> {
        let cell = self.cell(pos);
        match cell.kind {
            TileKind::Drop | TileKind::PickUp => cell.bound_key,
            _ => None,
        }
    }

    pub fn marker_at(&self, pos: Position) -> Option<Direction> {
        self.markers.get(&pos).copied()
    }

    /// All arrow markers, ordered by position
    pub fn markers(&self) -> impl Iterator<Item = (Position, Direction)> + '_ {
        self.markers.iter().map(|(&pos, &dir)| (pos, dir))
    }

    /// Overwrite the kind of a cell, clearing its bound key and marker
    pub fn set_kind(&mut self, pos: Position, kind: TileKind) -> Result<(), TileMarkerError> {
        let idx = self.index(pos).ok_or(TileMarkerError::OutOfBounds(pos))?;
        self.cells[idx] = Cell::new(kind);
        self.markers.remove(&pos);
        Ok(())
    }

    /// Store `key` in the drop tile at `pos`
    ///
    /// The tile turns into a pick-up tile bound to `key` and an arrow marker
    /// is placed on it.
    pub fn set_drop(&mut self, pos: Position, key: Direction) -> Result<(), TileMarkerError> {
        let idx = self.index(pos).ok_or(TileMarkerError::OutOfBounds(pos))?;
        let found = self.cells[idx].kind;
        if found != TileKind::Drop {
            return Err(TileMarkerError::WrongKind {
                at: pos,
                expected: TileKind::Drop,
                found,
            });
        }
        if self.markers.contains_key(&pos) {
            return Err(TileMarkerError::MarkerExists(pos));
        }

        self.cells[idx] = Cell {
            kind: TileKind::PickUp,
            bound_key: Some(key),
        };
        self.markers.insert(pos, key);
        Ok(())
    }

    /// Take the stored key back out of the pick-up tile at `pos`
    ///
    /// Every precondition is checked before anything changes. On success the
    /// tile is a plain drop tile again and its marker is gone.
    pub fn clear_pickup(&mut self, pos: Position) -> Result<Direction, TileMarkerError> {
        let idx = self.index(pos).ok_or(TileMarkerError::OutOfBounds(pos))?;
        let cell = self.cells[idx];
        if cell.kind != TileKind::PickUp {
            return Err(TileMarkerError::WrongKind {
                at: pos,
                expected: TileKind::PickUp,
                found: cell.kind,
            });
        }
        let key = cell.bound_key.ok_or(TileMarkerError::MissingKey(pos))?;
        if !self.markers.contains_key(&pos) {
            return Err(TileMarkerError::MissingMarker(pos));
        }

        self.cells[idx] = Cell::new(TileKind::Drop);
        self.markers.remove(&pos);
        Ok(key)
    }

    /// Positions of every cell of the given kind, row-major
    pub fn positions_of(&self, kind: TileKind) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| cell.kind == kind)
            .map(move |(idx, _)| Position::new((idx % width) as i32, (idx / width) as i32))
    }

    /// The unique start cell
    pub fn start_position(&self) -> Result<Position, ConfigError> {
        let mut starts = self.positions_of(TileKind::Start);
        let first = starts.next().ok_or(ConfigError::MissingStart)?;
        match starts.next() {
            Some(second) => Err(ConfigError::DuplicateStart { first, second }),
            None => Ok(first),
        }
    }

    /// Render back to ASCII rows (for logs and tests)
    pub fn to_ascii(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|cell| cell.kind.glyph()).collect())
            .collect()
    }
}
