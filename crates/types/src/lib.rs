//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, usable from the movement core, the
//! level loader and any presentation layer alike.
//!
//! # Coordinates
//!
//! Grids are indexed by integer `(x, y)` positions, `x` growing to the right
//! and `y` growing downwards. Positions are not bounded: a grid answers
//! queries outside its extent with an empty tile.
//!
//! # Direction Keys
//!
//! | Direction | Vector | Metadata code |
//! |-----------|--------|---------------|
//! | Up        | (0, -1) | 1 |
//! | Down      | (0, 1)  | 2 |
//! | Left      | (-1, 0) | 3 |
//! | Right     | (1, 0)  | 4 |
//!
//! When several keys are pressed in the same tick they are considered in the
//! order of [`Direction::ALL`]: Up, Down, Left, Right.
//!
//! # Tile Glyphs
//!
//! | Glyph | Tile | Code |
//! |-------|------|------|
//! | `.`   | Empty  | 0 |
//! | `#`   | Wall   | 1 |
//! | `~`   | Slide  | 2 |
//! | `D`   | Drop   | 3 |
//! | `P`   | PickUp | 4 |
//! | `O`   | Portal | 5 |
//! | `S`   | Start  | 6 |
//! | `E`   | End    | 7 |
//!
//! # Examples
//!
//! ```
//! use tile_keys_types::{Direction, DirectionSet, Position, TileKind};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir.vector(), (0, -1));
//!
//! let pos = Position::new(2, 2).offset(dir, 2);
//! assert_eq!(pos, Position::new(2, 0));
//!
//! let held: DirectionSet = [Direction::Left, Direction::Down].into_iter().collect();
//! assert_eq!(held.first_by_priority(), Some(Direction::Down));
//!
//! assert_eq!(TileKind::from_glyph('~'), Some(TileKind::Slide));
//! ```

use std::fmt;

use bitflags::bitflags;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration of the Moving state after a successful move
pub const DEFAULT_MOVE_COOLDOWN_MS: u32 = 200;

/// How far a slide tile can carry the player, in cells.
///
/// Slides look exactly this far ahead and never chain.
pub const SLIDE_REACH: i32 = 2;

/// One of the four direction keys
///
/// A direction is both a movement intent and a possessable key: the player
/// can only move in directions whose key they currently hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in input priority order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)` for this direction
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_keys_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("Up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("none"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Decode a level-metadata key code (Up=1 .. Right=4)
    ///
    /// Any other value, including the legacy "no direction" sentinel `-1`,
    /// is not a direction.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Direction::Up),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            4 => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Down => 2,
            Direction::Left => 3,
            Direction::Right => 4,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// A set of direction keys.
    ///
    /// Used for the player's held keys, a level's goal and the keys pressed
    /// during one tick. Each key is either present or absent.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct DirectionSet: u8 {
        const UP    = 1 << 0;
        const DOWN  = 1 << 1;
        const LEFT  = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl DirectionSet {
    /// Set holding a single direction
    pub fn of(direction: Direction) -> Self {
        match direction {
            Direction::Up => DirectionSet::UP,
            Direction::Down => DirectionSet::DOWN,
            Direction::Left => DirectionSet::LEFT,
            Direction::Right => DirectionSet::RIGHT,
        }
    }

    pub fn has(self, direction: Direction) -> bool {
        self.contains(Self::of(direction))
    }

    /// Iterate members in priority order (Up, Down, Left, Right)
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.has(d))
    }

    /// First member in priority order, if any
    pub fn first_by_priority(self) -> Option<Direction> {
        self.directions().next()
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        Self::of(direction)
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DirectionSet::empty(), |set, d| set | Self::of(d))
    }
}

/// The kind of a grid cell
///
/// - **Empty**: walkable floor
/// - **Wall**: blocks movement
/// - **Slide**: carries the player one extra cell unless a wall follows it
/// - **Drop**: leaving it stores the pressed direction key in the tile
/// - **PickUp**: leaving it returns the stored key to the player
/// - **Portal** / **End**: exit tiles, checked against the level goal
/// - **Start**: the player's spawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    #[default]
    Empty,
    Wall,
    Slide,
    Drop,
    PickUp,
    Portal,
    Start,
    End,
}

impl TileKind {
    pub const ALL: [TileKind; 8] = [
        TileKind::Empty,
        TileKind::Wall,
        TileKind::Slide,
        TileKind::Drop,
        TileKind::PickUp,
        TileKind::Portal,
        TileKind::Start,
        TileKind::End,
    ];

    /// Parse a tile from its ASCII level glyph
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_keys_types::TileKind;
    ///
    /// assert_eq!(TileKind::from_glyph('#'), Some(TileKind::Wall));
    /// assert_eq!(TileKind::from_glyph('S'), Some(TileKind::Start));
    /// assert_eq!(TileKind::from_glyph('x'), None);
    /// ```
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' | ' ' => Some(TileKind::Empty),
            '#' => Some(TileKind::Wall),
            '~' => Some(TileKind::Slide),
            'D' => Some(TileKind::Drop),
            'P' => Some(TileKind::PickUp),
            'O' => Some(TileKind::Portal),
            'S' => Some(TileKind::Start),
            'E' => Some(TileKind::End),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            TileKind::Empty => '.',
            TileKind::Wall => '#',
            TileKind::Slide => '~',
            TileKind::Drop => 'D',
            TileKind::PickUp => 'P',
            TileKind::Portal => 'O',
            TileKind::Start => 'S',
            TileKind::End => 'E',
        }
    }

    /// Decode a tile-metadata id (Empty=0 .. End=7)
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Exit tiles end the level when the goal is satisfied
    pub fn is_exit(self) -> bool {
        matches!(self, TileKind::Portal | TileKind::End)
    }
}

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position `steps` cells away in `direction`
    pub fn offset(self, direction: Direction, steps: i32) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Index of a level within a level pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LevelId(pub u32);

impl LevelId {
    pub fn next(self) -> Self {
        LevelId(self.0.wrapping_add(1))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
