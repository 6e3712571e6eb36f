//! Held direction keys and level goals

use crate::types::{Direction, DirectionSet};

/// The set of direction keys the player currently holds
///
/// `add` and `remove` are idempotent and report whether anything changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Inventory {
    keys: DirectionSet,
}

impl Inventory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// All four keys held
    pub fn full() -> Self {
        Self::from_set(DirectionSet::all())
    }

    pub fn from_set(keys: DirectionSet) -> Self {
        Self { keys }
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.keys.has(direction)
    }

    pub fn add(&mut self, direction: Direction) -> bool {
        let changed = !self.contains(direction);
        self.keys.insert(DirectionSet::of(direction));
        changed
    }

    pub fn remove(&mut self, direction: Direction) -> bool {
        let changed = self.contains(direction);
        self.keys.remove(DirectionSet::of(direction));
        changed
    }

    pub fn as_set(&self) -> DirectionSet {
        self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.bits().count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Held keys in priority order
    pub fn iter(&self) -> impl Iterator<Item = Direction> {
        self.keys.directions()
    }
}

/// Keys that must be held, exactly, to finish a level on an exit tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LevelGoal {
    keys: DirectionSet,
}

impl LevelGoal {
    pub fn new(keys: DirectionSet) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> DirectionSet {
        self.keys
    }
}

impl FromIterator<Direction> for LevelGoal {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut inv = Inventory::empty();
        assert!(inv.add(Direction::Up));
        let snapshot = inv;
        assert!(!inv.add(Direction::Up));
        assert_eq!(inv, snapshot);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut inv = Inventory::empty();
        assert!(!inv.remove(Direction::Left));
        assert_eq!(inv, Inventory::empty());

        let mut inv = Inventory::full();
        assert!(inv.remove(Direction::Left));
        assert!(!inv.remove(Direction::Left));
        assert_eq!(inv.len(), 3);
        assert!(!inv.contains(Direction::Left));
    }

    #[test]
    fn test_iter_priority_order() {
        let inv = Inventory::from_set(DirectionSet::RIGHT | DirectionSet::UP);
        let keys: Vec<_> = inv.iter().collect();
        assert_eq!(keys, vec![Direction::Up, Direction::Right]);
    }

    #[test]
    fn test_goal_collects_duplicates_once() {
        let goal: LevelGoal = [Direction::Up, Direction::Down, Direction::Down].into_iter().collect();
        assert_eq!(goal.keys(), DirectionSet::UP | DirectionSet::DOWN);
        assert_eq!(LevelGoal::default().keys(), DirectionSet::empty());
    }
}
