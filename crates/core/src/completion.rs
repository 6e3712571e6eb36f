//! Level completion check

use crate::inventory::{Inventory, LevelGoal};

/// True iff the held keys are exactly the required keys.
///
/// Holding extra keys fails the check just like missing one does.
pub fn is_satisfied(required: &LevelGoal, held: &Inventory) -> bool {
    required.keys() == held.as_set()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, DirectionSet};

    #[test]
    fn test_exact_match_required() {
        let goal: LevelGoal = [Direction::Up, Direction::Down].into_iter().collect();

        let exact = Inventory::from_set(DirectionSet::UP | DirectionSet::DOWN);
        assert!(is_satisfied(&goal, &exact));

        let superset = Inventory::from_set(DirectionSet::UP | DirectionSet::DOWN | DirectionSet::LEFT);
        assert!(!is_satisfied(&goal, &superset));

        let subset = Inventory::from_set(DirectionSet::UP);
        assert!(!is_satisfied(&goal, &subset));
    }

    #[test]
    fn test_empty_goal() {
        let goal = LevelGoal::default();
        assert!(is_satisfied(&goal, &Inventory::empty()));
        assert!(!is_satisfied(&goal, &Inventory::full()));
    }
}
