//! Move resolution - the movement rules
//!
//! Resolving a move happens in two phases:
//!
//! 1. **Leaving-cell effect** on the tile the player currently stands on:
//!    - *Drop*: the pressed direction key is taken from the player and stored
//!      in the tile, which becomes a pick-up tile with an arrow marker.
//!    - *PickUp*: the stored key goes back to the player and the tile returns
//!      to an empty drop tile.
//! 2. **Step evaluation** on the neighbouring cell in the pressed direction:
//!    - *Wall*: no movement.
//!    - *Slide*: two cells, or one if the cell after the slide is a wall.
//!      Slides look exactly [`SLIDE_REACH`] cells ahead and never chain.
//!    - *Portal*/*End*: one cell, and the level is complete if the held keys
//!      equal the level goal.
//!    - anything else: one cell.
//!
//! Phase 1 applies even when phase 2 ends up blocked by a wall.

use tracing::{debug, trace};

use crate::completion::is_satisfied;
use crate::error::TileMarkerError;
use crate::grid::TileGrid;
use crate::inventory::{Inventory, LevelGoal};
use crate::types::{Direction, Position, TileKind, SLIDE_REACH};

/// Key exchange performed by the tile the player left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEffect {
    /// The pressed key was stored in the drop tile at `at`
    Dropped {
        at: Position,
        key: Direction,
        /// Whether the player actually held the key before dropping it
        was_held: bool,
    },
    /// The key stored at `at` was returned to the player
    PickedUp {
        at: Position,
        key: Direction,
        /// Whether the player did not already hold the key
        newly_held: bool,
    },
}

/// Result of resolving one directional move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Position,
    pub direction: Direction,
    pub new_position: Position,
    /// Cells travelled: 0 (blocked), 1, or 2 (slide)
    pub steps: i32,
    pub effect: Option<CellEffect>,
    pub level_complete: bool,
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        self.steps > 0
    }
}

/// Resolve a move from `from` in `direction`, mutating grid and inventory.
///
/// Either the whole outcome is applied or an error is returned before any
/// mutation.
pub fn resolve_move(
    grid: &mut TileGrid,
    inventory: &mut Inventory,
    from: Position,
    direction: Direction,
    goal: &LevelGoal,
) -> Result<MoveOutcome, TileMarkerError> {
    let effect = apply_leaving_effect(grid, inventory, from, direction)?;

    let next = from.offset(direction, 1);
    let next_kind = grid.kind_at(next);
    let mut level_complete = false;

    let steps = match next_kind {
        TileKind::Wall => 0,
        TileKind::Slide => {
            if grid.kind_at(from.offset(direction, SLIDE_REACH)) == TileKind::Wall {
                1
            } else {
                SLIDE_REACH
            }
        }
        kind if kind.is_exit() => {
            level_complete = is_satisfied(goal, inventory);
            trace!(
                at = %next,
                held = ?inventory.as_set(),
                required = ?goal.keys(),
                level_complete,
                "exit_tile_checked"
            );
            1
        }
        _ => 1,
    };

    let new_position = from.offset(direction, steps);
    debug!(
        from = %from,
        direction = %direction,
        to = %new_position,
        steps,
        level_complete,
        "move_resolved"
    );

    Ok(MoveOutcome {
        from,
        direction,
        new_position,
        steps,
        effect,
        level_complete,
    })
}

fn apply_leaving_effect(
    grid: &mut TileGrid,
    inventory: &mut Inventory,
    at: Position,
    direction: Direction,
) -> Result<Option<CellEffect>, TileMarkerError> {
    match grid.kind_at(at) {
        TileKind::Drop => {
            grid.set_drop(at, direction)?;
            let was_held = inventory.remove(direction);
            Ok(Some(CellEffect::Dropped {
                at,
                key: direction,
                was_held,
            }))
        }
        TileKind::PickUp => {
            let key = grid.clear_pickup(at)?;
            let newly_held = inventory.add(key);
            Ok(Some(CellEffect::PickedUp {
                at,
                key,
                newly_held,
            }))
        }
        _ => Ok(None),
    }
}

/// Undo a leaving-cell effect whose move is not going to be committed
///
/// Restores the tile, its marker and the inventory to their state before
/// [`resolve_move`] ran.
pub fn revert_leaving_effect(
    grid: &mut TileGrid,
    inventory: &mut Inventory,
    effect: CellEffect,
) -> Result<(), TileMarkerError> {
    match effect {
        CellEffect::Dropped { at, key, was_held } => {
            grid.clear_pickup(at)?;
            if was_held {
                inventory.add(key);
            }
        }
        CellEffect::PickedUp {
            at,
            key,
            newly_held,
        } => {
            grid.set_drop(at, key)?;
            if newly_held {
                inventory.remove(key);
            }
        }
    }
    trace!(effect = ?effect, "leaving_effect_reverted");
    Ok(())
}
