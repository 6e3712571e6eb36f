//! Game session - orchestrates play through a level pack
//!
//! The session owns the current level's grid, the player's position and held
//! keys, and the level index. It is driven by a fixed-timestep
//! [`GameSession::tick`]:
//!
//! - **Idle**: the first pressed direction, in priority order Up, Down,
//!   Left, Right, whose key is held is resolved and applied immediately. A
//!   move that changes the position starts the cooldown (**Moving**).
//! - **Moving**: directional input is dropped until the cooldown has run
//!   out. The cooldown is presentational only; the move itself has already
//!   been applied.
//!
//! Completing a level loads the next one from the [`LevelProvider`] and
//! resets the player to its start tile. Completing the last level finishes
//! the session.

use tracing::{debug, info, trace, warn};

use crate::config::SessionConfig;
use crate::error::{ConfigError, SessionError};
use crate::events::{SessionEvent, TickEvents};
use crate::grid::TileGrid;
use crate::inventory::{Inventory, LevelGoal};
use crate::level::{Level, LevelProvider};
use crate::resolver::{resolve_move, revert_leaving_effect, CellEffect, MoveOutcome};
use crate::snapshot::SessionSnapshot;
use crate::types::{Direction, DirectionSet, LevelId, Position};

/// Movement cooldown state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Moving { cooldown_remaining_ms: u32 },
}

/// Per-level player state, rebuilt on every level entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    pub position: Position,
    pub inventory: Inventory,
    pub motion: MotionState,
}

impl PlayerState {
    pub fn spawn(position: Position, keys: DirectionSet) -> Self {
        Self {
            position,
            inventory: Inventory::from_set(keys),
            motion: MotionState::Idle,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.motion, MotionState::Moving { .. })
    }
}

#[derive(Debug, Clone)]
pub struct GameSession<P> {
    provider: P,
    config: SessionConfig,
    level_id: LevelId,
    level: Level,
    player: PlayerState,
    /// Moves that changed the player's position, across all levels
    moves: u32,
    finished: bool,
}

impl<P: LevelProvider> GameSession<P> {
    /// Start a session on `config.first_level`
    ///
    /// Fails if that level cannot be loaded or has no valid start tile.
    pub fn new(provider: P, config: SessionConfig) -> Result<Self, ConfigError> {
        let level_id = config.first_level;
        let (level, player) = enter_level(&provider, level_id)?;
        info!(level = %level_id, levels = provider.level_count(), "session_started");

        Ok(Self {
            provider,
            config,
            level_id,
            level,
            player,
            moves: 0,
            finished: false,
        })
    }

    pub fn level_id(&self) -> LevelId {
        self.level_id
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn grid(&self) -> &TileGrid {
        &self.level.grid
    }

    pub fn goal(&self) -> &LevelGoal {
        &self.level.goal
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn position(&self) -> Position {
        self.player.position
    }

    pub fn inventory(&self) -> &Inventory {
        &self.player.inventory
    }

    pub fn is_moving(&self) -> bool {
        self.player.is_moving()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Direction that `pressed` resolves to this tick, if any
    ///
    /// Only held keys count; among those the first in priority order wins.
    pub fn select_direction(&self, pressed: DirectionSet) -> Option<Direction> {
        (pressed & self.player.inventory.as_set()).first_by_priority()
    }

    /// Main session tick - count down the cooldown, then handle input
    ///
    /// `pressed` holds the keys newly pressed since the previous tick.
    pub fn tick(&mut self, elapsed_ms: u32, pressed: DirectionSet) -> Result<TickEvents, SessionError> {
        self.advance_cooldown(elapsed_ms);

        if self.finished || self.player.is_moving() {
            if !pressed.is_empty() {
                trace!(pressed = ?pressed, motion = ?self.player.motion, "input_ignored");
            }
            return Ok(TickEvents::new());
        }

        match self.select_direction(pressed) {
            Some(direction) => self.try_move(direction),
            None => Ok(TickEvents::new()),
        }
    }

    /// Resolve and apply a single move, ignoring the cooldown
    ///
    /// The key for `direction` must be held; otherwise nothing happens. On a
    /// marker error nothing changes and the error is returned.
    pub fn try_move(&mut self, direction: Direction) -> Result<TickEvents, SessionError> {
        let mut events = TickEvents::new();
        if self.finished || !self.player.inventory.contains(direction) {
            return Ok(events);
        }

        let outcome = resolve_move(
            &mut self.level.grid,
            &mut self.player.inventory,
            self.player.position,
            direction,
            &self.level.goal,
        )
        .map_err(|err| {
            warn!(
                error = %err,
                level = %self.level_id,
                at = %self.player.position,
                direction = %direction,
                "move_refused"
            );
            err
        })?;

        // The next level is loaded before anything is committed, so a broken
        // level leaves this one exactly as it was.
        let transition = if outcome.level_complete {
            match self.prepare_transition() {
                Ok(transition) => Some(transition),
                Err(err) => {
                    if let Some(effect) = outcome.effect {
                        revert_leaving_effect(&mut self.level.grid, &mut self.player.inventory, effect)?;
                    }
                    warn!(error = %err, level = %self.level_id, "level_advance_failed");
                    return Err(err.into());
                }
            }
        } else {
            None
        };

        self.apply_outcome(&outcome, &mut events);

        if let Some(transition) = transition {
            self.complete_level(transition, &mut events);
        }

        Ok(events)
    }

    /// Reload the current level from the provider and respawn the player
    pub fn restart_level(&mut self) -> Result<(), ConfigError> {
        let (level, player) = enter_level(&self.provider, self.level_id)?;
        self.level = level;
        self.player = player;
        self.finished = false;
        debug!(level = %self.level_id, "level_restarted");
        Ok(())
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.level_id = self.level_id;
        out.position = self.player.position;
        out.held = self.player.inventory.as_set();
        out.required = self.level.goal.keys();
        (out.moving, out.cooldown_ms) = match self.player.motion {
            MotionState::Idle => (false, 0),
            MotionState::Moving {
                cooldown_remaining_ms,
            } => (true, cooldown_remaining_ms),
        };
        out.finished = self.finished;
        out.moves = self.moves;
        out.markers.clear();
        out.markers.extend(self.level.grid.markers());
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn advance_cooldown(&mut self, elapsed_ms: u32) {
        if let MotionState::Moving {
            cooldown_remaining_ms,
        } = self.player.motion
        {
            let remaining = cooldown_remaining_ms.saturating_sub(elapsed_ms);
            self.player.motion = if remaining == 0 {
                MotionState::Idle
            } else {
                MotionState::Moving {
                    cooldown_remaining_ms: remaining,
                }
            };
        }
    }

    fn apply_outcome(&mut self, outcome: &MoveOutcome, events: &mut TickEvents) {
        match outcome.effect {
            Some(CellEffect::Dropped { at, key, was_held }) => {
                events.push(SessionEvent::ArrowPlaced { at, direction: key });
                if was_held {
                    events.push(SessionEvent::KeyDisabled(key));
                }
            }
            Some(CellEffect::PickedUp {
                at,
                key,
                newly_held,
            }) => {
                events.push(SessionEvent::ArrowRemoved { at });
                if newly_held {
                    events.push(SessionEvent::KeyEnabled(key));
                }
            }
            None => {}
        }

        if outcome.moved() {
            self.player.position = outcome.new_position;
            self.moves = self.moves.wrapping_add(1);
            events.push(SessionEvent::PositionChanged(outcome.new_position));
            if self.config.move_cooldown_ms > 0 {
                self.player.motion = MotionState::Moving {
                    cooldown_remaining_ms: self.config.move_cooldown_ms,
                };
            }
        }
    }

    fn prepare_transition(&self) -> Result<Transition, ConfigError> {
        let next = self.level_id.next();
        if !self.provider.has_level(next) {
            return Ok(Transition::Finish);
        }
        let (level, player) = enter_level(&self.provider, next)?;
        Ok(Transition::Enter {
            id: next,
            level,
            player,
        })
    }

    fn complete_level(&mut self, transition: Transition, events: &mut TickEvents) {
        match transition {
            Transition::Finish => {
                self.finished = true;
                self.player.motion = MotionState::Idle;
                info!(level = %self.level_id, moves = self.moves, "game_complete");
                events.push(SessionEvent::GameComplete);
            }
            Transition::Enter { id, level, player } => {
                info!(from = %self.level_id, to = %id, "level_advance");
                self.level_id = id;
                self.level = level;
                self.player = player;
                events.push(SessionEvent::LevelAdvance(id));
            }
        }
    }
}

/// What happens once the current level's goal is met
enum Transition {
    Enter {
        id: LevelId,
        level: Level,
        player: PlayerState,
    },
    Finish,
}

fn enter_level<P: LevelProvider>(provider: &P, id: LevelId) -> Result<(Level, PlayerState), ConfigError> {
    let level = provider.load(id)?;
    let start = level.start_position()?;
    let player = PlayerState::spawn(start, level.starting_keys);
    debug!(level = %id, start = %start, keys = ?level.starting_keys, "level_entered");
    Ok((level, player))
}
