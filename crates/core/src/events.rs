//! Session events - notifications for the presentation layer
//!
//! The core never holds visual objects. Every visible consequence of a move
//! is reported as a [`SessionEvent`], in the order it happened, and a
//! presentation layer either matches on the events directly or implements
//! [`SessionObserver`] and calls [`SessionEvent::dispatch`].

use arrayvec::ArrayVec;

use crate::types::{Direction, LevelId, Position};

/// Upper bound on events produced by a single tick.
///
/// One move yields at most: an arrow event, a key event, a position change
/// and a level transition.
pub const MAX_EVENTS_PER_TICK: usize = 8;

/// Events produced by one tick, in occurrence order (no heap allocation)
pub type TickEvents = ArrayVec<SessionEvent, MAX_EVENTS_PER_TICK>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A key was stored at `at`; draw an arrow pointing `direction`
    ArrowPlaced { at: Position, direction: Direction },
    /// The stored key at `at` was taken back
    ArrowRemoved { at: Position },
    KeyEnabled(Direction),
    KeyDisabled(Direction),
    PositionChanged(Position),
    /// The goal was met and the session moved on to this level
    LevelAdvance(LevelId),
    /// The last level was completed
    GameComplete,
}

impl SessionEvent {
    /// Route this event to the matching observer callback
    pub fn dispatch<O: SessionObserver + ?Sized>(&self, observer: &mut O) {
        match *self {
            SessionEvent::ArrowPlaced { at, direction } => observer.on_arrow_placed(at, direction),
            SessionEvent::ArrowRemoved { at } => observer.on_arrow_removed(at),
            SessionEvent::KeyEnabled(key) => observer.on_key_enabled(key),
            SessionEvent::KeyDisabled(key) => observer.on_key_disabled(key),
            SessionEvent::PositionChanged(pos) => observer.on_position_changed(pos),
            SessionEvent::LevelAdvance(level) => observer.on_level_advance(level),
            SessionEvent::GameComplete => observer.on_game_complete(),
        }
    }
}

/// Callback interface for presentation layers. Every method defaults to a no-op.
pub trait SessionObserver {
    fn on_arrow_placed(&mut self, _at: Position, _direction: Direction) {}
    fn on_arrow_removed(&mut self, _at: Position) {}
    fn on_key_enabled(&mut self, _key: Direction) {}
    fn on_key_disabled(&mut self, _key: Direction) {}
    fn on_position_changed(&mut self, _pos: Position) {}
    fn on_level_advance(&mut self, _level: LevelId) {}
    fn on_game_complete(&mut self) {}
}

/// Dispatch a batch of events in order
pub fn dispatch_all<O: SessionObserver + ?Sized>(events: &[SessionEvent], observer: &mut O) {
    for event in events {
        event.dispatch(observer);
    }
}
