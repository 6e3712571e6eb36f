use crate::types::{Direction, DirectionSet, LevelId, Position};

/// Plain-data view of a session, for presentation layers and tests
///
/// Fill one with [`GameSession::snapshot_into`](crate::GameSession::snapshot_into)
/// to reuse its marker buffer across frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub level_id: LevelId,
    pub position: Position,
    pub held: DirectionSet,
    pub required: DirectionSet,
    pub moving: bool,
    pub cooldown_ms: u32,
    pub finished: bool,
    pub moves: u32,
    pub markers: Vec<(Position, Direction)>,
}

impl SessionSnapshot {
    /// Whether the session would act on input right now
    pub fn accepts_input(&self) -> bool {
        !self.finished && !self.moving
    }
}
