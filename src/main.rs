//! Headless replay runner (default binary).
//!
//! Loads a level pack and plays a scripted move string through a session,
//! logging every event. Useful for checking a level's intended solution
//! without a front end.
//!
//! ```text
//! RUST_LOG=debug tile-keys --levels levels/tutorial.json dddd
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tile_keys::core::{dispatch_all, GameSession, LevelProvider, SessionConfig, SessionObserver};
use tile_keys::input::direction_for_char;
use tile_keys::levels::load_level_pack;
use tile_keys::types::{Direction, DirectionSet, LevelId, Position, DEFAULT_MOVE_COOLDOWN_MS, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "tile-keys")]
#[command(about = "Replay a move script through a tile-keys level pack", long_about = None)]
#[command(version)]
struct Cli {
    /// Level pack to load
    #[arg(long, default_value = "levels/tutorial.json")]
    levels: PathBuf,

    /// Movement cooldown after each step
    #[arg(long, default_value_t = DEFAULT_MOVE_COOLDOWN_MS)]
    cooldown_ms: u32,

    /// Index of the first level to play
    #[arg(long, default_value_t = 0)]
    start_level: u32,

    /// Moves to replay: WASD or hjkl, one character per key press
    moves: String,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let levels = load_level_pack(&cli.levels)
        .with_context(|| format!("loading level pack {}", cli.levels.display()))?;
    let config = SessionConfig::new()
        .with_move_cooldown_ms(cli.cooldown_ms)
        .with_first_level(LevelId(cli.start_level));
    let mut session = GameSession::new(levels, config).context("starting session")?;

    let mut log = EventLog::default();
    for (index, c) in cli.moves.chars().enumerate() {
        if session.is_finished() {
            info!(remaining = cli.moves.chars().count() - index, "replay_stopped_early");
            break;
        }
        let Some(direction) = direction_for_char(c) else {
            warn!(index, input = %c, "unmapped_input_skipped");
            continue;
        };

        let events = session
            .tick(TICK_MS, DirectionSet::of(direction))
            .with_context(|| format!("move {index} ({direction})"))?;
        dispatch_all(&events, &mut log);

        // Let the cooldown run out so the next scripted press is accepted.
        while session.is_moving() {
            let events = session.tick(TICK_MS, DirectionSet::empty())?;
            dispatch_all(&events, &mut log);
        }
    }

    let level_count = session.provider().level_count();
    println!(
        "level {}/{}  position {}  keys [{}]  moves {}  {}",
        session.level_id().index() + 1,
        level_count,
        session.position(),
        key_list(session.inventory().as_set()),
        session.moves(),
        if session.is_finished() { "finished" } else { "in progress" },
    );
    info!(levels_advanced = log.levels_advanced, arrows = log.arrows, "replay_done");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn key_list(keys: DirectionSet) -> String {
    keys.directions()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Logs every session event and keeps a few counters for the summary.
#[derive(Debug, Default)]
struct EventLog {
    levels_advanced: u32,
    arrows: u32,
}

impl SessionObserver for EventLog {
    fn on_arrow_placed(&mut self, at: Position, direction: Direction) {
        self.arrows += 1;
        info!(at = %at, direction = %direction, "arrow_placed");
    }

    fn on_arrow_removed(&mut self, at: Position) {
        self.arrows = self.arrows.saturating_sub(1);
        info!(at = %at, "arrow_removed");
    }

    fn on_key_enabled(&mut self, key: Direction) {
        info!(key = %key, "key_enabled");
    }

    fn on_key_disabled(&mut self, key: Direction) {
        info!(key = %key, "key_disabled");
    }

    fn on_position_changed(&mut self, pos: Position) {
        info!(position = %pos, "position_changed");
    }

    fn on_level_advance(&mut self, level: LevelId) {
        self.levels_advanced += 1;
        info!(level = %level, "level_advance");
    }

    fn on_game_complete(&mut self) {
        info!("game_complete");
    }
}
