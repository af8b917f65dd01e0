//! The session loop driver.
//!
//! Runs one update+render pair per iteration at a fixed 60 Hz cadence. The
//! renderer and input source are external collaborators supplied as trait
//! objects; the engine only hands out snapshots and accepts commands.

use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::constants::{FIXED_DT, LOOP_TIME};
use crate::error::{GameError, GameResult};
use crate::events::GameCommand;
use crate::game::{Game, Snapshot};
use crate::systems::{GameOutcome, GameRng};

/// Draws one captured snapshot per tick.
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot) -> GameResult<()>;
}

/// Supplies the commands gathered since the previous tick. Receives the
/// latest snapshot so non-interactive sources (demo pilots, tests) can react
/// to the game state.
pub trait InputSource {
    fn poll(&mut self, snapshot: &Snapshot) -> Vec<GameCommand>;
}

pub struct App {
    renderer: Box<dyn Renderer>,
    input: Box<dyn InputSource>,
    game: Option<Game>,
    /// When false the loop runs uncapped; used by the demo and tests.
    pub paced: bool,
}

impl App {
    pub fn new(renderer: Box<dyn Renderer>, input: Box<dyn InputSource>) -> Self {
        App {
            renderer,
            input,
            game: None,
            paced: true,
        }
    }

    /// Starts a fresh session, discarding any stale one so two loops can
    /// never run concurrently.
    pub fn start_session(&mut self) {
        if self.game.is_some() {
            debug!("Discarding stale session before starting a new one");
        }
        self.game = Some(Game::new());
    }

    /// Starts a fresh session with an injected random source.
    pub fn start_session_with_rng(&mut self, rng: GameRng) {
        if self.game.is_some() {
            debug!("Discarding stale session before starting a new one");
        }
        self.game = Some(Game::with_rng(rng));
    }

    /// Abandons the current session, cancelling the pending loop.
    pub fn return_to_title(&mut self) {
        self.game = None;
    }

    /// Drives the active session until it ends or the input source quits.
    ///
    /// Returns `Ok(Some(outcome))` on a terminal result (delivered exactly
    /// once; the session is consumed), `Ok(None)` when the player returned
    /// to the title.
    pub fn run_session(&mut self) -> GameResult<Option<GameOutcome>> {
        let Some(game) = self.game.as_mut() else {
            return Err(GameError::InvalidState("no active session".into()));
        };
        info!("Starting session loop ({:.3}ms per tick)", LOOP_TIME.as_secs_f32() * 1000.0);

        let mut view = game.snapshot();
        let outcome = 'session: loop {
            let start = Instant::now();

            for command in self.input.poll(&view) {
                match command {
                    GameCommand::Quit => {
                        info!("Returning to title");
                        break 'session None;
                    }
                    command => game.queue_command(command),
                }
            }

            let outcome = game.tick(FIXED_DT);
            view = game.snapshot();
            if let Err(e) = self.renderer.draw(&view) {
                error!("Failed to draw frame: {e}");
            }

            if let Some(outcome) = outcome {
                break 'session Some(outcome);
            }

            if self.paced {
                if start.elapsed() < LOOP_TIME {
                    let time = LOOP_TIME.saturating_sub(start.elapsed());
                    if time != std::time::Duration::ZERO {
                        spin_sleep::sleep(time);
                    }
                } else {
                    warn!("Session loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
                }
            }
        };

        self.game = None;
        if let Some(outcome) = outcome {
            info!(
                victory = outcome.victory,
                coins = outcome.coins_collected,
                "Session finished"
            );
        }
        Ok(outcome)
    }
}
