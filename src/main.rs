//! Headless demo driver: runs a scripted session of each game and logs the
//! results. Real frontends supply their own `Renderer`/`InputSource` pair.

use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use arcade::app::{App, InputSource, Renderer};
use arcade::constants::flappy::{BIRD_X, PIPE_GAP, PIPE_WIDTH};
use arcade::direction::{Direction, DirectionSet};
use arcade::error::GameResult;
use arcade::events::GameCommand;
use arcade::flappy::{self, FlappyGame, TickInput};
use arcade::game::Snapshot;

/// Logs a one-line summary of the session once per simulated second.
#[derive(Default)]
struct LogRenderer {
    frames: u64,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, snapshot: &Snapshot) -> GameResult<()> {
        if self.frames % 60 == 0 {
            info!(
                elapsed = snapshot.elapsed,
                coins = snapshot.coins_collected,
                danger = snapshot.danger,
                whiteout = snapshot.whiteout_active,
                enemy = snapshot.enemy.is_some(),
                "Session state"
            );
        }
        self.frames += 1;
        Ok(())
    }
}

/// A simple bot: walks toward the nearest coin, flees and mashes dash while
/// in danger, and gives up if a session somehow drags on too long.
#[derive(Default)]
struct DemoPilot {
    held: DirectionSet,
}

impl InputSource for DemoPilot {
    fn poll(&mut self, snapshot: &Snapshot) -> Vec<GameCommand> {
        let mut commands = Vec::new();
        if snapshot.elapsed > 600.0 {
            commands.push(GameCommand::Quit);
            return commands;
        }

        let position = snapshot.player.position;
        let target = if snapshot.danger {
            let enemy = snapshot.enemy.as_ref().map(|e| e.position).unwrap_or(position);
            position + (position - enemy)
        } else {
            snapshot
                .coins
                .iter()
                .map(|coin| coin.position)
                .min_by(|a, b| a.distance(position).total_cmp(&b.distance(position)))
                .unwrap_or(position)
        };

        let delta = target - position;
        let mut desired = DirectionSet::empty();
        if delta.x > 4.0 {
            desired |= DirectionSet::RIGHT;
        } else if delta.x < -4.0 {
            desired |= DirectionSet::LEFT;
        }
        if delta.y > 4.0 {
            desired |= DirectionSet::DOWN;
        } else if delta.y < -4.0 {
            desired |= DirectionSet::UP;
        }

        for direction in Direction::DIRECTIONS {
            let flag = DirectionSet::from(direction);
            if desired.contains(flag) && !self.held.contains(flag) {
                commands.push(GameCommand::Press(direction));
            } else if !desired.contains(flag) && self.held.contains(flag) {
                commands.push(GameCommand::Release(direction));
            }
        }
        self.held = desired;

        if snapshot.danger {
            commands.push(GameCommand::Dash);
        }
        commands
    }
}

/// Keeps the bird aimed at the center of the nearest upcoming gap.
fn gap_center(game: &FlappyGame) -> f32 {
    game.pipes
        .iter()
        .find(|pipe| pipe.x + PIPE_WIDTH >= BIRD_X - game.bird.radius)
        .map(|pipe| pipe.top + PIPE_GAP / 2.0)
        .unwrap_or(arcade::constants::flappy::AREA.y / 2.0)
}

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;

    let mut app = App::new(Box::new(LogRenderer::default()), Box::new(DemoPilot::default()));
    app.paced = false;
    app.start_session();
    match app.run_session()? {
        Some(outcome) => info!(
            victory = outcome.victory,
            coins = outcome.coins_collected,
            "Chase demo finished"
        ),
        None => info!("Chase demo returned to title"),
    }

    let mut game = FlappyGame::new();
    while !game.is_over() && game.score < 10 {
        let jump = game.bird.velocity > 0.0 && game.bird.y > gap_center(&game) + 20.0;
        flappy::tick(&mut game, &TickInput { jump });
    }
    info!(score = game.score, "Flappy demo finished");

    Ok(())
}
