//! The player's dash state machine.
//!
//! A trigger opens a time-limited window; dash speed is only sustained while
//! the player keeps re-triggering within the mash threshold. When the window
//! runs out, a cooldown starts during which triggers are ignored.

use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Res, ResMut};
use tracing::debug;

use crate::constants::{DASH_COOLDOWN, DASH_WINDOW_DURATION, MASH_THRESHOLD};
use crate::systems::components::{DeltaTime, MoveSpeed};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    /// A trigger will open a fresh window.
    #[default]
    Ready,
    /// The window is open; mashing sustains dash speed.
    Window { timer: f32 },
    /// Triggers are ignored until the cooldown runs out.
    Cooldown { timer: f32 },
}

#[derive(Resource, Debug, Default)]
pub struct DashState {
    pub phase: DashPhase,
    /// Logical-clock time of the most recent accepted trigger.
    pub last_press: Option<f32>,
    /// Accepted triggers in the current window.
    pub presses: u32,
}

impl DashState {
    /// Applies one dash trigger at logical time `now`.
    pub fn trigger(&mut self, now: f32) {
        match self.phase {
            DashPhase::Ready => {
                self.phase = DashPhase::Window { timer: 0.0 };
                self.presses = 1;
                self.last_press = Some(now);
                debug!(now, "Dash window opened");
            }
            DashPhase::Window { .. } => {
                self.presses += 1;
                self.last_press = Some(now);
            }
            DashPhase::Cooldown { .. } => {}
        }
    }

    /// Whether the most recent trigger still sustains dash speed at `now`.
    pub fn is_mashing(&self, now: f32) -> bool {
        matches!(self.phase, DashPhase::Window { .. })
            && self.last_press.is_some_and(|press| now - press < MASH_THRESHOLD)
    }

    /// The player's speed this tick: dash speed while sustained, base
    /// otherwise (including inside a window that has gone quiet).
    pub fn effective_speed(&self, now: f32, speed: &MoveSpeed) -> f32 {
        if self.is_mashing(now) {
            speed.dash
        } else {
            speed.base
        }
    }
}

/// Advances the window and cooldown timers.
pub fn dash_system(delta_time: Res<DeltaTime>, mut dash: ResMut<DashState>) {
    match dash.phase {
        DashPhase::Ready => {}
        DashPhase::Window { timer } => {
            let timer = timer + delta_time.0;
            if timer > DASH_WINDOW_DURATION {
                debug!(presses = dash.presses, "Dash window expired, cooling down");
                dash.phase = DashPhase::Cooldown { timer: 0.0 };
            } else {
                dash.phase = DashPhase::Window { timer };
            }
        }
        DashPhase::Cooldown { timer } => {
            let timer = timer + delta_time.0;
            dash.phase = if timer > DASH_COOLDOWN {
                DashPhase::Ready
            } else {
                DashPhase::Cooldown { timer }
            };
        }
    }
}
