//! Fixed timestep flappy tick.

use rand::Rng;
use tracing::{debug, trace};

use crate::constants::flappy::*;

use super::state::{FlappyGame, FlappyPhase, Pipe};

/// Input for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap this tick (space/click).
    pub jump: bool,
}

/// Advances the run by one fixed timestep. Inert once the run has ended.
pub fn tick(state: &mut FlappyGame, input: &TickInput) {
    if state.is_over() {
        return;
    }

    if input.jump {
        state.bird.velocity = -JUMP_IMPULSE;
    }

    state.bird.velocity += GRAVITY;
    state.bird.y += state.bird.velocity;

    // Floor ends the run; the ceiling only arrests the climb.
    if state.bird.y + state.bird.radius >= AREA.y {
        state.bird.y = AREA.y - state.bird.radius;
        debug!(score = state.score, "Bird hit the floor");
        state.phase = FlappyPhase::GameOver;
        return;
    }
    if state.bird.y - state.bird.radius <= 0.0 {
        state.bird.y = state.bird.radius;
        state.bird.velocity = 0.0;
    }

    if state.tick_no % PIPE_SPAWN_TICKS == 0 {
        let top = state
            .rng
            .random_range(PIPE_MARGIN..AREA.y - PIPE_GAP - PIPE_MARGIN);
        state.pipes.push(Pipe {
            x: AREA.x,
            top,
            bottom: AREA.y - top - PIPE_GAP,
            scored: false,
        });
        trace!(top, "Pipe spawned");
    }

    let bird = state.bird;
    let mut collided = false;
    for pipe in state.pipes.iter_mut() {
        pipe.x -= PIPE_SPEED;

        let overlaps_x = BIRD_X + bird.radius > pipe.x && BIRD_X - bird.radius < pipe.x + PIPE_WIDTH;
        if overlaps_x && (bird.y - bird.radius < pipe.top || bird.y + bird.radius > AREA.y - pipe.bottom) {
            collided = true;
        }

        if !pipe.scored && pipe.x + PIPE_WIDTH < BIRD_X {
            pipe.scored = true;
            state.score += 1;
            trace!(score = state.score, "Pipe passed");
        }
    }
    state.pipes.retain(|pipe| pipe.x + PIPE_WIDTH >= 0.0);

    if collided {
        debug!(score = state.score, "Bird hit a pipe");
        state.phase = FlappyPhase::GameOver;
        return;
    }

    state.tick_no += 1;
}
