use bevy_ecs::event::EventReader;
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Res, ResMut};

use crate::direction::DirectionSet;
use crate::events::{GameCommand, GameEvent};
use crate::systems::components::SessionClock;
use crate::systems::dash::DashState;

/// The held movement keys, as reported by the external input collaborator.
#[derive(Resource, Default, Debug)]
pub struct InputState {
    pub held: DirectionSet,
}

/// Drains queued input commands into the input and dash state.
///
/// `Quit` is a session-lifecycle concern and is handled by the loop driver
/// before commands reach the engine; it is ignored here.
pub fn input_system(
    mut events: EventReader<GameEvent>,
    clock: Res<SessionClock>,
    mut input: ResMut<InputState>,
    mut dash: ResMut<DashState>,
) {
    for event in events.read() {
        let GameEvent::Command(command) = event else { continue };
        match command {
            GameCommand::Press(direction) => input.held.insert((*direction).into()),
            GameCommand::Release(direction) => input.held.remove((*direction).into()),
            GameCommand::Dash => dash.trigger(clock.elapsed),
            GameCommand::Quit => {}
        }
    }
}
