use bevy_ecs::prelude::*;

use crate::direction::Direction;

/// A discrete input action produced by the external input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Press(Direction),
    Release(Direction),
    Dash,
    Quit,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
    /// The player entity touched a coin entity this tick.
    Collision(Entity, Entity),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
