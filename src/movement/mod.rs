//! Movement domain: the player controller state machine and the systems that drive it.

mod bootstrap;
mod components;
mod controller;
mod resources;
mod stage;
pub mod systems;

pub use bootstrap::{PLAYER_SIZE, PLAYER_SPAWN};
pub use components::{ControllerState, Facing, GameLayer, Ground, Player};
pub use controller::{PhysicsBody, TickInput, TickReport};
pub use resources::{MovementInput, MovementTuning};
pub use stage::{DEMO_PLATFORMS, PlatformSpec};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::stage::spawn_demo_stage;
use crate::movement::systems::{detect_ground, read_input, step_controller, sync_facing};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, (spawn_demo_stage, spawn_player))
            .add_systems(
                Update,
                (read_input, detect_ground, step_controller, sync_facing).chain(),
            );
    }
}
