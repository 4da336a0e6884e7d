//! Movement domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::GroundSensor;
use crate::movement::{ControllerState, GameLayer, MovementTuning, Player};

pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.0);
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 2.0, 0.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    gravity: Res<Gravity>,
) {
    info!(
        "Spawning player: move_speed={}, jump_force={}, dash_speed={}, max_air_dashes={}",
        tuning.move_speed, tuning.jump_force, tuning.dash_speed, tuning.max_air_dashes
    );
    info!(
        "Player reach: jump_height={:.2}, dash_distance={:.2}",
        tuning.jump_height(gravity.0.y),
        tuning.dash_distance()
    );

    commands.spawn((
        // Identity & Movement
        (Player, ControllerState::default(), GroundSensor::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.gravity_scale),
            Mass(tuning.body_mass),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
