//! Movement domain: drives the controller from avian2d bodies.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::SoundRequest;
use crate::movement::systems::collisions::GroundSensor;
use crate::movement::{
    ControllerState, MovementInput, MovementTuning, PhysicsBody, Player, TickInput, TickReport,
};

/// avian2d rigid body seen through the controller's [`PhysicsBody`] seam.
///
/// Forces are integrated straight into velocity for the current frame.
pub(crate) struct AvianBody<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub gravity_scale: &'a mut GravityScale,
    pub mass: f32,
    pub dt: f32,
}

impl PhysicsBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn apply_force(&mut self, force: Vec2) {
        if self.mass > 0.0 {
            self.velocity.0 += force / self.mass * self.dt;
        }
    }
}

pub(crate) fn step_controller(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut sounds: MessageWriter<SoundRequest>,
    mut query: Query<
        (
            &mut ControllerState,
            &GroundSensor,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let tick = TickInput {
        dt: time.delta_secs(),
        horizontal: input.horizontal,
        jump_pressed: input.jump_just_pressed,
        jump_released: input.jump_just_released,
        dash_pressed: input.dash_just_pressed,
    };

    for (mut state, sensor, mut velocity, mut gravity_scale) in &mut query {
        let mut body = AvianBody {
            velocity: &mut *velocity,
            gravity_scale: &mut *gravity_scale,
            mass: tuning.body_mass,
            dt: tick.dt,
        };
        let report = state.tick(&tuning, &tick, sensor.touching, &mut body, &mut sounds);
        if report != TickReport::default() {
            debug!(
                "Controller: landed={} jumped={} jump_cut={} dashed={} dash_ended={} flipped={}",
                report.landed,
                report.jumped,
                report.jump_cut,
                report.dashed,
                report.dash_ended,
                report.flipped
            );
        }
    }
}

/// Mirror the sprite to match the controller's facing.
pub(crate) fn sync_facing(mut query: Query<(&ControllerState, &mut Sprite), With<Player>>) {
    for (state, mut sprite) in &mut query {
        let flip = !state.facing_right();
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
