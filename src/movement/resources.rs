//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Multiplier on the blend rate while airborne (usually < 1).
    pub air_control: f32,
    pub jump_force: f32,
    pub gravity_scale: f32,
    pub fall_gravity_scale: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub max_air_dashes: u32,
    /// Downward speed a landing must exceed to play the land cue.
    pub land_sound_speed: f32,
    pub input_deadzone: f32,
    /// Vertical velocity factor applied when jump is released while rising.
    pub jump_cut_multiplier: f32,
    pub body_mass: f32,
    pub ground_check_size: (f32, f32),
    pub ground_check_offset: (f32, f32),
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            acceleration: 15.0,
            deceleration: 20.0,
            air_control: 0.5,
            jump_force: 15.0,
            gravity_scale: 3.0,
            fall_gravity_scale: 5.0,
            coyote_time: 0.15,
            jump_buffer_time: 0.1,
            dash_speed: 25.0,
            dash_duration: 0.2,
            dash_cooldown: 0.5,
            max_air_dashes: 1,
            land_sound_speed: 5.0,
            input_deadzone: 0.1,
            jump_cut_multiplier: 0.5,
            body_mass: 1.0,
            ground_check_size: (0.5, 0.1),
            ground_check_offset: (0.0, -0.5),
        }
    }
}

impl MovementTuning {
    pub fn ground_check_size(&self) -> Vec2 {
        Vec2::new(self.ground_check_size.0, self.ground_check_size.1)
    }

    pub fn ground_check_offset(&self) -> Vec2 {
        Vec2::new(self.ground_check_offset.0, self.ground_check_offset.1)
    }

    /// Apex height of an uncut jump under `gravity_scale`.
    /// Uses h = v² / (2g)
    pub fn jump_height(&self, gravity: f32) -> f32 {
        let g = gravity.abs() * self.gravity_scale;
        if g <= f32::EPSILON {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * g)
    }

    /// Horizontal distance covered by one dash.
    pub fn dash_distance(&self) -> f32 {
        self.dash_speed * self.dash_duration
    }
}

/// Raw input sampled once per frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub horizontal: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
}
