//! Movement domain: the per-tick controller state machine.
//!
//! Engine-free. A tick consumes elapsed time, raw input and a ground flag, and drives a
//! [`PhysicsBody`] plus a [`SoundSink`]. The Bevy systems in `systems::movement` adapt
//! avian2d bodies and the audio messages onto these seams.

use bevy::log::debug;
use bevy::math::Vec2;

use crate::audio::{SoundId, SoundSink};
use crate::movement::{ControllerState, Facing, MovementTuning};

/// Physics-body accessors the controller needs.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn set_gravity_scale(&mut self, scale: f32);
    fn apply_force(&mut self, force: Vec2);
}

/// Input for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub dt: f32,
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub dash_pressed: bool,
}

/// What happened during a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub landed: bool,
    pub jumped: bool,
    pub jump_cut: bool,
    pub dashed: bool,
    pub dash_ended: bool,
    pub flipped: bool,
}

impl ControllerState {
    /// Advance the state machine by one tick.
    pub fn tick(
        &mut self,
        tuning: &MovementTuning,
        input: &TickInput,
        grounded_now: bool,
        body: &mut impl PhysicsBody,
        sounds: &mut impl SoundSink,
    ) -> TickReport {
        let mut report = TickReport::default();
        let dt = input.dt.max(0.0);

        // Ground transitions
        self.was_grounded = self.grounded;
        self.grounded = grounded_now;
        if self.grounded && !self.was_grounded {
            report.landed = true;
            self.is_jumping = false;
            let vy = body.velocity().y;
            if vy < -tuning.land_sound_speed {
                sounds.play(SoundId::Land);
            }
            debug!("Landed: vy={:.2}, air_dash_count reset", vy);
        }

        self.update_timers(tuning, dt);

        if self.is_dashing {
            self.dash_timer = (self.dash_timer - dt).max(0.0);
            if self.dash_timer > 0.0 {
                return report;
            }
            self.is_dashing = false;
            body.set_gravity_scale(tuning.gravity_scale);
            report.dash_ended = true;
            debug!("Dash ended");
        }

        self.horizontal_input = input.horizontal.clamp(-1.0, 1.0);
        if input.jump_pressed {
            self.jump_buffer_timer = tuning.jump_buffer_time;
        }

        self.arbitrate_jump(tuning, input, body, sounds, &mut report);

        report.flipped = self.update_facing();

        if input.dash_pressed && self.try_start_dash(tuning, body, sounds) {
            report.dashed = true;
            return report;
        }

        self.apply_movement(tuning, dt, body);
        self.apply_gravity(tuning, body);

        report
    }

    fn update_timers(&mut self, tuning: &MovementTuning, dt: f32) {
        // Coyote time stays full while grounded and only decays in the air
        if self.grounded {
            self.coyote_timer = tuning.coyote_time;
            self.air_dash_count = 0;
        } else {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }

        self.jump_buffer_timer = (self.jump_buffer_timer - dt).max(0.0);
        self.dash_cooldown_timer = (self.dash_cooldown_timer - dt).max(0.0);
    }

    fn arbitrate_jump(
        &mut self,
        tuning: &MovementTuning,
        input: &TickInput,
        body: &mut impl PhysicsBody,
        sounds: &mut impl SoundSink,
        report: &mut TickReport,
    ) {
        if self.jump_buffer_timer > 0.0 && self.coyote_timer > 0.0 && !self.is_jumping {
            let velocity = body.velocity();
            body.set_velocity(Vec2::new(velocity.x, tuning.jump_force));
            self.jump_buffer_timer = 0.0;
            self.coyote_timer = 0.0;
            self.is_jumping = true;
            sounds.play(SoundId::Jump);
            report.jumped = true;
            debug!("Jump: grounded={}", self.grounded);
        }

        // Variable jump height
        if input.jump_released {
            let velocity = body.velocity();
            if velocity.y > 0.0 {
                body.set_velocity(Vec2::new(
                    velocity.x,
                    velocity.y * tuning.jump_cut_multiplier,
                ));
                self.is_jumping = false;
                report.jump_cut = true;
            }
        }
    }

    /// Returns true if a dash started. A refused request leaves the state untouched.
    fn try_start_dash(
        &mut self,
        tuning: &MovementTuning,
        body: &mut impl PhysicsBody,
        sounds: &mut impl SoundSink,
    ) -> bool {
        if self.dash_cooldown_timer > 0.0 {
            return false;
        }
        if !self.grounded && self.air_dash_count >= tuning.max_air_dashes {
            debug!(
                "Dash refused: air_dash_count={} max={}",
                self.air_dash_count, tuning.max_air_dashes
            );
            return false;
        }

        self.is_dashing = true;
        self.dash_timer = tuning.dash_duration;
        self.dash_cooldown_timer = tuning.dash_cooldown;

        let raw = Vec2::new(self.horizontal_input, 0.0);
        self.dash_direction = if raw.length() < tuning.input_deadzone {
            Vec2::new(self.facing.sign(), 0.0)
        } else {
            raw.normalize()
        };

        body.set_velocity(self.dash_direction * tuning.dash_speed);
        body.set_gravity_scale(0.0);

        if !self.grounded {
            self.air_dash_count += 1;
        }

        sounds.play(SoundId::Dash);
        debug!(
            "Dash: direction={:?}, grounded={}, air_dash_count={}",
            self.dash_direction, self.grounded, self.air_dash_count
        );
        true
    }

    fn update_facing(&mut self) -> bool {
        let disagrees = match self.facing {
            Facing::Right => self.horizontal_input < 0.0,
            Facing::Left => self.horizontal_input > 0.0,
        };
        if disagrees {
            self.facing = self.facing.flipped();
        }
        disagrees
    }

    fn apply_movement(&self, tuning: &MovementTuning, dt: f32, body: &mut impl PhysicsBody) {
        let target_speed = self.horizontal_input * tuning.move_speed;
        let mut rate = if target_speed.abs() > tuning.input_deadzone {
            tuning.acceleration
        } else {
            tuning.deceleration
        };
        if !self.grounded {
            rate *= tuning.air_control;
        }
        // One tick may close the gap to the target speed but never pass it
        if dt > 0.0 && tuning.body_mass > 0.0 {
            rate = rate.min(tuning.body_mass / dt);
        }

        let speed_diff = target_speed - body.velocity().x;
        body.apply_force(Vec2::new(speed_diff * rate, 0.0));
    }

    fn apply_gravity(&self, tuning: &MovementTuning, body: &mut impl PhysicsBody) {
        // Heavier gravity while falling
        if body.velocity().y < 0.0 {
            body.set_gravity_scale(tuning.fall_gravity_scale);
        } else {
            body.set_gravity_scale(tuning.gravity_scale);
        }
    }
}
