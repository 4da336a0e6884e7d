//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Unit x direction for this facing.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Per-character movement state, advanced once per tick by
/// [`ControllerState::tick`](crate::movement::ControllerState::tick).
#[derive(Component, Debug, Clone, Default)]
pub struct ControllerState {
    pub horizontal_input: f32,
    pub facing: Facing,
    pub grounded: bool,
    /// Value of `grounded` from the previous tick.
    pub was_grounded: bool,
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
    pub dash_cooldown_timer: f32,
    /// Remaining time in the current dash window.
    pub dash_timer: f32,
    pub is_jumping: bool,
    pub is_dashing: bool,
    pub air_dash_count: u32,
    pub dash_direction: Vec2,
}

impl ControllerState {
    pub fn facing_right(&self) -> bool {
        self.facing == Facing::Right
    }
}
