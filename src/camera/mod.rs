//! Camera domain: a 2D camera that eases toward the player.

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use bevy::transform::TransformSystems;
use serde::{Deserialize, Serialize};

use crate::movement::Player;

/// World units visible per screen pixel.
pub const CAMERA_SCALE: f32 = 1.0 / 48.0;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraTuning {
    /// How quickly the camera closes the gap, per second.
    pub smooth_speed: f32,
    pub offset: (f32, f32),
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            smooth_speed: 5.0,
            offset: (0.0, 2.0),
        }
    }
}

impl CameraTuning {
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset.0, self.offset.1)
    }
}

/// Marks the camera that follows the player.
#[derive(Component, Debug)]
pub struct CameraFollow;

/// One follow step: lerp from `current` toward `target + offset` by `smooth_speed * dt`,
/// clamped to [0, 1]. The camera keeps its own depth.
pub fn follow_step(current: Vec3, target: Vec2, tuning: &CameraTuning, dt: f32) -> Vec3 {
    let desired = (target + tuning.offset()).extend(current.z);
    let t = (tuning.smooth_speed * dt).clamp(0.0, 1.0);
    current.lerp(desired, t)
}

pub struct CameraFollowPlugin;

impl Plugin for CameraFollowPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(Startup, setup_camera)
            .add_systems(PostUpdate, follow_player.before(TransformSystems::Propagate));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        CameraFollow,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

fn follow_player(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    player: Query<&Transform, (With<Player>, Without<CameraFollow>)>,
    mut cameras: Query<&mut Transform, With<CameraFollow>>,
) {
    let Ok(target) = player.single() else {
        return;
    };
    let target = target.translation.truncate();
    let dt = time.delta_secs();

    for mut transform in &mut cameras {
        transform.translation = follow_step(transform.translation, target, &tuning, dt);
    }
}
