//! Movement domain: the demo stage the player runs around in.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

/// A static platform: center and size in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpec {
    pub center: Vec2,
    pub size: Vec2,
}

/// Floor, two side ledges and a high center platform.
pub const DEMO_PLATFORMS: [PlatformSpec; 4] = [
    PlatformSpec {
        center: Vec2::new(0.0, -4.0),
        size: Vec2::new(24.0, 1.0),
    },
    PlatformSpec {
        center: Vec2::new(-6.0, -1.0),
        size: Vec2::new(4.0, 0.5),
    },
    PlatformSpec {
        center: Vec2::new(6.0, -0.5),
        size: Vec2::new(4.0, 0.5),
    },
    PlatformSpec {
        center: Vec2::new(0.0, 2.5),
        size: Vec2::new(3.0, 0.5),
    },
];

pub(crate) fn spawn_demo_stage(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    for (index, platform) in DEMO_PLATFORMS.iter().enumerate() {
        let color = if index == 0 {
            ground_color
        } else {
            platform_color
        };

        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(platform.size),
                ..default()
            },
            Transform::from_translation(platform.center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(platform.size.x, platform.size.y),
            ground_layers,
        ));
    }
}
