mod audio;
mod camera;
mod content;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Platformer SFX".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        content::ContentPlugin,
        audio::SoundPlugin,
        movement::MovementPlugin,
        camera::CameraFollowPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DevToolsPlugin);

    app.run();
}
