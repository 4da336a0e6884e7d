//! Debug tools for tuning the controller (feature `dev-tools`).
//!
//! Features:
//! - Ground-check box gizmo, green while touching ground (F1 toggles)
//! - Music toggle (M)
//! - Controller state dump to the log (F2)

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::{SoundId, SoundInstance, SoundRequest};
use crate::movement::systems::{GroundSensor, ground_check_center};
use crate::movement::{ControllerState, MovementTuning, Player};

// ============================================================================
// Debug State Resource
// ============================================================================

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the ground-check box is drawn
    pub show_ground_check: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_ground_check: true,
        }
    }
}

// ============================================================================
// Plugin
// ============================================================================

pub struct DevToolsPlugin;

impl Plugin for DevToolsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, log_controller_state))
            .add_systems(
                Update,
                draw_ground_check.run_if(|state: Res<DebugState>| state.show_ground_check),
            );
    }
}

// ============================================================================
// Systems
// ============================================================================

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    music: Query<&SoundInstance>,
    mut requests: MessageWriter<SoundRequest>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        state.show_ground_check = !state.show_ground_check;
        info!("Debug: ground check gizmo = {}", state.show_ground_check);
    }

    if keyboard.just_pressed(KeyCode::KeyM) {
        let playing = music.iter().any(|instance| instance.0 == SoundId::Music);
        if playing {
            info!("Debug: stopping music");
            requests.write(SoundRequest::Stop(SoundId::Music));
        } else {
            info!("Debug: starting music");
            requests.write(SoundRequest::Play(SoundId::Music));
        }
    }
}

fn log_controller_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<&ControllerState, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }
    for state in &query {
        info!("Debug: {:?}", state);
    }
}

/// Draw the ground-check box, green while touching ground
fn draw_ground_check(
    mut gizmos: Gizmos,
    tuning: Res<MovementTuning>,
    query: Query<(&Transform, &GroundSensor), With<Player>>,
) {
    for (transform, sensor) in &query {
        let center = ground_check_center(transform.translation.truncate(), &tuning);
        let color = if sensor.touching {
            Color::srgb(0.2, 0.9, 0.2)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            tuning.ground_check_size(),
            color,
        );
    }
}
