//! Content domain: data-driven tuning loaded from RON files.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{TUNING_SCHEMA_VERSION, TuningFile};
pub use loader::{ContentLoadError, load_tuning, parse_single};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::camera::CameraTuning;
use crate::movement::MovementTuning;

pub const DATA_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Resolve the tuning to use: the loaded file if it is valid, defaults otherwise.
pub fn resolve_tuning(loaded: Result<TuningFile, ContentLoadError>) -> TuningFile {
    let tuning = match loaded {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return TuningFile::default();
        }
    };

    let errors = validate_tuning(&tuning);
    if errors.is_empty() {
        return tuning;
    }

    for error in &errors {
        error!("Invalid tuning: {}", error);
    }
    warn!(
        "Tuning has {} invalid values; using default tuning",
        errors.len()
    );
    TuningFile::default()
}

fn load_content(mut commands: Commands) {
    let tuning = resolve_tuning(load_tuning(Path::new(DATA_PATH)));

    info!(
        "Tuning loaded: move_speed={}, jump_force={}, coyote_time={}, jump_buffer_time={}, dash_cooldown={}",
        tuning.movement.move_speed,
        tuning.movement.jump_force,
        tuning.movement.coyote_time,
        tuning.movement.jump_buffer_time,
        tuning.movement.dash_cooldown
    );

    commands.insert_resource::<MovementTuning>(tuning.movement);
    commands.insert_resource::<CameraTuning>(tuning.camera);
}
