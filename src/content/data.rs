//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization.

use serde::{Deserialize, Serialize};

use crate::camera::CameraTuning;
use crate::movement::MovementTuning;

pub const TUNING_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Tuning (tuning.ron)
// ============================================================================

/// Every tunable value of the demo. Missing sections fall back to defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    #[serde(default)]
    pub movement: MovementTuning,
    #[serde(default)]
    pub camera: CameraTuning,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            movement: MovementTuning::default(),
            camera: CameraTuning::default(),
        }
    }
}
