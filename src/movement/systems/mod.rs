//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub use collisions::{GroundSensor, ground_check_center};
pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{step_controller, sync_facing};
