//! Validation for tuning values loaded from content files.

use super::data::TuningFile;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a value is not negative
macro_rules! check_non_negative {
    ($errors:expr, $section:expr, $owner:expr, $($field:ident),+ $(,)?) => {
        $(
            if !($owner.$field >= 0.0) {
                $errors.push(ValidationError {
                    section: $section,
                    field: stringify!($field),
                    message: format!("must be >= 0, got {}", $owner.$field),
                });
            }
        )+
    };
}

/// Helper macro for checking a value lies in [0, 1]
macro_rules! check_unit_range {
    ($errors:expr, $section:expr, $owner:expr, $($field:ident),+ $(,)?) => {
        $(
            if !(0.0..=1.0).contains(&$owner.$field) {
                $errors.push(ValidationError {
                    section: $section,
                    field: stringify!($field),
                    message: format!("must be within [0, 1], got {}", $owner.$field),
                });
            }
        )+
    };
}

/// Validate all tuning values.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_tuning(tuning: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let movement = &tuning.movement;
    check_non_negative!(
        errors,
        "movement",
        movement,
        move_speed,
        acceleration,
        deceleration,
        jump_force,
        gravity_scale,
        fall_gravity_scale,
        coyote_time,
        jump_buffer_time,
        dash_speed,
        dash_duration,
        dash_cooldown,
        land_sound_speed,
        input_deadzone,
    );
    check_unit_range!(errors, "movement", movement, air_control, jump_cut_multiplier);

    if !(movement.body_mass > 0.0) {
        errors.push(ValidationError {
            section: "movement",
            field: "body_mass",
            message: format!("must be > 0, got {}", movement.body_mass),
        });
    }

    let (width, height) = movement.ground_check_size;
    if !(width > 0.0 && height > 0.0) {
        errors.push(ValidationError {
            section: "movement",
            field: "ground_check_size",
            message: format!("must be positive, got ({}, {})", width, height),
        });
    }

    let camera = &tuning.camera;
    check_non_negative!(errors, "camera", camera, smooth_speed);

    errors
}
