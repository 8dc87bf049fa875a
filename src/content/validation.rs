//! Validation for numeric ranges in content definitions.

use super::data::*;
use super::loader::GameData;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} field '{}' is invalid: {}",
            self.source_type, self.field, self.message
        )
    }
}

/// Helper macro for checking a value is strictly positive
macro_rules! check_positive {
    ($errors:expr, $source_type:expr, $field:expr, $value:expr) => {
        if !($value > 0.0) {
            $errors.push(ValidationError {
                source_type: $source_type,
                field: $field,
                message: format!("must be > 0, got {}", $value),
            });
        }
    };
}

/// Helper macro for checking a value is zero or positive
macro_rules! check_non_negative {
    ($errors:expr, $source_type:expr, $field:expr, $value:expr) => {
        if !($value >= 0.0) {
            $errors.push(ValidationError {
                source_type: $source_type,
                field: $field,
                message: format!("must be >= 0, got {}", $value),
            });
        }
    };
}

/// Validate all loaded content.
/// Returns a list of validation errors, empty if everything is in range.
pub fn validate_content(data: &GameData) -> Vec<ValidationError> {
    let mut errors = validate_locomotion(&data.locomotion);
    errors.extend(validate_arena(&data.arena));
    errors
}

pub fn validate_locomotion(def: &LocomotionDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let source = "Locomotion";

    check_positive!(errors, source, "tick_rate_hz", def.tick_rate_hz);
    check_non_negative!(errors, source, "gravity", def.gravity);
    check_non_negative!(errors, source, "gravity_boost", def.gravity_boost);
    check_positive!(errors, source, "mass", def.mass);
    check_positive!(errors, source, "max_velocity", def.max_velocity);
    check_positive!(
        errors,
        source,
        "jetpack_max_velocity",
        def.jetpack_max_velocity
    );
    check_positive!(errors, source, "jetpack.max_fuel", def.jetpack.max_fuel);
    check_positive!(
        errors,
        source,
        "jetpack.fuel_usage_rate",
        def.jetpack.fuel_usage_rate
    );
    check_positive!(
        errors,
        source,
        "jetpack.fuel_refill_rate",
        def.jetpack.fuel_refill_rate
    );
    check_non_negative!(errors, source, "friction.grounded", def.friction.grounded);
    check_non_negative!(errors, source, "friction.airborne", def.friction.airborne);
    check_non_negative!(errors, source, "controls.move_force", def.controls.move_force);
    check_non_negative!(
        errors,
        source,
        "controls.thrust_force",
        def.controls.thrust_force
    );
    check_non_negative!(
        errors,
        source,
        "controls.exhaust_rate",
        def.controls.exhaust_rate
    );
    check_positive!(
        errors,
        source,
        "controls.exhaust_lifetime",
        def.controls.exhaust_lifetime
    );

    // Pitch past straight up/down flips the view
    if !(def.cam_limit > 0.0 && def.cam_limit <= 90.0) {
        errors.push(ValidationError {
            source_type: source,
            field: "cam_limit",
            message: format!("must be in (0, 90], got {}", def.cam_limit),
        });
    }

    errors
}

pub fn validate_arena(def: &ArenaDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let source = "Arena";

    check_positive!(errors, source, "floor_size", def.floor_size);
    check_non_negative!(errors, source, "respawn_delay", def.respawn_delay);

    if def.spawn_points.is_empty() {
        errors.push(ValidationError {
            source_type: source,
            field: "spawn_points",
            message: "at least one spawn point is required".to_string(),
        });
    }

    for &(_, y, _) in &def.spawn_points {
        if y <= def.kill_plane_y {
            errors.push(ValidationError {
                source_type: source,
                field: "spawn_points",
                message: format!(
                    "spawn height {} is at or below the kill plane {}",
                    y, def.kill_plane_y
                ),
            });
        }
    }

    errors
}
