//! Configuration validation

use crate::{RawConfig, RawMission};

/// A single validation failure, tied to the field that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a raw config, collecting every failure rather than stopping at
/// the first
pub fn validate_config(raw: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(mission) = &raw.mission {
        validate_mission(mission, &mut errors);
    }

    errors
}

fn validate_mission(mission: &RawMission, errors: &mut Vec<ValidationError>) {
    if mission.id.trim().is_empty() {
        errors.push(ValidationError::new("mission.id", "must not be empty"));
    }

    if mission.title.trim().is_empty() {
        errors.push(ValidationError::new("mission.title", "must not be empty"));
    }

    if mission.target_count == 0 {
        errors.push(ValidationError::new(
            "mission.target_count",
            "must be at least 1",
        ));
    }
}
