//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Run every seed driver through the same rules as the create endpoint
//! - Detect duplicate seed ids and team names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: StandingsConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use crate::config::schema::StandingsConfig;
use crate::standings::validation::validate_create;

/// A semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending setting.
    pub path: String,
    pub message: String,
}

impl ValidationError {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &StandingsConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("invalid socket address '{}'", config.listener.bind_address),
        ));
    }

    let base = &config.api.base_path;
    if !base.is_empty() && (!base.starts_with('/') || base.ends_with('/')) {
        errors.push(ValidationError::new(
            "api.base_path",
            "must be empty or start with '/' and not end with '/'",
        ));
    }

    if config.api.max_body_bytes == 0 {
        errors.push(ValidationError::new("api.max_body_bytes", "must be greater than 0"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("invalid socket address '{}'", config.observability.metrics_address),
        ));
    }

    let mut seed_ids = HashSet::new();
    for (i, entry) in config.seed.iter().enumerate() {
        let payload = serde_json::json!({
            "name": entry.name,
            "time": entry.time,
            "points": entry.points,
        });
        if let Err(failure) = validate_create(&payload) {
            for violation in failure.details {
                errors.push(ValidationError::new(
                    format!("seed[{}].{}", i, violation.field),
                    violation.message,
                ));
            }
        }
        if let Some(id) = &entry.id {
            if id.is_empty() {
                errors.push(ValidationError::new(format!("seed[{}].id", i), "must not be empty"));
            } else if !seed_ids.insert(id.as_str()) {
                errors.push(ValidationError::new(
                    format!("seed[{}].id", i),
                    format!("duplicate id '{}'", id),
                ));
            }
        }
    }

    let mut team_names = HashSet::new();
    for (i, team) in config.teams.iter().enumerate() {
        if team.name.trim().is_empty() {
            errors.push(ValidationError::new(format!("teams[{}].name", i), "must not be empty"));
        } else if !team_names.insert(team.name.as_str()) {
            errors.push(ValidationError::new(
                format!("teams[{}].name", i),
                format!("duplicate team '{}'", team.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
