//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section is defaulted, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::standings::seed::{default_drivers, default_roster, SeedDriver};
use crate::standings::teams::TeamRoster;

/// Root configuration for the standings service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StandingsConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// REST API behavior.
    pub api: ApiConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Drivers loaded at startup.
    pub seed: Vec<SeedDriver>,

    /// Team roster used by the team standings.
    pub teams: Vec<TeamRoster>,
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            api: ApiConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            seed: default_drivers(),
            teams: default_roster(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// REST API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for the driver and team routes.
    pub base_path: String,

    /// Re-rank the standings after an update changes points.
    pub rerank_on_update: bool,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: "/api/v1".to_string(),
            rerank_on_update: false,
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: StandingsConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.api.base_path, "/api/v1");
        assert!(!config.api.rerank_on_update);
        assert_eq!(config.seed.len(), 10);
        assert_eq!(config.teams.len(), 5);
    }

    #[test]
    fn test_partial_sections() {
        let config: StandingsConfig = toml::from_str(
            r#"
            [api]
            rerank_on_update = true

            [[seed]]
            id = "ham"
            name = "Lewis Hamilton"
            time = "1:31.447"

            [[teams]]
            name = "Mercedes"
            drivers = ["Lewis Hamilton"]
            "#,
        )
        .unwrap();

        assert!(config.api.rerank_on_update);
        assert_eq!(config.api.base_path, "/api/v1");
        assert_eq!(config.seed.len(), 1);
        assert_eq!(config.seed[0].id.as_deref(), Some("ham"));
        assert_eq!(config.seed[0].points, 0);
        assert_eq!(config.teams[0].drivers, vec!["Lewis Hamilton"]);
    }
}
