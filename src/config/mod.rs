//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, seed drivers through the create rules)
//!     → StandingsConfig (validated, immutable)
//!
//! With --watch:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → server swaps the team roster
//! ```
//!
//! # Design Decisions
//! - All fields have defaults, so no config file is needed at all
//! - Seed drivers are only applied at startup; the roster reloads live

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{ApiConfig, ListenerConfig, ObservabilityConfig, StandingsConfig, TimeoutConfig};
