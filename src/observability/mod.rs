//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the driver store produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (request counters, latency histograms, driver gauge)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - Metrics are off by default; recording without an exporter is a no-op

pub mod logging;
pub mod metrics;
