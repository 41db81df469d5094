//! Driver standings REST service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod standings;

pub use config::schema::StandingsConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
