//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, request span)
//!     → drivers.rs / teams.rs / status.rs (validate, call the standings core)
//!     → response.rs (map core errors to status codes)
//!     → Send to client
//! ```

pub mod drivers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;
pub mod status;
pub mod teams;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
