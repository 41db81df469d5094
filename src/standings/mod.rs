//! Standings core: validation, the driver store and the team projection.
//!
//! # Data Flow
//! ```text
//! raw JSON / path segment
//!     → validation.rs (all violations in one pass)
//!     → store.rs (create / update / delete, ranked by points)
//!     → teams.rs (roster + drivers → ranked teams, recomputed per call)
//! ```
//!
//! # Design Decisions
//! - Nothing here knows about HTTP
//! - The store is the only writer of driver records
//! - Id generation is injected so tests can use deterministic ids

pub mod driver;
pub mod error;
pub mod ids;
pub mod seed;
pub mod store;
pub mod teams;
pub mod validation;

pub use driver::{Driver, DriverId, DriverPatch, NewDriver};
pub use error::{Lookup, StandingsError, StandingsResult};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use seed::SeedDriver;
pub use store::DriverStore;
pub use teams::{SharedRoster, Team, TeamRoster};
pub use validation::{validate_create, validate_position, validate_update, ValidationFailure};
