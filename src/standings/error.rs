//! Error definitions for the standings core.

use thiserror::Error;

use crate::standings::driver::DriverId;
use crate::standings::validation::ValidationFailure;

/// How a driver lookup addressed the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Lookup by identifier.
    Id(DriverId),
    /// Lookup by 1-based standings position.
    Position(usize),
}

impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "id {}", id),
            Lookup::Position(position) => write!(f, "position {}", position),
        }
    }
}

/// Errors surfaced by validation, the driver store and the team projection.
///
/// Every variant is a recoverable outcome; the HTTP layer owns the mapping
/// to status codes.
#[derive(Debug, Error)]
pub enum StandingsError {
    /// One or more field-level violations.
    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    /// No driver at the requested id or position.
    #[error("Driver not found ({0})")]
    DriverNotFound(Lookup),

    /// No team at the requested position.
    #[error("Team not found (position {0})")]
    TeamNotFound(usize),

    /// A fixed dataset tried to insert an id that is already taken.
    #[error("Driver id {0} already exists")]
    DuplicateId(DriverId),

    /// The id generator kept producing ids that are already taken.
    #[error("Could not generate a unique driver id after {0} attempts")]
    IdExhausted(u32),
}

impl StandingsError {
    /// True for the "not found" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DriverNotFound(_) | Self::TeamNotFound(_))
    }
}

/// Result type for standings operations.
pub type StandingsResult<T> = Result<T, StandingsError>;
