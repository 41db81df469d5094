//! Team standings, derived on demand from a roster and the driver collection.
//!
//! # Responsibilities
//! - Hold the current team roster behind an atomically swappable pointer
//! - Project roster + drivers into ranked team records
//! - 1-based positional lookup into the projection
//!
//! # Design Decisions
//! - Nothing is cached: every call recomputes from the latest roster
//! - Team points are the sum of member drivers' points, matched by name
//! - Ties keep roster order

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

use crate::standings::driver::Driver;
use crate::standings::error::{StandingsError, StandingsResult};

/// One roster entry: a team and the names of its drivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    pub name: String,
    #[serde(default)]
    pub drivers: Vec<String>,
}

/// A derived team standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub drivers: Vec<String>,
    pub points: u32,
}

/// Shared, reloadable roster definition.
#[derive(Clone)]
pub struct SharedRoster {
    inner: Arc<ArcSwap<Vec<TeamRoster>>>,
}

impl SharedRoster {
    pub fn new(roster: Vec<TeamRoster>) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(roster)),
        }
    }

    /// Snapshot of the current roster.
    pub fn current(&self) -> Arc<Vec<TeamRoster>> {
        self.inner.load_full()
    }

    /// Replace the roster. Returns true if it differed from the previous one.
    pub fn replace(&self, roster: Vec<TeamRoster>) -> bool {
        let roster = Arc::new(roster);
        let previous = self.inner.swap(Arc::clone(&roster));
        *previous != *roster
    }
}

/// Project the roster onto the current drivers, ranked by team points.
pub fn list_teams(roster: &[TeamRoster], drivers: &[Driver]) -> Vec<Team> {
    let mut teams: Vec<Team> = roster
        .iter()
        .map(|entry| Team {
            name: entry.name.clone(),
            drivers: entry.drivers.clone(),
            points: drivers
                .iter()
                .filter(|d| entry.drivers.iter().any(|member| member == &d.name))
                .map(|d| d.points)
                .sum(),
        })
        .collect();
    teams.sort_by(|a, b| b.points.cmp(&a.points));
    teams
}

/// Team at a 1-based position.
pub fn team_by_position(teams: &[Team], position: usize) -> StandingsResult<&Team> {
    position
        .checked_sub(1)
        .and_then(|index| teams.get(index))
        .ok_or(StandingsError::TeamNotFound(position))
}
