//! Driver records and the payload types that feed the store.

use serde::{Deserialize, Serialize};

/// Inclusive character bounds for `name` and `time`.
pub const TEXT_MIN_CHARS: usize = 3;
pub const TEXT_MAX_CHARS: usize = 50;

/// Inclusive bounds for `points`.
pub const POINTS_MIN: u32 = 0;
pub const POINTS_MAX: u32 = 1000;

/// Opaque driver identifier, assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(String);

impl DriverId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DriverId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DriverId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// Immutable identifier.
    pub id: DriverId,
    /// Display name, 3 to 50 characters.
    pub name: String,
    /// Formatted race time, treated as opaque text.
    pub time: String,
    /// Championship points, 0 to 1000.
    pub points: u32,
}

/// A validated creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDriver {
    pub name: String,
    pub time: String,
    #[serde(default)]
    pub points: u32,
}

impl NewDriver {
    pub fn into_driver(self, id: DriverId) -> Driver {
        Driver {
            id,
            name: self.name,
            time: self.time,
            points: self.points,
        }
    }
}

/// A validated partial update. At least one field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

impl DriverPatch {
    /// Overwrite the fields of `driver` that are present and non-zero/non-empty here.
    ///
    /// `points: Some(0)` and empty strings leave the stored value untouched.
    /// Returns true if `points` changed.
    pub fn apply_to(&self, driver: &mut Driver) -> bool {
        if let Some(name) = self.name.as_ref().filter(|n| !n.is_empty()) {
            driver.name = name.clone();
        }
        if let Some(time) = self.time.as_ref().filter(|t| !t.is_empty()) {
            driver.time = time.clone();
        }
        match self.points.filter(|p| *p != 0) {
            Some(points) if points != driver.points => {
                driver.points = points;
                true
            }
            _ => false,
        }
    }
}
