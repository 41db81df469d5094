//! Built-in seed dataset and store seeding.

use serde::{Deserialize, Serialize};

use crate::standings::driver::{DriverId, NewDriver};
use crate::standings::error::StandingsResult;
use crate::standings::store::DriverStore;
use crate::standings::teams::TeamRoster;

/// A driver loaded into the store at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDriver {
    /// Fixed id; generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub time: String,
    #[serde(default)]
    pub points: u32,
}

impl SeedDriver {
    fn new(name: &str, time: &str, points: u32) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            time: time.to_string(),
            points,
        }
    }

    pub fn to_new_driver(&self) -> NewDriver {
        NewDriver {
            name: self.name.clone(),
            time: self.time.clone(),
            points: self.points,
        }
    }
}

/// Load every seed entry through the store's insertion path.
pub fn seed_store(store: &mut DriverStore, seed: &[SeedDriver]) -> StandingsResult<()> {
    for entry in seed {
        match &entry.id {
            Some(id) => store.insert(DriverId::from(id.as_str()), entry.to_new_driver())?,
            None => store.create(entry.to_new_driver())?,
        };
    }
    tracing::info!(drivers = store.len(), "Driver store seeded");
    Ok(())
}

pub fn default_drivers() -> Vec<SeedDriver> {
    vec![
        SeedDriver::new("Max Verstappen", "1:27:38.241", 575),
        SeedDriver::new("Sergio Perez", "1:28:02.116", 285),
        SeedDriver::new("Lewis Hamilton", "1:27:59.870", 234),
        SeedDriver::new("Fernando Alonso", "1:28:11.502", 206),
        SeedDriver::new("Charles Leclerc", "1:28:05.733", 206),
        SeedDriver::new("Lando Norris", "1:28:07.914", 205),
        SeedDriver::new("Carlos Sainz", "1:28:14.380", 200),
        SeedDriver::new("George Russell", "1:28:21.045", 175),
        SeedDriver::new("Oscar Piastri", "1:28:26.667", 97),
        SeedDriver::new("Lance Stroll", "1:28:40.109", 74),
    ]
}

pub fn default_roster() -> Vec<TeamRoster> {
    let team = |name: &str, drivers: [&str; 2]| TeamRoster {
        name: name.to_string(),
        drivers: drivers.iter().map(|d| d.to_string()).collect(),
    };
    vec![
        team("Red Bull Racing", ["Max Verstappen", "Sergio Perez"]),
        team("Mercedes", ["Lewis Hamilton", "George Russell"]),
        team("Ferrari", ["Charles Leclerc", "Carlos Sainz"]),
        team("McLaren", ["Lando Norris", "Oscar Piastri"]),
        team("Aston Martin", ["Fernando Alonso", "Lance Stroll"]),
    ]
}
