//! Driver id generation.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::standings::driver::DriverId;

/// Produces fresh driver identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> DriverId;
}

/// Random UUID v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> DriverId {
        DriverId::from(Uuid::new_v4().to_string())
    }
}

/// Deterministic ids of the form `{prefix}-{n}`, starting at 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> DriverId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        DriverId::from(format!("{}-{}", self.prefix, n))
    }
}
