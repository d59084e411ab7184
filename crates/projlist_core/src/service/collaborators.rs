//! Injected identity and time sources.

use crate::model::project::ProjectId;
use crate::service::command::CommandError;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Produces fresh project ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> ProjectId;
}

/// Produces the current time as Unix epoch milliseconds.
pub trait Clock {
    fn now_epoch_ms(&self) -> Result<i64, CommandError>;
}

/// Random UUID v4 generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> ProjectId {
        Uuid::new_v4()
    }
}

/// Wall clock backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> Result<i64, CommandError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| CommandError::ClockUnavailable)?;
        i64::try_from(elapsed.as_millis()).map_err(|_| CommandError::ClockUnavailable)
    }
}
