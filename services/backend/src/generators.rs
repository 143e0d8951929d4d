//! Identity and clock collaborators
//!
//! The creation workflow receives these as trait objects so tests can pin
//! the generated id and timestamp.

use chrono::Utc;
use shared::{BetId, CreationDate};
use uuid::Uuid;

use crate::errors::Result;

pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> Result<BetId>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Result<CreationDate>;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn new_id(&self) -> Result<BetId> {
        Ok(BetId::new(Uuid::new_v4()))
    }
}

/// Wall clock in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<CreationDate> {
        Ok(CreationDate::from(Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique() {
        let generator = UuidIdGenerator;
        let a = generator.new_id().unwrap();
        let b = generator.new_id().unwrap();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_system_clock_is_iso_8601() {
        let now = SystemClock.now().unwrap();
        assert!(now.as_str().ends_with('Z'));
        assert!(CreationDate::try_from(now.as_str()).is_ok());
    }
}
