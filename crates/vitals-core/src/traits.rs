use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::probe::{ProbeReport, ProbeTarget};

/// Source of wall-clock time for response timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Checks a single health endpoint.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Probe `target`. Transport failures come back as an `offline` report,
    /// never as an error.
    async fn check(&self, target: &ProbeTarget) -> ProbeReport;
}
