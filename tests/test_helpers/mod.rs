//! Shared clocks and constants for integration tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// PBKDF2 iterations low enough to keep tests fast.
pub const FAST_HASH_ITERATIONS: u32 = 16;

/// Session signing secret used by integration tests.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Clock that advances one second per reading so that creation order is
/// strictly increasing and reproducible.
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    /// Starts the clock at 2026-03-01T09:00:00Z.
    pub fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self {
            start,
            ticks: AtomicI64::new(0),
        }
    }
}

impl SteppingClock {
    /// Moves the clock forward by `by` on top of the per-reading step.
    pub fn advance(&self, by: Duration) {
        self.ticks.fetch_add(by.num_seconds(), Ordering::SeqCst);
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}
