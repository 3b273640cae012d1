//! Shared fixtures for task unit tests.

use crate::account::domain::AccountId;
use crate::task::domain::{Task, TaskDetails, TaskTitle};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances one second per reading, so creation order is
/// strictly increasing.
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            start: Utc
                .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
                .single()
                .expect("valid start instant"),
            ticks: AtomicI64::new(0),
        }
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

pub fn task_titled(owner: AccountId, title: &str, clock: &SteppingClock) -> Task {
    let details = TaskDetails::new(TaskTitle::new(title).expect("valid title"));
    Task::new(owner, details, clock)
}
