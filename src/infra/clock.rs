use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

use crate::engine::Clock;

/// Системные часы (wall-clock).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Детерминированные часы для тестов и реплея.
/// Время двигается только руками через `set` / `advance`.
#[derive(Clone, Debug)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Cell::new(now) }
    }

    /// Часы, стоящие на `millis` от эпохи.
    pub fn from_millis(millis: i64) -> Self {
        Self::at(DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default())
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
