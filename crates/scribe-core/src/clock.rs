//! Time sources for autosave scheduling and draft timestamps.

use std::cell::Cell;

use chrono::{DateTime, Utc};
use web_time::{Duration, Instant};

/// Clock used by the controller.
///
/// `now` is monotonic and drives debounce deadlines; `now_utc` stamps saved
/// drafts.
pub trait Clock {
    fn now(&self) -> Instant;
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall clock backed by `web_time` (performance.now() in the browser).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually advanced clock for tests and headless hosts.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    epoch: DateTime<Utc>,
    elapsed: Cell<Duration>,
}

impl ManualClock {
    pub fn new(epoch: DateTime<Utc>) -> Self {
        Self {
            origin: Instant::now(),
            epoch,
            elapsed: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        // Elapsed time is bounded by test durations, well inside chrono's range.
        self.epoch
            + chrono::Duration::from_std(self.elapsed.get()).unwrap_or(chrono::Duration::zero())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        (**self).now_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_advances_both_times() {
        let epoch = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::new(epoch);
        let start = clock.now();

        clock.advance(Duration::from_millis(1500));

        assert_eq!(clock.now() - start, Duration::from_millis(1500));
        assert_eq!(
            clock.now_utc(),
            epoch + chrono::Duration::milliseconds(1500)
        );
    }
}
