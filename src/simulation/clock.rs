//! Time sources
//!
//! Ticketing reads the current time through the [`Clock`] trait. Real runs
//! use [`SystemClock`]; simulations and tests use [`ManualClock`], which only
//! moves when told to.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Source of the current time
pub trait Clock: fmt::Debug {
    /// Current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually advanced clock
///
/// Clones share the same instant, so a simulation can keep a handle while
/// the ticket service owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a clock stopped at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { current: Rc::new(Cell::new(start)) }
    }

    /// Create a clock stopped at the current wall clock time
    pub fn starting_now() -> Self {
        Self::new(Utc::now())
    }

    /// Move the clock forward (or backward, for a negative duration)
    pub fn advance_by(&self, duration: Duration) {
        let next = self.current.get() + duration;
        debug!("Advanced manual clock by {} to {}", duration, next);
        self.current.set(next);
    }

    /// Jump to a specific instant
    pub fn set(&self, instant: DateTime<Utc>) {
        self.current.set(instant);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_advances() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance_by(Duration::minutes(90));
        assert_eq!(clock.now(), start + Duration::minutes(90));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::starting_now();
        let handle = clock.clone();
        let before = clock.now();

        handle.advance_by(Duration::hours(2));
        assert_eq!(clock.now(), before + Duration::hours(2));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
