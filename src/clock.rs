//! Cycle clock shared between the host loop and its plugins.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

/// Time source sampled once per processing cycle
pub trait Clock {
    /// Time at which the current processing cycle started
    fn cycle_start(&self) -> Instant;

    /// Check if at least `duration` passed between `since` and the cycle start
    ///
    /// A `since` later than the cycle start never counts as elapsed.
    fn has_elapsed(&self, since: Instant, duration: Duration) -> bool {
        self.cycle_start()
            .checked_duration_since(since)
            .is_some_and(|elapsed| elapsed >= duration)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn cycle_start(&self) -> Instant {
        (**self).cycle_start()
    }

    fn has_elapsed(&self, since: Instant, duration: Duration) -> bool {
        (**self).has_elapsed(since, duration)
    }
}

/// Clock advanced by the host at the start of every cycle
///
/// Plugins hold a shared reference and only ever read it.
pub struct CycleClock {
    start: Mutex<Cell<Instant>>,
}

impl CycleClock {
    pub const fn new() -> Self {
        Self::starting_at(Instant::from_ticks(0))
    }

    pub const fn starting_at(now: Instant) -> Self {
        Self {
            start: Mutex::new(Cell::new(now)),
        }
    }

    /// Record the start of a new processing cycle
    pub fn begin_cycle(&self, now: Instant) {
        critical_section::with(|cs| self.start.borrow(cs).set(now));
    }
}

impl Default for CycleClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for CycleClock {
    fn cycle_start(&self) -> Instant {
        critical_section::with(|cs| self.start.borrow(cs).get())
    }
}
