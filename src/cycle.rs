//! Host processing cycle.
//!
//! Portable cycle driver without async/await or platform-specific timers.
//! The caller scans the matrix, pushes key events into a [`KeyEventQueue`]
//! and calls [`CycleRunner::run_cycle`] once per loop iteration.

use embassy_time::Instant;

use crate::clock::CycleClock;
use crate::key::KeyEvent;
use crate::plugin::{EventHandlerResult, Plugin};
use crate::queue::{Consumer, Producer, Queue};

/// Type alias for the key event queue
pub type KeyEventQueue<const SIZE: usize> = Queue<KeyEvent, SIZE>;

/// Type alias for key event sender
pub type KeyEventSender<'a, const SIZE: usize> = Producer<'a, KeyEvent, SIZE>;

/// Type alias for key event receiver
pub type KeyEventReceiver<'a, const SIZE: usize> = Consumer<'a, KeyEvent, SIZE>;

/// Summary of one processing cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Key events dispatched in this cycle
    pub events: usize,
    /// Events a plugin answered with something other than `Ok`
    pub consumed: usize,
    /// Result of the end-of-cycle hook
    pub after_cycle: EventHandlerResult,
}

/// Runs plugins once per host cycle
///
/// # Usage
///
/// ```ignore
/// static CLOCK: CycleClock = CycleClock::new();
/// static EVENTS: KeyEventQueue<8> = KeyEventQueue::new();
///
/// let mut runner = CycleRunner::new(&CLOCK, EVENTS.consumer(), plugin);
/// loop {
///     scan_matrix(EVENTS.producer());
///     runner.run_cycle(Instant::now());
/// }
/// ```
pub struct CycleRunner<'a, P, const SIZE: usize> {
    clock: &'a CycleClock,
    events: KeyEventReceiver<'a, SIZE>,
    plugin: P,
}

impl<'a, P: Plugin, const SIZE: usize> CycleRunner<'a, P, SIZE> {
    pub const fn new(clock: &'a CycleClock, events: KeyEventReceiver<'a, SIZE>, plugin: P) -> Self {
        Self {
            clock,
            events,
            plugin,
        }
    }

    /// Process one cycle
    ///
    /// 1. Stamps the cycle start on the shared clock
    /// 2. Dispatches every queued key event to the plugin
    /// 3. Runs the end-of-cycle hook
    pub fn run_cycle(&mut self, now: Instant) -> CycleReport {
        self.clock.begin_cycle(now);

        let mut report = CycleReport::default();
        while let Ok(mut event) = self.events.pop() {
            report.events += 1;
            if !self.plugin.on_key_event(&mut event).is_ok() {
                report.consumed += 1;
            }
        }
        report.after_cycle = self.plugin.after_each_cycle();

        report
    }

    /// Get a reference to the plugin.
    pub fn plugin(&self) -> &P {
        &self.plugin
    }

    /// Get a mutable reference to the plugin.
    pub fn plugin_mut(&mut self) -> &mut P {
        &mut self.plugin
    }
}
