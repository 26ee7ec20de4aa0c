//! Hooks the host firmware calls on every registered plugin.

use crate::key::KeyEvent;

/// Outcome of a plugin hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventHandlerResult {
    /// Continue normal processing
    #[default]
    Ok,
    /// The plugin handled the event, later plugins must not see it
    EventConsumed,
    /// Drop the event entirely
    Abort,
}

impl EventHandlerResult {
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Plugin interface of the host event loop
///
/// Both hooks default to doing nothing.
pub trait Plugin {
    /// Called for every key state change
    fn on_key_event(&mut self, _event: &mut KeyEvent) -> EventHandlerResult {
        EventHandlerResult::Ok
    }

    /// Called once at the end of every processing cycle
    fn after_each_cycle(&mut self) -> EventHandlerResult {
        EventHandlerResult::Ok
    }
}

impl<P: Plugin + ?Sized> Plugin for &mut P {
    fn on_key_event(&mut self, event: &mut KeyEvent) -> EventHandlerResult {
        (**self).on_key_event(event)
    }

    fn after_each_cycle(&mut self) -> EventHandlerResult {
        (**self).after_each_cycle()
    }
}

/// Two plugins run in order
///
/// A key event reaches the second plugin only if the first one returned
/// [`EventHandlerResult::Ok`]. Both always see the end of the cycle.
impl<A: Plugin, B: Plugin> Plugin for (A, B) {
    fn on_key_event(&mut self, event: &mut KeyEvent) -> EventHandlerResult {
        match self.0.on_key_event(event) {
            EventHandlerResult::Ok => self.1.on_key_event(event),
            other => other,
        }
    }

    fn after_each_cycle(&mut self) -> EventHandlerResult {
        let first = self.0.after_each_cycle();
        let second = self.1.after_each_cycle();
        if first.is_ok() { second } else { first }
    }
}
