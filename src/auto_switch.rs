//! Automatic LED mode switching
//!
//! Shows the stalker effect while the user types and falls back to the
//! colormap once the keyboard has been quiet for the configured timeout.
//! Pressing a layer key while typing brings the colormap back immediately,
//! so the active layer stays visible.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::Clock;
use crate::effect::LedEffect;
use crate::key::KeyEvent;
use crate::plugin::{EventHandlerResult, Plugin};

/// Idle time after which the colormap is restored
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

/// Configuration for [`AutoSwitchLedMode`]
#[derive(Debug, Clone, Copy)]
pub struct AutoSwitchConfig {
    /// Idle time after the last key event before switching back to colormap
    pub timeout: Duration,
}

impl AutoSwitchConfig {
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for AutoSwitchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

/// Externally visible switch state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    /// Idle timer stopped, colormap shown
    Idle,
    /// Idle timer running, stalker shown
    Active,
}

/// Plugin toggling between a colormap and a stalker effect
pub struct AutoSwitchLedMode<C, M, S> {
    clock: C,
    colormap: M,
    stalker: S,
    timeout: Duration,

    timer_running: bool,
    start_time: Instant,
}

impl<C: Clock, M: LedEffect, S: LedEffect> AutoSwitchLedMode<C, M, S> {
    pub fn new(clock: C, colormap: M, stalker: S, config: &AutoSwitchConfig) -> Self {
        let start_time = clock.cycle_start();
        Self {
            clock,
            colormap,
            stalker,
            timeout: config.timeout,
            timer_running: false,
            start_time,
        }
    }

    pub const fn state(&self) -> SwitchState {
        if self.timer_running {
            SwitchState::Active
        } else {
            SwitchState::Idle
        }
    }

    pub const fn is_timer_running(&self) -> bool {
        self.timer_running
    }

    /// Cycle start time of the last observed key event
    pub const fn start_time(&self) -> Instant {
        self.start_time
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub const fn colormap(&self) -> &M {
        &self.colormap
    }

    pub const fn stalker(&self) -> &S {
        &self.stalker
    }
}

impl<C: Clock, M: LedEffect, S: LedEffect> Plugin for AutoSwitchLedMode<C, M, S> {
    fn on_key_event(&mut self, event: &mut KeyEvent) -> EventHandlerResult {
        self.start_time = self.clock.cycle_start();

        let toggled_on = event.toggled_on();
        let layer_key = event.key.is_layer_key();

        if self.timer_running && toggled_on && layer_key {
            #[cfg(feature = "esp32-log")]
            println!("[AutoSwitchLedMode.on_key_event] layer key, showing colormap");
            self.colormap.activate();
        }
        if !self.timer_running && toggled_on && !layer_key {
            #[cfg(feature = "esp32-log")]
            println!("[AutoSwitchLedMode.on_key_event] typing started, showing stalker");
            self.timer_running = true;
            self.stalker.activate();
        }

        EventHandlerResult::Ok
    }

    fn after_each_cycle(&mut self) -> EventHandlerResult {
        if self.timer_running && self.clock.has_elapsed(self.start_time, self.timeout) {
            #[cfg(feature = "esp32-log")]
            println!(
                "[AutoSwitchLedMode.after_each_cycle] idle for {:?} ms, showing colormap",
                self.timeout.as_millis()
            );
            self.timer_running = false;
            self.colormap.activate();
        }

        EventHandlerResult::Ok
    }
}
