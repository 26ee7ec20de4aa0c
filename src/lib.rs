#![no_std]

pub mod auto_switch;
pub mod clock;
pub mod cycle;
pub mod effect;
pub mod key;
pub mod plugin;
pub mod queue;

pub use auto_switch::{AutoSwitchConfig, AutoSwitchLedMode, DEFAULT_TIMEOUT, SwitchState};
pub use clock::{Clock, CycleClock};
pub use cycle::{CycleReport, CycleRunner, KeyEventQueue, KeyEventReceiver, KeyEventSender};
pub use effect::{
    LedEffect, LedMode, ModeActivator, ModeRequestQueue, ModeRequestReceiver, ModeRequestSender,
};
pub use key::{Key, KeyAddr, KeyEvent, KeyState, LayerAction};
pub use plugin::{EventHandlerResult, Plugin};
pub use queue::{Queue, QueueEmpty, QueueFull};

pub use embassy_time::{Duration, Instant};
