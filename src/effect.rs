//! LED effects the plugin switches between
//!
//! Effects are owned by the LED task. The plugin only asks for one of them
//! to become active through the [`LedEffect`] trait.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::queue::{Consumer, Producer, Queue};

const MODE_NAME_COLORMAP: &str = "colormap";
const MODE_NAME_STALKER: &str = "stalker";

const MODE_ID_COLORMAP: u8 = 0;
const MODE_ID_STALKER: u8 = 1;

/// Handle to an externally rendered LED effect
pub trait LedEffect {
    /// Make this effect the active one
    fn activate(&mut self);
}

impl<E: LedEffect + ?Sized> LedEffect for &mut E {
    fn activate(&mut self) {
        (**self).activate();
    }
}

/// Known LED modes that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LedMode {
    /// Keys colored by the active layer's palette
    Colormap = MODE_ID_COLORMAP,
    /// Light trails following recently pressed keys
    Stalker = MODE_ID_STALKER,
}

impl LedMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_COLORMAP => Self::Colormap,
            MODE_ID_STALKER => Self::Stalker,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Colormap => MODE_NAME_COLORMAP,
            Self::Stalker => MODE_NAME_STALKER,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_COLORMAP => Some(Self::Colormap),
            MODE_NAME_STALKER => Some(Self::Stalker),
            _ => None,
        }
    }
}

/// Queue of mode requests consumed by the LED task
pub type ModeRequestQueue<const SIZE: usize> = Queue<LedMode, SIZE>;

/// Type alias for mode request sender
pub type ModeRequestSender<'a, const SIZE: usize> = Producer<'a, LedMode, SIZE>;

/// Type alias for mode request receiver
pub type ModeRequestReceiver<'a, const SIZE: usize> = Consumer<'a, LedMode, SIZE>;

/// Effect handle that forwards activation to the LED task
///
/// Only the most recent request matters to the LED task, so a full queue
/// drops its oldest entry instead of the new one.
#[derive(Clone, Copy)]
pub struct ModeActivator<'a, const SIZE: usize> {
    mode: LedMode,
    requests: ModeRequestSender<'a, SIZE>,
}

impl<'a, const SIZE: usize> ModeActivator<'a, SIZE> {
    pub const fn new(mode: LedMode, requests: ModeRequestSender<'a, SIZE>) -> Self {
        Self { mode, requests }
    }

    pub const fn mode(&self) -> LedMode {
        self.mode
    }
}

impl<const SIZE: usize> LedEffect for ModeActivator<'_, SIZE> {
    fn activate(&mut self) {
        let evicted = self.requests.push_overwrite(self.mode);

        #[cfg(feature = "esp32-log")]
        if let Some(evicted) = evicted {
            println!(
                "[ModeActivator.activate] queue full, dropped {:?} request",
                evicted.as_str()
            );
        }
        #[cfg(not(feature = "esp32-log"))]
        let _ = evicted;
    }
}
