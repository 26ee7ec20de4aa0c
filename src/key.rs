//! Key events delivered by the host firmware
//!
//! One event describes one key changing state during a scan cycle.

const IS_PRESSED: u8 = 1 << 0;
const WAS_PRESSED: u8 = 1 << 1;
const INJECTED: u8 = 1 << 2;

/// Position of a key in the switch matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyAddr {
    pub row: u8,
    pub col: u8,
}

impl KeyAddr {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Current and previous switch state of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState(u8);

impl KeyState {
    /// Not pressed in this scan nor the previous one
    pub const IDLE: Self = Self(0);
    /// Pressed in this scan only
    pub const PRESSED: Self = Self(IS_PRESSED);
    /// Pressed in this scan and the previous one
    pub const HELD: Self = Self(IS_PRESSED | WAS_PRESSED);
    /// Pressed in the previous scan only
    pub const RELEASED: Self = Self(WAS_PRESSED);

    pub const fn new(is_pressed: bool, was_pressed: bool) -> Self {
        let mut bits = 0;
        if is_pressed {
            bits |= IS_PRESSED;
        }
        if was_pressed {
            bits |= WAS_PRESSED;
        }
        Self(bits)
    }

    /// Mark the state as generated by firmware instead of the matrix
    #[must_use]
    pub const fn injected(self) -> Self {
        Self(self.0 | INJECTED)
    }

    pub const fn is_pressed(self) -> bool {
        self.0 & IS_PRESSED != 0
    }

    pub const fn was_pressed(self) -> bool {
        self.0 & WAS_PRESSED != 0
    }

    pub const fn is_injected(self) -> bool {
        self.0 & INJECTED != 0
    }

    /// Key went down in this scan
    pub const fn toggled_on(self) -> bool {
        self.is_pressed() && !self.was_pressed()
    }

    /// Key went up in this scan
    pub const fn toggled_off(self) -> bool {
        !self.is_pressed() && self.was_pressed()
    }
}

/// How a layer key changes the active keymap layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerAction {
    /// Active while held
    Shift,
    /// Toggled on press
    Lock,
    /// Replaces the whole layer stack
    Move,
}

/// Keymap entry bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Key {
    #[default]
    NoKey,
    /// Falls through to the next active layer
    Transparent,
    /// HID keyboard usage code
    Keyboard(u8),
    /// Layer switching key
    Layer { layer: u8, action: LayerAction },
}

impl Key {
    pub const fn layer_shift(layer: u8) -> Self {
        Self::Layer {
            layer,
            action: LayerAction::Shift,
        }
    }

    pub const fn is_layer_key(self) -> bool {
        matches!(self, Self::Layer { .. })
    }
}

/// Key state change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub addr: KeyAddr,
    pub state: KeyState,
    pub key: Key,
}

impl KeyEvent {
    pub const fn new(addr: KeyAddr, state: KeyState, key: Key) -> Self {
        Self { addr, state, key }
    }

    pub const fn toggled_on(&self) -> bool {
        self.state.toggled_on()
    }
}
