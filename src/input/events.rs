//! Generic input event types, independent of the windowing backend.

/// Keys the canvas reacts to.
///
/// Backend implementations map their native key codes to these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button; the only one that places or clears figures
    Left,
    Right,
    Middle,
}

/// A pointer-down on the canvas.
///
/// Coordinates are in the host's client space; the input handler subtracts
/// the surface origin to get canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    /// Shift held: place a drawn figure
    pub shift: bool,
    /// Ctrl held: stamp the bitmap
    pub ctrl: bool,
}

impl PointerEvent {
    /// A click with no modifiers held.
    pub fn plain(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            shift: false,
            ctrl: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }
}
