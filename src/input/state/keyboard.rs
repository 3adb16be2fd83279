use crate::input::events::Key;
use crate::input::modifiers::Modifiers;

use super::InputState;

/// Key that toggles the coordinate overlay.
pub const TOGGLE_OVERLAY_KEY: char = 'm';

impl InputState {
    /// Processes a key press event.
    ///
    /// - Shift/Ctrl/Alt: tracked for the next pointer-down
    /// - `m`: toggle the coordinate overlay
    /// - Escape: request exit
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = true,
            Key::Ctrl => self.modifiers.ctrl = true,
            Key::Alt => self.modifiers.alt = true,
            Key::Escape => {
                log::info!("Escape pressed, closing canvas");
                self.should_exit = true;
            }
            Key::Char(c) if c.eq_ignore_ascii_case(&TOGGLE_OVERLAY_KEY) => {
                self.toggle_overlay();
            }
            Key::Char(_) | Key::Unknown => {}
        }
    }

    /// Processes a key release event.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }

    /// Replaces the modifier state with the compositor's view of it.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }
}
