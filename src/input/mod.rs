//! Input handling for the canvas.
//!
//! This module translates backend keyboard and pointer events into scene
//! changes: placing figures, clearing the canvas, and toggling the
//! coordinate overlay.

pub mod events;
pub mod modifiers;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton, PointerEvent};
pub use modifiers::{Modifiers, PlacementMode};
pub use state::{ClickOutcome, InputState, OverlaySettings, PointerState};
