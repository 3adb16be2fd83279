mod core;
mod keyboard;
mod pointer;

pub use core::{InputState, OverlaySettings, PointerState};
pub use pointer::ClickOutcome;
