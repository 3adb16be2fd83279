// Turns pointer frames into canvas clicks; only the left button places or resets.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use redboxman::input::{ClickOutcome, MouseButton};

use super::super::state::WaylandState;

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!(
                        "Pointer entered canvas at ({}, {})",
                        event.position.0, event.position.1
                    );
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left canvas");
                }
                PointerEventKind::Press { button, .. } => {
                    let mb = match button {
                        BTN_LEFT => MouseButton::Left,
                        BTN_MIDDLE => MouseButton::Middle,
                        BTN_RIGHT => MouseButton::Right,
                        _ => continue,
                    };

                    // Observe a just-finished image read before deciding
                    self.poll_asset_load();

                    let (x, y) = event.position;
                    match self.input_state.on_mouse_press(mb, x, y) {
                        Some(ClickOutcome::ImageNotReady) => {
                            debug!("Ctrl+click at ({}, {}) ignored, image not ready", x, y);
                        }
                        Some(outcome) => debug!("Click at ({}, {}): {:?}", x, y, outcome),
                        None => {}
                    }
                }
                _ => {}
            }
        }
    }
}
