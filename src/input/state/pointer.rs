use crate::draw::SurfaceRect;
use crate::input::events::{MouseButton, PointerEvent};
use crate::input::modifiers::PlacementMode;
use crate::scene::Location;
use log::debug;

use super::InputState;

/// What a pointer-down ended up doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// A drawn figure was appended at this location
    ShapePlaced(Location),
    /// A bitmap stamp was appended at this location
    ImagePlaced(Location),
    /// Ctrl-click before the image was ready; nothing changed
    ImageNotReady,
    /// Both sequences and the surface were cleared
    Reset,
}

impl InputState {
    /// Stores the event position relative to `bounds` and requests a redraw.
    pub fn update_pointer_position(&mut self, event: &PointerEvent, bounds: SurfaceRect) {
        self.pointer.x = event.client_x - bounds.left;
        self.pointer.y = event.client_y - bounds.top;
        self.blank = false;
        self.needs_redraw = true;
    }

    /// Handles a primary-button press on the canvas.
    ///
    /// # Behavior
    /// - Shift: append a drawn figure at the pointer
    /// - Ctrl: append a bitmap stamp if the image is loaded, otherwise no-op
    /// - Neither: clear both sequences and the surface
    pub fn on_pointer_down(&mut self, event: PointerEvent) -> ClickOutcome {
        let bounds = self.surface.bounds();
        self.update_pointer_position(&event, bounds);

        let location = Location::new(self.pointer.x, self.pointer.y);
        let outcome = match PlacementMode::for_click(event.shift, event.ctrl) {
            PlacementMode::Shape => {
                self.scene.push_shape(location);
                ClickOutcome::ShapePlaced(location)
            }
            PlacementMode::Image => {
                if self.image_loaded() {
                    self.scene.push_image(location);
                    ClickOutcome::ImagePlaced(location)
                } else {
                    ClickOutcome::ImageNotReady
                }
            }
            PlacementMode::Reset => {
                self.scene.clear();
                self.blank = true;
                ClickOutcome::Reset
            }
        };

        debug!(
            "Pointer down at ({}, {}): {:?} ({} shapes, {} images)",
            location.x,
            location.y,
            outcome,
            self.scene.shape_placements().len(),
            self.scene.image_placements().len()
        );
        self.needs_redraw = true;
        outcome
    }

    /// Dispatches a backend button press; only the left button acts on the canvas.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) -> Option<ClickOutcome> {
        if button != MouseButton::Left {
            debug!("Ignoring {:?} button press", button);
            return None;
        }

        let event = PointerEvent {
            client_x: x,
            client_y: y,
            shift: self.modifiers.shift,
            ctrl: self.modifiers.ctrl,
        };
        Some(self.on_pointer_down(event))
    }
}
