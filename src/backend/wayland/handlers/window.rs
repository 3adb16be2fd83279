// Handles toplevel configure and close requests for the canvas window.
use log::info;
use smithay_client_toolkit::shell::xdg::window::{Window, WindowConfigure, WindowHandler};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl WindowHandler for WaylandState {
    fn request_close(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _window: &Window) {
        info!("Window close requested");
        self.input_state.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _window: &Window,
        configure: WindowConfigure,
        _serial: u32,
    ) {
        // A missing dimension leaves the choice to us
        let width = configure
            .new_size
            .0
            .map_or(self.config.window.width, |w| w.get());
        let height = configure
            .new_size
            .1
            .map_or(self.config.window.height, |h| h.get());

        info!("Window configured: {}x{}", width, height);

        if self.surface.update_dimensions(width, height) {
            info!("Canvas size changed, buffer pool will be recreated");
        }
        self.input_state.update_surface_dimensions(width, height);

        self.surface.set_configured(true);
        self.input_state.needs_redraw = true;
    }
}
