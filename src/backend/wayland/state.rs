// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules, plus the canvas input state and the pending image load.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::{WaylandSurface, xdg::XdgShell}, shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use redboxman::{
    Config, InputState,
    assets::AssetLoader,
    draw::{CairoPainter, render_scene},
};

use super::surface::{SurfaceState, frame_layout};

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) xdg_shell: XdgShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    pub(super) surface: SurfaceState,
    pub(super) config: Config,

    pub(super) input_state: InputState,

    pub(super) assets: AssetLoader,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        xdg_shell: XdgShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
        assets: AssetLoader,
    ) -> Self {
        Self {
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            input_state,
            assets,
        }
    }

    /// Settles the image asset if the background read has finished.
    ///
    /// Called once per loop iteration and again right before a click is handled,
    /// so a Ctrl+click sees the newest readiness.
    pub(super) fn poll_asset_load(&mut self) {
        if let Some(outcome) = self.assets.try_take_result() {
            self.input_state.finish_asset_load(outcome);
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();
        let (stride, _) = frame_layout(width, height)?;

        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                stride,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: `canvas` is a live SlotPool slice of exactly height * stride bytes in
        // ARGB32 layout. `ctx` and `cairo_surface` are dropped below before the buffer
        // is attached, so Cairo never touches the memory after the compositor owns it.
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                stride,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;
        {
            let mut painter = CairoPainter::new(&ctx);
            render_scene(&mut painter, &self.input_state);
        }
        debug!(
            "Rendered {} figures, {} stamps",
            self.input_state.scene.shape_placements().len(),
            self.input_state.scene.image_placements().len()
        );

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        let wl_surface = self
            .surface
            .window()
            .context("Canvas window not created")?
            .wl_surface();

        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);

        if self.config.performance.enable_vsync {
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}
