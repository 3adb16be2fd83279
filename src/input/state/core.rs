//! Application state shared by the input handler and the renderer.

use crate::assets::{AssetState, LoadOutcome};
use crate::draw::{Color, FontDescriptor, Surface, color::BLACK};
use crate::input::modifiers::Modifiers;
use crate::scene::Scene;

/// Where and how the pointer coordinates are printed.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySettings {
    /// Font used for the coordinate text
    pub font: FontDescriptor,
    /// Stroke color of the text outline
    pub color: Color,
    /// Baseline start X, in surface pixels
    pub x: f64,
    /// Baseline Y, in surface pixels
    pub y: f64,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            font: FontDescriptor::default(),
            color: BLACK,
            x: 10.0,
            y: 50.0,
        }
    }
}

/// Last known pointer position relative to the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    /// Whether the coordinate overlay is drawn
    pub overlay_enabled: bool,
}

/// Everything the canvas knows about itself.
///
/// Owned by the backend; mutated only through the pointer and keyboard
/// handlers and read by [`crate::draw::render_scene`].
pub struct InputState {
    /// Drawing surface geometry and background
    pub surface: Surface,
    /// Placed figures
    pub scene: Scene,
    /// Pointer position and overlay flag
    pub pointer: PointerState,
    /// Overlay text styling
    pub overlay: OverlaySettings,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Readiness of the Red Box Man bitmap
    pub asset: AssetState,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the user asked to close the canvas
    pub should_exit: bool,
    /// Set by a reset click; the next frame is cleared and nothing else
    pub(crate) blank: bool,
}

impl InputState {
    /// Creates the initial state: empty scene, pointer at the origin, image pending.
    pub fn with_defaults(surface: Surface, overlay: OverlaySettings, overlay_enabled: bool) -> Self {
        Self {
            surface,
            scene: Scene::new(),
            pointer: PointerState {
                x: 0.0,
                y: 0.0,
                overlay_enabled,
            },
            overlay,
            modifiers: Modifiers::new(),
            asset: AssetState::Pending,
            needs_redraw: true,
            should_exit: false,
            blank: false,
        }
    }

    /// Applies the host's layout size to the surface.
    pub fn update_surface_dimensions(&mut self, width: u32, height: u32) {
        if self.surface.initialize(width, height) {
            log::debug!("Surface resized to {}x{}", width, height);
        }
        self.needs_redraw = true;
    }

    /// Flips whether the pointer coordinates are drawn. Nothing else changes.
    pub fn toggle_overlay(&mut self) -> bool {
        self.pointer.overlay_enabled = !self.pointer.overlay_enabled;
        log::info!(
            "Coordinate overlay {}",
            if self.pointer.overlay_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        self.needs_redraw = true;
        self.pointer.overlay_enabled
    }

    /// Whether the next frame should be left empty after a reset.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Whether a control-click would currently stamp the bitmap.
    pub fn image_loaded(&self) -> bool {
        self.asset.is_loaded()
    }

    /// Records the outcome of the background image read.
    ///
    /// Ignored once the asset has settled; the image is loaded exactly once.
    pub fn finish_asset_load(&mut self, outcome: LoadOutcome) {
        if !matches!(self.asset, AssetState::Pending) {
            log::debug!(
                "Ignoring late image result for {}",
                outcome.path.display()
            );
            return;
        }
        self.asset = AssetState::from_outcome(outcome);
    }
}
