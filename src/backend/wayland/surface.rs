//! Window and shared-memory buffer bookkeeping for the Wayland backend.

use anyhow::{Context, Result, anyhow};
use log::info;
use smithay_client_toolkit::{
    shell::xdg::window::Window,
    shm::{Shm, slot::SlotPool},
};

const BYTES_PER_PIXEL: usize = 4;

/// Row stride and total byte size of one ARGB32 frame.
///
/// Fails instead of overflowing when the compositor configures an oversized window.
pub fn frame_layout(width: u32, height: u32) -> Result<(i32, usize)> {
    let stride = (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .filter(|stride| i32::try_from(*stride).is_ok())
        .ok_or_else(|| anyhow!("Canvas width {} is too large for a shm buffer", width))?;
    let frame_bytes = stride
        .checked_mul(height as usize)
        .filter(|bytes| i32::try_from(*bytes).is_ok())
        .ok_or_else(|| anyhow!("Canvas size {}x{} is too large for a shm buffer", width, height))?;
    Ok((stride as i32, frame_bytes))
}

/// Tracks the canvas window, its buffer pool, and the configured size.
pub struct SurfaceState {
    window: Option<Window>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    pub fn new() -> Self {
        Self {
            window: None,
            pool: None,
            width: 0,
            height: 0,
            configured: false,
            frame_callback_pending: false,
        }
    }

    pub fn set_window(&mut self, window: Window) {
        self.window = Some(window);
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Updates the size, returning `true` if it changed.
    ///
    /// A size change invalidates the buffer pool, which is dropped and rebuilt lazily.
    pub fn update_dimensions(&mut self, width: u32, height: u32) -> bool {
        let changed = self.width != width || self.height != height;
        self.width = width;
        self.height = height;
        if changed {
            self.pool = None;
        }
        changed
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    /// True once the compositor has sent the first configure.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Returns the buffer pool, creating one sized for `buffer_count` frames if needed.
    pub fn ensure_pool(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let (_, frame_bytes) = frame_layout(self.width, self.height)?;
            let pool_size = frame_bytes
                .checked_mul(buffer_count)
                .context("Buffer pool size overflows")?;
            info!(
                "Creating SlotPool for {}x{} canvas ({} bytes, {} buffers)",
                self.width, self.height, pool_size, buffer_count
            );
            let pool = SlotPool::new(pool_size, shm).context("Failed to create slot pool")?;
            self.pool = Some(pool);
        }

        self.pool
            .as_mut()
            .context("Buffer pool missing after creation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_layout_matches_argb32() {
        assert_eq!(frame_layout(800, 600).unwrap(), (3200, 1_920_000));
        assert_eq!(frame_layout(0, 0).unwrap(), (0, 0));
    }

    #[test]
    fn frame_layout_rejects_oversized_configure() {
        let err = frame_layout(33_000, 33_000).unwrap_err();
        assert!(err.to_string().contains("33000x33000"));
        assert!(frame_layout(u32::MAX, 1).is_err());
    }
}
