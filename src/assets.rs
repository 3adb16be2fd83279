//! Asynchronous loading of the Red Box Man bitmap.
//!
//! Reading happens on the Tokio runtime; the event loop polls the shared slot
//! and decodes the PNG on the UI thread, because Cairo surfaces are not `Send`.

use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

/// Errors that can occur while loading the bitmap.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path}: {message}")]
    Decode { path: PathBuf, message: String },
}

/// A decoded image ready to be painted.
#[derive(Clone)]
pub struct Bitmap {
    surface: cairo::ImageSurface,
}

impl Bitmap {
    /// Decodes PNG data.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, cairo::IoError> {
        let mut cursor = Cursor::new(bytes);
        let surface = cairo::ImageSurface::create_from_png(&mut cursor)?;
        Ok(Self { surface })
    }

    /// Wraps an existing image surface.
    pub fn from_surface(surface: cairo::ImageSurface) -> Self {
        Self { surface }
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Readiness of the single bitmap asset.
#[derive(Debug, Clone, Default)]
pub enum AssetState {
    /// Load requested (or not yet requested); nothing drawable.
    #[default]
    Pending,
    /// Decoded and drawable.
    Ready(Bitmap),
    /// Read or decode failed; never becomes drawable.
    Failed(String),
}

impl AssetState {
    /// The "loaded" flag: true only once the bitmap is drawable.
    pub fn is_loaded(&self) -> bool {
        matches!(self, AssetState::Ready(_))
    }

    pub fn bitmap(&self) -> Option<&Bitmap> {
        match self {
            AssetState::Ready(bitmap) => Some(bitmap),
            _ => None,
        }
    }

    /// Turns a finished read into the final asset state, decoding the bytes.
    pub fn from_outcome(outcome: LoadOutcome) -> Self {
        match decode(outcome) {
            Ok(bitmap) => {
                log::info!(
                    "Red Box Man image ready ({}x{})",
                    bitmap.width(),
                    bitmap.height()
                );
                AssetState::Ready(bitmap)
            }
            Err(err) => {
                log::warn!("{}", err);
                AssetState::Failed(err.to_string())
            }
        }
    }
}

fn decode(outcome: LoadOutcome) -> Result<Bitmap, AssetError> {
    let LoadOutcome { path, result } = outcome;
    let bytes = result?;
    Bitmap::from_png_bytes(&bytes).map_err(|err| AssetError::Decode {
        path,
        message: err.to_string(),
    })
}

/// Raw result of a background read.
#[derive(Debug)]
pub struct LoadOutcome {
    pub path: PathBuf,
    pub result: Result<Vec<u8>, AssetError>,
}

/// Fetches the bitmap off the UI thread and hands the bytes back through a shared slot.
#[derive(Clone)]
pub struct AssetLoader {
    runtime_handle: tokio::runtime::Handle,
    last_result: Arc<Mutex<Option<LoadOutcome>>>,
}

impl AssetLoader {
    /// Creates a loader that spawns reads on `runtime_handle`.
    pub fn new(runtime_handle: &tokio::runtime::Handle) -> Self {
        Self {
            runtime_handle: runtime_handle.clone(),
            last_result: Arc::new(Mutex::new(None)),
        }
    }

    /// Starts reading `path` in the background and returns immediately.
    ///
    /// There is no cancellation; the outcome is observed with
    /// [`AssetLoader::try_take_result`].
    pub fn load(&self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        let slot = self.last_result.clone();
        log::info!("Loading image from {}", path.display());

        self.runtime_handle.spawn(async move {
            let result = tokio::fs::read(&path)
                .await
                .map_err(|source| AssetError::Io {
                    path: path.clone(),
                    source,
                });
            log::debug!(
                "Image read finished for {} (ok = {})",
                path.display(),
                result.is_ok()
            );
            *slot.lock().await = Some(LoadOutcome { path, result });
        });
    }

    /// Takes the finished read, if any, without waiting.
    pub fn try_take_result(&self) -> Option<LoadOutcome> {
        self.last_result.try_lock().ok().and_then(|mut r| r.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn png_bytes(width: i32, height: i32) -> Vec<u8> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
        let mut bytes = Vec::new();
        surface.write_to_png(&mut bytes).unwrap();
        bytes
    }

    fn wait_for(loader: &AssetLoader) -> LoadOutcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = loader.try_take_result() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "image load never completed");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn pending_is_not_loaded() {
        let state = AssetState::default();
        assert!(!state.is_loaded());
        assert!(state.bitmap().is_none());
    }

    #[test]
    fn decoded_png_becomes_ready() {
        let state = AssetState::from_outcome(LoadOutcome {
            path: PathBuf::from("man.png"),
            result: Ok(png_bytes(12, 7)),
        });
        let bitmap = state.bitmap().expect("ready");
        assert_eq!((bitmap.width(), bitmap.height()), (12, 7));
    }

    #[test]
    fn garbage_bytes_fail() {
        let state = AssetState::from_outcome(LoadOutcome {
            path: PathBuf::from("man.png"),
            result: Ok(b"not a png".to_vec()),
        });
        assert!(matches!(state, AssetState::Failed(_)));
        assert!(!state.is_loaded());
    }

    #[test]
    fn loader_reads_file_in_background() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("RedBoxMan.png");
        std::fs::write(&path, png_bytes(4, 4)).unwrap();

        let loader = AssetLoader::new(runtime.handle());
        loader.load(&path);

        let outcome = wait_for(&loader);
        assert_eq!(outcome.path, path);
        assert!(AssetState::from_outcome(outcome).is_loaded());
        assert!(loader.try_take_result().is_none());
    }

    #[test]
    fn loader_reports_missing_file() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let dir = tempfile::tempdir().unwrap();

        let loader = AssetLoader::new(runtime.handle());
        loader.load(dir.path().join("missing.png"));

        let outcome = wait_for(&loader);
        assert!(matches!(outcome.result, Err(AssetError::Io { .. })));
        assert!(matches!(
            AssetState::from_outcome(outcome),
            AssetState::Failed(_)
        ));
    }
}
