//! Library exports for the Red Box Man canvas.
//!
//! Exposes the scene, input handling, rendering, asset loading, and
//! configuration so they can be driven without a Wayland connection
//! (tests render into in-memory Cairo surfaces).

pub mod assets;
pub mod config;
pub mod draw;
pub mod input;
pub mod scene;

pub use config::Config;
pub use input::InputState;
pub use scene::{Location, Scene};
