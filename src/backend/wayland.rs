// Wayland backend: an xdg-shell window whose buffer is painted with Cairo.
mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
