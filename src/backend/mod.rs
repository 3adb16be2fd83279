use anyhow::Result;
use redboxman::Config;

pub mod wayland;

/// Opens the canvas window and runs its event loop until the user closes it.
pub fn run_wayland(config: Config) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(config)?;
    backend.run()
}
