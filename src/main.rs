use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use redboxman::Config;

mod backend;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("REDBOXMAN_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "redboxman")]
#[command(version = VERSION, about = "Click to place Red Box Man on a Wayland canvas")]
struct Cli {
    /// Red Box Man image to stamp on Ctrl+click (overrides config)
    #[arg(long, short = 'i', value_name = "PATH")]
    image: Option<PathBuf>,

    /// Read settings from this file instead of ~/.config/redboxman/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with the coordinate overlay hidden
    #[arg(long, action = ArgAction::SetTrue)]
    no_overlay: bool,

    /// Initial window width in pixels
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Initial window height in pixels
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let loaded = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };

        let mut config = loaded.unwrap_or_else(|e| {
            log::warn!("Failed to load config: {:#}. Using defaults.", e);
            Config::default()
        });

        if let Some(image) = &self.image {
            let path = image.to_str().with_context(|| {
                format!("Image path {} is not valid UTF-8", image.display())
            })?;
            config.image.path = path.to_string();
        }
        if self.no_overlay {
            config.overlay.enabled = false;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }

        config.validate_and_clamp();
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if std::env::var_os("WAYLAND_DISPLAY").is_none() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        return Err(anyhow::anyhow!(
            "WAYLAND_DISPLAY not set - run redboxman inside a Wayland session"
        ));
    }

    let config = cli.load_config()?;

    log::info!("Starting Red Box Man canvas...");
    log::info!("Controls:");
    log::info!("  - Shift+click: draw Red Box Man");
    log::info!("  - Ctrl+click: stamp the Red Box Man image");
    log::info!("  - Click: clear the canvas");
    log::info!("  - M: toggle coordinate overlay");
    log::info!("  - Escape: exit");

    backend::run_wayland(config)?;

    log::info!("Red Box Man canvas closed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_with(contents: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    fn parse(config: &Path, args: &[&str]) -> Cli {
        let mut argv = vec!["redboxman", "--config", config.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_override_config_file() {
        let (_dir, path) = config_with(
            "[window]\nwidth = 1024\nheight = 768\n[image]\npath = \"from/config.png\"\n",
        );
        let config = parse(
            &path,
            &["--image", "cli/man.png", "--no-overlay", "--width", "640"],
        )
        .load_config()
        .unwrap();

        assert_eq!(config.image.path, "cli/man.png");
        assert!(!config.overlay.enabled);
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 768);
    }

    #[test]
    fn config_file_applies_without_flags() {
        let (_dir, path) = config_with("[image]\npath = \"from/config.png\"\n");
        let config = parse(&path, &[]).load_config().unwrap();

        assert_eq!(config.image.path, "from/config.png");
        assert!(config.overlay.enabled);
    }

    #[test]
    fn size_flags_are_clamped() {
        let (_dir, path) = config_with("");
        let config = parse(&path, &["--width", "5", "--height", "100000"])
            .load_config()
            .unwrap();

        assert_eq!(config.window.width, 200);
        assert_eq!(config.window.height, 8192);
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let (_dir, path) = config_with("[window\nwidth = ");
        let config = parse(&path, &["--height", "480"]).load_config().unwrap();

        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.image.path, "images/RedBoxMan.png");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_image_path_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let (_dir, path) = config_with("");
        let cli = Cli::try_parse_from([
            OsStr::new("redboxman"),
            OsStr::new("--config"),
            path.as_os_str(),
            OsStr::new("--image"),
            OsStr::from_bytes(b"man-\xff.png"),
        ])
        .unwrap();

        let err = cli.load_config().unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
