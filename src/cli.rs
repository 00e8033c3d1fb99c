// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::ViewportConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-viewport")]
#[command(about = "Interactive 3D viewport with camera collision", long_about = None)]
pub struct Cli {
    /// JSON file with viewport settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Camera collision radius in world units
    #[arg(long)]
    pub radius: Option<f32>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    pub fn viewport_config(&self) -> Result<ViewportConfig> {
        let mut config = match &self.config {
            Some(path) => ViewportConfig::load(path)?,
            None => ViewportConfig::default(),
        };

        if let Some(radius) = self.radius {
            config.camera.collision_radius = radius;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_gives_defaults() {
        let cli = Cli::parse_from(["scene-viewport"]);
        assert_eq!(cli.viewport_config().unwrap(), ViewportConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["scene-viewport", "--radius", "0.25", "--width", "1280"]);
        let config = cli.viewport_config().unwrap();
        assert_eq!(config.camera.collision_radius, 0.25);
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 1080);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = Cli::parse_from(["scene-viewport", "--height", "0"]);
        assert!(cli.viewport_config().is_err());
    }
}
