use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CanvasResult;

/// Startup configuration for the paint surface. Loaded once; the
/// canvas resolution and placement never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas resolution in logical pixels.
    pub width: usize,
    pub height: usize,
    /// Side length of the blocks drawn for each rasterized line point.
    pub stroke_size: i32,
    /// Decorative frame drawn around the canvas. Missing asset is
    /// fatal at startup.
    pub border_asset: PathBuf,
    /// How far the frame sits outside the canvas bounds, in pixels.
    pub border_offset: i32,
    /// Destination of the PNG export.
    pub export_path: PathBuf,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 720,
            stroke_size: 2,
            border_asset: PathBuf::from("res/png/border.png"),
            border_offset: 16,
            export_path: PathBuf::from("out.png"),
        }
    }
}

impl CanvasConfig {
    /// Read a config from a JSON file. Unknown resolution or paths are
    /// the caller's problem; missing fields fall back to defaults.
    pub fn load(path: &Path) -> CanvasResult<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: &Path) -> CanvasResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CanvasConfig::default();
        assert_eq!(config.width, 1080);
        assert_eq!(config.height, 720);
        assert_eq!(config.stroke_size, 2);
        assert_eq!(config.border_offset, 16);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = CanvasConfig::default();
        config.width = 640;
        config.export_path = PathBuf::from("drawing.png");

        let path = std::env::temp_dir().join("pixelpaint_config_test.json");
        config.save(&path).unwrap();
        let loaded = CanvasConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.width, 640);
        assert_eq!(loaded.height, 720);
        assert_eq!(loaded.export_path, PathBuf::from("drawing.png"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: CanvasConfig = serde_json::from_str(r#"{"width": 320}"#).unwrap();
        assert_eq!(loaded.width, 320);
        assert_eq!(loaded.height, 720);
        assert_eq!(loaded.stroke_size, 2);
    }
}
