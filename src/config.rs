//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`MT3_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use mt3_math::Vector3;
use mt3_present::{LabelLayout, WireframeStyle};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Label table spacing
    #[serde(default)]
    pub labels: LabelLayout,
    /// Wireframe sizes
    #[serde(default)]
    pub wireframe: WireframeStyle,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`MT3_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // MT3_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("MT3_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Width over height of the window
    pub fn aspect_ratio(&self) -> f32 {
        self.window.width as f32 / self.window.height.max(1) as f32
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "MT3".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting scale [x, y, z]
    pub scale: [f32; 3],
    /// Starting rotation in radians [x, y, z]
    pub rotate: [f32; 3],
    /// Starting position [x, y, z]
    pub translate: [f32; 3],
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Translation per frame while a move key is held
    pub move_speed: f32,
    /// Rotation per frame in radians while a turn key is held
    pub rotate_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            scale: [1.0, 1.0, 1.0],
            rotate: [0.26, 0.0, 0.0],
            translate: [0.0, 1.9, -6.49],
            fov_y: 0.45,
            near: 0.1,
            far: 100.0,
            move_speed: 0.05,
            rotate_speed: 0.02,
        }
    }
}

impl CameraConfig {
    pub fn scale(&self) -> Vector3 {
        Vector3::from(self.scale)
    }

    pub fn rotate(&self) -> Vector3 {
        Vector3::from(self.rotate)
    }

    pub fn translate(&self) -> Vector3 {
        Vector3::from(self.translate)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.labels.column_width, 60);
        assert_eq!(config.labels.row_height, 20);
        assert_eq!(config.wireframe.grid_subdivisions, 10);
        assert_eq!(config.camera.translate(), Vector3::new(0.0, 1.9, -6.49));
    }

    #[test]
    fn test_aspect_ratio() {
        let config = AppConfig::default();
        assert!((config.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("column_width"));
        assert!(toml.contains("grid_half_width"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str("[camera]\nfov_y = 0.8\n").unwrap();
        assert_eq!(config.camera.fov_y, 0.8);
        assert_eq!(config.camera.far, 100.0);
        assert_eq!(config.window.height, 720);
    }
}
