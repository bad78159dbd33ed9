//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`W3D_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use wire3d_core::{Color, ProjectionMode};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub toolbar: ToolbarConfig,
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // W3D_TOOLBAR__FOV=500 -> toolbar.fov = 500
        figment = figment.merge(Env::prefixed("W3D_").split("__"));

        Ok(figment.extract()?)
    }
}

/// How model units map onto terminal cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Model units per terminal column
    pub cell_width: f64,
    /// Model units per terminal row
    pub cell_height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        // Terminal cells are roughly twice as tall as they are wide
        Self {
            cell_width: 5.0,
            cell_height: 10.0,
        }
    }
}

/// Initial toolbar values and key step sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolbarConfig {
    pub projection: ProjectionMode,
    /// Field-of-view distance for perspective projection
    pub fov: f64,
    /// Stroke color given to a shape when it is updated
    pub color: Color,
    pub background: Color,
    pub translate_step: f64,
    pub scale_step: f64,
    /// Degrees per key press
    pub rotate_step: f64,
    pub fov_step: f64,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionMode::Orthographic,
            fov: 1000.0,
            color: Color::WHITE,
            background: Color::BLACK,
            translate_step: 10.0,
            scale_step: 0.1,
            rotate_step: 5.0,
            fov_step: 50.0,
        }
    }
}

/// Which shapes start visible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub visible: Vec<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            visible: vec!["square".to_string()],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Configuration error
#[derive(Error, Debug)]
#[error("Configuration error: {0}")]
pub struct ConfigError(#[from] Box<figment::Error>);

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError(Box::new(e))
    }
}
