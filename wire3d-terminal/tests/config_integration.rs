//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use wire3d_core::{Color, ProjectionMode};
use wire3d_terminal::config::AppConfig;
use wire3d_terminal::AppError;

const CONFIG_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config");

#[test]
#[serial]
fn test_default_file_is_loaded() {
    std::env::remove_var("W3D_TOOLBAR__FOV");
    let config = AppConfig::load_from(CONFIG_DIR).unwrap();
    assert_eq!(config.scene.visible, vec!["square".to_string(), "cube".to_string()]);
    assert_eq!(config.toolbar.color, Color::WHITE);
    assert_eq!(config.toolbar.projection, ProjectionMode::Orthographic);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("W3D_TOOLBAR__FOV", "500");
    let config = AppConfig::load_from(CONFIG_DIR).unwrap();
    assert_eq!(config.toolbar.fov, 500.0);
    std::env::remove_var("W3D_TOOLBAR__FOV");
}

#[test]
#[serial]
fn test_env_override_projection() {
    std::env::set_var("W3D_TOOLBAR__PROJECTION", "perspective");
    let config = AppConfig::load_from(CONFIG_DIR).unwrap();
    assert_eq!(config.toolbar.projection, ProjectionMode::Perspective);
    std::env::remove_var("W3D_TOOLBAR__PROJECTION");
}

#[test]
#[serial]
fn test_missing_directory_falls_back_to_defaults() {
    std::env::remove_var("W3D_TOOLBAR__FOV");
    let config = AppConfig::load_from("/nonexistent/wire3d/config").unwrap();
    assert_eq!(config.toolbar.fov, 1000.0);
    assert_eq!(config.scene.visible, vec!["square".to_string()]);
}

#[test]
#[serial]
fn test_malformed_user_config_is_an_app_error() {
    let dir = std::env::temp_dir().join(format!("wire3d-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("user.toml"), "[toolbar]\nfov = \"wide\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).unwrap();

    let err = AppError::from(result.unwrap_err());
    assert!(matches!(err, AppError::Config(_)));
    assert!(err.to_string().starts_with("Configuration error"));
}
