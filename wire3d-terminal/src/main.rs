/// Wire3D Terminal - interactive wireframe scene
///
/// Controls:
///   - 1-8: Select a shape
///   - Up/Down: Choose the transform field
///   - Left/Right: Change the field's value
///   - C: Cycle stroke color, V: Toggle visibility
///   - P: Toggle projection, [ / ]: Change fov
///   - R: Reset the selected shape
///   - Q/ESC: Quit
use wire3d_core::Scene;
use wire3d_terminal::{AppConfig, AppError, TerminalApp};

fn main() -> Result<(), AppError> {
    // A malformed user.toml is fatal; missing files just leave defaults
    let config = AppConfig::load()?;

    let filter = env_logger::Env::default().default_filter_or(&config.debug.log_level);
    env_logger::Builder::from_env(filter).init();

    let scene = Scene::demo();
    log::info!("loaded demo scene with {} shapes", scene.len());

    let mut app = TerminalApp::new(scene, &config)?;
    app.run()
}
