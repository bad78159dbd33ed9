/// Terminal front end: an editable wireframe scene drawn as ASCII
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use thiserror::Error;
use wire3d_core::{Scene, SceneError};

pub mod config;
pub mod editor;
pub mod renderer;
pub mod toolbar;

pub use config::AppConfig;
pub use editor::{Action, Editor};
pub use renderer::AsciiRenderer;
pub use toolbar::Toolbar;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Main application struct for terminal wireframe editing
pub struct TerminalApp {
    editor: Editor,
    renderer: AsciiRenderer,
    /// Last scene error, shown in the status line until the next key
    message: Option<String>,
}

impl TerminalApp {
    pub fn new(mut scene: Scene, config: &AppConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        // Shapes start in the configured stroke color so they show on the background
        for (_, shape) in scene.iter_mut() {
            shape.set_color(config.toolbar.color);
        }

        let toolbar = Toolbar::new(&config.toolbar, config.scene.visible.iter().cloned());
        Ok(Self {
            editor: Editor::new(scene, toolbar, config.toolbar.clone()),
            renderer: AsciiRenderer::new(
                width as usize,
                height as usize,
                config.viewport.cell_width,
                config.viewport.cell_height,
            ),
            message: None,
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    /// Redraws only after input; nothing animates between events
    fn main_loop(&mut self) -> Result<(), AppError> {
        self.render()?;
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    self.message = None;
                    match self.editor.handle_key(key) {
                        Ok(Action::Quit) => return Ok(()),
                        Ok(Action::Ignore) => {}
                        Ok(Action::Redraw) => self.render()?,
                        Err(e) => {
                            log::warn!("{}", e);
                            self.message = Some(e.to_string());
                            self.render()?;
                        }
                    }
                }
                Event::Resize(width, height) => {
                    log::debug!("terminal resized to {}x{}", width, height);
                    self.renderer.resize(width as usize, height as usize);
                    self.render()?;
                }
                _ => {}
            }
        }
    }

    fn render(&mut self) -> Result<(), AppError> {
        if let Err(e) = self.editor.draw(&mut self.renderer) {
            log::warn!("{}", e);
            self.message = Some(e.to_string());
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        // Status line overlay
        let (width, _) = self.renderer.size();
        let status = match &self.message {
            Some(message) => format!("error: {}", message),
            None => self.editor.status(),
        };
        let color = if self.message.is_some() { TermColor::Red } else { TermColor::Yellow };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(color),
            Print(status.chars().take(width).collect::<String>()),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
