/// Scene editing state driven by key presses
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wire3d_core::{DrawingSurface, Scene, SceneError};

use crate::config::ToolbarConfig;
use crate::toolbar::{Toolbar, TRANSFORM_FIELDS};

/// What the caller should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Redraw,
    Ignore,
    Quit,
}

pub struct Editor {
    scene: Scene,
    toolbar: Toolbar,
    /// Index into the nine transform fields
    focus: usize,
    steps: ToolbarConfig,
}

impl Editor {
    pub fn new(scene: Scene, toolbar: Toolbar, steps: ToolbarConfig) -> Self {
        let mut editor = Self {
            scene,
            toolbar,
            focus: 0,
            steps,
        };
        editor.toolbar.sync_from(&editor.scene.toolbar());
        editor
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn focused_field(&self) -> &'static str {
        TRANSFORM_FIELDS[self.focus]
    }

    /// Select a shape and reflect its state in the toolbar
    pub fn select(&mut self, name: &str) -> Result<(), SceneError> {
        self.scene.select(name)?;
        self.toolbar.sync_from(&self.scene.toolbar());
        Ok(())
    }

    fn select_index(&mut self, index: usize) -> Result<Action, SceneError> {
        let Some(name) = self.scene.names().nth(index).map(str::to_owned) else {
            return Ok(Action::Ignore);
        };
        self.select(&name)?;
        Ok(Action::Redraw)
    }

    /// Push toolbar values into the selected shape
    fn update(&mut self) -> Result<Action, SceneError> {
        self.scene.update(&self.toolbar)?;
        Ok(Action::Redraw)
    }

    pub fn reset(&mut self) {
        self.scene.reset();
        self.toolbar.sync_from(&self.scene.toolbar());
    }

    fn step(&self) -> f64 {
        match self.focus {
            0..=2 => self.steps.translate_step,
            3..=5 => self.steps.scale_step,
            _ => self.steps.rotate_step,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Action, SceneError> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Action::Quit);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Ok(Action::Quit),
            KeyCode::Char(c @ '1'..='9') => self.select_index(c as usize - '1' as usize),
            KeyCode::Up | KeyCode::Char('k') => {
                self.focus = (self.focus + TRANSFORM_FIELDS.len() - 1) % TRANSFORM_FIELDS.len();
                Ok(Action::Redraw)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.focus = (self.focus + 1) % TRANSFORM_FIELDS.len();
                Ok(Action::Redraw)
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => {
                self.toolbar.nudge(self.focus, self.step());
                self.update()
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
                self.toolbar.nudge(self.focus, -self.step());
                self.update()
            }
            KeyCode::Char('c') => {
                self.toolbar.cycle_color();
                self.update()
            }
            KeyCode::Char('p') => {
                self.toolbar.projection = self.toolbar.projection.toggled();
                Ok(Action::Redraw)
            }
            KeyCode::Char(']') => {
                self.toolbar.fov += self.steps.fov_step;
                Ok(Action::Redraw)
            }
            KeyCode::Char('[') => {
                self.toolbar.fov -= self.steps.fov_step;
                Ok(Action::Redraw)
            }
            KeyCode::Char('v') => {
                let name = self.scene.selected_name().to_string();
                self.toolbar.toggle_visible(&name);
                Ok(Action::Redraw)
            }
            KeyCode::Char('r') => {
                self.reset();
                Ok(Action::Redraw)
            }
            _ => Ok(Action::Ignore),
        }
    }

    pub fn draw(&self, surface: &mut dyn DrawingSurface) -> Result<(), SceneError> {
        self.scene.draw(&self.toolbar, surface)
    }

    /// One-line summary of the toolbar for the status bar
    pub fn status(&self) -> String {
        let fields: Vec<String> = TRANSFORM_FIELDS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let value = format!("{}={:.1}", name, self.toolbar.value(i));
                if i == self.focus {
                    format!("[{}]", value)
                } else {
                    value
                }
            })
            .collect();
        let name = self.scene.selected_name();
        format!(
            "{}{} | {} | {} fov={:.0} | color={}",
            name,
            if self.toolbar.is_visible(name) { "" } else { " (hidden)" },
            fields.join(" "),
            self.toolbar.projection,
            self.toolbar.fov,
            self.toolbar.color,
        )
    }
}
