/// Keyboard-driven toolbar holding the values the scene reads
use std::collections::BTreeSet;
use wire3d_core::config::fields;
use wire3d_core::{Color, ConfigSource, ProjectionMode, ToolbarState};

use crate::config::ToolbarConfig;

/// The nine editable transform fields, in toolbar order
pub const TRANSFORM_FIELDS: [&str; 9] = fields::TRANSFORM;

/// Stroke colors the `c` key cycles through
pub const PALETTE: [Color; 7] = [
    Color::WHITE,
    Color::new(255, 85, 85),
    Color::new(85, 255, 85),
    Color::new(85, 170, 255),
    Color::new(255, 255, 85),
    Color::new(255, 85, 255),
    Color::new(85, 255, 255),
];

#[derive(Debug, Clone)]
pub struct Toolbar {
    /// tx, ty, tz, sx, sy, sz, rx, ry, rz (degrees)
    values: [f64; 9],
    pub fov: f64,
    pub color: Color,
    pub background: Color,
    pub projection: ProjectionMode,
    visible: BTreeSet<String>,
}

impl Toolbar {
    pub fn new(config: &ToolbarConfig, visible: impl IntoIterator<Item = String>) -> Self {
        Self {
            values: [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
            fov: config.fov,
            color: config.color,
            background: config.background,
            projection: config.projection,
            visible: visible.into_iter().collect(),
        }
    }

    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn nudge(&mut self, index: usize, delta: f64) {
        self.values[index] += delta;
    }

    /// Reflect a shape's current state, as after selecting or resetting it
    pub fn sync_from(&mut self, state: &ToolbarState) {
        self.values[..3].copy_from_slice(&state.translation);
        self.values[3..6].copy_from_slice(&state.scale);
        self.values[6..].copy_from_slice(&state.rotation_degrees);
        self.color = state.color;
    }

    pub fn cycle_color(&mut self) {
        let next = PALETTE
            .iter()
            .position(|c| *c == self.color)
            .map_or(0, |i| (i + 1) % PALETTE.len());
        self.color = PALETTE[next];
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.visible.contains(name)
    }

    pub fn toggle_visible(&mut self, name: &str) {
        if !self.visible.remove(name) {
            self.visible.insert(name.to_string());
        }
    }
}

impl ConfigSource for Toolbar {
    fn number(&self, name: &str) -> f64 {
        if name == fields::FOV {
            return self.fov;
        }
        match TRANSFORM_FIELDS.iter().position(|f| *f == name) {
            Some(i) => self.values[i],
            None => {
                log::warn!("toolbar has no numeric field '{}'", name);
                f64::NAN
            }
        }
    }

    fn text(&self, name: &str) -> String {
        match name {
            fields::COLOR => self.color.to_string(),
            fields::BACKGROUND => self.background.to_string(),
            fields::PROJECTION => self.projection.to_string(),
            _ => String::new(),
        }
    }

    fn flag(&self, name: &str) -> bool {
        self.is_visible(name)
    }
}
