/// Named shape registry with an explicit selection
use crate::color::Color;
use crate::config::ConfigSource;
use crate::error::SceneError;
use crate::geometry::Shape;
use crate::render::{check_edges, draw_shape, DrawingSurface};

/// Snapshot of a shape's toolbar-facing state; rotations in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarState {
    pub translation: [f64; 3],
    pub scale: [f64; 3],
    pub rotation_degrees: [f64; 3],
    pub color: Color,
}

impl ToolbarState {
    pub fn of(shape: &Shape) -> Self {
        let t = shape.transform();
        Self {
            translation: [t.tx(), t.ty(), t.tz()],
            scale: [t.sx(), t.sy(), t.sz()],
            rotation_degrees: [t.rx().to_degrees(), t.ry().to_degrees(), t.rz().to_degrees()],
            color: shape.color(),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    shape: Shape,
}

/// Shapes in draw order, each under a unique name, plus the selected one
#[derive(Debug, Clone)]
pub struct Scene {
    entries: Vec<Entry>,
    selected: usize,
}

impl Scene {
    /// A scene holding one shape, which starts selected
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            entries: vec![Entry {
                name: name.into(),
                shape,
            }],
            selected: 0,
        }
    }

    /// The startup set: two rectangles, a circle, a triangle, a cube, a
    /// cylinder, a pyramid and a sphere, all centered on the origin
    pub fn demo() -> Self {
        Scene::new("square", Shape::rectangle(0.0, 0.0, 200.0, 200.0))
            .with("rect", Shape::rectangle(0.0, 0.0, 400.0, 100.0))
            .with("circle", Shape::circle(0.0, 0.0, 100.0))
            .with("triangle", Shape::triangle(0.0, 0.0, 200.0, 200.0))
            .with("cube", Shape::cube(0.0, 0.0, 0.0, 200.0, 200.0, 200.0))
            .with("cylinder", Shape::cylinder(0.0, 0.0, 0.0, 100.0, 200.0, 100))
            .with("pyramid", Shape::pyramid(0.0, 0.0, 0.0, 200.0, 200.0, 200.0))
            .with("sphere", Shape::sphere(0.0, 0.0, 0.0, 100.0, 18))
    }

    /// Add a shape at the end of the draw order, replacing any shape with the same name
    pub fn with(mut self, name: impl Into<String>, shape: Shape) -> Self {
        self.insert(name, shape);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, shape: Shape) {
        let name = name.into();
        match self.position(&name) {
            Some(i) => self.entries[i].shape = shape,
            None => self.entries.push(Entry { name, shape }),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Shape)> {
        self.entries.iter_mut().map(|e| (e.name.as_str(), &mut e.shape))
    }

    pub fn get(&self, name: &str) -> Option<&Shape> {
        self.position(name).map(|i| &self.entries[i].shape)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Shape> {
        self.position(name).map(|i| &mut self.entries[i].shape)
    }

    pub fn select(&mut self, name: &str) -> Result<&Shape, SceneError> {
        let index = self
            .position(name)
            .ok_or_else(|| SceneError::UnknownShape(name.to_string()))?;
        self.selected = index;
        log::info!("selected '{}'", name);
        Ok(&self.entries[index].shape)
    }

    pub fn selected_name(&self) -> &str {
        &self.entries[self.selected].name
    }

    pub fn selected(&self) -> &Shape {
        &self.entries[self.selected].shape
    }

    pub fn selected_mut(&mut self) -> &mut Shape {
        &mut self.entries[self.selected].shape
    }

    /// Apply toolbar values to the selected shape
    pub fn update(&mut self, config: &dyn ConfigSource) -> Result<(), SceneError> {
        self.selected_mut().apply_toolbar(config)?;
        log::debug!("updated '{}': {:?}", self.selected_name(), self.toolbar());
        Ok(())
    }

    /// Restore the selected shape's transform to identity
    pub fn reset(&mut self) {
        self.selected_mut().reset_transform();
        log::info!("reset '{}'", self.selected_name());
    }

    /// Toolbar values reflecting the selected shape
    pub fn toolbar(&self) -> ToolbarState {
        ToolbarState::of(self.selected())
    }

    /// Full redraw: clear, then stroke every visible shape in order.
    ///
    /// Visible shapes are checked first, so a shape with a dangling edge
    /// fails the frame before the surface is touched.
    pub fn draw(
        &self,
        config: &dyn ConfigSource,
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), SceneError> {
        let projection = config.projection()?;
        let background = config.background()?;
        let visible: Vec<&Entry> = self.entries.iter().filter(|e| config.flag(&e.name)).collect();
        for entry in &visible {
            check_edges(&entry.shape)?;
        }

        surface.clear(background);
        for entry in visible {
            draw_shape(&entry.shape, &projection, surface)?;
        }
        Ok(())
    }
}
