/// Render pipeline: transform, project, then emit line segments
use nalgebra::Point2;

use crate::color::Color;
use crate::error::RenderError;
use crate::geometry::{Shape, ShapeKind};
use crate::projection::Projection;

/// Anything that can stroke paths in screen coordinates.
///
/// Screen coordinates have their origin at the top-left corner and y
/// growing downward.
pub trait DrawingSurface {
    /// Current width and height
    fn viewport(&self) -> Viewport;

    fn clear(&mut self, background: Color);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn close_path(&mut self);

    fn set_stroke_color(&mut self, color: Color);

    fn stroke(&mut self);
}

/// Size of the drawing area; the model origin maps to its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Map a projected point to screen space (y inverted)
    pub fn to_screen(&self, point: &Point2<f64>) -> Point2<f64> {
        Point2::new(self.width / 2.0 + point.x, self.height / 2.0 - point.y)
    }
}

/// One stroked line in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
    pub color: Color,
}

/// Transform and project a shape's points into screen space
pub fn screen_points(
    shape: &Shape,
    projection: &Projection,
    viewport: &Viewport,
) -> Result<Vec<Point2<f64>>, RenderError> {
    let transformed = shape.transformed_points()?;
    Ok(projection
        .project(&transformed)
        .iter()
        .map(|p| viewport.to_screen(p))
        .collect())
}

/// Verify that every edge indexes an existing point
pub fn check_edges(shape: &Shape) -> Result<(), RenderError> {
    let len = shape.points().len();
    for (edge, e) in shape.edges().iter().enumerate() {
        if let Some(index) = [e.start, e.end].into_iter().find(|i| *i >= len) {
            return Err(RenderError::EdgeOutOfBounds { edge, index, len });
        }
    }
    Ok(())
}

fn edge_points<'a>(
    shape: &Shape,
    points: &'a [Point2<f64>],
) -> Result<Vec<(&'a Point2<f64>, &'a Point2<f64>)>, RenderError> {
    let lookup = move |edge: usize, index: usize| {
        points.get(index).ok_or(RenderError::EdgeOutOfBounds {
            edge,
            index,
            len: points.len(),
        })
    };
    shape
        .edges()
        .iter()
        .enumerate()
        .map(|(i, e)| -> Result<_, RenderError> { Ok((lookup(i, e.start)?, lookup(i, e.end)?)) })
        .collect()
}

/// The segments a draw of `shape` would stroke.
///
/// Planar shapes yield a closed loop over their points; volumetric shapes
/// yield one segment per edge.
pub fn segments(
    shape: &Shape,
    projection: &Projection,
    viewport: &Viewport,
) -> Result<Vec<Segment>, RenderError> {
    let points = screen_points(shape, projection, viewport)?;
    let color = shape.color();
    let segment = |start: &Point2<f64>, end: &Point2<f64>| Segment {
        start: *start,
        end: *end,
        color,
    };

    match shape.kind() {
        ShapeKind::Planar { .. } => Ok(points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(a, b)| segment(a, b))
            .collect()),
        ShapeKind::Volumetric { .. } => Ok(edge_points(shape, &points)?
            .into_iter()
            .map(|(a, b)| segment(a, b))
            .collect()),
    }
}

/// Stroke `shape` onto `surface`
pub fn draw_shape(
    shape: &Shape,
    projection: &Projection,
    surface: &mut dyn DrawingSurface,
) -> Result<(), RenderError> {
    let points = screen_points(shape, projection, &surface.viewport())?;

    match shape.kind() {
        ShapeKind::Planar { .. } => {
            let Some(first) = points.first() else {
                log::debug!("skipping planar shape with no points");
                return Ok(());
            };
            surface.begin_path();
            surface.move_to(first.x, first.y);
            for p in &points {
                surface.line_to(p.x, p.y);
            }
            surface.close_path();
            surface.set_stroke_color(shape.color());
            surface.stroke();
        }
        ShapeKind::Volumetric { .. } => {
            for (start, end) in edge_points(shape, &points)? {
                surface.begin_path();
                surface.move_to(start.x, start.y);
                surface.line_to(end.x, end.y);
                surface.close_path();
                surface.set_stroke_color(shape.color());
                surface.stroke();
            }
        }
    }
    Ok(())
}
