/// Wireframe geometry model
use nalgebra::{DMatrix, Point3};

use crate::color::Color;
use crate::config::{fields, ConfigSource};
use crate::error::{ConfigError, GeometryError};
use crate::math::{multiply, to_dynamic};
use crate::transform::Transform;

/// A pair of indices into a shape's point list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

impl Edge {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Center and radius a circle was generated from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleOutline {
    pub center: Point3<f64>,
    pub radius: f64,
}

/// How a shape turns its points into lines
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// Drawn as one closed loop through the points in order
    Planar { circle: Option<CircleOutline> },
    /// Drawn as the explicit edge list
    Volumetric { edges: Vec<Edge> },
}

/// A wireframe shape: points in object space, a transform and a stroke color
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    color: Color,
    points: Vec<Point3<f64>>,
    transform: Transform,
    kind: ShapeKind,
}

impl Shape {
    pub fn planar() -> Self {
        Self::with_kind(ShapeKind::Planar { circle: None })
    }

    pub fn volumetric() -> Self {
        Self::with_kind(ShapeKind::Volumetric { edges: Vec::new() })
    }

    pub(crate) fn with_kind(kind: ShapeKind) -> Self {
        Self {
            color: Color::default(),
            points: Vec::new(),
            transform: Transform::identity(),
            kind,
        }
    }

    pub fn add_point(&mut self, point: Point3<f64>) {
        self.points.push(point);
    }

    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GeometryError> {
        match &mut self.kind {
            ShapeKind::Volumetric { edges } => {
                edges.push(edge);
                Ok(())
            }
            ShapeKind::Planar { .. } => Err(GeometryError::NotVolumetric),
        }
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Explicit edges; empty for planar shapes
    pub fn edges(&self) -> &[Edge] {
        match &self.kind {
            ShapeKind::Volumetric { edges } => edges,
            ShapeKind::Planar { .. } => &[],
        }
    }

    pub(crate) fn edges_mut(&mut self) -> Option<&mut Vec<Edge>> {
        match &mut self.kind {
            ShapeKind::Volumetric { edges } => Some(edges),
            ShapeKind::Planar { .. } => None,
        }
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn is_volumetric(&self) -> bool {
        matches!(self.kind, ShapeKind::Volumetric { .. })
    }

    pub fn circle_outline(&self) -> Option<&CircleOutline> {
        match &self.kind {
            ShapeKind::Planar { circle } => circle.as_ref(),
            ShapeKind::Volumetric { .. } => None,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform.translate(x, y, z);
        self
    }

    /// Rotation in radians
    pub fn rotate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform.rotate(x, y, z);
        self
    }

    pub fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform.scale(x, y, z);
        self
    }

    pub fn reset_transform(&mut self) {
        self.transform.reset();
    }

    /// Overwrite the transform and color from toolbar values.
    ///
    /// Rotations are read in degrees.
    pub fn apply_toolbar(&mut self, config: &dyn ConfigSource) -> Result<(), ConfigError> {
        let color = Color::parse(&config.text(fields::COLOR))?;
        self.rotate(
            config.number(fields::RX).to_radians(),
            config.number(fields::RY).to_radians(),
            config.number(fields::RZ).to_radians(),
        )
        .scale(
            config.number(fields::SX),
            config.number(fields::SY),
            config.number(fields::SZ),
        )
        .translate(
            config.number(fields::TX),
            config.number(fields::TY),
            config.number(fields::TZ),
        );
        self.color = color;
        Ok(())
    }

    /// Apply the transform to every point, keeping their order.
    ///
    /// The points are packed as columns of one homogeneous matrix and
    /// transformed with a single product.
    pub fn transform_all(&self, points: &[Point3<f64>]) -> Result<Vec<Point3<f64>>, GeometryError> {
        let columns = DMatrix::from_fn(4, points.len(), |row, col| match row {
            0 => points[col].x,
            1 => points[col].y,
            2 => points[col].z,
            _ => 1.0,
        });
        let result = multiply(&to_dynamic(&self.transform.matrix()), &columns)?;
        Ok(result
            .column_iter()
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect())
    }

    /// The shape's own points in transformed space
    pub fn transformed_points(&self) -> Result<Vec<Point3<f64>>, GeometryError> {
        self.transform_all(&self.points)
    }
}
