/// Wire3D Core Library - wireframe geometry, transforms and projection
///
/// Shapes are point lists (plus an edge list for volumetric shapes) in object
/// space. Drawing runs each point through the shape's transform, projects it
/// onto the screen plane and strokes the resulting segments on a
/// [`DrawingSurface`] supplied by the host.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod projection;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod transform;

// Re-export commonly used types
pub use color::Color;
pub use config::ConfigSource;
pub use error::{ColorParseError, ConfigError, GeometryError, RenderError, SceneError};
pub use geometry::{CircleOutline, Edge, Shape, ShapeKind};
pub use nalgebra::{Point2, Point3};
pub use projection::{Projection, ProjectionMode};
pub use render::{check_edges, draw_shape, segments, DrawingSurface, Segment, Viewport};
pub use scene::{Scene, ToolbarState};
pub use transform::Transform;
