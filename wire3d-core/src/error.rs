/// Error types for the geometry kernel
use thiserror::Error;

/// Errors raised by matrix math and shape construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Operands of a matrix product have incompatible shapes
    #[error(
        "cannot multiply a {left_rows}x{left_cols} matrix by a {right_rows}x{right_cols} matrix"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("edges can only be added to volumetric shapes")]
    NotVolumetric,
}

/// Errors raised while turning a shape into line segments
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("edge {edge} references point {index}, but the shape has {len} points")]
    EdgeOutOfBounds { edge: usize, index: usize, len: usize },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by the scene registry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("no shape named '{0}'")]
    UnknownShape(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors raised when interpreting configuration values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown projection mode '{0}' (expected 'orthographic' or 'perspective')")]
    UnknownProjection(String),

    #[error(transparent)]
    Color(#[from] ColorParseError),
}

/// A color string could not be understood
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid color '{0}'")]
pub struct ColorParseError(pub String);
