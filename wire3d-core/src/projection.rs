/// Projection of transformed points onto the screen plane
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    #[default]
    Orthographic,
    Perspective,
}

impl ProjectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionMode::Orthographic => "orthographic",
            ProjectionMode::Perspective => "perspective",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orthographic" => Ok(ProjectionMode::Orthographic),
            "perspective" => Ok(ProjectionMode::Perspective),
            other => Err(ConfigError::UnknownProjection(other.to_string())),
        }
    }
}

/// A projection mode plus the field-of-view distance used for perspective
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub mode: ProjectionMode,
    pub fov: f64,
}

impl Projection {
    pub fn new(mode: ProjectionMode, fov: f64) -> Self {
        Self { mode, fov }
    }

    pub fn orthographic() -> Self {
        Self::new(ProjectionMode::Orthographic, 0.0)
    }

    pub fn perspective(fov: f64) -> Self {
        Self::new(ProjectionMode::Perspective, fov)
    }

    /// Project one point.
    ///
    /// Perspective scales x and y by `fov / (fov - z)`. A point with
    /// `z == fov` has no finite image and yields non-finite coordinates.
    pub fn project_point(&self, point: &Point3<f64>) -> Point2<f64> {
        match self.mode {
            ProjectionMode::Orthographic => point.xy(),
            ProjectionMode::Perspective => {
                let scale = self.fov / (self.fov - point.z);
                Point2::new(point.x * scale, point.y * scale)
            }
        }
    }

    pub fn project(&self, points: &[Point3<f64>]) -> Vec<Point2<f64>> {
        let projected: Vec<Point2<f64>> = points.iter().map(|p| self.project_point(p)).collect();
        let degenerate = projected
            .iter()
            .filter(|p| !(p.x.is_finite() && p.y.is_finite()))
            .count();
        if degenerate > 0 {
            log::warn!(
                "{} of {} points lie on the perspective singularity (z == fov = {})",
                degenerate,
                points.len(),
                self.fov
            );
        }
        projected
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::orthographic()
    }
}
