/// Homogeneous matrix helpers
///
/// Rotation builders follow the right-handed convention. Note that `rotate_y`
/// keeps the `[[cos, 0, sin], [0, 1, 0], [-sin, 0, cos]]` sign layout.
use nalgebra::{DMatrix, Matrix4};

use crate::error::GeometryError;

/// Generic matrix product `a * b`.
///
/// Requires `a.ncols() == b.nrows()`.
pub fn multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>, GeometryError> {
    if a.ncols() != b.nrows() {
        return Err(GeometryError::DimensionMismatch {
            left_rows: a.nrows(),
            left_cols: a.ncols(),
            right_rows: b.nrows(),
            right_cols: b.ncols(),
        });
    }
    Ok(a * b)
}

/// Rotation about the Z axis (mixes x and y)
#[rustfmt::skip]
pub fn rotate_z(angle: f64) -> Matrix4<f64> {
    let (sin, cos) = angle.sin_cos();
    Matrix4::new(
        cos, -sin, 0.0, 0.0,
        sin, cos, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the X axis (mixes y and z)
#[rustfmt::skip]
pub fn rotate_x(angle: f64) -> Matrix4<f64> {
    let (sin, cos) = angle.sin_cos();
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, cos, -sin, 0.0,
        0.0, sin, cos, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the Y axis (mixes x and z)
#[rustfmt::skip]
pub fn rotate_y(angle: f64) -> Matrix4<f64> {
    let (sin, cos) = angle.sin_cos();
    Matrix4::new(
        cos, 0.0, sin, 0.0,
        0.0, 1.0, 0.0, 0.0,
        -sin, 0.0, cos, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Copy a fixed 4x4 matrix into a dynamically sized one
pub fn to_dynamic(matrix: &Matrix4<f64>) -> DMatrix<f64> {
    DMatrix::from_column_slice(4, 4, matrix.as_slice())
}
