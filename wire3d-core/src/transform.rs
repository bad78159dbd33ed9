/// Per-shape affine transform
use nalgebra::{Matrix4, Point3, Vector3};

use crate::math::{rotate_x, rotate_y, rotate_z};

/// Translation, scale and rotation (radians) of one shape.
///
/// The combined matrix is `scale_translate * Rz * Rx * Ry`, applied to
/// homogeneous column vectors, so Ry acts on a point first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: Vector3<f64>,
    scale: Vector3<f64>,
    rotation: Vector3<f64>,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            translation: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::zeros(),
        }
    }

    /// Overwrite the translation triple
    pub fn translate(&mut self, x: f64, y: f64, z: f64) {
        self.translation = Vector3::new(x, y, z);
    }

    /// Overwrite the rotation triple (radians)
    pub fn rotate(&mut self, x: f64, y: f64, z: f64) {
        self.rotation = Vector3::new(x, y, z);
    }

    /// Overwrite the scale triple
    pub fn scale(&mut self, x: f64, y: f64, z: f64) {
        self.scale = Vector3::new(x, y, z);
    }

    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    pub fn translation(&self) -> Vector3<f64> {
        self.translation
    }

    pub fn scale_factors(&self) -> Vector3<f64> {
        self.scale
    }

    pub fn rotation(&self) -> Vector3<f64> {
        self.rotation
    }

    pub fn tx(&self) -> f64 {
        self.translation.x
    }

    pub fn ty(&self) -> f64 {
        self.translation.y
    }

    pub fn tz(&self) -> f64 {
        self.translation.z
    }

    pub fn sx(&self) -> f64 {
        self.scale.x
    }

    pub fn sy(&self) -> f64 {
        self.scale.y
    }

    pub fn sz(&self) -> f64 {
        self.scale.z
    }

    pub fn rx(&self) -> f64 {
        self.rotation.x
    }

    pub fn ry(&self) -> f64 {
        self.rotation.y
    }

    pub fn rz(&self) -> f64 {
        self.rotation.z
    }

    /// Scale on the diagonal with the translation in the last column
    #[rustfmt::skip]
    pub fn scale_translation_matrix(&self) -> Matrix4<f64> {
        let (s, t) = (self.scale, self.translation);
        Matrix4::new(
            s.x, 0.0, 0.0, t.x,
            0.0, s.y, 0.0, t.y,
            0.0, 0.0, s.z, t.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rz * Rx * Ry
    pub fn rotation_matrix(&self) -> Matrix4<f64> {
        rotate_z(self.rotation.z) * rotate_x(self.rotation.x) * rotate_y(self.rotation.y)
    }

    /// The combined matrix applied to homogeneous column vectors.
    ///
    /// Multiplied strictly left to right, starting from the scale/translation
    /// factor.
    pub fn matrix(&self) -> Matrix4<f64> {
        self.scale_translation_matrix()
            * rotate_z(self.rotation.z)
            * rotate_x(self.rotation.x)
            * rotate_y(self.rotation.y)
    }

    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        let v = self.matrix() * point.to_homogeneous();
        Point3::new(v.x, v.y, v.z)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: &Point3<f64>, b: &Point3<f64>) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn test_identity_is_exact() {
        let t = Transform::default();
        for p in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(100.0, -50.0, 25.5),
            Point3::new(-1e6, 3.25, 1e-9),
        ] {
            assert_eq!(t.apply(&p), p);
        }
    }

    #[test]
    fn test_translate_only() {
        let mut t = Transform::identity();
        t.translate(5.0, 0.0, 0.0);
        assert_eq!(t.apply(&Point3::origin()), Point3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_setters_overwrite() {
        let mut t = Transform::identity();
        t.translate(1.0, 2.0, 3.0);
        t.translate(4.0, 5.0, 6.0);
        assert_eq!(t.translation(), Vector3::new(4.0, 5.0, 6.0));

        t.scale(2.0, 2.0, 2.0);
        t.scale(3.0, 1.0, 1.0);
        assert_eq!((t.sx(), t.sy(), t.sz()), (3.0, 1.0, 1.0));

        t.rotate(0.1, 0.2, 0.3);
        t.rotate(0.0, 0.0, 0.5);
        assert_eq!((t.rx(), t.ry(), t.rz()), (0.0, 0.0, 0.5));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut t = Transform::identity();
        t.translate(1.0, 2.0, 3.0);
        t.scale(4.0, 5.0, 6.0);
        t.rotate(0.7, 0.8, 0.9);
        t.reset();
        assert_eq!(t, Transform::identity());
        assert_eq!((t.tx(), t.ty(), t.tz()), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_scale_applies_before_translate() {
        let mut t = Transform::identity();
        t.scale(2.0, 3.0, 4.0);
        t.translate(10.0, 10.0, 10.0);
        let p = t.apply(&Point3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Point3::new(12.0, 13.0, 14.0));
    }

    #[test]
    fn test_rotation_applies_before_scale() {
        let mut t = Transform::identity();
        t.scale(2.0, 1.0, 1.0);
        t.rotate(0.0, 0.0, FRAC_PI_2);
        // (1,0,0) rotates onto the y axis, where the x scale has no effect
        let p = t.apply(&Point3::new(1.0, 0.0, 0.0));
        assert!(close(&p, &Point3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_rotation_matrix_product_order() {
        let mut t = Transform::identity();
        t.rotate(FRAC_PI_2, FRAC_PI_2, FRAC_PI_2);
        // Ry: (1,0,0) -> (0,0,-1); Rx: -> (0,1,0); Rz: -> (-1,0,0)
        let p = t.apply(&Point3::new(1.0, 0.0, 0.0));
        assert!(close(&p, &Point3::new(-1.0, 0.0, 0.0)), "{p:?}");

        // Ry: (0,0,1) -> (1,0,0); Rx: stays; Rz: -> (0,1,0)
        let p = t.apply(&Point3::new(0.0, 0.0, 1.0));
        assert!(close(&p, &Point3::new(0.0, 1.0, 0.0)), "{p:?}");
    }

    #[test]
    fn test_matrix_folds_left_to_right() {
        let mut t = Transform::identity();
        t.scale(1.7, 0.3, 2.9);
        t.translate(-12.5, 4.0, 33.0);
        t.rotate(0.41, -1.3, 2.2);
        let expected =
            ((t.scale_translation_matrix() * rotate_z(2.2)) * rotate_x(0.41)) * rotate_y(-1.3);
        assert_eq!(t.matrix(), expected);

        // without scale or translation the combined matrix is the rotation alone
        t.scale(1.0, 1.0, 1.0);
        t.translate(0.0, 0.0, 0.0);
        assert_eq!(t.matrix(), t.rotation_matrix());
    }

    #[test]
    fn test_rotate_z_round_trip() {
        let p = Point3::new(12.0, -4.0, 7.0);
        for step in 0..12 {
            let angle = step as f64 * PI / 6.0;
            let mut forward = Transform::identity();
            forward.rotate(0.0, 0.0, angle);
            let mut back = Transform::identity();
            back.rotate(0.0, 0.0, -angle);
            assert!(close(&back.apply(&forward.apply(&p)), &p));
        }
    }
}
