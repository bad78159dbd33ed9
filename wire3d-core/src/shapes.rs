/// Procedural shape generators
///
/// Point and edge orderings are part of each generator's contract: planar
/// shapes are drawn by connecting consecutive points, volumetric shapes by
/// indexing into the point list.
use nalgebra::Point3;
use std::f64::consts::PI;

use crate::geometry::{CircleOutline, Edge, Shape, ShapeKind};

pub const CIRCLE_SEGMENTS: usize = 360;
pub const DEFAULT_CYLINDER_RESOLUTION: usize = 360;
pub const DEFAULT_SPHERE_RESOLUTION: usize = 36;

impl Shape {
    fn push_edges(&mut self, edges: impl IntoIterator<Item = (usize, usize)>) {
        if let Some(list) = self.edges_mut() {
            list.extend(edges.into_iter().map(|(start, end)| Edge::new(start, end)));
        }
    }

    /// Axis-aligned rectangle centered on (x, y).
    ///
    /// Corners relative to the center: (+w, +h), (-w, +h), (-w, -h), (+w, -h).
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        let mut shape = Shape::planar();
        shape.add_point(Point3::new(x + hw, y + hh, 0.0));
        shape.add_point(Point3::new(x - hw, y + hh, 0.0));
        shape.add_point(Point3::new(x - hw, y - hh, 0.0));
        shape.add_point(Point3::new(x + hw, y - hh, 0.0));
        shape
    }

    /// Apex at the top center, then the two base corners
    pub fn triangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        let mut shape = Shape::planar();
        shape.add_point(Point3::new(x, y + hh, 0.0));
        shape.add_point(Point3::new(x - hw, y - hh, 0.0));
        shape.add_point(Point3::new(x + hw, y - hh, 0.0));
        shape
    }

    /// One point per whole degree, starting on the +x axis
    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        let mut shape = Shape::with_kind(ShapeKind::Planar {
            circle: Some(CircleOutline {
                center: Point3::new(x, y, 0.0),
                radius,
            }),
        });
        for degree in 0..CIRCLE_SEGMENTS {
            let angle = degree as f64 * PI / 180.0;
            shape.add_point(Point3::new(x + radius * angle.cos(), y + radius * angle.sin(), 0.0));
        }
        log::debug!("generated circle with {} points", shape.points().len());
        shape
    }

    /// Front face (z - d/2) then back face (z + d/2), each wound the same way
    pub fn cube(x: f64, y: f64, z: f64, width: f64, height: f64, depth: f64) -> Self {
        let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
        let mut shape = Shape::volumetric();
        for dz in [-hd, hd] {
            shape.add_point(Point3::new(x - hw, y - hh, z + dz));
            shape.add_point(Point3::new(x + hw, y - hh, z + dz));
            shape.add_point(Point3::new(x + hw, y + hh, z + dz));
            shape.add_point(Point3::new(x - hw, y + hh, z + dz));
        }
        shape.push_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
        shape.push_edges([(4, 5), (5, 6), (6, 7), (7, 4)]);
        shape.push_edges([(0, 4), (1, 5), (2, 6), (3, 7)]);
        shape
    }

    /// Bottom ring (z - h/2) then top ring (z + h/2), `resolution` points each.
    ///
    /// Edges: verticals, then the bottom ring, then the top ring.
    pub fn cylinder(x: f64, y: f64, z: f64, radius: f64, height: f64, resolution: usize) -> Self {
        let res = resolution;
        let mut shape = Shape::volumetric();
        for dz in [-height / 2.0, height / 2.0] {
            for i in 0..res {
                let angle = 2.0 * i as f64 * PI / res as f64;
                shape.add_point(Point3::new(
                    x + radius * angle.cos(),
                    y + radius * angle.sin(),
                    z + dz,
                ));
            }
        }
        shape.push_edges((0..res).map(|i| (i, i + res)));
        shape.push_edges((0..res).map(|i| (i, (i + 1) % res)));
        shape.push_edges((0..res).map(|i| (i + res, (i + 1) % res + res)));
        log::debug!(
            "generated cylinder with {} points and {} edges",
            shape.points().len(),
            shape.edges().len()
        );
        shape
    }

    pub fn cylinder_default(x: f64, y: f64, z: f64, radius: f64, height: f64) -> Self {
        Self::cylinder(x, y, z, radius, height, DEFAULT_CYLINDER_RESOLUTION)
    }

    /// Rectangular base in the x/z plane at y - h/2, apex at y + h/2
    pub fn pyramid(x: f64, y: f64, z: f64, width: f64, height: f64, depth: f64) -> Self {
        let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
        let mut shape = Shape::volumetric();
        shape.add_point(Point3::new(x - hw, y - hh, z - hd));
        shape.add_point(Point3::new(x + hw, y - hh, z - hd));
        shape.add_point(Point3::new(x + hw, y - hh, z + hd));
        shape.add_point(Point3::new(x - hw, y - hh, z + hd));
        shape.add_point(Point3::new(x, y + hh, z));
        shape.push_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
        shape.push_edges((0..4).map(|i| (i, 4)));
        shape
    }

    /// `resolution * resolution` points on a latitude/longitude grid.
    ///
    /// Point `i * res + j` sits at longitude `2πi/res` and latitude
    /// `2πj/res`. Each point gets one edge along its ring and one to the
    /// next ring, both wrapping.
    pub fn sphere(x: f64, y: f64, z: f64, radius: f64, resolution: usize) -> Self {
        let res = resolution;
        let mut shape = Shape::volumetric();
        for i in 0..res {
            let angle = 2.0 * i as f64 * PI / res as f64;
            for j in 0..res {
                let angle2 = 2.0 * j as f64 * PI / res as f64;
                shape.add_point(Point3::new(
                    x + radius * angle.cos() * angle2.cos(),
                    y + radius * angle.sin() * angle2.cos(),
                    z + radius * angle2.sin(),
                ));
            }
        }
        let grid = || (0..res).flat_map(move |i| (0..res).map(move |j| (i, j)));
        shape.push_edges(grid().map(|(i, j)| (i * res + j, i * res + (j + 1) % res)));
        shape.push_edges(grid().map(|(i, j)| (i * res + j, ((i + 1) % res) * res + j)));
        log::debug!(
            "generated sphere with {} points and {} edges",
            shape.points().len(),
            shape.edges().len()
        );
        shape
    }

    pub fn sphere_default(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self::sphere(x, y, z, radius, DEFAULT_SPHERE_RESOLUTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(shape: &Shape) -> Vec<(usize, usize)> {
        shape.edges().iter().map(|e| (e.start, e.end)).collect()
    }

    fn xy(shape: &Shape) -> Vec<(f64, f64)> {
        shape.points().iter().map(|p| (p.x, p.y)).collect()
    }

    fn assert_edges_in_bounds(shape: &Shape) {
        let len = shape.points().len();
        for edge in shape.edges() {
            assert!(edge.start < len && edge.end < len, "{edge:?} out of {len}");
        }
    }

    #[test]
    fn test_rectangle_corner_order() {
        let shape = Shape::rectangle(0.0, 0.0, 200.0, 200.0);
        assert!(!shape.is_volumetric());
        assert_eq!(
            xy(&shape),
            vec![(100.0, 100.0), (-100.0, 100.0), (-100.0, -100.0), (100.0, -100.0)]
        );
        assert!(shape.points().iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn test_rectangle_offset_center() {
        let shape = Shape::rectangle(10.0, -20.0, 400.0, 100.0);
        assert_eq!(
            xy(&shape),
            vec![(210.0, 30.0), (-190.0, 30.0), (-190.0, -70.0), (210.0, -70.0)]
        );
    }

    #[test]
    fn test_triangle_points() {
        let shape = Shape::triangle(0.0, 0.0, 200.0, 200.0);
        assert_eq!(xy(&shape), vec![(0.0, 100.0), (-100.0, -100.0), (100.0, -100.0)]);
    }

    #[test]
    fn test_circle() {
        let shape = Shape::circle(5.0, 5.0, 100.0);
        assert_eq!(shape.points().len(), 360);
        assert_eq!(shape.points()[0], Point3::new(105.0, 5.0, 0.0));
        let quarter = shape.points()[90];
        assert!((quarter.x - 5.0).abs() < 1e-9 && (quarter.y - 105.0).abs() < 1e-9);

        let outline = shape.circle_outline().unwrap();
        assert_eq!(outline.center, Point3::new(5.0, 5.0, 0.0));
        assert_eq!(outline.radius, 100.0);
        assert!(shape.edges().is_empty());
    }

    #[test]
    fn test_cube_topology() {
        let shape = Shape::cube(0.0, 0.0, 0.0, 200.0, 200.0, 200.0);
        assert!(shape.is_volumetric());
        assert_eq!(shape.points().len(), 8);
        assert_eq!(
            pairs(&shape),
            vec![
                (0, 1), (1, 2), (2, 3), (3, 0),
                (4, 5), (5, 6), (6, 7), (7, 4),
                (0, 4), (1, 5), (2, 6), (3, 7),
            ]
        );
        assert_eq!(shape.points()[0], Point3::new(-100.0, -100.0, -100.0));
        assert_eq!(shape.points()[2], Point3::new(100.0, 100.0, -100.0));
        assert_eq!(shape.points()[7], Point3::new(-100.0, 100.0, 100.0));
    }

    #[test]
    fn test_cylinder_topology() {
        let shape = Shape::cylinder(0.0, 0.0, 0.0, 100.0, 200.0, 8);
        assert_eq!(shape.points().len(), 16);
        assert_eq!(shape.edges().len(), 24);

        let edges = pairs(&shape);
        assert_eq!(&edges[..8], &(0..8).map(|i| (i, i + 8)).collect::<Vec<_>>()[..]);
        assert_eq!(edges[15], (7, 0));
        assert_eq!(edges[23], (15, 8));
        assert_edges_in_bounds(&shape);

        assert!(shape.points()[..8].iter().all(|p| p.z == -100.0));
        assert!(shape.points()[8..].iter().all(|p| p.z == 100.0));
        assert_eq!(shape.points()[0], Point3::new(100.0, 0.0, -100.0));
    }

    #[test]
    fn test_cylinder_default_resolution() {
        let shape = Shape::cylinder_default(0.0, 0.0, 0.0, 10.0, 10.0);
        assert_eq!(shape.points().len(), 720);
        assert_eq!(shape.edges().len(), 1080);
    }

    #[test]
    fn test_pyramid_topology() {
        let shape = Shape::pyramid(0.0, 0.0, 0.0, 200.0, 200.0, 200.0);
        assert_eq!(shape.points().len(), 5);
        assert_eq!(
            pairs(&shape),
            vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 4), (1, 4), (2, 4), (3, 4)]
        );
        assert!(shape.points()[..4].iter().all(|p| p.y == -100.0));
        assert_eq!(shape.points()[4], Point3::new(0.0, 100.0, 0.0));
    }

    #[test]
    fn test_sphere_topology() {
        let shape = Shape::sphere(0.0, 0.0, 0.0, 100.0, 4);
        assert_eq!(shape.points().len(), 16);
        assert_eq!(shape.edges().len(), 32);

        let edges = pairs(&shape);
        // same-longitude ring neighbours, wrapping j
        assert_eq!(&edges[..4], &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(edges[15], (15, 12));
        // next ring, wrapping i
        assert_eq!(edges[16], (0, 4));
        assert_eq!(edges[31], (15, 3));
        assert_edges_in_bounds(&shape);
    }

    #[test]
    fn test_sphere_points_on_surface() {
        let shape = Shape::sphere(1.0, 2.0, 3.0, 50.0, 6);
        let center = Point3::new(1.0, 2.0, 3.0);
        for p in shape.points() {
            assert!(((p - center).norm() - 50.0).abs() < 1e-9);
        }
        assert_eq!(shape.points()[0], Point3::new(51.0, 2.0, 3.0));
    }

    #[test]
    fn test_sphere_default_resolution() {
        let shape = Shape::sphere_default(0.0, 0.0, 0.0, 1.0);
        assert_eq!(shape.points().len(), 36 * 36);
        assert_eq!(shape.edges().len(), 2 * 36 * 36);
    }
}
