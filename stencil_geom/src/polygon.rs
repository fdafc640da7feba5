// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simple polygons in the plane.

use alloc::vec::Vec;
use kurbo::{Point, Vec2};

use stencil_mask::{BoundaryType, RealInterval, Region};

use crate::error::GeomError;

/// A polygon in 2D, defined by its vertices in order.
///
/// Containment uses the even-odd rule (a ray cast counting edge crossings),
/// so the winding direction of the vertices does not matter. Membership of
/// points exactly on an edge falls out of the crossing arithmetic rather
/// than a principled rule, which is why the boundary type is
/// [`Unspecified`](BoundaryType::Unspecified). Self-intersecting vertex
/// lists are not detected; the even-odd rule applies to whatever edges are
/// described.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon2D {
    vertices: Vec<Point>,
}

impl Polygon2D {
    /// A polygon over at least three vertices, in order.
    pub fn new(vertices: &[Point]) -> Result<Self, GeomError> {
        if vertices.len() < 3 {
            return Err(GeomError::TooFewVertices {
                got: vertices.len(),
            });
        }
        Ok(Self {
            vertices: vertices.to_vec(),
        })
    }

    /// A polygon from separate x and y coordinate lists.
    ///
    /// When the lists differ in length, the extra tail of the longer one is
    /// ignored.
    pub fn from_coordinates(xs: &[f64], ys: &[f64]) -> Result<Self, GeomError> {
        let vertices: Vec<Point> = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Point::new(x, y))
            .collect();
        Self::new(&vertices)
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Point {
        self.vertices[index]
    }

    /// Moves the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_vertex(&mut self, index: usize, position: Point) {
        self.vertices[index] = position;
    }

    /// Moves every vertex by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
    }
}

impl Region for Polygon2D {
    fn num_dimensions(&self) -> usize {
        2
    }

    fn test(&self, point: &[f64]) -> bool {
        let (x, y) = (point[0], point[1]);
        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let (vi, vj) = (self.vertices[i], self.vertices[j]);
            if (vi.y > y) != (vj.y > y)
                && x < (vj.x - vi.x) * (y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    fn boundary_type(&self) -> BoundaryType {
        BoundaryType::Unspecified
    }

    fn bounding_interval(&self) -> Option<RealInterval> {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for vertex in &self.vertices {
            min.x = min.x.min(vertex.x);
            min.y = min.y.min(vertex.y);
            max.x = max.x.max(vertex.x);
            max.y = max.y.max(vertex.y);
        }
        Some(RealInterval::new(&[min.x, min.y], &[max.x, max.y]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon2D {
        Polygon2D::from_coordinates(&[5.0, 10.0, 15.0], &[0.0, 5.0, 0.0]).unwrap()
    }

    #[test]
    fn interior_and_exterior_points() {
        let t = triangle();
        assert!(t.test(&[10.0, 3.0]));
        assert!(t.test(&[10.0, 1.0]));
        assert!(!t.test(&[2.0, 1.0]));
        assert!(!t.test(&[10.0, 6.0]));
        assert_eq!(t.boundary_type(), BoundaryType::Unspecified);
    }

    #[test]
    fn concave_polygon_uses_even_odd_rule() {
        // An L-shape; the notch at the top right is outside.
        let l = Polygon2D::from_coordinates(
            &[0.0, 4.0, 4.0, 2.0, 2.0, 0.0],
            &[0.0, 0.0, 2.0, 2.0, 4.0, 4.0],
        )
        .unwrap();
        assert!(l.test(&[1.0, 3.0]));
        assert!(l.test(&[3.0, 1.0]));
        assert!(!l.test(&[3.0, 3.0]));
    }

    #[test]
    fn bounds_are_the_vertex_hull() {
        let t = triangle();
        let i = t.bounding_interval().unwrap();
        assert_eq!((i.real_min(0), i.real_max(0)), (5.0, 15.0));
        assert_eq!((i.real_min(1), i.real_max(1)), (0.0, 5.0));
    }

    #[test]
    fn moving_a_vertex_changes_containment() {
        let mut t = triangle();
        assert!(!t.test(&[10.0, -2.0]));
        for v in 0..t.num_vertices() {
            t.set_vertex(v, t.vertex(v) + Vec2::new(0.0, -5.0));
        }
        assert!(t.test(&[10.0, -2.0]));
        assert!(!t.test(&[10.0, 3.0]));
    }

    #[test]
    fn too_few_vertices_is_rejected() {
        assert_eq!(
            Polygon2D::from_coordinates(&[0.0, 1.0], &[0.0, 1.0]),
            Err(GeomError::TooFewVertices { got: 2 })
        );
    }
}
