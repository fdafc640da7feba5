// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spheres in N dimensions.

use alloc::vec::Vec;
use smallvec::SmallVec;

use stencil_mask::{BoundaryType, RealInterval, Region};

use crate::error::GeomError;

/// A sphere of fixed radius around a movable center, open or closed at its
/// surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec<f64>,
    radius: f64,
    boundary: BoundaryType,
}

impl Sphere {
    /// A sphere including its surface.
    pub fn closed(center: &[f64], radius: f64) -> Result<Self, GeomError> {
        Self::with_boundary(center, radius, BoundaryType::Closed)
    }

    /// A sphere excluding its surface.
    pub fn open(center: &[f64], radius: f64) -> Result<Self, GeomError> {
        Self::with_boundary(center, radius, BoundaryType::Open)
    }

    fn with_boundary(
        center: &[f64],
        radius: f64,
        boundary: BoundaryType,
    ) -> Result<Self, GeomError> {
        if radius <= 0.0 || radius.is_nan() {
            return Err(GeomError::NonPositiveExtent { value: radius });
        }
        Ok(Self {
            center: center.to_vec(),
            radius,
            boundary,
        })
    }

    /// The center position.
    #[must_use]
    pub fn center(&self) -> &[f64] {
        &self.center
    }

    /// The radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Moves the center to `pos` (extra trailing coordinates are ignored).
    pub fn set_center(&mut self, pos: &[f64]) -> Result<(), GeomError> {
        if pos.len() < self.center.len() {
            return Err(GeomError::ShortPosition {
                needed: self.center.len(),
                got: pos.len(),
            });
        }
        let n = self.center.len();
        self.center.copy_from_slice(&pos[..n]);
        Ok(())
    }

    /// Moves the center by `delta` (extra trailing coordinates are ignored).
    pub fn translate(&mut self, delta: &[f64]) -> Result<(), GeomError> {
        if delta.len() < self.center.len() {
            return Err(GeomError::ShortPosition {
                needed: self.center.len(),
                got: delta.len(),
            });
        }
        for (c, d) in self.center.iter_mut().zip(delta) {
            *c += d;
        }
        Ok(())
    }

    /// Changes the radius.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), GeomError> {
        if radius <= 0.0 || radius.is_nan() {
            return Err(GeomError::NonPositiveExtent { value: radius });
        }
        self.radius = radius;
        Ok(())
    }
}

impl Region for Sphere {
    fn num_dimensions(&self) -> usize {
        self.center.len()
    }

    fn test(&self, point: &[f64]) -> bool {
        let mut distance_sq = 0.0;
        for (d, center) in self.center.iter().enumerate() {
            let offset = point[d] - center;
            distance_sq += offset * offset;
        }
        let radius_sq = self.radius * self.radius;
        match self.boundary {
            BoundaryType::Closed => distance_sq <= radius_sq,
            _ => distance_sq < radius_sq,
        }
    }

    fn boundary_type(&self) -> BoundaryType {
        self.boundary
    }

    fn bounding_interval(&self) -> Option<RealInterval> {
        let min: SmallVec<[f64; 4]> = self.center.iter().map(|c| c - self.radius).collect();
        let max: SmallVec<[f64; 4]> = self.center.iter().map(|c| c + self.radius).collect();
        Some(RealInterval::new(&min, &max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_sphere_includes_surface() {
        let s = Sphere::closed(&[0.0, 0.0], 5.0).unwrap();
        assert!(s.test(&[0.0, 0.0]));
        assert!(s.test(&[3.0, 4.0]));
        assert!(s.test(&[5.0, 0.0]));
        assert!(!s.test(&[5.0, 0.1]));
    }

    #[test]
    fn open_sphere_excludes_surface() {
        let s = Sphere::open(&[0.0, 0.0], 5.0).unwrap();
        assert!(s.test(&[4.9, 0.0]));
        assert!(!s.test(&[3.0, 4.0]));
        assert!(!s.test(&[5.0, 0.0]));
    }

    #[test]
    fn bounds_track_the_center() {
        let mut s = Sphere::closed(&[-2.5, 6.0, 80.0], 2.0).unwrap();
        let i = s.bounding_interval().unwrap();
        assert_eq!((i.real_min(0), i.real_max(0)), (-4.5, -0.5));
        assert_eq!((i.real_min(2), i.real_max(2)), (78.0, 82.0));

        s.set_center(&[0.0, 0.0, 0.0]).unwrap();
        let i = s.bounding_interval().unwrap();
        assert_eq!((i.real_min(1), i.real_max(1)), (-2.0, 2.0));
    }

    #[test]
    fn invalid_radius_is_rejected() {
        assert_eq!(
            Sphere::closed(&[0.0], 0.0),
            Err(GeomError::NonPositiveExtent { value: 0.0 })
        );
        let mut s = Sphere::closed(&[0.0], 1.0).unwrap();
        assert!(s.set_radius(-3.0).is_err());
        assert_eq!(s.radius(), 1.0);
    }
}
