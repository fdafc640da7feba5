// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned ellipsoids in N dimensions.

use alloc::vec::Vec;
use smallvec::SmallVec;

use stencil_mask::{BoundaryType, RealInterval, Region};

use crate::error::GeomError;

/// An axis-aligned ellipsoid: center plus one semi-axis length per
/// dimension, open or closed at its surface.
///
/// When `center` and `semi_axes` differ in length, the dimensionality is the
/// smaller of the two and the longer input is truncated.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    center: Vec<f64>,
    semi_axes: Vec<f64>,
    boundary: BoundaryType,
}

impl Ellipsoid {
    /// An ellipsoid including its surface.
    pub fn closed(center: &[f64], semi_axes: &[f64]) -> Result<Self, GeomError> {
        Self::with_boundary(center, semi_axes, BoundaryType::Closed)
    }

    /// An ellipsoid excluding its surface.
    pub fn open(center: &[f64], semi_axes: &[f64]) -> Result<Self, GeomError> {
        Self::with_boundary(center, semi_axes, BoundaryType::Open)
    }

    fn with_boundary(
        center: &[f64],
        semi_axes: &[f64],
        boundary: BoundaryType,
    ) -> Result<Self, GeomError> {
        let dims = center.len().min(semi_axes.len());
        for &axis in &semi_axes[..dims] {
            if axis <= 0.0 || axis.is_nan() {
                return Err(GeomError::NonPositiveExtent { value: axis });
            }
        }
        Ok(Self {
            center: center[..dims].to_vec(),
            semi_axes: semi_axes[..dims].to_vec(),
            boundary,
        })
    }

    /// The center position.
    #[must_use]
    pub fn center(&self) -> &[f64] {
        &self.center
    }

    /// The semi-axis length in dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is out of range.
    #[must_use]
    pub fn semi_axis_length(&self, d: usize) -> f64 {
        self.semi_axes[d]
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

    /// Changes the semi-axis length in dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is out of range.
    pub fn set_semi_axis_length(&mut self, d: usize, length: f64) -> Result<(), GeomError> {
        if length <= 0.0 || length.is_nan() {
            return Err(GeomError::NonPositiveExtent { value: length });
        }
        self.semi_axes[d] = length;
        Ok(())
    }
}

impl Region for Ellipsoid {
    fn num_dimensions(&self) -> usize {
        self.center.len()
    }

    fn test(&self, point: &[f64]) -> bool {
        let mut sum = 0.0;
        for (d, (center, axis)) in self.center.iter().zip(&self.semi_axes).enumerate() {
            let scaled = (point[d] - center) / axis;
            sum += scaled * scaled;
        }
        match self.boundary {
            BoundaryType::Closed => sum <= 1.0,
            _ => sum < 1.0,
        }
    }

    fn boundary_type(&self) -> BoundaryType {
        self.boundary
    }

    fn bounding_interval(&self) -> Option<RealInterval> {
        let min: SmallVec<[f64; 4]> = self
            .center
            .iter()
            .zip(&self.semi_axes)
            .map(|(c, a)| c - a)
            .collect();
        let max: SmallVec<[f64; 4]> = self
            .center
            .iter()
            .zip(&self.semi_axes)
            .map(|(c, a)| c + a)
            .collect();
        Some(RealInterval::new(&min, &max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_ellipsoid_includes_surface() {
        let e = Ellipsoid::closed(&[0.0, 0.0], &[2.0, 4.0]).unwrap();
        assert!(e.test(&[0.0, 0.0]));
        assert!(e.test(&[2.0, 0.0]));
        assert!(e.test(&[0.0, -4.0]));
        assert!(!e.test(&[2.0, 0.5]));
    }

    #[test]
    fn open_ellipsoid_excludes_surface() {
        let e = Ellipsoid::open(&[0.0, 0.0], &[2.0, 4.0]).unwrap();
        assert!(e.test(&[1.9, 0.0]));
        assert!(!e.test(&[2.0, 0.0]));
        assert!(!e.test(&[0.0, 4.0]));
    }

    #[test]
    fn longer_center_is_truncated() {
        let e = Ellipsoid::closed(&[1.0, 2.0, 3.0], &[2.0, 3.0]).unwrap();
        assert_eq!(e.num_dimensions(), 2);
        assert!(e.test(&[1.0, 2.0]));
    }

    #[test]
    fn mutation_updates_containment() {
        let mut e = Ellipsoid::closed(&[0.0, 0.0], &[2.5, 6.25]).unwrap();
        assert!(e.test(&[0.0, -6.0]));

        e.set_center(&[122.0, 36.0]).unwrap();
        assert!(!e.test(&[0.0, -6.0]));
        assert!(e.test(&[122.0, 36.0]));

        e.set_semi_axis_length(0, 0.5).unwrap();
        assert!(!e.test(&[121.0, 36.0]));
        assert!(e.test(&[122.25, 36.0]));
    }

    #[test]
    fn non_positive_semi_axis_is_rejected() {
        assert!(Ellipsoid::closed(&[0.0, 0.0], &[2.0, 0.0]).is_err());
        let mut e = Ellipsoid::closed(&[0.0, 0.0], &[2.0, 3.0]).unwrap();
        assert_eq!(
            e.set_semi_axis_length(1, -1.0),
            Err(GeomError::NonPositiveExtent { value: -1.0 })
        );
        assert_eq!(e.semi_axis_length(1), 3.0);
    }
}
