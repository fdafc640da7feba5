// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned boxes in N dimensions.

use alloc::vec::Vec;
use smallvec::SmallVec;

use stencil_mask::{BoundaryType, RealInterval, Region};

use crate::error::GeomError;

/// An axis-aligned box (orthotope), open or closed at its faces.
///
/// Stored as a center and per-dimension side lengths, so moving the box is a
/// center update and resizing is per-dimension. Side lengths are validated
/// strictly positive.
#[derive(Clone, Debug, PartialEq)]
pub struct OrthoBox {
    center: Vec<f64>,
    side_lengths: Vec<f64>,
    boundary: BoundaryType,
}

impl OrthoBox {
    /// A box including its faces, from opposite corners.
    ///
    /// # Panics
    ///
    /// Panics if `min` and `max` have different lengths.
    pub fn closed(min: &[f64], max: &[f64]) -> Result<Self, GeomError> {
        Self::from_corners(min, max, BoundaryType::Closed)
    }

    /// A box excluding its faces, from opposite corners.
    ///
    /// # Panics
    ///
    /// Panics if `min` and `max` have different lengths.
    pub fn open(min: &[f64], max: &[f64]) -> Result<Self, GeomError> {
        Self::from_corners(min, max, BoundaryType::Open)
    }

    fn from_corners(min: &[f64], max: &[f64], boundary: BoundaryType) -> Result<Self, GeomError> {
        assert_eq!(
            min.len(),
            max.len(),
            "box corners must have the same number of dimensions"
        );
        let mut center = Vec::with_capacity(min.len());
        let mut side_lengths = Vec::with_capacity(min.len());
        for (lo, hi) in min.iter().zip(max) {
            let side = hi - lo;
            if side <= 0.0 || side.is_nan() {
                return Err(GeomError::NonPositiveExtent { value: side });
            }
            center.push(lo + side / 2.0);
            side_lengths.push(side);
        }
        Ok(Self {
            center,
            side_lengths,
            boundary,
        })
    }

    /// The center position.
    #[must_use]
    pub fn center(&self) -> &[f64] {
        &self.center
    }

    /// The side length in dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is out of range.
    #[must_use]
    pub fn side_length(&self, d: usize) -> f64 {
        self.side_lengths[d]
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

    /// Resizes dimension `d` to `length`, keeping the center fixed.
    ///
    /// # Panics
    ///
    /// Panics if `d` is out of range.
    pub fn set_side_length(&mut self, d: usize, length: f64) -> Result<(), GeomError> {
        if length <= 0.0 || length.is_nan() {
            return Err(GeomError::NonPositiveExtent { value: length });
        }
        self.side_lengths[d] = length;
        Ok(())
    }
}

impl Region for OrthoBox {
    fn num_dimensions(&self) -> usize {
        self.center.len()
    }

    fn test(&self, point: &[f64]) -> bool {
        self.center
            .iter()
            .zip(&self.side_lengths)
            .enumerate()
            .all(|(d, (center, side))| {
                let offset = point[d] - center;
                let half = side / 2.0;
                match self.boundary {
                    BoundaryType::Closed => offset >= -half && offset <= half,
                    _ => offset > -half && offset < half,
                }
            })
    }

    fn boundary_type(&self) -> BoundaryType {
        self.boundary
    }

    fn bounding_interval(&self) -> Option<RealInterval> {
        let min: SmallVec<[f64; 4]> = self
            .center
            .iter()
            .zip(&self.side_lengths)
            .map(|(c, s)| c - s / 2.0)
            .collect();
        let max: SmallVec<[f64; 4]> = self
            .center
            .iter()
            .zip(&self.side_lengths)
            .map(|(c, s)| c + s / 2.0)
            .collect();
        Some(RealInterval::new(&min, &max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_box_contains_faces_and_corners() {
        let b = OrthoBox::closed(&[-6.8, -3.2375], &[13.2, 3.2625]).unwrap();
        assert!(b.test(&[-6.8, -3.2375]));
        assert!(b.test(&[13.2, 3.2625]));
        assert!(b.test(&[13.2, 0.0]));
        assert!(b.test(&[0.0, 0.0]));
        assert!(!b.test(&[12.0, 20.0]));
        assert!(!b.test(&[-6.81, 0.0]));
        assert_eq!(b.boundary_type(), BoundaryType::Closed);
        assert_eq!(b.side_length(0), 20.0);
        assert_eq!(b.side_length(1), 6.5);
    }

    #[test]
    fn open_box_excludes_faces() {
        let b = OrthoBox::open(&[-6.8, -3.2375], &[13.2, 3.2625]).unwrap();
        assert!(!b.test(&[-6.8, -3.2375]));
        assert!(!b.test(&[13.2, 0.0]));
        assert!(b.test(&[0.0, 0.0]));
        assert!(b.test(&[9.0, 1.625]));
        assert_eq!(b.boundary_type(), BoundaryType::Open);
    }

    #[test]
    fn high_dimensional_box() {
        let b = OrthoBox::open(&[1.0, 1.0, 1.0, 1.0], &[10.0, 10.0, 10.0, 10.0]).unwrap();
        assert!(b.test(&[5.0, 5.0, 5.0, 5.0]));
        assert!(!b.test(&[1.0, 1.0, 1.0, 1.0]));
        assert_eq!(b.num_dimensions(), 4);
    }

    #[test]
    fn mutation_moves_containment_and_bounds() {
        let mut b = OrthoBox::closed(&[0.0, 0.0], &[2.0, 2.0]).unwrap();
        assert!(b.test(&[1.0, 1.0]));

        b.translate(&[10.0, 0.0]).unwrap();
        assert!(!b.test(&[1.0, 1.0]));
        assert!(b.test(&[11.0, 1.0]));
        let i = b.bounding_interval().unwrap();
        assert_eq!((i.real_min(0), i.real_max(0)), (10.0, 12.0));

        b.set_side_length(1, 6.0).unwrap();
        assert!(b.test(&[11.0, 4.0]));
        let i = b.bounding_interval().unwrap();
        assert_eq!((i.real_min(1), i.real_max(1)), (-2.0, 4.0));
    }

    #[test]
    fn invalid_parameters_error_and_leave_shape_unchanged() {
        assert_eq!(
            OrthoBox::closed(&[0.0], &[0.0]),
            Err(GeomError::NonPositiveExtent { value: 0.0 })
        );
        let mut b = OrthoBox::closed(&[0.0], &[1.0]).unwrap();
        assert!(b.set_side_length(0, -2.0).is_err());
        assert_eq!(b.side_length(0), 1.0);
        assert_eq!(
            b.set_center(&[]),
            Err(GeomError::ShortPosition { needed: 1, got: 0 })
        );
    }

    #[test]
    fn equality_is_by_value_and_boundary() {
        let a = OrthoBox::closed(&[0.0, 0.0], &[6.0, 4.0]).unwrap();
        let b = OrthoBox::closed(&[0.0, 0.0], &[6.0, 4.0]).unwrap();
        let c = OrthoBox::open(&[0.0, 0.0], &[6.0, 4.0]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
