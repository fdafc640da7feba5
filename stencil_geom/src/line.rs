// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line segments embedded in N dimensions.

use alloc::vec::Vec;
use smallvec::SmallVec;

use stencil_mask::{BoundaryType, RealInterval, Region};

use crate::error::GeomError;

/// Squared-distance tolerance for the on-segment test. Floating-point
/// projection rarely lands exactly on the segment, so membership accepts
/// points within this slack.
const ON_SEGMENT_TOLERANCE_SQ: f64 = 1e-12;

/// A segment between two endpoints, embedded in N-dimensional space.
///
/// A line is always closed: both endpoints are members. When the endpoint
/// arrays differ in length, the dimensionality is the smaller of the two and
/// the longer input is truncated.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment {
    point_one: Vec<f64>,
    point_two: Vec<f64>,
}

impl LineSegment {
    /// A segment between `point_one` and `point_two`.
    #[must_use]
    pub fn new(point_one: &[f64], point_two: &[f64]) -> Self {
        let dims = point_one.len().min(point_two.len());
        Self {
            point_one: point_one[..dims].to_vec(),
            point_two: point_two[..dims].to_vec(),
        }
    }

    /// The first endpoint.
    #[must_use]
    pub fn endpoint_one(&self) -> &[f64] {
        &self.point_one
    }

    /// The second endpoint.
    #[must_use]
    pub fn endpoint_two(&self) -> &[f64] {
        &self.point_two
    }

    /// Moves the first endpoint (extra trailing coordinates are ignored).
    pub fn set_endpoint_one(&mut self, pos: &[f64]) -> Result<(), GeomError> {
        Self::set_endpoint(&mut self.point_one, pos)
    }

    /// Moves the second endpoint (extra trailing coordinates are ignored).
    pub fn set_endpoint_two(&mut self, pos: &[f64]) -> Result<(), GeomError> {
        Self::set_endpoint(&mut self.point_two, pos)
    }

    fn set_endpoint(endpoint: &mut [f64], pos: &[f64]) -> Result<(), GeomError> {
        if pos.len() < endpoint.len() {
            return Err(GeomError::ShortPosition {
                needed: endpoint.len(),
                got: pos.len(),
            });
        }
        endpoint.copy_from_slice(&pos[..endpoint.len()]);
        Ok(())
    }
}

impl Region for LineSegment {
    fn num_dimensions(&self) -> usize {
        self.point_one.len()
    }

    fn test(&self, point: &[f64]) -> bool {
        // Project onto the segment, reject projections outside [0, 1], then
        // require the residual to vanish (within tolerance).
        let mut dot = 0.0;
        let mut length_sq = 0.0;
        for (d, (one, two)) in self.point_one.iter().zip(&self.point_two).enumerate() {
            let direction = two - one;
            dot += (point[d] - one) * direction;
            length_sq += direction * direction;
        }
        let t = if length_sq == 0.0 {
            0.0
        } else {
            dot / length_sq
        };
        if !(0.0..=1.0).contains(&t) {
            return false;
        }
        let mut residual_sq = 0.0;
        for (d, (one, two)) in self.point_one.iter().zip(&self.point_two).enumerate() {
            let closest = one + t * (two - one);
            let offset = point[d] - closest;
            residual_sq += offset * offset;
        }
        residual_sq <= ON_SEGMENT_TOLERANCE_SQ
    }

    fn boundary_type(&self) -> BoundaryType {
        BoundaryType::Closed
    }

    fn bounding_interval(&self) -> Option<RealInterval> {
        let min: SmallVec<[f64; 4]> = self
            .point_one
            .iter()
            .zip(&self.point_two)
            .map(|(a, b)| a.min(*b))
            .collect();
        let max: SmallVec<[f64; 4]> = self
            .point_one
            .iter()
            .zip(&self.point_two)
            .map(|(a, b)| a.max(*b))
            .collect();
        Some(RealInterval::new(&min, &max))
    }
}
