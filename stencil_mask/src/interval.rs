// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned real intervals and the pure propagation helpers used by the
//! operator registry.
//!
//! A [`RealInterval`] is the smallest axis-aligned box guaranteed to contain
//! all points where a mask can test true. Composites recompute their interval
//! from live operand intervals on every query, so everything here is a pure
//! function of its arguments.

use smallvec::SmallVec;

use crate::transform::RealTransform;

/// Per-dimension coordinate storage. Masks are almost always low-dimensional,
/// so a small inline buffer avoids allocation for the common 2D/3D cases.
type Coords = SmallVec<[f64; 4]>;

/// An axis-aligned box `[min_d, max_d]` per dimension.
///
/// An interval is *degenerate* when `min_d > max_d` in any dimension. A
/// degenerate interval denotes geometric emptiness discoverable from bounds
/// alone: no point satisfies all per-dimension constraints.
#[derive(Clone, Debug, PartialEq)]
pub struct RealInterval {
    min: Coords,
    max: Coords,
}

impl RealInterval {
    /// Creates an interval from per-dimension minima and maxima.
    ///
    /// # Panics
    ///
    /// Panics if `min` and `max` have different lengths.
    #[must_use]
    pub fn new(min: &[f64], max: &[f64]) -> Self {
        assert_eq!(
            min.len(),
            max.len(),
            "interval min and max must have the same number of dimensions"
        );
        Self {
            min: Coords::from_slice(min),
            max: Coords::from_slice(max),
        }
    }

    /// The canonical degenerate interval: `+inf` minima and `-inf` maxima.
    ///
    /// This is the identity for [`union`](Self::union), and is the interval
    /// carried by the EMPTY sentinel.
    #[must_use]
    pub fn degenerate(dims: usize) -> Self {
        Self {
            min: core::iter::repeat_n(f64::INFINITY, dims).collect(),
            max: core::iter::repeat_n(f64::NEG_INFINITY, dims).collect(),
        }
    }

    /// Number of dimensions this interval spans.
    #[must_use]
    pub fn num_dimensions(&self) -> usize {
        self.min.len()
    }

    /// The lower bound in dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is not less than [`num_dimensions`](Self::num_dimensions).
    #[must_use]
    pub fn real_min(&self, d: usize) -> f64 {
        self.min[d]
    }

    /// The upper bound in dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is not less than [`num_dimensions`](Self::num_dimensions).
    #[must_use]
    pub fn real_max(&self, d: usize) -> f64 {
        self.max[d]
    }

    /// All lower bounds, one per dimension.
    #[must_use]
    pub fn min(&self) -> &[f64] {
        &self.min
    }

    /// All upper bounds, one per dimension.
    #[must_use]
    pub fn max(&self) -> &[f64] {
        &self.max
    }

    /// Whether `min_d > max_d` in any dimension, i.e. the interval contains
    /// no points at all.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min.iter().zip(&self.max).any(|(lo, hi)| lo > hi)
    }

    /// Whether `point` lies inside the interval (inclusive on both sides).
    ///
    /// Extra trailing coordinates in `point` are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `point` has fewer coordinates than the interval has
    /// dimensions.
    #[must_use]
    pub fn contains(&self, point: &[f64]) -> bool {
        (0..self.min.len()).all(|d| point[d] >= self.min[d] && point[d] <= self.max[d])
    }

    /// Per-dimension intersection: `[max(min0, min1), min(max0, max1)]`.
    ///
    /// The result is degenerate when the operands do not overlap.
    ///
    /// # Panics
    ///
    /// Panics if the operands span different numbers of dimensions.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        assert_eq!(
            self.num_dimensions(),
            other.num_dimensions(),
            "interval operands must span the same number of dimensions"
        );
        Self {
            min: self
                .min
                .iter()
                .zip(&other.min)
                .map(|(a, b)| a.max(*b))
                .collect(),
            max: self
                .max
                .iter()
                .zip(&other.max)
                .map(|(a, b)| a.min(*b))
                .collect(),
        }
    }

    /// Per-dimension union hull: `[min(min0, min1), max(max0, max1)]`.
    ///
    /// # Panics
    ///
    /// Panics if the operands span different numbers of dimensions.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        assert_eq!(
            self.num_dimensions(),
            other.num_dimensions(),
            "interval operands must span the same number of dimensions"
        );
        Self {
            min: self
                .min
                .iter()
                .zip(&other.min)
                .map(|(a, b)| a.min(*b))
                .collect(),
            max: self
                .max
                .iter()
                .zip(&other.max)
                .map(|(a, b)| a.max(*b))
                .collect(),
        }
    }
}

/// Hull of an interval's corners mapped through `map`.
///
/// Used by the TRANSFORM bound rule: with `map` being the *inverse* of the
/// stored pullback (so it carries operand-space points into output space),
/// the hull of the mapped corners is a conservative bound of the transformed
/// region. Exact for affine maps of boxes.
///
/// # Panics
///
/// Panics if `map`'s dimensionality differs from the interval's, or if the
/// interval spans 64 or more dimensions (the corner count would overflow).
#[must_use]
pub fn transformed_hull(interval: &RealInterval, map: &dyn RealTransform) -> RealInterval {
    let n = interval.num_dimensions();
    assert_eq!(
        map.num_dimensions(),
        n,
        "transform dimensionality must match the interval"
    );
    assert!(n < usize::BITS as usize, "corner enumeration overflow");

    let mut hull = RealInterval::degenerate(n);
    let mut corner: Coords = core::iter::repeat_n(0.0, n).collect();
    let mut image: Coords = core::iter::repeat_n(0.0, n).collect();
    for bits in 0..(1_usize << n) {
        for d in 0..n {
            corner[d] = if bits & (1 << d) != 0 {
                interval.max[d]
            } else {
                interval.min[d]
            };
        }
        map.apply(&corner, &mut image);
        for d in 0..n {
            hull.min[d] = hull.min[d].min(image[d]);
            hull.max[d] = hull.max[d].max(image[d]);
        }
    }
    hull
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_of_overlapping_intervals() {
        let a = RealInterval::new(&[1.0, 3.0], &[7.0, 10.0]);
        let b = RealInterval::new(&[3.0, 3.0], &[12.0, 13.0]);
        let i = a.intersection(&b);
        assert_eq!(i.min(), &[3.0, 3.0]);
        assert_eq!(i.max(), &[7.0, 10.0]);
        assert!(!i.is_degenerate());
    }

    #[test]
    fn intersection_of_disjoint_intervals_is_degenerate() {
        let a = RealInterval::new(&[0.0], &[1.0]);
        let b = RealInterval::new(&[2.0], &[3.0]);
        assert!(a.intersection(&b).is_degenerate());
    }

    #[test]
    fn union_is_the_hull() {
        let a = RealInterval::new(&[3.0, 3.0], &[7.0, 7.0]);
        let b = RealInterval::new(&[4.0, 4.0], &[8.0, 8.0]);
        let u = a.union(&b);
        assert_eq!(u.min(), &[3.0, 3.0]);
        assert_eq!(u.max(), &[8.0, 8.0]);
    }

    #[test]
    fn degenerate_is_union_identity() {
        let a = RealInterval::new(&[-2.0, 5.0], &[4.0, 6.0]);
        let u = RealInterval::degenerate(2).union(&a);
        assert_eq!(u, a);
    }

    #[test]
    fn contains_is_inclusive() {
        let a = RealInterval::new(&[0.0, 0.0], &[2.0, 2.0]);
        assert!(a.contains(&[0.0, 2.0]));
        assert!(a.contains(&[1.0, 1.0]));
        assert!(!a.contains(&[2.1, 1.0]));
    }
}
