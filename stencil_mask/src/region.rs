// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability contract a shape must satisfy to participate in the mask
//! algebra.
//!
//! Shape primitives live outside this crate (see `stencil_geom`); the algebra
//! only consumes this trait. Implementations must keep [`Region::test`] pure
//! with respect to the shape's *current* parameters: mutating the shape may
//! change subsequent answers, but two calls without an intervening mutation
//! must agree.

use core::any::Any;
use core::cell::RefCell;
use core::fmt::Debug;

use crate::interval::RealInterval;
use crate::types::BoundaryType;

/// Object-safe value equality.
///
/// Composite masks compare structurally, which requires comparing leaf shapes
/// held as trait objects. This helper is blanket-implemented for every
/// `'static` type with `PartialEq`, so shape authors only derive `PartialEq`
/// and get dynamic comparison for free.
pub trait DynEq {
    /// The value as [`Any`], for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Whether `other` is the same concrete type with an equal value.
    fn dyn_eq(&self, other: &dyn DynEq) -> bool;
}

impl<T: Any + PartialEq> DynEq for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynEq) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// A region of N-dimensional continuous space expressed as a membership
/// predicate.
///
/// This is the contract consumed from shape primitives and exposed back to
/// callers by every mask. `test` must be *total*: it answers for every point
/// of matching dimensionality, including points outside any bounding
/// interval (where a bounded region answers `false`).
pub trait Region: DynEq + Debug {
    /// Dimensionality of the space this region lives in.
    fn num_dimensions(&self) -> usize;

    /// Whether `point` is a member of the region.
    ///
    /// Implementations index `point` per dimension; a point with fewer
    /// coordinates than [`num_dimensions`](Self::num_dimensions) panics,
    /// extra trailing coordinates are ignored.
    fn test(&self, point: &[f64]) -> bool;

    /// How this region behaves at its mathematical boundary.
    fn boundary_type(&self) -> BoundaryType;

    /// The smallest axis-aligned box containing every member point, when the
    /// region is known to be finite. Unbounded regions return `None`.
    ///
    /// The interval reflects the region's current parameters; it is
    /// recomputed, never cached, by callers that combine regions.
    fn bounding_interval(&self) -> Option<RealInterval> {
        None
    }
}

/// Shared mutable leaves: a [`RefCell`]-wrapped region is a region.
///
/// The algebra holds operands by shared ownership so that mutating a leaf
/// shape is visible through every composite built from it. The idiomatic
/// handle for a mutable shared shape is `Rc<RefCell<S>>`; this impl makes
/// that handle usable directly as an operand while the owner keeps calling
/// `borrow_mut` to move the shape.
impl<R: Region + PartialEq + 'static> Region for RefCell<R> {
    fn num_dimensions(&self) -> usize {
        self.borrow().num_dimensions()
    }

    fn test(&self, point: &[f64]) -> bool {
        self.borrow().test(point)
    }

    fn boundary_type(&self) -> BoundaryType {
        self.borrow().boundary_type()
    }

    fn bounding_interval(&self) -> Option<RealInterval> {
        self.borrow().bounding_interval()
    }
}

/// Compares two regions held as trait objects.
pub(crate) fn region_eq(a: &dyn Region, b: &dyn Region) -> bool {
    let b: &dyn DynEq = b;
    a.dyn_eq(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Half {
        above: f64,
    }

    impl Region for Half {
        fn num_dimensions(&self) -> usize {
            1
        }

        fn test(&self, point: &[f64]) -> bool {
            point[0] > self.above
        }

        fn boundary_type(&self) -> BoundaryType {
            BoundaryType::Open
        }
    }

    #[test]
    fn dyn_eq_compares_values_of_the_same_type() {
        let a = Half { above: 1.0 };
        let b = Half { above: 1.0 };
        let c = Half { above: 2.0 };
        assert!(region_eq(&a, &b));
        assert!(!region_eq(&a, &c));
    }

    #[test]
    fn refcell_region_observes_live_state() {
        let shared = RefCell::new(Half { above: 0.0 });
        assert!(Region::test(&shared, &[0.5]));
        shared.borrow_mut().above = 1.0;
        assert!(!Region::test(&shared, &[0.5]));
    }
}
