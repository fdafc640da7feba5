// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The operator registry: for every operator, how to combine operand
//! membership, boundary types, bounding intervals, and emptiness/totality,
//! plus the sentinel short-circuits applied before a composite is built.
//!
//! All rules are pure functions of the operands' *current* state; nothing
//! here caches. Operators are closed enums matched exhaustively, so adding
//! an operator is a compile-error-guided change.

use alloc::rc::Rc;
use smallvec::SmallVec;

use crate::composite::{BinaryComposite, UnaryComposite};
use crate::interval::{transformed_hull, RealInterval};
use crate::mask::RealMask;
use crate::transform::TransformRef;
use crate::types::{BoundaryType, KnownConstant};

/// The two-operand mask operators.
///
/// `Minus` is directional: `Minus.combine(a, b)` is `a` with `b` removed.
/// Operand order is structural for every operator; even the commutative ones
/// never normalize it, and equality of composites is order-sensitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Intersection: a point is a member when both operands contain it.
    And,
    /// Union: a point is a member when either operand contains it.
    Or,
    /// Symmetric difference: a point is a member when exactly one operand
    /// contains it.
    ///
    /// XOR emptiness is best-effort: it is exact when the operands are
    /// structurally equal or both empty, and otherwise falls back to
    /// bounding-interval degeneracy. Two distinct descriptions of the same
    /// point set are not detected as empty.
    Xor,
    /// Difference: a point is a member when the left operand contains it and
    /// the right operand does not.
    Minus,
}

impl BinaryOperator {
    /// Combines two masks under this operator.
    ///
    /// Sentinel operands simplify before any node is built:
    ///
    /// - `ALL AND x` is `x`; `EMPTY AND x` is EMPTY (either order).
    /// - `ALL OR x` is ALL; `EMPTY OR x` is `x` (either order).
    /// - `ALL XOR x` is `NOT x`; `EMPTY XOR x` is `x` (either order).
    /// - `x MINUS EMPTY` is `x`; `ALL MINUS x` is `NOT x`. (`x MINUS ALL`
    ///   needs no rewrite: the ordinary node is already empty while keeping
    ///   `x`'s own live bounding interval.)
    ///
    /// Everything else becomes a [`BinaryComposite`] that re-evaluates
    /// against live operand state on every query.
    ///
    /// # Panics
    ///
    /// Panics if the operands span different numbers of dimensions.
    #[must_use]
    pub fn combine(self, left: &RealMask, right: &RealMask) -> RealMask {
        let dims = left.num_dimensions();
        assert_eq!(
            dims,
            right.num_dimensions(),
            "mask operands must span the same number of dimensions"
        );
        match self {
            Self::And => {
                if left.sentinel_constant() == Some(KnownConstant::All) {
                    return right.clone();
                }
                if right.sentinel_constant() == Some(KnownConstant::All) {
                    return left.clone();
                }
                if left.sentinel_constant() == Some(KnownConstant::Empty)
                    || right.sentinel_constant() == Some(KnownConstant::Empty)
                {
                    return RealMask::empty(dims);
                }
            }
            Self::Or => {
                if left.sentinel_constant() == Some(KnownConstant::All)
                    || right.sentinel_constant() == Some(KnownConstant::All)
                {
                    return RealMask::all(dims);
                }
                if left.sentinel_constant() == Some(KnownConstant::Empty) {
                    return right.clone();
                }
                if right.sentinel_constant() == Some(KnownConstant::Empty) {
                    return left.clone();
                }
            }
            Self::Xor => {
                if left.sentinel_constant() == Some(KnownConstant::All) {
                    return UnaryOperator::Negate.combine(right);
                }
                if right.sentinel_constant() == Some(KnownConstant::All) {
                    return UnaryOperator::Negate.combine(left);
                }
                if left.sentinel_constant() == Some(KnownConstant::Empty) {
                    return right.clone();
                }
                if right.sentinel_constant() == Some(KnownConstant::Empty) {
                    return left.clone();
                }
            }
            Self::Minus => {
                if right.sentinel_constant() == Some(KnownConstant::Empty) {
                    return left.clone();
                }
                if left.sentinel_constant() == Some(KnownConstant::All) {
                    return UnaryOperator::Negate.combine(right);
                }
            }
        }
        RealMask::Binary(Rc::new(BinaryComposite::new(self, left.clone(), right.clone())))
    }

    /// The operator's boolean formula over the operands' answers for `point`.
    #[must_use]
    pub fn test(self, left: &RealMask, right: &RealMask, point: &[f64]) -> bool {
        match self {
            Self::And => left.test(point) && right.test(point),
            Self::Or => left.test(point) || right.test(point),
            Self::Xor => left.test(point) != right.test(point),
            Self::Minus => left.test(point) && !right.test(point),
        }
    }

    /// Combines the operands' boundary types.
    #[must_use]
    pub fn boundary_type(self, left: BoundaryType, right: BoundaryType) -> BoundaryType {
        match self {
            Self::And | Self::Or => left.combine(right),
            Self::Xor => BoundaryType::Unspecified,
            // A point survives subtraction on the boundary of `right` exactly
            // when the complement of `right` keeps it.
            Self::Minus => left.combine(right.negate()),
        }
    }

    /// Combines the operands' bounding intervals.
    ///
    /// AND and OR/XOR produce an interval only when *both* operands are
    /// bounded (intersection and union hull respectively). MINUS is bounded
    /// by the left operand alone: removing points never grows a region.
    #[must_use]
    pub fn bounding_interval(self, left: &RealMask, right: &RealMask) -> Option<RealInterval> {
        match self {
            Self::And => match (left.bounding_interval(), right.bounding_interval()) {
                (Some(a), Some(b)) => Some(a.intersection(&b)),
                _ => None,
            },
            Self::Or | Self::Xor => match (left.bounding_interval(), right.bounding_interval()) {
                (Some(a), Some(b)) => Some(a.union(&b)),
                _ => None,
            },
            Self::Minus => left.bounding_interval(),
        }
    }

    /// Whether the combination is currently empty.
    #[must_use]
    pub fn is_empty(self, left: &RealMask, right: &RealMask) -> bool {
        match self {
            Self::And => {
                self.bounding_interval(left, right)
                    .is_some_and(|i| i.is_degenerate())
                    || left.is_empty()
                    || right.is_empty()
            }
            Self::Or => left.is_empty() && right.is_empty(),
            Self::Xor => {
                left == right
                    || (left.is_empty() && right.is_empty())
                    || self
                        .bounding_interval(left, right)
                        .is_some_and(|i| i.is_degenerate())
            }
            Self::Minus => {
                left.is_empty() || (!left.is_all() && right.is_all()) || left == right
            }
        }
    }

    /// Whether the combination currently covers the whole space.
    #[must_use]
    pub fn is_all(self, left: &RealMask, right: &RealMask) -> bool {
        match self {
            Self::And => left.is_all() && right.is_all(),
            Self::Or => left.is_all() || right.is_all(),
            Self::Xor => {
                (left.is_all() && right.is_empty()) || (left.is_empty() && right.is_all())
            }
            Self::Minus => left.is_all() && right.is_empty(),
        }
    }
}

/// The single-operand mask operators.
#[derive(Clone, Debug)]
pub enum UnaryOperator {
    /// Complement: a point is a member when the operand does not contain it.
    Negate,
    /// Coordinate change: a point is a member when its pullback image is a
    /// member of the operand.
    Transform(TransformRef),
}

impl UnaryOperator {
    /// Combines a mask under this operator.
    ///
    /// `NOT ALL` and `NOT EMPTY` stay composites (with the correct constant
    /// flags) rather than collapsing to bare sentinels, so operator and
    /// operand introspection remains available on the result.
    ///
    /// # Panics
    ///
    /// Panics if the operator is a transform whose dimensionality differs
    /// from the operand's.
    #[must_use]
    pub fn combine(&self, operand: &RealMask) -> RealMask {
        if let Self::Transform(t) = self {
            assert_eq!(
                t.num_dimensions(),
                operand.num_dimensions(),
                "transform dimensionality must match the mask"
            );
        }
        RealMask::Unary(Rc::new(UnaryComposite::new(self.clone(), operand.clone())))
    }

    /// The operator's membership formula over the operand's answer.
    #[must_use]
    pub fn test(&self, operand: &RealMask, point: &[f64]) -> bool {
        match self {
            Self::Negate => !operand.test(point),
            Self::Transform(t) => {
                let mut pulled: SmallVec<[f64; 4]> =
                    core::iter::repeat_n(0.0, t.num_dimensions()).collect();
                t.apply(point, &mut pulled);
                operand.test(&pulled)
            }
        }
    }

    /// Propagates the operand's boundary type.
    #[must_use]
    pub fn boundary_type(&self, operand: BoundaryType) -> BoundaryType {
        match self {
            Self::Negate => operand.negate(),
            Self::Transform(_) => operand,
        }
    }

    /// Propagates the operand's bounding interval.
    ///
    /// A complement is unbounded (the outside of a finite region stretches to
    /// infinity) except when the operand currently covers the whole space, in
    /// which case the result is empty and carries the degenerate interval. A
    /// transform is bounded when the operand is bounded *and* the pullback is
    /// invertible; the bound is then the hull of the operand's corners mapped
    /// through the inverse.
    #[must_use]
    pub fn bounding_interval(&self, operand: &RealMask) -> Option<RealInterval> {
        match self {
            Self::Negate => {
                if operand.is_all() {
                    Some(RealInterval::degenerate(operand.num_dimensions()))
                } else {
                    None
                }
            }
            Self::Transform(t) => {
                let interval = operand.bounding_interval()?;
                let inverse = t.inverse()?;
                Some(transformed_hull(&interval, &*inverse))
            }
        }
    }

    /// Whether the combination is currently empty.
    #[must_use]
    pub fn is_empty(&self, operand: &RealMask) -> bool {
        match self {
            Self::Negate => operand.is_all(),
            Self::Transform(_) => operand.is_empty(),
        }
    }

    /// Whether the combination currently covers the whole space.
    #[must_use]
    pub fn is_all(&self, operand: &RealMask) -> bool {
        match self {
            Self::Negate => operand.is_empty(),
            Self::Transform(_) => operand.is_all(),
        }
    }
}

/// Negation always matches negation; transforms match only when they are the
/// *same* transform handle, mirroring the identity semantics of operand
/// order.
impl PartialEq for UnaryOperator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Negate, Self::Negate) => true,
            (Self::Transform(a), Self::Transform(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_of_sentinels_short_circuits() {
        let all = RealMask::all(2);
        let empty = RealMask::empty(2);
        assert_eq!(BinaryOperator::And.combine(&all, &empty), empty);
        assert_eq!(BinaryOperator::And.combine(&empty, &all), empty);
        assert_eq!(BinaryOperator::Or.combine(&empty, &all), all);
    }

    #[test]
    fn xor_with_all_becomes_a_complement() {
        let all = RealMask::all(2);
        let empty = RealMask::empty(2);
        let m = BinaryOperator::Xor.combine(&all, &empty);
        let RealMask::Unary(composite) = &m else {
            panic!("expected a unary composite");
        };
        assert_eq!(*composite.operator(), UnaryOperator::Negate);
        assert!(m.is_all());
    }

    #[test]
    #[should_panic(expected = "same number of dimensions")]
    fn mismatched_dimensions_are_rejected() {
        let a = RealMask::all(2);
        let b = RealMask::all(3);
        let _ = BinaryOperator::And.combine(&a, &b);
    }
}
