// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mask sum type tying leaves, sentinels, and composites together.

use alloc::rc::Rc;

use crate::composite::{BinaryComposite, UnaryComposite};
use crate::interval::RealInterval;
use crate::operators::{BinaryOperator, UnaryOperator};
use crate::region::{region_eq, Region};
use crate::sentinel::Sentinel;
use crate::transform::TransformRef;
use crate::types::{BoundaryType, KnownConstant};

/// An N-dimensional continuous region: a shape primitive, a degenerate
/// constant, or a combination of other masks.
///
/// Masks are cheap to clone (operands are shared, never copied) and every
/// query is evaluated lazily against live operand state. Combining masks via
/// [`and`](Self::and), [`or`](Self::or), [`xor`](Self::xor),
/// [`minus`](Self::minus), [`negate`](Self::negate), and
/// [`transform`](Self::transform) yields first-class masks that can be
/// combined further; if a leaf shape is mutated afterwards, every mask built
/// from it answers from the new geometry on its next query.
///
/// Masks referencing themselves (directly or through operands) are
/// unsupported: queries on such a cycle recurse without bound. No cycle
/// detection is performed.
#[derive(Clone, Debug)]
pub enum RealMask {
    /// A shape primitive, held by shared ownership.
    Leaf(Rc<dyn Region>),
    /// The ALL or EMPTY constant mask.
    Sentinel(Sentinel),
    /// A two-operand combination.
    Binary(Rc<BinaryComposite>),
    /// A single-operand combination.
    Unary(Rc<UnaryComposite>),
}

impl RealMask {
    /// Wraps an already-shared shape handle as a mask.
    ///
    /// Use this when the caller keeps its own handle for mutation; the usual
    /// shape of such a handle is `Rc<RefCell<S>>`:
    ///
    /// ```ignore
    /// let shape = Rc::new(RefCell::new(my_shape));
    /// let mask = RealMask::leaf(shape.clone());
    /// shape.borrow_mut().translate(&[1.0, 0.0]); // visible through `mask`
    /// ```
    #[must_use]
    pub fn leaf<R: Region + 'static>(region: Rc<R>) -> Self {
        Self::Leaf(region)
    }

    /// Takes ownership of a shape that will not be mutated afterwards.
    #[must_use]
    pub fn own<R: Region + 'static>(region: R) -> Self {
        Self::Leaf(Rc::new(region))
    }

    /// The mask containing every point of `dims`-dimensional space.
    #[must_use]
    pub fn all(dims: usize) -> Self {
        Self::Sentinel(Sentinel::all(dims))
    }

    /// The mask containing no points of `dims`-dimensional space.
    #[must_use]
    pub fn empty(dims: usize) -> Self {
        Self::Sentinel(Sentinel::empty(dims))
    }

    /// Dimensionality of the space this mask lives in.
    #[must_use]
    pub fn num_dimensions(&self) -> usize {
        match self {
            Self::Leaf(region) => region.num_dimensions(),
            Self::Sentinel(sentinel) => sentinel.num_dimensions(),
            Self::Binary(composite) => composite.left().num_dimensions(),
            Self::Unary(composite) => composite.operand().num_dimensions(),
        }
    }

    /// Whether `point` is a member of the region.
    ///
    /// Total for every well-formed mask: bounded masks answer `false`
    /// outside their bounding interval rather than failing.
    ///
    /// # Panics
    ///
    /// Panics if `point` has fewer coordinates than
    /// [`num_dimensions`](Self::num_dimensions).
    #[must_use]
    pub fn test(&self, point: &[f64]) -> bool {
        match self {
            Self::Leaf(region) => region.test(point),
            Self::Sentinel(sentinel) => sentinel.constant() == KnownConstant::All,
            Self::Binary(composite) => {
                composite
                    .operator()
                    .test(composite.left(), composite.right(), point)
            }
            Self::Unary(composite) => composite.operator().test(composite.operand(), point),
        }
    }

    /// How this mask behaves at its mathematical boundary.
    #[must_use]
    pub fn boundary_type(&self) -> BoundaryType {
        match self {
            Self::Leaf(region) => region.boundary_type(),
            // The whole space and the empty set have no meaningful boundary.
            Self::Sentinel(_) => BoundaryType::Unspecified,
            Self::Binary(composite) => composite.operator().boundary_type(
                composite.left().boundary_type(),
                composite.right().boundary_type(),
            ),
            Self::Unary(composite) => composite
                .operator()
                .boundary_type(composite.operand().boundary_type()),
        }
    }

    /// The smallest axis-aligned box guaranteed to contain every member
    /// point, or `None` for unbounded masks.
    ///
    /// Recomputed from live operand intervals on every call; mutating a leaf
    /// shape changes the answer of every mask bounded by it.
    #[must_use]
    pub fn bounding_interval(&self) -> Option<RealInterval> {
        match self {
            Self::Leaf(region) => region.bounding_interval(),
            Self::Sentinel(sentinel) => sentinel.interval().cloned(),
            Self::Binary(composite) => composite
                .operator()
                .bounding_interval(composite.left(), composite.right()),
            Self::Unary(composite) => {
                composite.operator().bounding_interval(composite.operand())
            }
        }
    }

    /// Whether this mask currently contains no points.
    ///
    /// Exact for sentinels and for combinations whose rules decide it from
    /// operand flags or degenerate bounds; a leaf shape is never empty (its
    /// extents are validated positive at construction). For XOR the answer
    /// is best-effort, see [`BinaryOperator::Xor`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Leaf(_) => false,
            Self::Sentinel(sentinel) => sentinel.constant() == KnownConstant::Empty,
            Self::Binary(composite) => composite
                .operator()
                .is_empty(composite.left(), composite.right()),
            Self::Unary(composite) => composite.operator().is_empty(composite.operand()),
        }
    }

    /// Whether this mask currently contains every point of the space.
    #[must_use]
    pub fn is_all(&self) -> bool {
        match self {
            Self::Leaf(_) => false,
            Self::Sentinel(sentinel) => sentinel.constant() == KnownConstant::All,
            Self::Binary(composite) => composite
                .operator()
                .is_all(composite.left(), composite.right()),
            Self::Unary(composite) => composite.operator().is_all(composite.operand()),
        }
    }

    /// The constant classification of this mask, derived live.
    #[must_use]
    pub fn known_constant(&self) -> KnownConstant {
        if self.is_all() {
            KnownConstant::All
        } else if self.is_empty() {
            KnownConstant::Empty
        } else {
            KnownConstant::None
        }
    }

    /// The intersection of this mask with `other`.
    ///
    /// # Panics
    ///
    /// Panics if the operands span different numbers of dimensions.
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        BinaryOperator::And.combine(self, other)
    }

    /// The union of this mask with `other`.
    ///
    /// # Panics
    ///
    /// Panics if the operands span different numbers of dimensions.
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        BinaryOperator::Or.combine(self, other)
    }

    /// The symmetric difference of this mask with `other`.
    ///
    /// # Panics
    ///
    /// Panics if the operands span different numbers of dimensions.
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        BinaryOperator::Xor.combine(self, other)
    }

    /// This mask with every point of `other` removed.
    ///
    /// # Panics
    ///
    /// Panics if the operands span different numbers of dimensions.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        BinaryOperator::Minus.combine(self, other)
    }

    /// The complement of this mask.
    #[must_use]
    pub fn negate(&self) -> Self {
        UnaryOperator::Negate.combine(self)
    }

    /// This mask under a coordinate change.
    ///
    /// `pullback` maps output-space points into this mask's space; the
    /// resulting mask contains an output point exactly when the pullback
    /// image is contained here. The result is bounded only when this mask is
    /// bounded and the pullback is invertible.
    ///
    /// # Panics
    ///
    /// Panics if the transform's dimensionality differs from the mask's.
    #[must_use]
    pub fn transform(&self, pullback: TransformRef) -> Self {
        UnaryOperator::Transform(pullback).combine(self)
    }

    /// The sentinel constant, for the factory short-circuits.
    ///
    /// Only *structural* sentinels answer; a composite that is currently
    /// empty reports `None` here, because its emptiness is live and may not
    /// survive the next operand mutation.
    pub(crate) fn sentinel_constant(&self) -> Option<KnownConstant> {
        match self {
            Self::Sentinel(sentinel) => Some(sentinel.constant()),
            _ => None,
        }
    }
}

/// Structural, order-sensitive equality.
///
/// Leaves compare by shape value (live, through their shared handles),
/// sentinels by dimensionality and constant, composites by operator and
/// operand sequence, recursively.
impl PartialEq for RealMask {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Leaf(a), Self::Leaf(b)) => region_eq(&**a, &**b),
            (Self::Sentinel(a), Self::Sentinel(b)) => a == b,
            (Self::Binary(a), Self::Binary(b)) => a == b,
            (Self::Unary(a), Self::Unary(b)) => a == b,
            _ => false,
        }
    }
}

/// A mask is itself a region, so composed masks can stand wherever a shape
/// primitive is expected (for example as a rasterization source).
impl Region for RealMask {
    fn num_dimensions(&self) -> usize {
        Self::num_dimensions(self)
    }

    fn test(&self, point: &[f64]) -> bool {
        Self::test(self, point)
    }

    fn boundary_type(&self) -> BoundaryType {
        Self::boundary_type(self)
    }

    fn bounding_interval(&self) -> Option<RealInterval> {
        Self::bounding_interval(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_answer_constantly() {
        let all = RealMask::all(2);
        let empty = RealMask::empty(2);
        assert!(all.test(&[4.0, -1000.0]));
        assert!(!empty.test(&[4.0, -1000.0]));
        assert!(all.is_all() && !all.is_empty());
        assert!(empty.is_empty() && !empty.is_all());
        assert_eq!(all.known_constant(), KnownConstant::All);
        assert_eq!(empty.known_constant(), KnownConstant::Empty);
    }

    #[test]
    fn negated_sentinels_stay_composites() {
        let not_empty = RealMask::empty(2).negate();
        let RealMask::Unary(_) = &not_empty else {
            panic!("expected a unary composite");
        };
        assert!(not_empty.is_all());
        assert!(!not_empty.is_empty());

        let not_all = RealMask::all(2).negate();
        assert!(not_all.is_empty());
        assert!(!not_all.is_all());
        assert!(not_all
            .bounding_interval()
            .is_some_and(|i| i.is_degenerate()));
    }

    #[test]
    fn double_negation_restores_membership() {
        let all = RealMask::all(1);
        let twice = all.negate().negate();
        assert!(twice.test(&[0.0]));
        assert!(twice.is_all());
    }

    #[test]
    fn sentinel_equality_is_by_dimension_and_constant() {
        assert_eq!(RealMask::all(2), RealMask::all(2));
        assert_ne!(RealMask::all(2), RealMask::all(3));
        assert_ne!(RealMask::all(2), RealMask::empty(2));
    }
}
