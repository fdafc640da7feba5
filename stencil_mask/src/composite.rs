// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composite nodes: a mask built by applying an operator to one or two
//! operand masks.
//!
//! A composite is immutable in *structure* (its operator and operand
//! identities never change) but every query delegates to the operands'
//! current state, so mutating a leaf shape is immediately visible through
//! any tree built on it. Nothing is snapshotted or memoized.
//!
//! Equality is structural and order-sensitive: two composites are equal when
//! their operators match and their operand sequences are pairwise equal, to
//! arbitrary depth. `a AND b` is not equal to `b AND a` even though both
//! contain exactly the same points.

use crate::mask::RealMask;
use crate::operators::{BinaryOperator, UnaryOperator};

/// A mask produced by a two-operand operator.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryComposite {
    operator: BinaryOperator,
    left: RealMask,
    right: RealMask,
}

impl BinaryComposite {
    pub(crate) fn new(operator: BinaryOperator, left: RealMask, right: RealMask) -> Self {
        Self {
            operator,
            left,
            right,
        }
    }

    /// The operator this node applies.
    #[must_use]
    pub fn operator(&self) -> BinaryOperator {
        self.operator
    }

    /// The operands in order.
    #[must_use]
    pub fn operands(&self) -> [&RealMask; 2] {
        [&self.left, &self.right]
    }

    /// The operand at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not 0 or 1.
    #[must_use]
    pub fn operand(&self, index: usize) -> &RealMask {
        self.operands()[index]
    }

    /// The left operand.
    #[must_use]
    pub fn left(&self) -> &RealMask {
        &self.left
    }

    /// The right operand.
    #[must_use]
    pub fn right(&self) -> &RealMask {
        &self.right
    }
}

/// A mask produced by a single-operand operator.
#[derive(Clone, Debug, PartialEq)]
pub struct UnaryComposite {
    operator: UnaryOperator,
    operand: RealMask,
}

impl UnaryComposite {
    pub(crate) fn new(operator: UnaryOperator, operand: RealMask) -> Self {
        Self { operator, operand }
    }

    /// The operator this node applies.
    #[must_use]
    pub fn operator(&self) -> &UnaryOperator {
        &self.operator
    }

    /// The operands (always exactly one).
    #[must_use]
    pub fn operands(&self) -> [&RealMask; 1] {
        [&self.operand]
    }

    /// The operand.
    #[must_use]
    pub fn operand(&self) -> &RealMask {
        &self.operand
    }
}
