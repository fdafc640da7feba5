// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinate transform contract consumed by the TRANSFORM operator.
//!
//! A transform stored in a mask is a *pullback*: it carries points of the
//! transformed mask's output space back into the operand's space, where the
//! operand's own test applies. Concrete transforms (N-dimensional affine
//! maps, translations) live in `stencil_transform`.

use alloc::rc::Rc;
use core::fmt::Debug;

/// Shared handle to a coordinate transform.
///
/// Transforms are immutable once built; composites compare them by handle
/// identity, mirroring how operand order is never normalized.
pub type TransformRef = Rc<dyn RealTransform>;

/// A map from output-space points to operand-space points.
pub trait RealTransform: Debug {
    /// Dimensionality of both the output and the operand space.
    fn num_dimensions(&self) -> usize;

    /// Writes the operand-space image of `point` into `out`.
    ///
    /// # Panics
    ///
    /// May panic if `point` or `out` is shorter than
    /// [`num_dimensions`](Self::num_dimensions).
    fn apply(&self, point: &[f64], out: &mut [f64]);

    /// Whether an exact inverse of this transform is available.
    fn is_invertible(&self) -> bool {
        false
    }

    /// The inverse map (operand space back to output space), when available.
    ///
    /// The TRANSFORM bound rule maps the operand's bounding-interval corners
    /// through this inverse; transforms without one produce unbounded masks.
    fn inverse(&self) -> Option<TransformRef> {
        None
    }
}
