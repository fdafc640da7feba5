// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stencil Transform: concrete coordinate transforms for the mask algebra.
//!
//! The TRANSFORM operator in `stencil_mask` consumes a *pullback*, a map
//! from the transformed mask's output space back into the operand's space,
//! through the [`RealTransform`](stencil_mask::RealTransform) contract. This
//! crate provides the two transforms the algebra is normally driven with:
//!
//! - [`AffineTransform`]: a general N-dimensional affine map (square matrix
//!   plus translation column) with exact inversion when the matrix is
//!   non-singular.
//! - [`Translation`]: the pure-offset special case, always invertible and
//!   cheaper to build in tests and callers that only shift regions.
//!
//! To *move* a mask by `delta`, transform it with the pullback that undoes
//! the move: a [`Translation`] by the negated delta. The pullback carries an
//! output point back to where the operand would have contained it.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod affine;
mod translation;

pub use affine::AffineTransform;
pub use translation::Translation;
