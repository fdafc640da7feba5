// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stencil Mask: composable N-dimensional continuous region masks.
//!
//! A *mask* is a region of N-dimensional real space expressed as a
//! membership predicate rather than a raster. This crate provides the mask
//! composition algebra:
//!
//! - Boolean combination of regions (AND, OR, XOR, SUBTRACT, NEGATE) and
//!   coordinate changes (TRANSFORM), each yielding a first-class mask.
//! - *Live* composition: operands are shared, never copied, and every query
//!   re-evaluates against current operand state. Move a shape after building
//!   a tree on it and the tree answers from the new geometry; there is no
//!   cache to go stale.
//! - Propagation of boundary semantics ([`BoundaryType`]), finite bounds
//!   ([`RealInterval`]), and degenerate-constant classification
//!   ([`KnownConstant`]) through every operator.
//! - Sentinel ALL/EMPTY masks with algebraic short-circuits, so combining
//!   with a constant simplifies instead of growing the tree.
//!
//! Shape primitives themselves live elsewhere (see `stencil_geom`); anything
//! implementing [`Region`] participates. Concrete transforms for the
//! TRANSFORM operator live in `stencil_transform`.
//!
//! ## API overview
//!
//! - [`RealMask`]: the mask type (leaves, sentinels, and composites).
//! - [`Region`]: the capability contract consumed from shape primitives.
//! - [`RealTransform`]: the pullback contract consumed by TRANSFORM.
//! - [`BinaryOperator`] / [`UnaryOperator`]: the operator registry; the
//!   combination rules live on these, matched exhaustively.
//! - [`BinaryComposite`] / [`UnaryComposite`]: introspectable nodes
//!   (`operator()`, `operand(i)`), reachable by matching on [`RealMask`].
//! - [`RealInterval`]: per-dimension bounds with the pure propagation
//!   helpers (intersection, union, transformed corner hull).
//!
//! ## Sharing and mutation
//!
//! Operands are held by `Rc`; the same shape may participate in any number
//! of independent composites. To keep mutating a shape after masks are built
//! on it, share it as `Rc<RefCell<S>>` and pass clones of the handle to
//! [`RealMask::leaf`]. Evaluation is single-threaded and synchronous; this
//! crate adds no synchronization of its own.
//!
//! ## Contract violations
//!
//! Combining masks of different dimensionality, querying a too-short point,
//! or indexing an operand out of range panics at the offending call. No
//! query on a well-formed mask fails.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod composite;
mod interval;
mod mask;
mod operators;
mod region;
mod sentinel;
mod transform;
mod types;

pub use composite::{BinaryComposite, UnaryComposite};
pub use interval::{transformed_hull, RealInterval};
pub use mask::RealMask;
pub use operators::{BinaryOperator, UnaryOperator};
pub use region::{DynEq, Region};
pub use sentinel::Sentinel;
pub use transform::{RealTransform, TransformRef};
pub use types::{BoundaryType, KnownConstant};
