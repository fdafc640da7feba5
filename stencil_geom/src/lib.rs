// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stencil Geom: geometric shape primitives for the mask algebra.
//!
//! Every shape here implements [`Region`](stencil_mask::Region) and can be
//! combined through `stencil_mask`'s operators. Shapes are plain mutable
//! values: mutate them with `&mut` access, and share them with the algebra
//! as `Rc<RefCell<Shape>>` handles when composites should observe the edits
//! live.
//!
//! ## Shapes
//!
//! - [`OrthoBox`]: axis-aligned box in N dimensions, open or closed.
//! - [`Sphere`]: N-dimensional sphere, open or closed.
//! - [`Ellipsoid`]: axis-aligned ellipsoid, open or closed.
//! - [`Polygon2D`]: simple polygon in the plane (even-odd containment,
//!   unspecified boundary), built on [`kurbo`] points.
//! - [`LineSegment`]: a closed segment embedded in N dimensions.
//!
//! ## Validation
//!
//! Extents (side lengths, radii, semi-axes) are strictly positive; mutation
//! with an invalid value fails with [`GeomError`] and leaves the shape
//! unchanged. Positions shorter than the shape's dimensionality are
//! rejected the same way; longer positions are truncated.
//!
//! This crate is `no_std` and uses `alloc`. Enable exactly one of the `std`
//! (default) or `libm` features, which select how [`kurbo`] finds its float
//! functions.

#![no_std]

extern crate alloc;

mod ellipsoid;
mod error;
mod line;
mod ortho_box;
mod polygon;
mod sphere;

pub use ellipsoid::Ellipsoid;
pub use error::GeomError;
pub use line::LineSegment;
pub use ortho_box::OrthoBox;
pub use polygon::Polygon2D;
pub use sphere::Sphere;
