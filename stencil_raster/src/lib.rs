// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stencil Raster: sampling continuous masks onto integer grids.
//!
//! A mask answers membership for *continuous* points; discrete consumers
//! (image pipelines, preview renderers) want a boolean value per grid cell.
//! This crate is that adapter and nothing more: for each integer coordinate
//! in a [`RasterSpan`] it constructs the continuous point and asks the
//! region, producing a row-major [`Raster`] of booleans.
//!
//! Sampling is just repeated testing, so it inherits the algebra's liveness.
//! Rasterize, mutate a leaf shape, rasterize again, and the two rasters
//! differ accordingly; nothing is cached in between.
//!
//! [`RegionCursor`] is the incremental variant: it keeps a current position
//! and answers membership there, for consumers that walk coordinates in
//! their own order.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cursor;
mod raster;

pub use cursor::RegionCursor;
pub use raster::{rasterize, Raster, RasterSpan};
