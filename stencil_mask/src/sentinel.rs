// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The degenerate ALL and EMPTY masks.
//!
//! Sentinels carry no geometry; they exist so the combination factory can
//! simplify algebraically (`ALL AND x` is `x`, `EMPTY OR x` is `x`, and so
//! on) with ordinary pattern matches instead of per-point evaluation. They
//! are cheap values, safe to share across any number of composites.

use crate::interval::RealInterval;
use crate::types::KnownConstant;

/// A mask that is constantly true (ALL) or constantly false (EMPTY) over a
/// space of fixed dimensionality.
#[derive(Clone, Debug, PartialEq)]
pub struct Sentinel {
    dims: usize,
    constant: KnownConstant,
    interval: Option<RealInterval>,
}

impl Sentinel {
    /// The mask containing every point of `dims`-dimensional space.
    ///
    /// ALL is unbounded: it has no finite bounding interval.
    #[must_use]
    pub fn all(dims: usize) -> Self {
        Self {
            dims,
            constant: KnownConstant::All,
            interval: None,
        }
    }

    /// The mask containing no points of `dims`-dimensional space.
    ///
    /// EMPTY carries the canonical degenerate interval, so bound propagation
    /// treats it as the identity for unions.
    #[must_use]
    pub fn empty(dims: usize) -> Self {
        Self {
            dims,
            constant: KnownConstant::Empty,
            interval: Some(RealInterval::degenerate(dims)),
        }
    }

    /// Dimensionality of the space.
    #[must_use]
    pub fn num_dimensions(&self) -> usize {
        self.dims
    }

    /// Which constant this sentinel is. Never [`KnownConstant::None`].
    #[must_use]
    pub fn constant(&self) -> KnownConstant {
        self.constant
    }

    /// The sentinel's interval: degenerate for EMPTY, absent for ALL.
    #[must_use]
    pub fn interval(&self) -> Option<&RealInterval> {
        self.interval.as_ref()
    }
}
