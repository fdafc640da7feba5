// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A movable sampling position over a region.

use alloc::vec;
use alloc::vec::Vec;

use stencil_mask::Region;

/// A current position plus the region it samples.
///
/// Consumers that iterate coordinates in their own order (scanline walkers,
/// sparse probes) keep one cursor, move it, and read [`get`](Self::get) at
/// each stop. The region is consulted live on every read; there is no
/// per-position caching.
#[derive(Clone, Debug)]
pub struct RegionCursor<R: Region> {
    region: R,
    position: Vec<f64>,
}

impl<R: Region> RegionCursor<R> {
    /// A cursor over `region`, positioned at the origin.
    #[must_use]
    pub fn new(region: R) -> Self {
        let position = vec![0.0; region.num_dimensions()];
        Self { region, position }
    }

    /// The region being sampled.
    #[must_use]
    pub fn region(&self) -> &R {
        &self.region
    }

    /// The current position.
    #[must_use]
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Moves to `pos` (extra trailing coordinates are ignored).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is shorter than the region's dimensionality.
    pub fn set_position(&mut self, pos: &[f64]) {
        let dims = self.position.len();
        self.position.copy_from_slice(&pos[..dims]);
    }

    /// Moves by `delta` (extra trailing coordinates are ignored).
    ///
    /// # Panics
    ///
    /// Panics if `delta` is shorter than the region's dimensionality.
    pub fn move_by(&mut self, delta: &[f64]) {
        for (d, position) in self.position.iter_mut().enumerate() {
            *position += delta[d];
        }
    }

    /// Whether the region contains the current position, right now.
    #[must_use]
    pub fn get(&self) -> bool {
        self.region.test(&self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_mask::RealMask;

    #[test]
    fn cursor_tracks_its_position() {
        let mut cursor = RegionCursor::new(RealMask::all(3));
        assert_eq!(cursor.position(), &[0.0, 0.0, 0.0]);
        cursor.set_position(&[1.0, 2.0, 3.0]);
        cursor.move_by(&[0.5, 0.0, -1.0]);
        assert_eq!(cursor.position(), &[1.5, 2.0, 2.0]);
        assert!(cursor.get());

        let empty = RegionCursor::new(RealMask::empty(3));
        assert!(!empty.get());
    }
}
