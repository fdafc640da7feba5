// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid spans and whole-span sampling.

use alloc::vec::Vec;
use smallvec::SmallVec;

use stencil_mask::Region;

/// An axis-aligned block of integer grid coordinates: an origin corner and a
/// per-dimension extent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterSpan {
    origin: Vec<i64>,
    extents: Vec<usize>,
}

impl RasterSpan {
    /// A span starting at `origin`, covering `extents[d]` cells in
    /// dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `origin` and `extents` have different lengths.
    #[must_use]
    pub fn new(origin: &[i64], extents: &[usize]) -> Self {
        assert_eq!(
            origin.len(),
            extents.len(),
            "span origin and extents must have the same number of dimensions"
        );
        Self {
            origin: origin.to_vec(),
            extents: extents.to_vec(),
        }
    }

    /// A span with its origin at zero.
    #[must_use]
    pub fn at_zero(extents: &[usize]) -> Self {
        let origin: Vec<i64> = extents.iter().map(|_| 0).collect();
        Self {
            origin,
            extents: extents.to_vec(),
        }
    }

    /// Number of dimensions this span indexes.
    #[must_use]
    pub fn num_dimensions(&self) -> usize {
        self.origin.len()
    }

    /// The origin corner.
    #[must_use]
    pub fn origin(&self) -> &[i64] {
        &self.origin
    }

    /// The per-dimension extents.
    #[must_use]
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extents.iter().product()
    }

    /// Whether the span covers no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of `coords`, dimension 0 fastest-varying.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is shorter than the span's dimensionality or lies
    /// outside the span.
    fn index_of(&self, coords: &[i64]) -> usize {
        let mut index = 0;
        let mut stride = 1;
        for (d, (origin, extent)) in self.origin.iter().zip(&self.extents).enumerate() {
            let offset = usize::try_from(coords[d] - origin).ok();
            let offset = match offset {
                Some(offset) if offset < *extent => offset,
                _ => panic!("grid coordinate outside the raster span"),
            };
            index += offset * stride;
            stride *= extent;
        }
        index
    }
}

/// A row-major boolean sampling of a region over a [`RasterSpan`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    span: RasterSpan,
    samples: Vec<bool>,
}

impl Raster {
    /// The span this raster covers.
    #[must_use]
    pub fn span(&self) -> &RasterSpan {
        &self.span
    }

    /// The raw samples, dimension 0 fastest-varying.
    #[must_use]
    pub fn samples(&self) -> &[bool] {
        &self.samples
    }

    /// The sample at the grid coordinate `coords`.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is shorter than the span's dimensionality or lies
    /// outside the span.
    #[must_use]
    pub fn get(&self, coords: &[i64]) -> bool {
        self.samples[self.span.index_of(coords)]
    }
}

/// Samples `region` at every integer coordinate of `span`.
///
/// Each grid coordinate becomes the continuous point with the same values;
/// the region's answer becomes the cell's boolean. The region is consulted
/// at its *current* state, cell by cell.
///
/// # Panics
///
/// Panics if the region's dimensionality differs from the span's.
#[must_use]
pub fn rasterize<R: Region + ?Sized>(region: &R, span: &RasterSpan) -> Raster {
    assert_eq!(
        region.num_dimensions(),
        span.num_dimensions(),
        "region and raster span must have the same number of dimensions"
    );
    let dims = span.num_dimensions();
    let mut samples = Vec::with_capacity(span.len());
    if span.is_empty() {
        return Raster {
            span: span.clone(),
            samples,
        };
    }
    // Odometer walk, dimension 0 fastest, matching the flat index order.
    let mut offsets: SmallVec<[usize; 4]> = core::iter::repeat_n(0, dims).collect();
    let mut point: SmallVec<[f64; 4]> = span.origin().iter().map(|&o| o as f64).collect();
    loop {
        samples.push(region.test(&point));
        let mut d = 0;
        loop {
            if d == dims {
                return Raster {
                    span: span.clone(),
                    samples,
                };
            }
            offsets[d] += 1;
            if offsets[d] < span.extents()[d] {
                point[d] = (span.origin()[d] + offsets[d] as i64) as f64;
                break;
            }
            offsets[d] = 0;
            point[d] = span.origin()[d] as f64;
            d += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_mask::RealMask;

    #[test]
    fn sentinel_rasters_are_constant() {
        let span = RasterSpan::new(&[-1, -1], &[3, 2]);
        let all = rasterize(&RealMask::all(2), &span);
        assert_eq!(all.samples().len(), 6);
        assert!(all.samples().iter().all(|&s| s));

        let empty = rasterize(&RealMask::empty(2), &span);
        assert!(empty.samples().iter().all(|&s| !s));
    }

    #[test]
    fn flat_order_has_dimension_zero_fastest() {
        let span = RasterSpan::at_zero(&[2, 2]);
        let raster = rasterize(&RealMask::all(2), &span);
        // (0,0), (1,0), (0,1), (1,1)
        assert_eq!(raster.samples().len(), 4);
        assert!(raster.get(&[1, 0]));
    }

    #[test]
    #[should_panic(expected = "outside the raster span")]
    fn out_of_span_lookup_panics() {
        let span = RasterSpan::at_zero(&[2, 2]);
        let raster = rasterize(&RealMask::all(2), &span);
        let _ = raster.get(&[2, 0]);
    }

    #[test]
    fn empty_span_produces_no_samples() {
        let span = RasterSpan::at_zero(&[0, 4]);
        let raster = rasterize(&RealMask::all(2), &span);
        assert!(raster.samples().is_empty());
        assert!(span.is_empty());
    }
}
