// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! General N-dimensional affine maps.

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;

use stencil_mask::{RealTransform, TransformRef};

/// Pivots smaller than this are treated as singular during inversion.
const SINGULARITY_EPSILON: f64 = 1e-12;

/// An affine map `x ↦ A·x + t` over N-dimensional space.
///
/// Stored as an `n × n` row-major matrix and a translation column. The map
/// is a value: build it once, share it behind a [`TransformRef`], and it
/// never changes. Inversion is exact up to floating-point for non-singular
/// matrices and reports failure (rather than panicking) for singular ones.
#[derive(Clone, Debug, PartialEq)]
pub struct AffineTransform {
    dims: usize,
    /// Row-major `dims × dims` linear part.
    matrix: Vec<f64>,
    translation: Vec<f64>,
}

impl AffineTransform {
    /// The identity map on `dims`-dimensional space.
    #[must_use]
    pub fn identity(dims: usize) -> Self {
        let mut matrix = vec![0.0; dims * dims];
        for d in 0..dims {
            matrix[d * dims + d] = 1.0;
        }
        Self {
            dims,
            matrix,
            translation: vec![0.0; dims],
        }
    }

    /// Builds an affine map from an augmented row-major matrix.
    ///
    /// `entries` holds `dims` rows of `dims + 1` values each: the linear
    /// part followed by that row's translation component, i.e. the matrix
    /// `[A | t]`.
    ///
    /// # Panics
    ///
    /// Panics if `entries` does not hold exactly `dims * (dims + 1)` values.
    #[must_use]
    pub fn from_matrix(dims: usize, entries: &[f64]) -> Self {
        assert_eq!(
            entries.len(),
            dims * (dims + 1),
            "augmented affine matrix must be dims x (dims + 1)"
        );
        let mut matrix = Vec::with_capacity(dims * dims);
        let mut translation = Vec::with_capacity(dims);
        for row in entries.chunks_exact(dims + 1) {
            matrix.extend_from_slice(&row[..dims]);
            translation.push(row[dims]);
        }
        Self {
            dims,
            matrix,
            translation,
        }
    }

    /// The entry at `row`, `col`, where `col == dims` addresses the
    /// translation column.
    ///
    /// # Panics
    ///
    /// Panics if `row >= dims` or `col > dims`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.dims && col <= self.dims, "affine entry out of range");
        if col == self.dims {
            self.translation[row]
        } else {
            self.matrix[row * self.dims + col]
        }
    }

    /// The inverse map, or `None` when the linear part is singular.
    #[must_use]
    pub fn inverted(&self) -> Option<Self> {
        let n = self.dims;
        let w = 2 * n;
        // Gauss-Jordan over the augmented [A | I], with partial pivoting.
        let mut aug = vec![0.0; n * w];
        for r in 0..n {
            aug[r * w..r * w + n].copy_from_slice(&self.matrix[r * n..(r + 1) * n]);
            aug[r * w + n + r] = 1.0;
        }
        for col in 0..n {
            let mut pivot = col;
            for r in (col + 1)..n {
                if aug[r * w + col].abs() > aug[pivot * w + col].abs() {
                    pivot = r;
                }
            }
            if aug[pivot * w + col].abs() < SINGULARITY_EPSILON {
                return None;
            }
            if pivot != col {
                for c in 0..w {
                    aug.swap(pivot * w + c, col * w + c);
                }
            }
            let p = aug[col * w + col];
            for c in 0..w {
                aug[col * w + c] /= p;
            }
            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = aug[r * w + col];
                if factor != 0.0 {
                    for c in 0..w {
                        aug[r * w + c] -= factor * aug[col * w + c];
                    }
                }
            }
        }
        let mut matrix = vec![0.0; n * n];
        for r in 0..n {
            matrix[r * n..(r + 1) * n].copy_from_slice(&aug[r * w + n..r * w + w]);
        }
        // x = A·y + t  ⇒  y = A⁻¹·x − A⁻¹·t
        let mut translation = vec![0.0; n];
        for r in 0..n {
            let mut acc = 0.0;
            for c in 0..n {
                acc += matrix[r * n + c] * self.translation[c];
            }
            translation[r] = -acc;
        }
        Some(Self {
            dims: n,
            matrix,
            translation,
        })
    }
}

impl RealTransform for AffineTransform {
    fn num_dimensions(&self) -> usize {
        self.dims
    }

    fn apply(&self, point: &[f64], out: &mut [f64]) {
        for r in 0..self.dims {
            let mut acc = self.translation[r];
            for c in 0..self.dims {
                acc += self.matrix[r * self.dims + c] * point[c];
            }
            out[r] = acc;
        }
    }

    fn is_invertible(&self) -> bool {
        self.inverted().is_some()
    }

    fn inverse(&self) -> Option<TransformRef> {
        self.inverted().map(|inv| Rc::new(inv) as TransformRef)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_vec(t: &AffineTransform, p: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; t.num_dimensions()];
        t.apply(p, &mut out);
        out
    }

    #[test]
    fn identity_leaves_points_alone() {
        let id = AffineTransform::identity(3);
        assert_eq!(apply_vec(&id, &[1.0, -2.0, 3.5]), vec![1.0, -2.0, 3.5]);
        assert!(id.is_invertible());
    }

    #[test]
    fn from_matrix_reads_rows_with_translation_column() {
        let t = AffineTransform::from_matrix(2, &[1.0, 2.0, 10.0, 0.0, 1.0, -5.0]);
        assert_eq!(t.get(0, 0), 1.0);
        assert_eq!(t.get(0, 1), 2.0);
        assert_eq!(t.get(0, 2), 10.0);
        assert_eq!(t.get(1, 2), -5.0);
        // Shear + translate: (x, y) ↦ (x + 2y + 10, y − 5).
        assert_eq!(apply_vec(&t, &[1.0, 3.0]), vec![17.0, -2.0]);
    }

    #[test]
    fn inverse_round_trips_points() {
        let t = AffineTransform::from_matrix(2, &[0.0, -1.0, 4.0, 1.0, 0.0, -2.0]);
        let inv = t.inverted().expect("rotation is invertible");
        let p = [3.25, -7.5];
        let there = apply_vec(&t, &p);
        let back = apply_vec(&inv, &there);
        assert!((back[0] - p[0]).abs() < 1e-12);
        assert!((back[1] - p[1]).abs() < 1e-12);
    }

    #[test]
    fn inverse_of_scaling_divides() {
        let t = AffineTransform::from_matrix(2, &[2.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
        let inv = t.inverted().expect("diagonal is invertible");
        assert_eq!(apply_vec(&inv, &[2.0, 4.0]), vec![1.0, 1.0]);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let t = AffineTransform::from_matrix(2, &[1.0, 2.0, 0.0, 2.0, 4.0, 0.0]);
        assert!(t.inverted().is_none());
        assert!(!t.is_invertible());
    }

    #[test]
    fn inverse_accounts_for_translation() {
        let t = AffineTransform::from_matrix(1, &[2.0, 6.0]);
        let inv = t.inverted().expect("invertible");
        // x ↦ 2x + 6, so the inverse is x ↦ (x − 6) / 2.
        assert_eq!(apply_vec(&inv, &[10.0]), vec![2.0]);
    }
}
