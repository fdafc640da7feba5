// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure-offset transforms.

use alloc::rc::Rc;
use alloc::vec::Vec;

use stencil_mask::{RealTransform, TransformRef};

/// The map `x ↦ x + offset`.
///
/// Always invertible. As a pullback this *moves a mask by `-offset`*: the
/// transformed mask contains `p` when the operand contains `p + offset`. To
/// move a region by `delta`, use the negated offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Translation {
    offset: Vec<f64>,
}

impl Translation {
    /// A translation by `offset`.
    #[must_use]
    pub fn new(offset: &[f64]) -> Self {
        Self {
            offset: offset.to_vec(),
        }
    }

    /// The offset added to each point.
    #[must_use]
    pub fn offset(&self) -> &[f64] {
        &self.offset
    }
}

impl RealTransform for Translation {
    fn num_dimensions(&self) -> usize {
        self.offset.len()
    }

    fn apply(&self, point: &[f64], out: &mut [f64]) {
        for (d, delta) in self.offset.iter().enumerate() {
            out[d] = point[d] + delta;
        }
    }

    fn is_invertible(&self) -> bool {
        true
    }

    fn inverse(&self) -> Option<TransformRef> {
        let negated: Vec<f64> = self.offset.iter().map(|delta| -delta).collect();
        Some(Rc::new(Self { offset: negated }) as TransformRef)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_and_inverts_offsets() {
        let t = Translation::new(&[5.0, -2.5]);
        let mut out = [0.0; 2];
        t.apply(&[1.0, 1.0], &mut out);
        assert_eq!(out, [6.0, -1.5]);

        let inv = t.inverse().expect("translations always invert");
        let mut back = [0.0; 2];
        inv.apply(&out, &mut back);
        assert_eq!(back, [1.0, 1.0]);
    }
}
