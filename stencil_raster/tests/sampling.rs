// Copyright 2026 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sampling composed geometry, including liveness across mutations.

use std::cell::RefCell;
use std::rc::Rc;

use stencil_geom::{OrthoBox, Sphere};
use stencil_mask::RealMask;
use stencil_raster::{rasterize, RasterSpan, RegionCursor};

#[test]
fn rasterized_box_matches_the_grid() {
    let mask = RealMask::own(OrthoBox::closed(&[1.0, 1.0], &[3.0, 2.0]).unwrap());
    let raster = rasterize(&mask, &RasterSpan::at_zero(&[5, 4]));

    for x in 0..5_i64 {
        for y in 0..4_i64 {
            let expected = (1..=3).contains(&x) && (1..=2).contains(&y);
            assert_eq!(raster.get(&[x, y]), expected, "cell ({x}, {y})");
        }
    }
}

#[test]
fn open_shapes_exclude_grid_points_on_their_surface() {
    let mask = RealMask::own(Sphere::open(&[2.0, 2.0], 2.0).unwrap());
    let raster = rasterize(&mask, &RasterSpan::at_zero(&[5, 5]));

    assert!(raster.get(&[2, 2]));
    assert!(raster.get(&[1, 1]));
    // (0, 2) and (4, 2) lie exactly on the open surface.
    assert!(!raster.get(&[0, 2]));
    assert!(!raster.get(&[4, 2]));
}

#[test]
fn composed_masks_rasterize_like_their_formula() {
    let a = RealMask::own(OrthoBox::closed(&[0.0, 0.0], &[2.0, 2.0]).unwrap());
    let b = RealMask::own(OrthoBox::closed(&[1.0, 1.0], &[3.0, 3.0]).unwrap());
    let span = RasterSpan::at_zero(&[4, 4]);

    let both = rasterize(&a.and(&b), &span);
    let either = rasterize(&a.or(&b), &span);
    let ra = rasterize(&a, &span);
    let rb = rasterize(&b, &span);

    for x in 0..4_i64 {
        for y in 0..4_i64 {
            let c = [x, y];
            assert_eq!(both.get(&c), ra.get(&c) && rb.get(&c));
            assert_eq!(either.get(&c), ra.get(&c) || rb.get(&c));
        }
    }
}

#[test]
fn mutation_between_rasterizations_changes_samples() {
    let shape = Rc::new(RefCell::new(
        OrthoBox::closed(&[0.0, 0.0], &[1.0, 1.0]).unwrap(),
    ));
    let mask = RealMask::leaf(shape.clone());
    let span = RasterSpan::at_zero(&[4, 4]);

    let before = rasterize(&mask, &span);
    assert!(before.get(&[0, 0]));
    assert!(!before.get(&[3, 3]));

    shape.borrow_mut().set_center(&[2.5, 2.5]).unwrap();

    let after = rasterize(&mask, &span);
    assert!(!after.get(&[0, 0]));
    assert!(after.get(&[3, 3]));
    assert_ne!(before, after);
}

#[test]
fn cursor_answers_at_its_current_position() {
    let shape = Rc::new(RefCell::new(
        OrthoBox::closed(&[0.0, 0.0], &[2.0, 2.0]).unwrap(),
    ));
    let mut cursor = RegionCursor::new(RealMask::leaf(shape.clone()));

    cursor.set_position(&[1.0, 1.0]);
    assert!(cursor.get());

    cursor.move_by(&[5.0, 0.0]);
    assert!(!cursor.get());

    // The cursor reads live state too.
    shape.borrow_mut().set_center(&[6.0, 1.0]).unwrap();
    assert!(cursor.get());
}
