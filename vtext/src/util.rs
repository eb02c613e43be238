// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Misc helpers.

#[cfg(feature = "libm")]
#[allow(unused_imports, reason = "Only needed when `std` float methods are unavailable.")]
use core_maths::CoreFloat;

use peniko::kurbo::Rect;

/// Tolerance used when flattening or stroking paths, in layout units.
pub(crate) const PATH_TOLERANCE: f64 = 0.01;

/// Grows `acc` to the smallest rectangle containing both `acc` and `rect`.
///
/// `None` is the identity, so an accumulator that never saw a rectangle stays empty.
pub(crate) fn union_into(acc: &mut Option<Rect>, rect: Rect) {
    *acc = Some(match *acc {
        Some(bounds) => bounds.union(rect),
        None => rect,
    });
}

pub(crate) fn round(x: f64) -> f64 {
    x.round()
}

pub(crate) fn sqrt(x: f64) -> f64 {
    x.sqrt()
}
