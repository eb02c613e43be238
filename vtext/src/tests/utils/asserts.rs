// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Various helper functions to assert truths during testing.

use crate::kurbo::{PathEl, Rect};
use crate::{Edge, Mark};

/// Assert that `outer` contains `inner`.
///
/// [`Rect::ZERO`] is empty bounds and is contained in anything.
pub(crate) fn assert_contains(outer: Rect, inner: Rect, case: &str) {
    if inner == Rect::ZERO {
        return;
    }
    assert_eq!(
        outer.union(inner),
        outer,
        "{case}: {outer:?} does not contain {inner:?}"
    );
}

/// Assert that two rectangles are equal within a small tolerance.
pub(crate) fn assert_rect_near(a: Rect, b: Rect, case: &str) {
    let close = |x: f64, y: f64| (x - y).abs() < 1e-6;
    assert!(
        close(a.x0, b.x0) && close(a.y0, b.y0) && close(a.x1, b.x1) && close(a.y1, b.y1),
        "{case}: {a:?} != {b:?}"
    );
}

/// Assert that `mark` resolved to `index` on `edge`.
pub(crate) fn assert_hit(mark: &Mark, index: usize, edge: Edge, case: &str) {
    let hit = mark.hit();
    assert_eq!(
        (hit.character_index(), hit.edge()),
        (index, edge),
        "{case}: unexpected hit at ({}, {})",
        mark.x(),
        mark.y()
    );
}

/// Assert that `prefix` is a strict prefix of `path`.
pub(crate) fn assert_strict_prefix(prefix: &[PathEl], path: &[PathEl], case: &str) {
    assert!(
        prefix.len() < path.len(),
        "{case}: expected more than {} elements, got {}",
        prefix.len(),
        path.len()
    );
    assert_eq!(&path[..prefix.len()], prefix, "{case}: prefix mismatch");
}
