// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangular extents of text nodes.

use peniko::kurbo::{Affine, Rect};

use crate::context::RenderContext;
use crate::factory::LayoutFactory;
use crate::layout::SpanLayout;
use crate::run::TextNode;
use crate::style::{Brush, TextStyle};
use crate::util;

/// Which parts of the rendered text contribute to its bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundsPolicy {
    /// The ink of the glyphs only.
    #[default]
    Glyph,
    /// Glyph ink plus underline, overline and strikethrough.
    Decorated,
    /// Decorated bounds grown by half the stroke width of stroked runs.
    Painted,
}

impl BoundsPolicy {
    /// Returns true if decorations contribute to the bounds.
    pub fn includes_decorations(self) -> bool {
        matches!(self, Self::Decorated | Self::Painted)
    }

    /// Returns true if stroke width contributes to the bounds.
    pub fn includes_stroke(self) -> bool {
        self == Self::Painted
    }
}

/// Computes the extents of text nodes.
#[derive(Debug)]
pub struct BoundsCalculator<'f, F> {
    factory: &'f F,
}

impl<F> Clone for BoundsCalculator<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for BoundsCalculator<'_, F> {}

impl<'f, F> BoundsCalculator<'f, F> {
    /// Creates a calculator using `factory` for layouts.
    pub fn new(factory: &'f F) -> Self {
        Self { factory }
    }

    /// Returns the smallest rectangle in node space enclosing `node` under `policy`.
    ///
    /// A node without runs, or without anything the policy measures, yields [`Rect::ZERO`].
    /// That value stands for the empty set rather than a point at the origin: it is contained in
    /// every other result, so a run of spaces with an underline has zero glyph bounds and
    /// non-empty decorated bounds.
    pub fn compute_bounds<B: Brush>(
        &self,
        node: &TextNode<B>,
        cx: &RenderContext,
        policy: BoundsPolicy,
    ) -> Rect
    where
        F: LayoutFactory<B>,
    {
        let mut bounds = None;
        for run in node.runs() {
            let layout = self.factory.create_layout(run, cx);
            union_run(
                &mut bounds,
                &layout,
                run.style(),
                node.transform(),
                policy,
            );
        }
        bounds.unwrap_or(Rect::ZERO)
    }
}

fn union_run<B: Brush>(
    bounds: &mut Option<Rect>,
    layout: &SpanLayout,
    style: &TextStyle<B>,
    node_transform: Affine,
    policy: BoundsPolicy,
) {
    let to_node = layout.to_node(node_transform);
    let half_stroke = if policy.includes_stroke() {
        style.stroke_width().map(|width| width * 0.5)
    } else {
        None
    };
    let mut add = |rect: Rect| {
        let rect = match half_stroke {
            Some(half) => rect.inflate(half, half),
            None => rect,
        };
        util::union_into(bounds, to_node.transform_rect_bbox(rect));
    };

    for index in 0..layout.glyph_count() {
        if let Some(ink) = layout.glyph_ink_bounds(index) {
            if !ink.is_zero_area() {
                add(ink);
            }
        }
    }
    if policy.includes_decorations() {
        for rect in layout.decoration_rects(style) {
            add(rect);
        }
    }
}
