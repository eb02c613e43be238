// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Rect;

use crate::bounds::{BoundsCalculator, BoundsPolicy};
use crate::context::RenderContext;
use crate::factory::LayoutFactory;
use crate::hit::{HitTester, Mark};
use crate::outline::{OutlineExtractor, OutlineFidelity, TextOutline};
use crate::run::{TextNode, TextRun};
use crate::selection::SelectionController;
use crate::style::Brush;

/// Measurement, outline and hit-testing capabilities of a text layout strategy.
///
/// Painting and interaction code should depend on this trait rather than on a concrete painter.
pub trait TextPainter<B: Brush> {
    /// Returns the extents of `node` under `policy`, in node space.
    fn compute_bounds(&self, node: &TextNode<B>, cx: &RenderContext, policy: BoundsPolicy)
        -> Rect;

    /// Returns the outline of `node` under `fidelity`, in node space.
    fn compute_outline(
        &self,
        node: &TextNode<B>,
        cx: &RenderContext,
        fidelity: OutlineFidelity,
    ) -> TextOutline;

    /// Resolves `(x, y)`, in node space, to a mark in `run`.
    fn hit_test(
        &self,
        x: f64,
        y: f64,
        run: &TextRun<B>,
        node: &TextNode<B>,
        cx: &RenderContext,
    ) -> Mark;

    /// Returns the bounds of the glyph ink.
    fn bounds(&self, node: &TextNode<B>, cx: &RenderContext) -> Rect {
        self.compute_bounds(node, cx, BoundsPolicy::Glyph)
    }

    /// Returns the bounds of the glyph ink and decorations.
    fn decorated_bounds(&self, node: &TextNode<B>, cx: &RenderContext) -> Rect {
        self.compute_bounds(node, cx, BoundsPolicy::Decorated)
    }

    /// Returns the bounds of everything painted, including stroke width.
    fn painted_bounds(&self, node: &TextNode<B>, cx: &RenderContext) -> Rect {
        self.compute_bounds(node, cx, BoundsPolicy::Painted)
    }

    /// Returns the filled glyph outlines.
    fn shape(&self, node: &TextNode<B>, cx: &RenderContext) -> TextOutline {
        self.compute_outline(node, cx, OutlineFidelity::Plain)
    }

    /// Returns the filled glyph outlines and decorations.
    fn decorated_shape(&self, node: &TextNode<B>, cx: &RenderContext) -> TextOutline {
        self.compute_outline(node, cx, OutlineFidelity::Decorated)
    }
}

/// A [`TextPainter`] that takes all geometry from one [`LayoutFactory`].
#[derive(Debug)]
pub struct BasicTextPainter<'f, F> {
    factory: &'f F,
}

impl<F> Clone for BasicTextPainter<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for BasicTextPainter<'_, F> {}

impl<'f, F> BasicTextPainter<'f, F> {
    /// Creates a painter over `factory`.
    pub fn new(factory: &'f F) -> Self {
        Self { factory }
    }

    /// Returns the layout factory.
    pub fn factory(&self) -> &'f F {
        self.factory
    }

    /// Returns a hit tester sharing this painter's factory.
    pub fn hit_tester(&self) -> HitTester<'f, F> {
        HitTester::new(self.factory)
    }

    /// Returns a bounds calculator sharing this painter's factory.
    pub fn bounds_calculator(&self) -> BoundsCalculator<'f, F> {
        BoundsCalculator::new(self.factory)
    }

    /// Returns an outline extractor sharing this painter's factory.
    pub fn outline_extractor(&self) -> OutlineExtractor<'f, F> {
        OutlineExtractor::new(self.factory)
    }

    /// Returns a selection controller sharing this painter's factory.
    pub fn selection(&self) -> SelectionController<'f, F> {
        SelectionController::new(self.factory)
    }
}

impl<B: Brush, F: LayoutFactory<B>> TextPainter<B> for BasicTextPainter<'_, F> {
    fn compute_bounds(
        &self,
        node: &TextNode<B>,
        cx: &RenderContext,
        policy: BoundsPolicy,
    ) -> Rect {
        self.bounds_calculator().compute_bounds(node, cx, policy)
    }

    fn compute_outline(
        &self,
        node: &TextNode<B>,
        cx: &RenderContext,
        fidelity: OutlineFidelity,
    ) -> TextOutline {
        self.outline_extractor().compute_outline(node, cx, fidelity)
    }

    fn hit_test(
        &self,
        x: f64,
        y: f64,
        run: &TextRun<B>,
        node: &TextNode<B>,
        cx: &RenderContext,
    ) -> Mark {
        self.hit_tester().hit_test(x, y, run, node, cx)
    }
}
