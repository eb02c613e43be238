// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph geometry of a single run.

mod builder;

pub use builder::SpanLayoutBuilder;

use alloc::vec::Vec;
use core::ops::Range;

use peniko::kurbo::{self, Affine, BezPath, Point, Rect, Stroke, StrokeOpts};
use smallvec::SmallVec;

use crate::hit::{self, HitResult};
use crate::style::{Brush, DecorationKind, TextStyle};
use crate::util::PATH_TOLERANCE;

/// Metrics information for a run.
///
/// Decoration offsets locate the top of the decoration relative to the baseline, positive
/// upwards.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct RunMetrics {
    /// Typographic ascent.
    pub ascent: f32,
    /// Typographic descent.
    pub descent: f32,
    /// Typographic leading.
    pub leading: f32,
    /// Offset of the top of underline decoration from the baseline.
    pub underline_offset: f32,
    /// Thickness of the underline decoration.
    pub underline_size: f32,
    /// Offset of the top of overline decoration from the baseline.
    pub overline_offset: f32,
    /// Thickness of the overline decoration.
    pub overline_size: f32,
    /// Offset of the top of strikethrough decoration from the baseline.
    pub strikethrough_offset: f32,
    /// Thickness of the strikethrough decoration.
    pub strikethrough_size: f32,
}

impl RunMetrics {
    /// Returns the `(offset, size)` pair the metrics define for a decoration kind.
    pub fn decoration(&self, kind: DecorationKind) -> (f32, f32) {
        match kind {
            DecorationKind::Underline => (self.underline_offset, self.underline_size),
            DecorationKind::Overline => (self.overline_offset, self.overline_size),
            DecorationKind::Strikethrough => (self.strikethrough_offset, self.strikethrough_size),
        }
    }

    /// Returns the distance between consecutive baselines.
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }
}

/// A positioned glyph.
///
/// `ink` and `outline` are relative to the glyph origin, which sits on the baseline at the pen
/// position, with y growing downwards.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutGlyph {
    /// Range of characters in the run that map to this glyph.
    pub cluster: Range<usize>,
    /// Pen position in layout space.
    pub x: f32,
    /// Baseline position in layout space.
    pub y: f32,
    /// Horizontal advance.
    pub advance: f32,
    /// Ink extent relative to the glyph origin.
    pub ink: Rect,
    /// Filled outline relative to the glyph origin.
    pub outline: BezPath,
}

impl LayoutGlyph {
    /// Returns the transform from glyph space to layout space.
    pub fn transform(&self) -> Affine {
        Affine::translate((f64::from(self.x), f64::from(self.y)))
    }

    /// Returns the pen position at which the next glyph starts.
    pub fn end(&self) -> f32 {
        self.x + self.advance
    }
}

/// A line of glyphs.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutLine {
    /// Range of glyphs on this line.
    pub glyphs: Range<usize>,
    /// Range of characters covered by this line, including any terminating newline.
    pub text: Range<usize>,
    /// Baseline position in layout space.
    pub baseline: f32,
    /// Ascent of the line.
    pub ascent: f32,
    /// Descent of the line.
    pub descent: f32,
    /// Pen position of the first glyph.
    pub x: f32,
    /// Sum of the advances of the line's glyphs.
    pub advance: f32,
}

impl LayoutLine {
    /// Returns the top of the line box.
    pub fn top(&self) -> f32 {
        self.baseline - self.ascent
    }

    /// Returns the bottom of the line box.
    pub fn bottom(&self) -> f32 {
        self.baseline + self.descent
    }

    /// Returns true if the line holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Computed glyph geometry for one run.
///
/// Layout space has its origin at the start of the first baseline, with y growing downwards.
/// Instances are produced by a [`LayoutFactory`](crate::LayoutFactory) through a
/// [`SpanLayoutBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub struct SpanLayout {
    pub(crate) text_len: usize,
    pub(crate) origin: Point,
    pub(crate) metrics: RunMetrics,
    pub(crate) glyphs: Vec<LayoutGlyph>,
    pub(crate) lines: Vec<LayoutLine>,
}

impl SpanLayout {
    /// Returns the number of characters in the run this layout was built from.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Returns the position of the layout origin in node space, before the node transform.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the metrics of the run.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Returns the number of glyphs.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns the glyph at `index`.
    pub fn glyph(&self, index: usize) -> Option<&LayoutGlyph> {
        self.glyphs.get(index)
    }

    /// Returns all glyphs in logical order.
    pub fn glyphs(&self) -> &[LayoutGlyph] {
        &self.glyphs
    }

    /// Returns the lines of the layout. A layout always has at least one line.
    pub fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    /// Returns true if the layout spans more than one line.
    pub fn is_multi_line(&self) -> bool {
        self.lines.len() > 1
    }

    /// Returns the transform from layout space to the space of a node with `node_transform`.
    pub fn to_node(&self, node_transform: Affine) -> Affine {
        node_transform * Affine::translate(self.origin.to_vec2())
    }

    /// Returns the ink extent of the glyph at `index` in layout space.
    pub fn glyph_ink_bounds(&self, index: usize) -> Option<Rect> {
        let glyph = self.glyphs.get(index)?;
        Some(glyph.ink + glyph.transform().translation())
    }

    /// Returns the filled outline of the glyph at `index` in layout space.
    pub fn glyph_outline(&self, index: usize) -> Option<BezPath> {
        let glyph = self.glyphs.get(index)?;
        Some(glyph.transform() * glyph.outline.clone())
    }

    /// Returns the outline obtained by stroking the glyph at `index` with `stroke`, in layout
    /// space.
    pub fn glyph_stroke_outline(&self, index: usize, stroke: &Stroke) -> Option<BezPath> {
        let outline = self.glyph_outline(index)?;
        Some(stroke_path(&outline, stroke))
    }

    /// Returns the decoration rectangles of the run in layout space.
    ///
    /// Each line with glyphs yields one rectangle per active decoration, spanning the horizontal
    /// extent of the line. Offsets and sizes set on a decoration override the run metrics.
    pub fn decoration_rects<B: Brush>(&self, style: &TextStyle<B>) -> SmallVec<[Rect; 4]> {
        let mut rects = SmallVec::new();
        for line in self.lines.iter().filter(|line| !line.is_empty()) {
            for (kind, decoration) in style.decorations() {
                let (default_offset, default_size) = self.metrics.decoration(kind);
                let offset = decoration.offset.unwrap_or(default_offset);
                let size = decoration.size.unwrap_or(default_size);
                let y0 = f64::from(line.baseline - offset);
                let x0 = f64::from(line.x);
                rects.push(Rect::new(
                    x0,
                    y0,
                    x0 + f64::from(line.advance),
                    y0 + f64::from(size),
                ));
            }
        }
        rects
    }

    /// Resolves a point in layout space to a character hit.
    pub fn hit_test_local(&self, point: Point) -> HitResult {
        hit::resolve(self, point)
    }
}

/// Strokes `path` in its own coordinate space.
pub(crate) fn stroke_path(path: &BezPath, stroke: &Stroke) -> BezPath {
    kurbo::stroke(path.iter(), stroke, &StrokeOpts::default(), PATH_TOLERANCE)
}
