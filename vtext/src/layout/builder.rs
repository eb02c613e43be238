// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use peniko::kurbo::{BezPath, Point, Rect};

use super::{LayoutGlyph, LayoutLine, RunMetrics, SpanLayout};

/// Builder for a [`SpanLayout`].
///
/// Glyphs are pushed in logical order. The pen starts at the origin of the first baseline and
/// advances by each glyph's advance; [`break_line`](Self::break_line) moves it to the start of the
/// next baseline.
#[derive(Debug)]
#[must_use = "Call `build` to obtain the layout."]
pub struct SpanLayoutBuilder {
    text_len: usize,
    metrics: RunMetrics,
    glyphs: Vec<LayoutGlyph>,
    lines: Vec<LayoutLine>,
    pen_x: f32,
    baseline: f32,
    line_glyph_start: usize,
    line_text_start: usize,
}

impl SpanLayoutBuilder {
    /// Creates a builder for a run of `text_len` characters.
    pub fn new(text_len: usize, metrics: RunMetrics) -> Self {
        Self {
            text_len,
            metrics,
            glyphs: Vec::new(),
            lines: Vec::new(),
            pen_x: 0.0,
            baseline: 0.0,
            line_glyph_start: 0,
            line_text_start: 0,
        }
    }

    /// Appends a glyph at the current pen position.
    ///
    /// `ink` and `outline` are relative to the glyph origin. The cluster is clamped to the run.
    pub fn push_glyph(&mut self, cluster: Range<usize>, advance: f32, ink: Rect, outline: BezPath) {
        let start = cluster.start.min(self.text_len);
        let end = cluster.end.clamp(start, self.text_len);
        self.glyphs.push(LayoutGlyph {
            cluster: start..end,
            x: self.pen_x,
            y: self.baseline,
            advance,
            ink,
            outline,
        });
        self.pen_x += advance;
    }

    /// Ends the current line and moves the pen `line_height` down.
    ///
    /// `separator` is the range of characters that ended the line, such as a newline, and is
    /// counted as part of the line it ends.
    pub fn break_line(&mut self, separator: Range<usize>, line_height: f32) {
        self.finish_line(separator.end.min(self.text_len));
        self.pen_x = 0.0;
        self.baseline += line_height;
    }

    /// Finishes the last line and builds the layout with its origin at `origin` in node space.
    pub fn build(mut self, origin: Point) -> SpanLayout {
        self.finish_line(self.text_len);
        SpanLayout {
            text_len: self.text_len,
            origin,
            metrics: self.metrics,
            glyphs: self.glyphs,
            lines: self.lines,
        }
    }

    fn finish_line(&mut self, text_end: usize) {
        let glyphs = self.line_glyph_start..self.glyphs.len();
        let text_start = self.line_text_start.min(text_end);
        let x = self.glyphs.get(glyphs.start).map_or(0.0, |glyph| glyph.x);
        self.lines.push(LayoutLine {
            glyphs: glyphs.clone(),
            text: text_start..text_end,
            baseline: self.baseline,
            ascent: self.metrics.ascent,
            descent: self.metrics.descent,
            x,
            advance: self.pen_x - x,
        });
        self.line_glyph_start = glyphs.end;
        self.line_text_start = text_end;
    }
}
