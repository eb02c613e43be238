// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout factories.

use peniko::kurbo::{BezPath, Rect, Shape as _};

use crate::context::RenderContext;
use crate::layout::{RunMetrics, SpanLayout, SpanLayoutBuilder};
use crate::run::TextRun;
use crate::style::Brush;
use crate::util::{self, PATH_TOLERANCE};

/// Produces the glyph geometry of a run.
///
/// A single factory is shared by reference between every component that needs layouts, possibly
/// from several threads, so implementations must not keep mutable session state.
pub trait LayoutFactory<B: Brush>: Sync {
    /// Lays out `run` for the resolution described by `cx`.
    fn create_layout(&self, run: &TextRun<B>, cx: &RenderContext) -> SpanLayout;
}

impl<B: Brush, F: LayoutFactory<B> + ?Sized> LayoutFactory<B> for &F {
    fn create_layout(&self, run: &TextRun<B>, cx: &RenderContext) -> SpanLayout {
        (**self).create_layout(run, cx)
    }
}

/// A factory that gives every character the same advance and a box-shaped glyph.
///
/// All dimensions are fractions of the run's font size. Whitespace advances the pen without
/// ink, other control characters take no space, and `'\n'` starts a new line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedPitch {
    /// Advance of each character.
    pub advance: f32,
    /// Height of the glyph box above the baseline.
    pub ink_top: f32,
    /// Horizontal inset of the glyph box on each side.
    pub side_bearing: f32,
    /// Typographic ascent.
    pub ascent: f32,
    /// Typographic descent.
    pub descent: f32,
    /// Extra space between lines.
    pub line_gap: f32,
}

impl Default for FixedPitch {
    fn default() -> Self {
        Self {
            advance: 0.6,
            ink_top: 0.7,
            side_bearing: 0.05,
            ascent: 0.8,
            descent: 0.2,
            line_gap: 0.0,
        }
    }
}

impl FixedPitch {
    /// Returns the run metrics for `font_size`.
    pub fn metrics(&self, font_size: f32) -> RunMetrics {
        RunMetrics {
            ascent: self.ascent * font_size,
            descent: self.descent * font_size,
            leading: self.line_gap * font_size,
            underline_offset: -font_size * 0.1,
            underline_size: font_size * 0.05,
            overline_offset: self.ascent * font_size,
            overline_size: font_size * 0.05,
            strikethrough_offset: font_size * 0.3,
            strikethrough_size: font_size * 0.05,
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Snapped advances are small multiples of a device pixel."
    )]
    fn advance_for(&self, font_size: f32, cx: &RenderContext) -> f32 {
        let advance = self.advance * font_size;
        if cx.fractional_metrics {
            return advance;
        }
        let scale = cx.device_scale();
        if scale <= 0.0 {
            return advance;
        }
        (util::round(f64::from(advance) * scale) / scale) as f32
    }
}

impl<B: Brush> LayoutFactory<B> for FixedPitch {
    fn create_layout(&self, run: &TextRun<B>, cx: &RenderContext) -> SpanLayout {
        let font_size = run.style().font_size;
        let metrics = self.metrics(font_size);
        let advance = self.advance_for(font_size, cx);
        let bearing = f64::from(self.side_bearing * font_size);
        let ink = Rect::new(
            bearing,
            -f64::from(self.ink_top * font_size),
            (f64::from(advance) - bearing).max(bearing),
            0.0,
        );
        let outline = ink.to_path(PATH_TOLERANCE);

        let mut builder = SpanLayoutBuilder::new(run.len(), metrics);
        for (index, ch) in run.text().chars().enumerate() {
            let cluster = index..index + 1;
            if ch == '\n' {
                builder.break_line(cluster, metrics.line_height());
            } else if ch.is_whitespace() {
                builder.push_glyph(cluster, advance, Rect::ZERO, BezPath::new());
            } else if ch.is_control() {
                builder.push_glyph(cluster, 0.0, Rect::ZERO, BezPath::new());
            } else {
                builder.push_glyph(cluster, advance, ink, outline.clone());
            }
        }
        builder.build(run.origin())
    }
}
