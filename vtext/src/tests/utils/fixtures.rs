// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared runs, nodes and factories.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    Decoration, FixedPitch, LayoutFactory, RenderContext, SpanLayout, TextNode, TextRun,
    TextStyle,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct ColorBrush(pub(crate) u32);

pub(crate) const FONT_SIZE: f32 = 10.0;

/// Every glyph advances exactly one font size, so with [`FONT_SIZE`] each glyph is 10 units wide.
pub(crate) fn unit_factory() -> FixedPitch {
    FixedPitch {
        advance: 1.0,
        ink_top: 0.7,
        side_bearing: 0.1,
        ascent: 0.8,
        descent: 0.2,
        line_gap: 0.0,
    }
}

pub(crate) fn plain_style() -> TextStyle<ColorBrush> {
    TextStyle {
        font_size: FONT_SIZE,
        brush: ColorBrush(0x000000ff),
        ..TextStyle::default()
    }
}

pub(crate) fn decorated_style() -> TextStyle<ColorBrush> {
    TextStyle {
        underline: Some(Decoration::new(ColorBrush(0xff0000ff))),
        overline: Some(Decoration::new(ColorBrush(0x00ff00ff))),
        strikethrough: Some(Decoration::new(ColorBrush(0x0000ffff))),
        ..plain_style()
    }
}

pub(crate) fn stroked_style(width: f64) -> TextStyle<ColorBrush> {
    let mut style = decorated_style();
    style.stroke_brush = Some(ColorBrush(0x333333ff));
    style.stroke.width = width;
    style
}

pub(crate) fn run(text: &str, style: TextStyle<ColorBrush>) -> TextRun<ColorBrush> {
    TextRun::new(text, style)
}

pub(crate) fn node(runs: &[TextRun<ColorBrush>]) -> TextNode<ColorBrush> {
    runs.iter()
        .cloned()
        .fold(TextNode::new(), |node, run| node.with_run(run))
}

/// Samples coordinates across and around a range, including the exact bounds.
pub(crate) fn sweep(start: f64, end: f64, steps: u32) -> impl Iterator<Item = f64> {
    let margin = (end - start).abs().max(1.0);
    let (lo, hi) = (start - margin, end + margin);
    (0..=steps)
        .map(move |i| lo + (hi - lo) * f64::from(i) / f64::from(steps))
        .chain([start, end, f64::MIN, f64::MAX])
}

/// Wraps a factory and counts the layouts it creates.
#[derive(Debug, Default)]
pub(crate) struct CountingFactory<F> {
    pub(crate) inner: F,
    created: AtomicUsize,
}

impl<F> CountingFactory<F> {
    pub(crate) fn new(inner: F) -> Self {
        Self {
            inner,
            created: AtomicUsize::new(0),
        }
    }

    pub(crate) fn created(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }
}

impl<F: LayoutFactory<ColorBrush>> LayoutFactory<ColorBrush> for CountingFactory<F> {
    fn create_layout(&self, run: &TextRun<ColorBrush>, cx: &RenderContext) -> SpanLayout {
        self.created.fetch_add(1, Ordering::Relaxed);
        self.inner.create_layout(run, cx)
    }
}
