// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run styling.

use peniko::kurbo::Stroke;

/// Trait for types that represent the paint of glyphs, decorations or strokes.
pub trait Brush: Clone + PartialEq + Default + core::fmt::Debug {}

impl<T: Clone + PartialEq + Default + core::fmt::Debug> Brush for T {}

/// The kinds of line decoration a run may carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// A line below the baseline.
    Underline,
    /// A line at the top of the em box.
    Overline,
    /// A line through the middle of the glyphs.
    Strikethrough,
}

impl DecorationKind {
    /// All decoration kinds, in the order they are emitted.
    pub const ALL: [Self; 3] = [Self::Underline, Self::Overline, Self::Strikethrough];
}

/// Underline, overline or strikethrough decoration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Decoration<B: Brush> {
    /// Brush used to draw the decoration.
    pub brush: B,
    /// Offset of the top of the decoration from the baseline, positive upwards. If `None`, use
    /// the metrics of the containing run.
    pub offset: Option<f32>,
    /// Thickness of the decoration. If `None`, use the metrics of the containing run.
    pub size: Option<f32>,
}

impl<B: Brush> Decoration<B> {
    /// Creates a decoration that takes its placement from the run metrics.
    pub fn new(brush: B) -> Self {
        Self {
            brush,
            offset: None,
            size: None,
        }
    }
}

/// Resolved style of a single run.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle<B: Brush> {
    /// Font size in layout units.
    pub font_size: f32,
    /// Brush for filling glyphs.
    pub brush: B,
    /// Underline decoration.
    pub underline: Option<Decoration<B>>,
    /// Overline decoration.
    pub overline: Option<Decoration<B>>,
    /// Strikethrough decoration.
    pub strikethrough: Option<Decoration<B>>,
    /// Brush for stroking glyph outlines. Text is only stroked when this is set.
    pub stroke_brush: Option<B>,
    /// Stroke geometry used when `stroke_brush` is set.
    pub stroke: Stroke,
}

impl<B: Brush> Default for TextStyle<B> {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            brush: B::default(),
            underline: None,
            overline: None,
            strikethrough: None,
            stroke_brush: None,
            stroke: Stroke::new(1.0),
        }
    }
}

impl<B: Brush> TextStyle<B> {
    /// Returns the decoration of the given kind, if active.
    pub fn decoration(&self, kind: DecorationKind) -> Option<&Decoration<B>> {
        match kind {
            DecorationKind::Underline => self.underline.as_ref(),
            DecorationKind::Overline => self.overline.as_ref(),
            DecorationKind::Strikethrough => self.strikethrough.as_ref(),
        }
    }

    /// Returns the active decorations in emission order.
    pub fn decorations(&self) -> impl Iterator<Item = (DecorationKind, &Decoration<B>)> + '_ {
        DecorationKind::ALL
            .into_iter()
            .filter_map(|kind| Some((kind, self.decoration(kind)?)))
    }

    /// Returns true if any decoration is active.
    pub fn has_decoration(&self) -> bool {
        self.decorations().next().is_some()
    }

    /// Returns the stroke width when the run has a stroke brush.
    ///
    /// Negative widths are treated as zero.
    pub fn stroke_width(&self) -> Option<f64> {
        self.stroke_brush
            .as_ref()
            .map(|_| self.stroke.width.max(0.0))
    }

    /// Returns the stroke style when the run is stroked with a visible width.
    pub fn active_stroke(&self) -> Option<&Stroke> {
        match self.stroke_width() {
            Some(width) if width > 0.0 => Some(&self.stroke),
            _ => None,
        }
    }
}
