// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path geometry of text nodes.

use alloc::vec::Vec;

use peniko::kurbo::{BezPath, PathEl, Shape as _};
use peniko::Fill;

use crate::context::RenderContext;
use crate::factory::LayoutFactory;
use crate::layout::stroke_path;
use crate::run::TextNode;
use crate::style::Brush;
use crate::util::PATH_TOLERANCE;

/// How faithfully an outline follows the painted text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutlineFidelity {
    /// Filled glyph outlines.
    #[default]
    Plain,
    /// Filled glyph outlines followed by decoration rectangles.
    Decorated,
    /// Stroke contours of the glyphs of stroked runs.
    Stroked,
    /// Stroke contours of glyphs and decorations of stroked runs.
    StrokedDecorated,
}

impl OutlineFidelity {
    /// Returns true if decorations are part of the outline.
    pub fn includes_decorations(self) -> bool {
        matches!(self, Self::Decorated | Self::StrokedDecorated)
    }

    /// Returns true if stroked runs contribute their stroke contours.
    pub fn is_stroked(self) -> bool {
        matches!(self, Self::Stroked | Self::StrokedDecorated)
    }
}

/// The composite outline of a text node.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOutline {
    /// The path in node space.
    pub path: BezPath,
    /// The fill rule for the whole path.
    pub fill: Fill,
}

impl TextOutline {
    /// Returns true if the outline has no geometry.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns the number of sub-paths.
    pub fn subpath_count(&self) -> usize {
        self.path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    }
}

/// Computes the outlines of text nodes.
#[derive(Debug)]
pub struct OutlineExtractor<'f, F> {
    factory: &'f F,
}

impl<F> Clone for OutlineExtractor<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for OutlineExtractor<'_, F> {}

impl<'f, F> OutlineExtractor<'f, F> {
    /// Creates an extractor using `factory` for layouts.
    pub fn new(factory: &'f F) -> Self {
        Self { factory }
    }

    /// Returns the outline of `node` under `fidelity`.
    ///
    /// Glyphs of every run come first, in reading order, followed by the decorations when
    /// requested. Runs without a visible stroke keep their filled geometry under stroked
    /// fidelities.
    pub fn compute_outline<B: Brush>(
        &self,
        node: &TextNode<B>,
        cx: &RenderContext,
        fidelity: OutlineFidelity,
    ) -> TextOutline
    where
        F: LayoutFactory<B>,
    {
        let layouts: Vec<_> = node
            .runs()
            .iter()
            .map(|run| (run, self.factory.create_layout(run, cx)))
            .collect();

        let mut path = BezPath::new();
        for (run, layout) in &layouts {
            let to_node = layout.to_node(node.transform());
            let stroke = fidelity
                .is_stroked()
                .then(|| run.style().active_stroke())
                .flatten();
            for index in 0..layout.glyph_count() {
                let glyph = match stroke {
                    Some(stroke) => layout.glyph_stroke_outline(index, stroke),
                    None => layout.glyph_outline(index),
                };
                if let Some(glyph) = glyph {
                    path.extend((to_node * glyph).iter());
                }
            }
        }

        if fidelity.includes_decorations() {
            for (run, layout) in &layouts {
                let to_node = layout.to_node(node.transform());
                let stroke = fidelity
                    .is_stroked()
                    .then(|| run.style().active_stroke())
                    .flatten();
                for rect in layout.decoration_rects(run.style()) {
                    let rect = rect.to_path(PATH_TOLERANCE);
                    let rect = match stroke {
                        Some(stroke) => stroke_path(&rect, stroke),
                        None => rect,
                    };
                    path.extend((to_node * rect).iter());
                }
            }
        }

        TextOutline {
            path,
            fill: node.fill(),
        }
    }
}
