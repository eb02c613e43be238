// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of points to character positions.

use alloc::sync::Arc;

use peniko::kurbo::Point;

use crate::context::RenderContext;
use crate::factory::LayoutFactory;
use crate::layout::{LayoutLine, SpanLayout};
use crate::run::{TextNode, TextRun};
use crate::style::Brush;

/// The side of a character a hit resolved to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The edge before the character in reading order.
    #[default]
    Leading,
    /// The edge after the character in reading order.
    Trailing,
}

/// A character index plus the edge a coordinate resolved to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitResult {
    character_index: usize,
    edge: Edge,
    insertion_offset: Point,
    caret: usize,
}

impl HitResult {
    fn leading(index: usize, insertion_offset: Point) -> Self {
        Self {
            character_index: index,
            edge: Edge::Leading,
            insertion_offset,
            caret: index,
        }
    }

    fn trailing(index: usize, caret: usize, insertion_offset: Point) -> Self {
        Self {
            character_index: index,
            edge: Edge::Trailing,
            insertion_offset,
            caret,
        }
    }

    /// Returns the index of the character that was hit.
    ///
    /// This is `run.len()` when the coordinate lies past the end of the run.
    pub fn character_index(&self) -> usize {
        self.character_index
    }

    /// Returns the edge of the character that was hit.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Returns true if the hit resolved to the leading edge.
    pub fn is_leading(&self) -> bool {
        self.edge == Edge::Leading
    }

    /// Returns the caret position for this hit, in layout space.
    pub fn insertion_offset(&self) -> Point {
        self.insertion_offset
    }

    /// Returns the caret index for this hit, in `[0, run.len()]`.
    ///
    /// A leading hit places the caret before the character and a trailing hit after its cluster.
    pub fn insertion_index(&self) -> usize {
        self.caret
    }
}

/// A resolved selection point.
///
/// Marks are only created by hit-testing and never change afterwards.
#[derive(Clone, Debug)]
pub struct Mark {
    x: f64,
    y: f64,
    layout: Arc<SpanLayout>,
    hit: HitResult,
}

impl Mark {
    /// Returns the x coordinate that was hit, in node space.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate that was hit, in node space.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the coordinate that was hit, in node space.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the layout the hit was resolved against.
    pub fn layout(&self) -> &Arc<SpanLayout> {
        &self.layout
    }

    /// Returns the resolved hit.
    pub fn hit(&self) -> HitResult {
        self.hit
    }

    /// Returns the caret index of the hit.
    pub fn insertion_index(&self) -> usize {
        self.hit.caret
    }
}

/// Resolves coordinates against run layouts.
#[derive(Debug)]
pub struct HitTester<'f, F> {
    factory: &'f F,
}

impl<F> Clone for HitTester<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for HitTester<'_, F> {}

impl<'f, F> HitTester<'f, F> {
    /// Creates a hit tester using `factory` for layouts.
    pub fn new(factory: &'f F) -> Self {
        Self { factory }
    }

    /// Returns the layout factory.
    pub fn factory(&self) -> &'f F {
        self.factory
    }

    /// Resolves `(x, y)`, in the node's coordinate space, against a fresh layout of `run`.
    ///
    /// This never fails: coordinates outside the run clamp to its start or end.
    pub fn hit_test<B: Brush>(
        &self,
        x: f64,
        y: f64,
        run: &TextRun<B>,
        node: &TextNode<B>,
        cx: &RenderContext,
    ) -> Mark
    where
        F: LayoutFactory<B>,
    {
        let layout = Arc::new(self.factory.create_layout(run, cx));
        hit_layout(x, y, layout, node)
    }
}

/// Resolves `(x, y)`, in node space, against an existing layout.
pub(crate) fn hit_layout<B: Brush>(
    x: f64,
    y: f64,
    layout: Arc<SpanLayout>,
    node: &TextNode<B>,
) -> Mark {
    let to_node = layout.to_node(node.transform());
    let point = Point::new(x, y);
    let inverse = to_node.inverse();
    let local = if inverse.is_finite() {
        inverse * point
    } else {
        point - layout.origin().to_vec2()
    };
    let hit = resolve(&layout, local);
    log::trace!(
        "hit ({x}, {y}) -> index {} {:?}",
        hit.character_index,
        hit.edge
    );
    Mark { x, y, layout, hit }
}

/// Resolves a point in layout space to a hit.
pub(crate) fn resolve(layout: &SpanLayout, point: Point) -> HitResult {
    let len = layout.text_len();
    let lines = layout.lines();
    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return HitResult::leading(0, Point::ORIGIN);
    };
    if layout.glyph_count() == 0 {
        return HitResult::leading(0, line_start(first));
    }

    let (line, is_last_line) = if layout.is_multi_line() {
        if point.y < f64::from(first.top()) {
            return HitResult::leading(0, line_start(first));
        }
        if point.y >= f64::from(last.bottom()) {
            return HitResult::trailing(len, len, line_end(last));
        }
        let index = lines
            .iter()
            .position(|line| point.y < f64::from(line.bottom()))
            .unwrap_or(lines.len() - 1);
        (&lines[index], index + 1 == lines.len())
    } else {
        (first, true)
    };

    let glyphs = &layout.glyphs()[line.glyphs.clone()];
    let Some(first_glyph) = glyphs.first() else {
        return HitResult::leading(line.text.start, line_start(line));
    };
    if point.x < f64::from(first_glyph.x) {
        return HitResult::leading(line.text.start, line_start(line));
    }
    for glyph in glyphs {
        if point.x >= f64::from(glyph.end()) {
            continue;
        }
        let midpoint = f64::from(glyph.x) + f64::from(glyph.advance) * 0.5;
        let baseline = f64::from(glyph.y);
        return if point.x >= midpoint {
            HitResult::trailing(
                last_char(&glyph.cluster),
                glyph.cluster.end,
                Point::new(f64::from(glyph.end()), baseline),
            )
        } else {
            HitResult::leading(glyph.cluster.start, Point::new(f64::from(glyph.x), baseline))
        };
    }

    if is_last_line {
        return HitResult::trailing(len, len, line_end(line));
    }
    // Past the end of an inner line: stay on that line rather than jumping to the next one.
    let glyph = &glyphs[glyphs.len() - 1];
    HitResult::trailing(last_char(&glyph.cluster), glyph.cluster.end, line_end(line))
}

fn last_char(cluster: &core::ops::Range<usize>) -> usize {
    cluster.end.saturating_sub(1).max(cluster.start)
}

fn line_start(line: &LayoutLine) -> Point {
    Point::new(f64::from(line.x), f64::from(line.baseline))
}

fn line_end(line: &LayoutLine) -> Point {
    Point::new(f64::from(line.x + line.advance), f64::from(line.baseline))
}
