// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text runs and the nodes that own them.

use alloc::sync::Arc;
use alloc::vec::Vec;

use peniko::kurbo::{Affine, Point};
use peniko::Fill;

use crate::style::{Brush, TextStyle};

/// An immutable run of characters sharing one style.
///
/// Character indices used throughout this crate count Unicode scalar values, not bytes. Cloning a
/// run shares its storage.
#[derive(Clone, Debug)]
pub struct TextRun<B: Brush> {
    text: Arc<str>,
    len: usize,
    style: Arc<TextStyle<B>>,
    origin: Point,
}

impl<B: Brush> TextRun<B> {
    /// Creates a run placed at the node origin.
    pub fn new(text: impl Into<Arc<str>>, style: TextStyle<B>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            style: Arc::new(style),
            origin: Point::ORIGIN,
        }
    }

    /// Places the start of the run's first baseline at `origin`, in node space.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<Point>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Returns the text of the run.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the number of characters in the run.
    ///
    /// This is also the caret position after the last character.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the run has no characters.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the style shared by every character of the run.
    pub fn style(&self) -> &TextStyle<B> {
        &self.style
    }

    /// Returns the style of the character at `index`, or `None` past the end of the run.
    pub fn style_at(&self, index: usize) -> Option<&TextStyle<B>> {
        (index < self.len).then_some(&*self.style)
    }

    /// Returns the start of the run's first baseline in node space.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns true if both runs share the same storage and origin.
    ///
    /// This is a cheap identity check; runs that are not identical may still compare equal.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.text, &other.text)
            && Arc::ptr_eq(&self.style, &other.style)
            && self.origin == other.origin
    }
}

impl<B: Brush> PartialEq for TextRun<B> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.origin == other.origin
                && self.text == other.text
                && self.style == other.style)
    }
}

/// A vector graphics node holding styled text runs.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode<B: Brush> {
    runs: Vec<TextRun<B>>,
    transform: Affine,
    fill: Fill,
}

impl<B: Brush> Default for TextNode<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Brush> TextNode<B> {
    /// Creates an empty node with an identity transform and the non-zero fill rule.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            transform: Affine::IDENTITY,
            fill: Fill::NonZero,
        }
    }

    /// Appends a run.
    #[must_use]
    pub fn with_run(mut self, run: TextRun<B>) -> Self {
        self.runs.push(run);
        self
    }

    /// Sets the transform from layout space to node space.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the fill rule used for the node's composite outline.
    #[must_use]
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Appends a run.
    pub fn push_run(&mut self, run: TextRun<B>) {
        self.runs.push(run);
    }

    /// Returns the runs in reading order.
    pub fn runs(&self) -> &[TextRun<B>] {
        &self.runs
    }

    /// Returns the transform from layout space to node space.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Returns the fill rule of the node's composite outline.
    pub fn fill(&self) -> Fill {
        self.fill
    }
}
