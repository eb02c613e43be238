// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text selection support.
//!
//! The usual order of calls is [`select_at`](SelectionController::select_at), any number of
//! [`select_to`](SelectionController::select_to), then [`SelectionSession::selection`].
//! [`select_all`](SelectionController::select_all) may be called at any point.

use alloc::sync::Arc;
use core::ops::Range;

use crate::context::RenderContext;
use crate::factory::LayoutFactory;
use crate::hit::{self, HitResult, HitTester, Mark};
use crate::layout::SpanLayout;
use crate::run::{TextNode, TextRun};
use crate::style::Brush;

/// Where a session is in the selection protocol.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionState {
    /// No selection has been started.
    #[default]
    Idle,
    /// An anchor has been placed.
    Anchored,
    /// The selection has been extended or covers the whole run.
    Ranged,
}

/// The current selection of a session.
#[derive(Clone, Debug, Default)]
pub enum Selection {
    /// Nothing is selected.
    #[default]
    None,
    /// A caret position.
    Collapsed(Mark),
    /// The text between an anchor and a focus.
    Range {
        /// Where the selection was started.
        anchor: Mark,
        /// Where the selection currently ends.
        focus: Mark,
    },
    /// The whole run, regardless of where the selection was requested.
    All {
        /// Number of characters in the run.
        len: usize,
        /// The mark produced by the request.
        seed: Mark,
    },
}

impl Selection {
    /// Returns the selected caret range, with `start <= end`.
    pub fn range(&self) -> Option<Range<usize>> {
        match self {
            Self::None => None,
            Self::Collapsed(mark) => {
                let index = mark.insertion_index();
                Some(index..index)
            }
            Self::Range { anchor, focus } => {
                let (a, b) = (anchor.insertion_index(), focus.insertion_index());
                Some(a.min(b)..a.max(b))
            }
            Self::All { len, .. } => Some(0..*len),
        }
    }

    /// Returns true if the selection is a single caret position.
    pub fn is_collapsed(&self) -> bool {
        self.range().is_some_and(|range| range.is_empty())
    }

    /// Returns the mark the selection was started from.
    pub fn anchor(&self) -> Option<&Mark> {
        match self {
            Self::None => None,
            Self::Collapsed(mark) | Self::Range { anchor: mark, .. } => Some(mark),
            Self::All { seed, .. } => Some(seed),
        }
    }

    /// Returns the mark the selection currently ends at.
    pub fn focus(&self) -> Option<&Mark> {
        match self {
            Self::None => None,
            Self::Collapsed(mark) | Self::Range { focus: mark, .. } => Some(mark),
            Self::All { seed, .. } => Some(seed),
        }
    }

    fn state(&self) -> SelectionState {
        match self {
            Self::None => SelectionState::Idle,
            Self::Collapsed(_) => SelectionState::Anchored,
            Self::Range { .. } | Self::All { .. } => SelectionState::Ranged,
        }
    }
}

/// Layout and hit from the most recent selection call, reused while extending.
#[derive(Clone, Debug)]
struct CachedHit<B: Brush> {
    run: TextRun<B>,
    cx: RenderContext,
    layout: Arc<SpanLayout>,
    hit: HitResult,
}

/// Selection state owned by the caller and threaded through [`SelectionController`] calls.
///
/// A session must only be used by one interaction at a time; use one session per concurrent
/// selection.
#[derive(Clone, Debug, Default)]
pub struct SelectionSession<B: Brush> {
    selection: Selection,
    cached: Option<CachedHit<B>>,
}

impl<B: Brush> SelectionSession<B> {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self {
            selection: Selection::None,
            cached: None,
        }
    }

    /// Returns where the session is in the selection protocol.
    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Returns the current selection.
    pub fn selection(&self) -> Selection {
        self.selection.clone()
    }

    /// Returns the hit of the most recent selection call, if it is still valid.
    pub fn last_hit(&self) -> Option<HitResult> {
        self.cached.as_ref().map(|cached| cached.hit)
    }

    /// Drops the selection and any cached hit state.
    pub fn clear(&mut self) {
        self.selection = Selection::None;
        self.cached = None;
    }

    fn cached_layout(&self, run: &TextRun<B>, cx: &RenderContext) -> Option<Arc<SpanLayout>> {
        let cached = self.cached.as_ref()?;
        (cached.cx == *cx && cached.run == *run).then(|| cached.layout.clone())
    }

    fn remember(&mut self, run: &TextRun<B>, cx: &RenderContext, mark: &Mark) {
        self.cached = Some(CachedHit {
            run: run.clone(),
            cx: *cx,
            layout: mark.layout().clone(),
            hit: mark.hit(),
        });
    }
}

/// Drives the anchor / extend / select-all protocol.
#[derive(Debug)]
pub struct SelectionController<'f, F> {
    hit_tester: HitTester<'f, F>,
}

impl<F> Clone for SelectionController<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for SelectionController<'_, F> {}

impl<'f, F> SelectionController<'f, F> {
    /// Creates a controller using `factory` for layouts.
    pub fn new(factory: &'f F) -> Self {
        Self {
            hit_tester: HitTester::new(factory),
        }
    }

    /// Starts a selection at `(x, y)`.
    ///
    /// Any cached hit state is discarded before hit-testing, so later extensions never see
    /// geometry from before this anchor. The session becomes [`SelectionState::Anchored`].
    pub fn select_at<B: Brush>(
        &self,
        session: &mut SelectionSession<B>,
        x: f64,
        y: f64,
        run: &TextRun<B>,
        node: &TextNode<B>,
        cx: &RenderContext,
    ) -> Mark
    where
        F: LayoutFactory<B>,
    {
        session.cached = None;
        let mark = self.hit_tester.hit_test(x, y, run, node, cx);
        session.remember(run, cx, &mark);
        session.selection = Selection::Collapsed(mark.clone());
        mark
    }

    /// Extends the selection started at `anchor` to `(x, y)`.
    ///
    /// The layout from the previous call is reused while the run and context are unchanged.
    /// The session becomes [`SelectionState::Ranged`].
    ///
    /// The selection keeps the session's own anchor: the mark of the latest
    /// [`select_at`](Self::select_at), or the seed mark of the latest
    /// [`select_all`](Self::select_all), which turns the whole-run selection back into a range.
    /// `anchor` is only adopted when the session is idle.
    pub fn select_to<B: Brush>(
        &self,
        session: &mut SelectionSession<B>,
        x: f64,
        y: f64,
        anchor: &Mark,
        run: &TextRun<B>,
        node: &TextNode<B>,
        cx: &RenderContext,
    ) -> Mark
    where
        F: LayoutFactory<B>,
    {
        let anchor = match session.selection.anchor() {
            Some(own) => own.clone(),
            None => {
                log::debug!("select_to on an idle session; adopting the supplied anchor");
                anchor.clone()
            }
        };
        let mark = match session.cached_layout(run, cx) {
            Some(layout) => {
                log::trace!("reusing cached layout for select_to");
                hit::hit_layout(x, y, layout, node)
            }
            None => self.hit_tester.hit_test(x, y, run, node, cx),
        };
        session.remember(run, cx, &mark);
        session.selection = Selection::Range {
            anchor,
            focus: mark.clone(),
        };
        mark
    }

    /// Selects the whole run.
    ///
    /// `(x, y)` only seeds the returned mark; the selection always covers `[0, run.len()]`. The
    /// session becomes [`SelectionState::Ranged`].
    pub fn select_all<B: Brush>(
        &self,
        session: &mut SelectionSession<B>,
        x: f64,
        y: f64,
        run: &TextRun<B>,
        node: &TextNode<B>,
        cx: &RenderContext,
    ) -> Mark
    where
        F: LayoutFactory<B>,
    {
        session.cached = None;
        let mark = self.hit_tester.hit_test(x, y, run, node, cx);
        session.remember(run, cx, &mark);
        session.selection = Selection::All {
            len: run.len(),
            seed: mark.clone(),
        };
        mark
    }
}
