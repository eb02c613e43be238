// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use crate::tests::utils::*;
use crate::{
    Edge, HitTester, RenderContext, Selection, SelectionController, SelectionSession,
    SelectionState,
};

#[test]
fn anchor_then_extend() {
    let factory = unit_factory();
    let controller = SelectionController::new(&factory);
    let cx = RenderContext::default();
    let run = run("hello", plain_style());
    let node = node(&[run.clone()]);
    let mut session = SelectionSession::new();
    assert_eq!(session.state(), SelectionState::Idle);
    assert!(matches!(session.selection(), Selection::None));

    let anchor = controller.select_at(&mut session, 12.0, 0.0, &run, &node, &cx);
    assert_hit(&anchor, 1, Edge::Leading, "anchor");
    assert_eq!(session.state(), SelectionState::Anchored);
    assert_eq!(session.selection().range(), Some(1..1));
    assert!(session.selection().is_collapsed());

    let focus = controller.select_to(&mut session, 37.0, 0.0, &anchor, &run, &node, &cx);
    assert_hit(&focus, 3, Edge::Trailing, "focus");
    assert_eq!(session.state(), SelectionState::Ranged);
    assert_eq!(session.selection().range(), Some(1..4));

    // Extending backwards past the anchor still yields a sorted range.
    controller.select_to(&mut session, -5.0, 0.0, &anchor, &run, &node, &cx);
    assert_eq!(session.selection().range(), Some(0..1));
    assert_eq!(session.last_hit().map(|hit| hit.insertion_index()), Some(0));
}

#[test]
fn selection_reports_the_latest_marks() {
    let factory = unit_factory();
    let controller = SelectionController::new(&factory);
    let cx = RenderContext::default();
    let run = run("hello", plain_style());
    let node = node(&[run.clone()]);
    let mut session = SelectionSession::new();

    let anchor = controller.select_at(&mut session, 2.0, 0.0, &run, &node, &cx);
    let focus = controller.select_to(&mut session, 48.0, 0.0, &anchor, &run, &node, &cx);
    let selection = session.selection();
    assert_eq!(selection.anchor().map(|m| m.point()), Some(anchor.point()));
    assert_eq!(selection.focus().map(|m| m.point()), Some(focus.point()));
    assert_eq!(selection.range(), Some(0..5));

    // Reading the selection does not change it.
    assert_eq!(session.selection().range(), selection.range());
    assert_eq!(session.state(), SelectionState::Ranged);
}

#[test]
fn select_all_covers_the_run_for_any_seed() {
    let factory = unit_factory();
    let controller = SelectionController::new(&factory);
    let cx = RenderContext::default();

    for text in ["", "x", "hello world", "two\nlines"] {
        let run = run(text, plain_style());
        let node = node(&[run.clone()]);
        for x in sweep(0.0, 110.0, 10) {
            for y in [-30.0, 0.0, 7.0, 30.0] {
                let mut session = SelectionSession::new();
                let seed = controller.select_all(&mut session, x, y, &run, &node, &cx);
                assert_eq!(
                    session.selection().range(),
                    Some(0..run.len()),
                    "{text:?} seeded at ({x}, {y})"
                );
                assert_eq!(session.state(), SelectionState::Ranged);
                assert_eq!((seed.x(), seed.y()), (x, y));
            }
        }
    }
}

#[test]
fn select_all_overrides_a_previous_range() {
    let factory = unit_factory();
    let controller = SelectionController::new(&factory);
    let cx = RenderContext::default();
    let run = run("hello", plain_style());
    let node = node(&[run.clone()]);
    let mut session = SelectionSession::new();

    let anchor = controller.select_at(&mut session, 12.0, 0.0, &run, &node, &cx);
    controller.select_to(&mut session, 22.0, 0.0, &anchor, &run, &node, &cx);
    controller.select_all(&mut session, 22.0, 0.0, &run, &node, &cx);
    assert!(matches!(session.selection(), Selection::All { len: 5, .. }));

    // A new anchor starts over.
    controller.select_at(&mut session, 22.0, 0.0, &run, &node, &cx);
    assert_eq!(session.state(), SelectionState::Anchored);
    assert_eq!(session.selection().range(), Some(2..2));
}

#[test]
fn extend_reuses_layout_until_reanchored() {
    let factory = CountingFactory::new(unit_factory());
    let controller = SelectionController::new(&factory);
    let cx = RenderContext::default();
    let run = run("hello", plain_style());
    let node = node(&[run.clone()]);
    let mut session = SelectionSession::new();

    let anchor = controller.select_at(&mut session, 2.0, 0.0, &run, &node, &cx);
    assert_eq!(factory.created(), 1);
    let first = controller.select_to(&mut session, 22.0, 0.0, &anchor, &run, &node, &cx);
    let second = controller.select_to(&mut session, 32.0, 0.0, &anchor, &run, &node, &cx);
    assert_eq!(factory.created(), 1, "extending reuses the anchor's layout");
    assert!(Arc::ptr_eq(first.layout(), anchor.layout()));
    assert!(Arc::ptr_eq(second.layout(), anchor.layout()));

    let anchor = controller.select_at(&mut session, 2.0, 0.0, &run, &node, &cx);
    assert_eq!(factory.created(), 2, "anchoring always lays out again");
    assert!(!Arc::ptr_eq(anchor.layout(), first.layout()));
    let focus = controller.select_to(&mut session, 22.0, 0.0, &anchor, &run, &node, &cx);
    assert!(
        Arc::ptr_eq(focus.layout(), anchor.layout()),
        "extension never sees geometry from before the latest anchor"
    );
}

#[test]
fn extend_lays_out_again_when_inputs_change() {
    let factory = CountingFactory::new(unit_factory());
    let controller = SelectionController::new(&factory);
    let cx = RenderContext::default();
    let run = run("hello", plain_style());
    let node = node(&[run.clone()]);
    let mut session = SelectionSession::new();

    let anchor = controller.select_at(&mut session, 2.0, 0.0, &run, &node, &cx);
    let edited = crate::TextRun::new("hello there", plain_style());
    let focus = controller.select_to(&mut session, 85.0, 0.0, &anchor, &edited, &node, &cx);
    assert_eq!(factory.created(), 2);
    assert_hit(&focus, 8, Edge::Trailing, "hit against the edited run");

    let scaled = RenderContext::new(crate::kurbo::Affine::scale(2.0));
    controller.select_to(&mut session, 85.0, 0.0, &anchor, &edited, &node, &scaled);
    assert_eq!(factory.created(), 3);
}

#[test]
fn extend_follows_the_latest_anchor() {
    let factory = unit_factory();
    let controller = SelectionController::new(&factory);
    let cx = RenderContext::default();
    let run = run("hello", plain_style());
    let node = node(&[run.clone()]);
    let mut session = SelectionSession::new();

    let stale = controller.select_at(&mut session, 12.0, 0.0, &run, &node, &cx);
    let latest = controller.select_at(&mut session, 32.0, 0.0, &run, &node, &cx);
    assert_eq!(latest.insertion_index(), 3);

    controller.select_to(&mut session, 48.0, 0.0, &stale, &run, &node, &cx);
    let selection = session.selection();
    assert_eq!(selection.range(), Some(3..5), "the stale mark is ignored");
    let anchor = selection.anchor().unwrap();
    assert_eq!(anchor.point(), latest.point());
    assert!(Arc::ptr_eq(anchor.layout(), latest.layout()));
    assert!(!Arc::ptr_eq(anchor.layout(), stale.layout()));
}

#[test]
fn extend_after_select_all_starts_from_the_seed() {
    let factory = unit_factory();
    let controller = SelectionController::new(&factory);
    let cx = RenderContext::default();
    let run = run("hello", plain_style());
    let node = node(&[run.clone()]);
    let mut session = SelectionSession::new();

    let stale = controller.select_at(&mut session, 2.0, 0.0, &run, &node, &cx);
    let seed = controller.select_all(&mut session, 22.0, 0.0, &run, &node, &cx);
    controller.select_to(&mut session, 48.0, 0.0, &stale, &run, &node, &cx);
    let selection = session.selection();
    assert!(matches!(selection, Selection::Range { .. }));
    assert_eq!(selection.range(), Some(2..5));
    assert_eq!(selection.anchor().map(|m| m.point()), Some(seed.point()));
}

#[test]
fn extend_without_anchor_adopts_the_supplied_mark() {
    let factory = unit_factory();
    let controller = SelectionController::new(&factory);
    let cx = RenderContext::default();
    let run = run("hello", plain_style());
    let node = node(&[run.clone()]);

    let anchor = HitTester::new(&factory).hit_test(12.0, 0.0, &run, &node, &cx);
    let mut session = SelectionSession::new();
    controller.select_to(&mut session, 40.0, 0.0, &anchor, &run, &node, &cx);
    assert_eq!(session.state(), SelectionState::Ranged);
    assert_eq!(session.selection().range(), Some(1..4));
}

#[test]
fn clear_returns_to_idle() {
    let factory = unit_factory();
    let controller = SelectionController::new(&factory);
    let run = run("hello", plain_style());
    let node = node(&[run.clone()]);
    let mut session = SelectionSession::new();
    controller.select_all(&mut session, 0.0, 0.0, &run, &node, &RenderContext::default());
    session.clear();
    assert_eq!(session.state(), SelectionState::Idle);
    assert!(session.last_hit().is_none());
    assert_eq!(session.selection().range(), None);
}
