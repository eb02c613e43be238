// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement, outline extraction and hit-testing for vector text nodes.
//!
//! A [`TextNode`] holds one or more [`TextRun`]s, each a contiguous run of characters sharing a
//! single [`TextStyle`]. A [`LayoutFactory`] turns a run into a [`SpanLayout`], and the rest of the
//! crate only consumes the geometry of that layout:
//!
//! - [`BoundsCalculator`] measures a node under a [`BoundsPolicy`].
//! - [`OutlineExtractor`] builds a node's outline under an [`OutlineFidelity`].
//! - [`HitTester`] resolves a point to a [`Mark`].
//! - [`SelectionController`] drives the anchor / extend / select-all protocol and records the result
//!   in a caller-owned [`SelectionSession`].
//!
//! [`BasicTextPainter`] bundles the first three behind the [`TextPainter`] trait.
//!
//! ## Example
//!
//! ```
//! use vtext::{BasicTextPainter, FixedPitch, RenderContext, TextNode, TextPainter, TextRun, TextStyle};
//!
//! let factory = FixedPitch::default();
//! let painter = BasicTextPainter::new(&factory);
//! let cx = RenderContext::default();
//!
//! let run = TextRun::new("Hello", TextStyle::<()>::default());
//! let node = TextNode::new().with_run(run.clone());
//!
//! let bounds = painter.bounds(&node, &cx);
//! assert!(bounds.width() > 0.0);
//!
//! let mark = painter.hit_test(0.0, 0.0, &run, &node, &cx);
//! assert_eq!(mark.hit().character_index(), 0);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library for floating point math.
//! - `libm`: Use `core_maths` for floating point math in `no_std` builds.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("vtext requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use peniko;
pub use peniko::kurbo;

mod bounds;
mod context;
mod factory;
mod hit;
mod outline;
mod painter;
mod run;
mod selection;
mod util;

pub mod layout;
pub mod style;

#[cfg(test)]
mod tests;

pub use bounds::{BoundsCalculator, BoundsPolicy};
pub use context::RenderContext;
pub use factory::{FixedPitch, LayoutFactory};
pub use hit::{Edge, HitResult, HitTester, Mark};
pub use layout::{LayoutGlyph, LayoutLine, RunMetrics, SpanLayout, SpanLayoutBuilder};
pub use outline::{OutlineExtractor, OutlineFidelity, TextOutline};
pub use painter::{BasicTextPainter, TextPainter};
pub use run::{TextNode, TextRun};
pub use selection::{Selection, SelectionController, SelectionSession, SelectionState};
pub use style::{Brush, Decoration, DecorationKind, TextStyle};
