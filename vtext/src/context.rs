// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Affine;

use crate::util;

/// Font rendering resolution parameters passed to a [`LayoutFactory`](crate::LayoutFactory).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderContext {
    /// Transform from user space to device space.
    pub transform: Affine,
    /// Whether glyph advances may fall between device pixels.
    ///
    /// When `false`, factories are expected to snap advances to whole device pixels.
    pub fractional_metrics: bool,
    /// Lower bound for the device scale a factory derives from `transform`.
    pub min_glyph_scale: f32,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fractional_metrics: true,
            min_glyph_scale: 0.0,
        }
    }
}

impl RenderContext {
    /// Creates a context with the given device transform and fractional metrics.
    pub fn new(transform: Affine) -> Self {
        Self {
            transform,
            ..Default::default()
        }
    }

    /// Sets whether advances may be fractional in device space.
    #[must_use]
    pub fn with_fractional_metrics(mut self, fractional_metrics: bool) -> Self {
        self.fractional_metrics = fractional_metrics;
        self
    }

    /// Sets the lower bound of the device scale.
    #[must_use]
    pub fn with_min_glyph_scale(mut self, min_glyph_scale: f32) -> Self {
        self.min_glyph_scale = min_glyph_scale;
        self
    }

    /// Returns the uniform scale factor from user space to device space.
    ///
    /// This is the square root of the absolute determinant of the transform, clamped to
    /// `min_glyph_scale`.
    pub fn device_scale(&self) -> f64 {
        util::sqrt(self.transform.determinant().abs()).max(f64::from(self.min_glyph_scale))
    }
}
