// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PNG output for rendered text images.
//!
//! [`write_image`] encodes an RGBA [`Image`] and writes it to any [`std::io::Write`]. The
//! [`EncodeOptions`] control three aspects of the file:
//!
//! - Palette reduction: with `indexed_bits` of 1, 2, 4 or 8 the image is reduced by median cut
//!   to at most `1 << n` colors and written as an indexed image. Truecolor images carry a white
//!   background record instead.
//! - Color space: no `gamma` records the sRGB color space with perceptual intent, a positive
//!   gamma records that gamma with the standard chromaticities, and zero records nothing.
//! - Physical size: the size of one pixel in millimeters is always recorded as pixels per meter.
//!
//! ## Example
//!
//! ```
//! use vtext_png::{EncodeOptions, Image, write_image};
//!
//! let image = Image::from_rgba8(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255])?;
//! let mut out = Vec::new();
//! write_image(&image, &EncodeOptions::default().with_indexed_bits(1), &mut out)?;
//! assert!(out.starts_with(b"\x89PNG\r\n\x1a\n"));
//! # Ok::<(), vtext_png::Error>(())
//! ```
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

use std::io::Write;

mod encoder;
mod error;
mod image;
mod options;
mod quantize;

#[cfg(test)]
mod tests;

pub use error::{Error, ErrorKind};
pub use image::Image;
pub use options::{
    Chromaticity, ColorMode, ColorSpace, DEFAULT_CHROMATICITY, DEFAULT_PIXEL_UNIT_TO_MILLIMETER,
    EncodeOptions, EncodeParams, RenderingIntent, WHITE_BACKGROUND,
};

/// Encodes `image` as PNG and writes it to `out`.
///
/// The whole file is encoded before anything is written, so encoder failures never leave a
/// partial file behind. Write failures are not retried.
pub fn write_image<W: Write>(
    image: &Image,
    options: &EncodeOptions,
    mut out: W,
) -> Result<(), Error> {
    let bytes = encode_to_vec(image, options)?;
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
}

/// Encodes `image` as PNG into a new buffer.
pub fn encode_to_vec(image: &Image, options: &EncodeOptions) -> Result<Vec<u8>, Error> {
    encoder::encode(image, &EncodeParams::from_options(options))
}
