// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Error;

/// A rendered image: non-premultiplied RGBA8 pixels in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Image {
    /// Wraps an RGBA8 buffer of `width * height` pixels.
    ///
    /// Fails with [`ErrorKind::InvalidImage`](crate::ErrorKind::InvalidImage) if either
    /// dimension is zero or the buffer length does not match.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_image(format!(
                "{width}x{height} image has no pixels"
            )));
        }
        let expected = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .and_then(|pixels| pixels.checked_mul(4));
        if expected != Some(data.len()) {
            return Err(Error::invalid_image(format!(
                "{} bytes do not hold {width}x{height} RGBA pixels",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8 pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Iterates over the pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Returns true if every pixel is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == u8::MAX)
    }

    /// Consumes the image and returns its pixel bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
