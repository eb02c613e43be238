// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Median cut color reduction.

use std::collections::HashMap;

use crate::Image;

/// An image reduced to a palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Quantized {
    /// RGBA palette entries.
    pub(crate) palette: Vec<[u8; 4]>,
    /// One palette index per pixel, in row-major order.
    pub(crate) indices: Vec<u8>,
}

impl Quantized {
    /// Returns the palette as RGB triples.
    pub(crate) fn rgb_palette(&self) -> Vec<u8> {
        self.palette.iter().flat_map(|c| [c[0], c[1], c[2]]).collect()
    }

    /// Returns the palette alpha values, or `None` if every entry is opaque.
    ///
    /// Trailing opaque entries are omitted.
    pub(crate) fn alpha_table(&self) -> Option<Vec<u8>> {
        let len = self.palette.iter().rposition(|c| c[3] != u8::MAX)? + 1;
        Some(self.palette[..len].iter().map(|c| c[3]).collect())
    }

    /// Packs the indices into rows of `bits` bits per pixel, most significant bits first.
    pub(crate) fn pack_rows(&self, width: u32, bits: u8) -> Vec<u8> {
        let width = width as usize;
        let bits = usize::from(bits);
        let per_byte = 8 / bits;
        let stride = width.div_ceil(per_byte);
        let rows = self.indices.len() / width.max(1);
        let mut packed = vec![0_u8; stride * rows];
        for (row, indices) in self.indices.chunks_exact(width).enumerate() {
            let out = &mut packed[row * stride..(row + 1) * stride];
            for (col, &index) in indices.iter().enumerate() {
                let shift = 8 - bits * (col % per_byte + 1);
                out[col / per_byte] |= index << shift;
            }
        }
        packed
    }
}

/// A box of the color space holding a set of distinct colors.
#[derive(Debug)]
struct ColorBox {
    colors: Vec<([u8; 4], u32)>,
}

impl ColorBox {
    /// Returns the channel with the widest spread and its extent.
    fn widest_channel(&self) -> (usize, u8) {
        (0..4)
            .map(|channel| {
                let (lo, hi) = self.colors.iter().fold((u8::MAX, u8::MIN), |(lo, hi), (c, _)| {
                    (lo.min(c[channel]), hi.max(c[channel]))
                });
                (channel, hi.saturating_sub(lo))
            })
            .max_by_key(|&(channel, extent)| (extent, core::cmp::Reverse(channel)))
            .unwrap_or((0, 0))
    }

    /// Splits the box at the population median of its widest channel.
    fn split(mut self) -> (Self, Self) {
        let (channel, _) = self.widest_channel();
        self.colors.sort_unstable_by_key(|(c, _)| (c[channel], *c));
        let total: u64 = self.colors.iter().map(|&(_, n)| u64::from(n)).sum();
        let mut seen = 0;
        let mut at = 1;
        for (i, &(_, n)) in self.colors.iter().enumerate() {
            seen += u64::from(n);
            if seen * 2 >= total {
                at = i + 1;
                break;
            }
        }
        let at = at.clamp(1, self.colors.len() - 1);
        let rest = self.colors.split_off(at);
        (self, Self { colors: rest })
    }

    /// Returns the population weighted mean color.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "A mean of u8 samples fits in a u8."
    )]
    fn mean(&self) -> [u8; 4] {
        let total: u64 = self.colors.iter().map(|&(_, n)| u64::from(n)).sum();
        let mut sum = [0_u64; 4];
        for &(c, n) in &self.colors {
            for (acc, v) in sum.iter_mut().zip(c) {
                *acc += u64::from(v) * u64::from(n);
            }
        }
        sum.map(|s| ((s + total / 2) / total.max(1)) as u8)
    }
}

/// Reduces `image` to at most `max_colors` colors.
///
/// Images that already use few enough colors keep them exactly.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Palettes hold at most 256 entries."
)]
pub(crate) fn quantize(image: &Image, max_colors: usize) -> Quantized {
    let max_colors = max_colors.clamp(1, 256);
    let mut histogram: HashMap<[u8; 4], u32> = HashMap::new();
    for px in image.pixels() {
        *histogram.entry(px).or_default() += 1;
    }
    let mut colors: Vec<_> = histogram.into_iter().collect();
    colors.sort_unstable();

    let palette = if colors.len() <= max_colors {
        colors.into_iter().map(|(c, _)| c).collect()
    } else {
        median_cut(colors, max_colors)
    };
    log::trace!(
        "Quantized {}x{} image to {} colors",
        image.width(),
        image.height(),
        palette.len()
    );

    let mut lookup: HashMap<[u8; 4], u8> = HashMap::new();
    let indices = image
        .pixels()
        .map(|px| *lookup.entry(px).or_insert_with(|| nearest(&palette, px) as u8))
        .collect();
    Quantized { palette, indices }
}

fn median_cut(colors: Vec<([u8; 4], u32)>, max_colors: usize) -> Vec<[u8; 4]> {
    let mut boxes = vec![ColorBox { colors }];
    while boxes.len() < max_colors {
        let candidate = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.colors.len() > 1)
            .max_by_key(|(_, b)| b.widest_channel().1)
            .map(|(i, _)| i);
        let Some(index) = candidate else {
            break;
        };
        let (a, b) = boxes.swap_remove(index).split();
        boxes.push(a);
        boxes.push(b);
    }
    boxes.iter().map(ColorBox::mean).collect()
}

fn nearest(palette: &[[u8; 4]], color: [u8; 4]) -> usize {
    let distance = |entry: &[u8; 4]| -> u32 {
        entry
            .iter()
            .zip(color)
            .map(|(&a, b)| u32::from(a.abs_diff(b)).pow(2))
            .sum()
    };
    palette
        .iter()
        .enumerate()
        .min_by_key(|(_, entry)| distance(entry))
        .map_or(0, |(i, _)| i)
}
