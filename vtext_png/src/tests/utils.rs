// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Images and stream inspection helpers.

use crate::{EncodeOptions, Image, encode_to_vec};

/// A `width` x `height` image cycling through `colors`.
pub(crate) fn pattern(width: u32, height: u32, colors: &[[u8; 4]]) -> Image {
    let count = (width * height) as usize;
    let data = colors.iter().cycle().take(count).flatten().copied().collect();
    Image::from_rgba8(width, height, data).unwrap()
}

/// A horizontal gray ramp with `width` distinct shades.
pub(crate) fn ramp(width: u32) -> Image {
    let data = (0..width)
        .flat_map(|x| {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            [v, v, v, 255]
        })
        .collect();
    Image::from_rgba8(width, 1, data).unwrap()
}

pub(crate) fn encode(image: &Image, options: EncodeOptions) -> Vec<u8> {
    encode_to_vec(image, &options).unwrap()
}

/// Runs `f` on the header information the decoder reads from `png`.
pub(crate) fn with_info<T>(png: &[u8], f: impl FnOnce(&png::Info<'_>) -> T) -> T {
    let reader = png::Decoder::new(png).read_info().unwrap();
    f(reader.info())
}

/// Splits `png` into `(name, payload)` pairs, in stream order.
///
/// Only used to check which records are present and where; the decoder validates the framing.
pub(crate) fn chunk_list(png: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut chunks = Vec::new();
    let mut rest = &png[8..];
    while rest.len() >= 12 {
        let len = u32::from_be_bytes(rest[..4].try_into().unwrap()) as usize;
        let name = String::from_utf8_lossy(&rest[4..8]).into_owned();
        chunks.push((name, rest[8..8 + len].to_vec()));
        rest = &rest[12 + len..];
    }
    chunks
}

/// The chunk names of `png`, in order.
pub(crate) fn chunk_names(png: &[u8]) -> Vec<String> {
    chunk_list(png).into_iter().map(|(name, _)| name).collect()
}

/// The payload of the first chunk named `name`.
pub(crate) fn chunk_data(png: &[u8], name: &str) -> Option<Vec<u8>> {
    chunk_list(png)
        .into_iter()
        .find(|(n, _)| n == name)
        .map(|(_, data)| data)
}

/// Decodes `png` to 8-bit samples, expanding palettes.
pub(crate) fn decode(png: &[u8]) -> (png::ColorType, Vec<u8>) {
    let mut decoder = png::Decoder::new(png);
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    (info.color_type, buf)
}
