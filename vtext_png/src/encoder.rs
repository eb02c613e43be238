// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;

use png::{PixelDimensions, ScaledFloat, SourceChromaticities, SrgbRenderingIntent, Unit};

use crate::options::{
    Chromaticity, ColorMode, ColorSpace, EncodeParams, RenderingIntent, to_fixed_point,
};
use crate::quantize::quantize;
use crate::{Error, Image};

/// Encodes `image` into a complete PNG stream.
pub(crate) fn encode(image: &Image, params: &EncodeParams) -> Result<Vec<u8>, Error> {
    let mut info = png::Info::with_size(image.width(), image.height());
    let indexed = match params.color {
        ColorMode::Rgba { .. } => {
            info.color_type = png::ColorType::Rgba;
            info.bit_depth = png::BitDepth::Eight;
            None
        }
        ColorMode::Indexed { bits } => {
            let quantized = quantize(image, 1 << bits);
            info.color_type = png::ColorType::Indexed;
            info.bit_depth = bit_depth(bits);
            info.palette = Some(Cow::Owned(quantized.rgb_palette()));
            info.trns = quantized.alpha_table().map(Cow::Owned);
            Some(quantized.pack_rows(image.width(), bits))
        }
    };

    match params.color_space {
        ColorSpace::Unspecified => {}
        ColorSpace::Gamma {
            gamma,
            chromaticity,
        } => {
            info.source_gamma = Some(ScaledFloat::from_scaled(to_fixed_point(gamma)));
            info.source_chromaticities = Some(source_chromaticities(&chromaticity));
        }
        ColorSpace::Srgb(intent) => info.srgb = Some(srgb_intent(intent)),
    }
    info.pixel_dims = Some(PixelDimensions {
        xppu: params.pixels_per_meter,
        yppu: params.pixels_per_meter,
        unit: Unit::Meter,
    });

    let mut out = Vec::new();
    let mut writer = png::Encoder::with_info(&mut out, info)?.write_header()?;
    if let ColorMode::Rgba { background } = params.color {
        let bkgd: Vec<u8> = background.iter().flat_map(|v| v.to_be_bytes()).collect();
        writer.write_chunk(png::chunk::bKGD, &bkgd)?;
    }
    writer.write_image_data(indexed.as_deref().unwrap_or(image.data()))?;
    writer.finish()?;

    log::debug!(
        "Encoded {}x{} image as {:?} into {} bytes",
        image.width(),
        image.height(),
        params.color,
        out.len()
    );
    Ok(out)
}

fn bit_depth(bits: u8) -> png::BitDepth {
    match bits {
        1 => png::BitDepth::One,
        2 => png::BitDepth::Two,
        4 => png::BitDepth::Four,
        _ => png::BitDepth::Eight,
    }
}

fn source_chromaticities(chromaticity: &Chromaticity) -> SourceChromaticities {
    let [wx, wy, rx, ry, gx, gy, bx, by] = chromaticity.to_fixed().map(ScaledFloat::from_scaled);
    SourceChromaticities {
        white: (wx, wy),
        red: (rx, ry),
        green: (gx, gy),
        blue: (bx, by),
    }
}

fn srgb_intent(intent: RenderingIntent) -> SrgbRenderingIntent {
    match intent {
        RenderingIntent::Perceptual => SrgbRenderingIntent::Perceptual,
        RenderingIntent::RelativeColorimetric => SrgbRenderingIntent::RelativeColorimetric,
        RenderingIntent::Saturation => SrgbRenderingIntent::Saturation,
        RenderingIntent::AbsoluteColorimetric => SrgbRenderingIntent::AbsoluteColorimetric,
    }
}
