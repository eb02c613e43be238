// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Encoding options and the chunk policy derived from them.

/// Size of a CSS pixel in millimeters, i.e. 96 pixels per inch.
pub const DEFAULT_PIXEL_UNIT_TO_MILLIMETER: f32 = 0.264_583_3;

/// Chromaticities written alongside an explicit gamma.
pub const DEFAULT_CHROMATICITY: Chromaticity = Chromaticity {
    white: (0.3127, 0.329),
    red: (0.64, 0.33),
    green: (0.3, 0.6),
    blue: (0.15, 0.06),
};

/// Background color written for truecolor images.
pub const WHITE_BACKGROUND: [u16; 3] = [255, 255, 255];

/// Caller-facing knobs for writing an image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncodeOptions {
    /// Write an indexed image with `1 << n` colors at most.
    ///
    /// Only 1, 2, 4 and 8 are honored; other values write a truecolor image.
    pub indexed_bits: Option<u8>,
    /// Gamma to record in the file.
    ///
    /// `None` records the sRGB color space instead. Zero or negative values record no color
    /// space information at all.
    pub gamma: Option<f32>,
    /// Size of one pixel in millimeters, used for the physical resolution record.
    pub pixel_unit_to_millimeter: f32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indexed_bits: None,
            gamma: None,
            pixel_unit_to_millimeter: DEFAULT_PIXEL_UNIT_TO_MILLIMETER,
        }
    }
}

impl EncodeOptions {
    /// Requests an indexed image with at most `1 << bits` colors.
    pub fn with_indexed_bits(mut self, bits: u8) -> Self {
        self.indexed_bits = Some(bits);
        self
    }

    /// Sets the gamma to record.
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Sets the size of one pixel in millimeters.
    pub fn with_pixel_unit_to_millimeter(mut self, millimeters: f32) -> Self {
        self.pixel_unit_to_millimeter = millimeters;
        self
    }
}

/// CIE 1931 xy coordinates of the white point and primaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chromaticity {
    /// White point.
    pub white: (f32, f32),
    /// Red primary.
    pub red: (f32, f32),
    /// Green primary.
    pub green: (f32, f32),
    /// Blue primary.
    pub blue: (f32, f32),
}

impl Chromaticity {
    /// Returns the eight values in file order, scaled by 100000.
    pub fn to_fixed(&self) -> [u32; 8] {
        let [white, red, green, blue] = [self.white, self.red, self.green, self.blue];
        [
            white.0, white.1, red.0, red.1, green.0, green.1, blue.0, blue.1,
        ]
        .map(to_fixed_point)
    }
}

/// Rendering intent of an sRGB record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum RenderingIntent {
    /// Perceptual.
    #[default]
    Perceptual = 0,
    /// Relative colorimetric.
    RelativeColorimetric = 1,
    /// Saturation.
    Saturation = 2,
    /// Absolute colorimetric.
    AbsoluteColorimetric = 3,
}

/// Pixel format of the written image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// 8-bit RGBA with a background record.
    Rgba {
        /// Background color, one sample per channel.
        background: [u16; 3],
    },
    /// Palette image with the given bit depth.
    Indexed {
        /// Bits per pixel, one of 1, 2, 4 or 8.
        bits: u8,
    },
}

/// Color space records of the written image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorSpace {
    /// No gamma, chromaticity or intent record.
    Unspecified,
    /// A gamma record and a chromaticity record.
    Gamma {
        /// Value of the gamma record.
        gamma: f32,
        /// Value of the chromaticity record.
        chromaticity: Chromaticity,
    },
    /// An sRGB intent record only.
    Srgb(RenderingIntent),
}

/// The resolved set of records and pixel format for one write.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncodeParams {
    /// Pixel format.
    pub color: ColorMode,
    /// Color space records.
    pub color_space: ColorSpace,
    /// Physical resolution, in pixels per meter on both axes.
    pub pixels_per_meter: u32,
}

impl EncodeParams {
    /// Resolves `options` into concrete parameters.
    ///
    /// Unsupported values never fail: they fall back to the default behavior and are reported at
    /// debug level.
    pub fn from_options(options: &EncodeOptions) -> Self {
        let color = match options.indexed_bits {
            Some(bits @ (1 | 2 | 4 | 8)) => ColorMode::Indexed { bits },
            Some(bits) => {
                log::debug!("Ignoring unsupported palette depth of {bits} bits");
                ColorMode::Rgba {
                    background: WHITE_BACKGROUND,
                }
            }
            None => ColorMode::Rgba {
                background: WHITE_BACKGROUND,
            },
        };

        let color_space = match options.gamma {
            None => ColorSpace::Srgb(RenderingIntent::Perceptual),
            Some(gamma) if gamma > 0.0 && gamma.is_finite() => ColorSpace::Gamma {
                gamma,
                chromaticity: DEFAULT_CHROMATICITY,
            },
            Some(gamma) => {
                log::debug!("Omitting color space records for gamma {gamma}");
                ColorSpace::Unspecified
            }
        };

        Self {
            color,
            color_space,
            pixels_per_meter: pixels_per_meter(options.pixel_unit_to_millimeter),
        }
    }
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self::from_options(&EncodeOptions::default())
    }
}

fn pixels_per_meter(millimeters: f32) -> u32 {
    let millimeters = if millimeters > 0.0 && millimeters.is_finite() {
        millimeters
    } else {
        log::debug!("Invalid pixel size of {millimeters}mm, using the default");
        DEFAULT_PIXEL_UNIT_TO_MILLIMETER
    };
    saturate(1000.0 / f64::from(millimeters))
}

/// Scales a gamma or chromaticity value to the file's fixed point representation.
pub(crate) fn to_fixed_point(value: f32) -> u32 {
    saturate(f64::from(value) * 100_000.0)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The value is rounded and clamped to the u32 range first."
)]
fn saturate(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}
