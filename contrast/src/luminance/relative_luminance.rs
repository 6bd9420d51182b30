// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::RgbaValue;

/// Colors with a relative luminance below this value are "dark". This is the
/// luminance at which white and [`RgbaValue::DARKEST`] have the same contrast, so
/// splitting here always picks the anchor with more contrast.
pub const LUMINANCE_MIDPOINT: f64 = 0.211_692_036;

/// Converts an 8-bit sRGB channel to linear light.
///
/// The W3C text uses `0.03928` as the threshold. This uses `0.04045`, the value from
/// the sRGB standard (IEC 61966-2-1), which is what browser engines use:
/// <https://en.wikipedia.org/wiki/SRGB#Theory_of_the_transformation>.
#[must_use]
pub fn linearize(eight_bit_component: u8) -> f64 {
    let component = f64::from(eight_bit_component) / 255.0;
    if component <= 0.040_45 {
        component / 12.92
    } else {
        ((component + 0.055) / 1.055).powf(2.4)
    }
}

/// Rec. 709 weighted sum of the linearized channels, in `[0.0, 1.0]`. Alpha is
/// ignored.
#[must_use]
pub fn relative_luminance(color: impl Into<RgbaValue>) -> f64 {
    let color = color.into();
    0.2126 * linearize(color.red)
        + 0.7152 * linearize(color.green)
        + 0.0722 * linearize(color.blue)
}

#[must_use]
pub fn is_dark(color: impl Into<RgbaValue>) -> bool {
    relative_luminance(color) < LUMINANCE_MIDPOINT
}
