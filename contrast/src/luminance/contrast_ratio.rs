// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::relative_luminance;
use crate::RgbaValue;

/// `(lighter + 0.05) / (darker + 0.05)` for two relative luminance values. The order
/// of the arguments does not matter and the result is always `>= 1.0`.
#[must_use]
pub fn contrast_ratio_from_luminance(luminance_a: f64, luminance_b: f64) -> f64 {
    let luminance_a = luminance_a + 0.05;
    let luminance_b = luminance_b + 0.05;
    if luminance_a > luminance_b {
        luminance_a / luminance_b
    } else {
        luminance_b / luminance_a
    }
}

/// WCAG contrast ratio of two colors, in `[1.0, 21.0]`. Alpha is ignored, so paint
/// translucent colors onto their background first.
#[must_use]
pub fn get_contrast_ratio(color_a: impl Into<RgbaValue>, color_b: impl Into<RgbaValue>) -> f64 {
    contrast_ratio_from_luminance(relative_luminance(color_a), relative_luminance(color_b))
}
