// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{CLOSE_ENOUGH_ALPHA_DELTA, CommonResult, ContrastError, LUMINANCE_MIDPOINT,
            RgbaValue, WcagLevel};

/// The contrast ratio body text has to reach, WCAG level AA.
pub const MIN_READABLE_CONTRAST_RATIO: f64 = WcagLevel::Aa.min_ratio();

/// WCAG contrast ratios are bounded by black on white.
pub const MAX_CONTRAST_RATIO: f64 = 21.0;

/// Knobs for the minimum contrast operations. [`Default`] gives the values used by
/// [`get_color_with_minimum_contrast`] and [`get_blend_value_with_minimum_contrast`].
///
/// Can be loaded from JSON, where every field is optional:
///
/// ```
/// use r3bl_contrast::ContrastConfig;
///
/// let config = ContrastConfig::try_from_json_str(r#"{ "min_ratio": 7.0 }"#).unwrap();
/// assert_eq!(config.min_ratio, 7.0);
/// assert_eq!(config.alpha_error_tolerance, 4);
/// ```
///
/// [`get_color_with_minimum_contrast`]: crate::get_color_with_minimum_contrast
/// [`get_blend_value_with_minimum_contrast`]: crate::get_blend_value_with_minimum_contrast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    pub min_ratio: f64,
    /// See [`find_blend_value_for_contrast_ratio`].
    ///
    /// [`find_blend_value_for_contrast_ratio`]: crate::find_blend_value_for_contrast_ratio
    pub alpha_error_tolerance: u8,
    /// Blend target for dark backgrounds.
    pub light_anchor: RgbaValue,
    /// Blend target for light backgrounds.
    pub dark_anchor: RgbaValue,
    /// Backgrounds with a relative luminance below this get [`Self::light_anchor`].
    pub luminance_midpoint: f64,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            min_ratio: MIN_READABLE_CONTRAST_RATIO,
            alpha_error_tolerance: CLOSE_ENOUGH_ALPHA_DELTA,
            light_anchor: RgbaValue::WHITE,
            dark_anchor: RgbaValue::DARKEST,
            luminance_midpoint: LUMINANCE_MIDPOINT,
        }
    }
}

impl From<WcagLevel> for ContrastConfig {
    fn from(level: WcagLevel) -> Self { Self::default().with_min_ratio(level.min_ratio()) }
}

impl ContrastConfig {
    #[must_use]
    pub fn with_min_ratio(self, min_ratio: f64) -> Self { Self { min_ratio, ..self } }

    #[must_use]
    pub fn with_alpha_error_tolerance(self, alpha_error_tolerance: u8) -> Self {
        Self {
            alpha_error_tolerance,
            ..self
        }
    }

    /// # Errors
    ///
    /// Returns [`ContrastError::InvalidConfig`] if the JSON does not match the shape of
    /// this struct, and [`ContrastError::MinRatioOutOfRange`] if it does but the ratio
    /// can not be a WCAG contrast ratio.
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// # Errors
    ///
    /// Returns [`ContrastError::MinRatioOutOfRange`] if `min_ratio` is outside
    /// `[1.0, 21.0]` or `NaN`.
    pub fn validate(self) -> CommonResult<Self> {
        if (1.0..=MAX_CONTRAST_RATIO).contains(&self.min_ratio) {
            Ok(self)
        } else {
            Err(ContrastError::MinRatioOutOfRange {
                min_ratio: self.min_ratio,
            })
        }
    }
}
