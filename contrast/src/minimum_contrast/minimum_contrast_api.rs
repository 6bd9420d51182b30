// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BlendSearchResult, ContrastConfig, RgbaValue, alpha_blend, get_contrast_ratio,
            paint_on_background, relative_luminance, search_blend_value_for_contrast_ratio};

/// Outcome of [`ContrastConfig::search_blend_value_with_minimum_contrast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimumContrastResult {
    /// `source` already has enough contrast, no blending needed.
    AlreadyMet,
    /// Blending `target` onto `source` by `mix` reaches the ratio.
    Blended { mix: u8 },
    /// The ratio can't be reached, `target` is as close as it gets.
    Unreachable,
}

impl MinimumContrastResult {
    #[must_use]
    pub const fn mix(self) -> u8 {
        match self {
            MinimumContrastResult::AlreadyMet => 0,
            MinimumContrastResult::Blended { mix } => mix,
            MinimumContrastResult::Unreachable => BlendSearchResult::Unreachable.mix(),
        }
    }
}

impl From<BlendSearchResult> for MinimumContrastResult {
    fn from(result: BlendSearchResult) -> Self {
        match result {
            BlendSearchResult::Reached { mix } => MinimumContrastResult::Blended { mix },
            BlendSearchResult::Unreachable => MinimumContrastResult::Unreachable,
        }
    }
}

impl ContrastConfig {
    /// Picks [`Self::light_anchor`] for dark colors and [`Self::dark_anchor`] for light
    /// ones.
    #[must_use]
    pub fn color_with_max_contrast(&self, color: impl Into<RgbaValue>) -> RgbaValue {
        if relative_luminance(color) < self.luminance_midpoint {
            self.light_anchor
        } else {
            self.dark_anchor
        }
    }

    /// `source` and `target` may be translucent, they are painted onto `base` first.
    ///
    /// # Panics
    ///
    /// In debug builds, if `base` is not opaque.
    #[must_use]
    pub fn search_blend_value_with_minimum_contrast(
        &self,
        source: impl Into<RgbaValue>,
        target: impl Into<RgbaValue>,
        base: impl Into<RgbaValue>,
    ) -> MinimumContrastResult {
        let base = base.into();
        crate::debug_assert_opaque!(base, "base");

        let source = paint_on_background(source, base);
        if get_contrast_ratio(source, base) >= self.min_ratio {
            tracing::debug!(
                message = "contrast already met",
                source = %source,
                base = %base,
                min_ratio = self.min_ratio,
            );
            return MinimumContrastResult::AlreadyMet;
        }

        let target = paint_on_background(target, base);
        search_blend_value_for_contrast_ratio(
            source,
            target,
            base,
            self.min_ratio,
            self.alpha_error_tolerance,
        )
        .into()
    }

    /// # Panics
    ///
    /// In debug builds, if `base` is not opaque.
    #[must_use]
    pub fn blend_value_with_minimum_contrast(
        &self,
        source: impl Into<RgbaValue>,
        target: impl Into<RgbaValue>,
        base: impl Into<RgbaValue>,
    ) -> u8 {
        self.search_blend_value_with_minimum_contrast(source, target, base)
            .mix()
    }

    /// # Panics
    ///
    /// In debug builds, if `background` is not opaque.
    #[must_use]
    pub fn color_with_minimum_contrast(
        &self,
        default_foreground: impl Into<RgbaValue>,
        background: impl Into<RgbaValue>,
    ) -> RgbaValue {
        let default_foreground = default_foreground.into();
        let background = background.into();
        let contrasting_color = self.color_with_max_contrast(background);
        let mix = self.blend_value_with_minimum_contrast(
            default_foreground,
            contrasting_color,
            background,
        );
        alpha_blend(contrasting_color, default_foreground, mix)
    }
}

/// Returns white for dark colors and [`RgbaValue::DARKEST`] for light ones, whichever
/// contrasts more with `color`.
#[must_use]
pub fn get_color_with_max_contrast(color: impl Into<RgbaValue>) -> RgbaValue {
    ContrastConfig::default().color_with_max_contrast(color)
}

/// Returns a `mix` such that blending `target` onto `source` by that amount has a
/// contrast of at least `contrast_ratio` against `base`.
///
/// - `0` if `source` (painted onto `base`) already meets the ratio.
/// - `255` if even `target` can't reach it.
///
/// `base` must be opaque.
///
/// ```
/// use r3bl_contrast::get_blend_value_with_minimum_contrast;
///
/// let gray = [0xde, 0xe1, 0xe6];
/// let mix = get_blend_value_with_minimum_contrast(gray, [0xff, 0xff, 0xff], gray, 1.19);
/// assert!((f64::from(mix) / 255.0 - 0.65).abs() < 0.05);
/// ```
///
/// # Panics
///
/// In debug builds, if `base` is not opaque.
#[must_use]
pub fn get_blend_value_with_minimum_contrast(
    source: impl Into<RgbaValue>,
    target: impl Into<RgbaValue>,
    base: impl Into<RgbaValue>,
    contrast_ratio: f64,
) -> u8 {
    ContrastConfig::default()
        .with_min_ratio(contrast_ratio)
        .blend_value_with_minimum_contrast(source, target, base)
}

/// Selects a color based on `default_foreground` that reaches a 4.5:1 contrast ratio
/// when used as a text color on top of `background`.
///
/// If `default_foreground` already does, it is returned unchanged. Otherwise it is
/// blended toward white (dark backgrounds) or toward [`RgbaValue::DARKEST`] (light
/// backgrounds) until the ratio is met or the color can't get any more extreme.
///
/// `background` must be opaque.
///
/// # Panics
///
/// In debug builds, if `background` is not opaque.
#[must_use]
pub fn get_color_with_minimum_contrast(
    default_foreground: impl Into<RgbaValue>,
    background: impl Into<RgbaValue>,
) -> RgbaValue {
    ContrastConfig::default().color_with_minimum_contrast(default_foreground, background)
}
