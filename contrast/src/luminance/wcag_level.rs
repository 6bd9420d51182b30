// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// WCAG 2 conformance levels for text contrast.
/// <https://www.w3.org/TR/WCAG20/#visual-audio-contrast-contrast>
#[derive(
    Debug,
    Default,
    Display,
    EnumString,
    EnumIter,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WcagLevel {
    /// 18pt+ (or 14pt+ bold) text, level AA.
    AaLargeText,
    /// Body text, level AA. This is the level [`get_color_with_minimum_contrast`]
    /// aims for.
    ///
    /// [`get_color_with_minimum_contrast`]: crate::get_color_with_minimum_contrast
    #[default]
    Aa,
    AaaLargeText,
    Aaa,
}

impl WcagLevel {
    #[must_use]
    pub const fn min_ratio(self) -> f64 {
        match self {
            WcagLevel::AaLargeText => 3.0,
            WcagLevel::Aa | WcagLevel::AaaLargeText => 4.5,
            WcagLevel::Aaa => 7.0,
        }
    }

    #[must_use]
    pub fn is_met_by(self, contrast_ratio: f64) -> bool {
        contrast_ratio >= self.min_ratio()
    }
}
