// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Binary search over the blend weight (`mix`) for the smallest blend that reaches a
//! contrast ratio.
//!
//! The search assumes that contrast against `base` never decreases as `mix` goes from
//! `0` to `255`. That holds when `target` is the extreme (white or near-black) on the
//! far side of `base` from `source`, which is how [`get_blend_value_with_minimum_contrast`]
//! calls it. The assumption is not checked.
//!
//! [`get_blend_value_with_minimum_contrast`]: crate::get_blend_value_with_minimum_contrast

use crate::{ALPHA_OPAQUE, ALPHA_TRANSPARENT, LossyConvertToByte, RgbaValue, alpha_blend,
            contrast_ratio_from_luminance, relative_luminance};

/// Recommended `alpha_error_tolerance`. The returned mix is then at most this far above
/// the exact minimum, in exchange for a couple fewer iterations.
pub const CLOSE_ENOUGH_ALPHA_DELTA: u8 = 4;

/// Outcome of [`search_blend_value_for_contrast_ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendSearchResult {
    /// Blending `target` onto `source` by `mix` reaches the contrast ratio.
    Reached { mix: u8 },
    /// Not even `target` itself reaches the contrast ratio. Callers that only want a
    /// number get [`ALPHA_OPAQUE`], the most extreme blend available.
    Unreachable,
}

impl BlendSearchResult {
    #[must_use]
    pub const fn mix(self) -> u8 {
        match self {
            BlendSearchResult::Reached { mix } => mix,
            BlendSearchResult::Unreachable => ALPHA_OPAQUE,
        }
    }

    #[must_use]
    pub const fn is_reached(self) -> bool {
        matches!(self, BlendSearchResult::Reached { .. })
    }
}

/// Returns the minimum `mix` such that `alpha_blend(target, source, mix)` has a contrast
/// of at least `contrast_ratio` against `base`, or [`ALPHA_OPAQUE`] if that is
/// impossible.
///
/// All three colors must be opaque. `alpha_error_tolerance` should be `0` for the exact
/// answer, or [`CLOSE_ENOUGH_ALPHA_DELTA`] when "within 4" is good enough.
///
/// # Panics
///
/// In debug builds, if `source`, `target` or `base` is not opaque.
#[must_use]
pub fn find_blend_value_for_contrast_ratio(
    source: impl Into<RgbaValue>,
    target: impl Into<RgbaValue>,
    base: impl Into<RgbaValue>,
    contrast_ratio: f64,
    alpha_error_tolerance: u8,
) -> u8 {
    search_blend_value_for_contrast_ratio(
        source,
        target,
        base,
        contrast_ratio,
        alpha_error_tolerance,
    )
    .mix()
}

/// Same search as [`find_blend_value_for_contrast_ratio`], but tells the caller whether
/// the ratio was actually reached or the [`ALPHA_OPAQUE`] fallback applies.
///
/// # Panics
///
/// In debug builds, if `source`, `target` or `base` is not opaque.
#[must_use]
pub fn search_blend_value_for_contrast_ratio(
    source: impl Into<RgbaValue>,
    target: impl Into<RgbaValue>,
    base: impl Into<RgbaValue>,
    contrast_ratio: f64,
    alpha_error_tolerance: u8,
) -> BlendSearchResult {
    let source = source.into();
    let target = target.into();
    let base = base.into();
    crate::debug_assert_opaque!(source, "source");
    crate::debug_assert_opaque!(target, "target");
    crate::debug_assert_opaque!(base, "base");

    let base_luminance = relative_luminance(base);
    let contrast_at = |mix: u8| {
        let blended = alpha_blend(target, source, mix);
        contrast_ratio_from_luminance(relative_luminance(blended), base_luminance)
    };

    // Half open interval [low, high). `u16` so that `high` can sit one past the largest
    // `u8` mix.
    let mut low = u16::from(ALPHA_TRANSPARENT);
    let mut high = u16::from(ALPHA_OPAQUE) + 1;
    let mut best: Option<u8> = None;

    while low + u16::from(alpha_error_tolerance) < high {
        let mix = ((low + high) / 2).to_u8_lossy();
        let contrast = contrast_at(mix);
        tracing::trace!(message = "contrast search probe", mix, contrast, low, high);
        if contrast >= contrast_ratio {
            best = Some(mix);
            high = u16::from(mix);
        } else {
            low = u16::from(mix) + 1;
        }
    }

    let result = match best {
        Some(mix) => BlendSearchResult::Reached { mix },
        None if contrast_at(ALPHA_OPAQUE) >= contrast_ratio => {
            BlendSearchResult::Reached { mix: ALPHA_OPAQUE }
        }
        None => BlendSearchResult::Unreachable,
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "contrast search done",
        source = %source,
        target = %target,
        base = %base,
        contrast_ratio,
        alpha_error_tolerance,
        result = ?result,
    );

    result
}
