// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Source-over compositing of two colors that may both be translucent.

use crate::{ALPHA_OPAQUE, ALPHA_TRANSPARENT, RgbaValue, round_to_u8};

/// Returns a blend of the supplied colors, ranging from `background` (for `mix == 0`)
/// to `foreground` (for `mix == 255`).
///
/// The alpha channels of both colors are taken into account, so the result may be
/// partially transparent. Each color's channels are weighted by its own alpha, not
/// just by `mix`:
///
/// ```text
/// t          = mix / 255
/// normalizer = fg.alpha * t + bg.alpha * (1 - t)
/// channel    = round((fg.c * fg.alpha * t + bg.c * bg.alpha * (1 - t)) / normalizer)
/// alpha      = round(normalizer)
/// ```
///
/// When both colors are fully transparent the normalizer is `0` and the result is
/// [`RgbaValue::TRANSPARENT`].
///
/// ```
/// use r3bl_contrast::{RgbaValue, alpha_blend};
///
/// let fore = RgbaValue::from([200, 200, 200]);
/// let back = RgbaValue::from([100, 100, 100, 0]);
/// assert_eq!(alpha_blend(fore, back, 136).alpha, 136);
/// ```
#[must_use]
pub fn alpha_blend(
    foreground: impl Into<RgbaValue>,
    background: impl Into<RgbaValue>,
    mix: u8,
) -> RgbaValue {
    let foreground = foreground.into();
    let background = background.into();

    match mix {
        ALPHA_TRANSPARENT => background,
        ALPHA_OPAQUE => foreground,
        _ => {
            let t_alpha = f64::from(mix) / 255.0;
            let f_alpha = f64::from(foreground.alpha);
            let b_alpha = f64::from(background.alpha);
            // [0.0, 255.0].
            let normalizer = f_alpha * t_alpha + b_alpha * (1.0 - t_alpha);

            if normalizer <= 0.0 {
                return RgbaValue::TRANSPARENT;
            }

            let f_weight = f_alpha * t_alpha / normalizer;
            let b_weight = b_alpha * (1.0 - t_alpha) / normalizer;
            let blend_channel = |fore: u8, back: u8| {
                round_to_u8(f64::from(fore) * f_weight + f64::from(back) * b_weight)
            };

            RgbaValue::new(
                blend_channel(foreground.red, background.red),
                blend_channel(foreground.green, background.green),
                blend_channel(foreground.blue, background.blue),
                round_to_u8(normalizer),
            )
        }
    }
}

/// Returns the color you actually see after painting `foreground` once on top of the
/// opaque `background`. The result is opaque.
#[must_use]
pub fn paint_on_background(
    foreground: impl Into<RgbaValue>,
    background: impl Into<RgbaValue>,
) -> RgbaValue {
    let foreground = foreground.into();
    let background = background.into();
    crate::debug_assert_opaque!(background, "background");
    alpha_blend(
        foreground.with_alpha(ALPHA_OPAQUE),
        background,
        foreground.alpha(),
    )
}
