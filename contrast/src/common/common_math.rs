// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Marker trait for intentional lossy conversion to [`u8`].
///
/// Color math happens in `f64` and lands back on 8-bit channels. Routing every one of
/// those conversions through this trait keeps the `clippy::cast_*` allowances in one
/// place instead of sprinkling `as u8` across the crate.
pub trait LossyConvertToByte {
    /// Intentionally converts the value to a [`u8`] with direct casting. Floats
    /// saturate at `0` and `255`, `NaN` becomes `0`.
    #[must_use]
    fn to_u8_lossy(self) -> u8;
}

impl LossyConvertToByte for f64 {
    #[allow(
        clippy::cast_sign_loss,
        clippy::cast_lossless,
        clippy::cast_possible_truncation
    )]
    fn to_u8_lossy(self) -> u8 { self as u8 }
}

impl LossyConvertToByte for u16 {
    #[allow(clippy::cast_possible_truncation)]
    fn to_u8_lossy(self) -> u8 { self.min(u16::from(u8::MAX)) as u8 }
}

/// Rounds half away from zero, then converts. This is the rounding used for every
/// channel produced by a blend.
#[must_use]
pub fn round_to_u8(value: f64) -> u8 { value.round().to_u8_lossy() }
