// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGBA (8 bits per channel) color representation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::parse_hex_color;
use crate::{CommonResult, ContrastError};

pub const ALPHA_OPAQUE: u8 = 255;
pub const ALPHA_TRANSPARENT: u8 = 0;

/// Represents a color with 8-bit red, green, blue and alpha channels.
///
/// This is a [`Copy`] value type. Methods that "change" a color, like
/// [`with_alpha`](Self::with_alpha), return a new one and leave `self` alone.
///
/// A 3-channel color (`[r, g, b]`, `(r, g, b)`, or `0xRRGGBB`) converts into an
/// opaque [`RgbaValue`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct RgbaValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    #[serde(default = "default_alpha")]
    pub alpha: u8,
}

fn default_alpha() -> u8 { ALPHA_OPAQUE }

impl RgbaValue {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, ALPHA_TRANSPARENT);
    pub const BLACK: Self = Self::from_u8(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::from_u8(0xFF, 0xFF, 0xFF);
    /// The darkest anchor used when a foreground has to get darker. It is slightly
    /// lighter than pure black.
    pub const DARKEST: Self = Self::from_u8(0x20, 0x21, 0x24);

    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color.
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, ALPHA_OPAQUE)
    }

    #[must_use]
    pub const fn alpha(self) -> u8 { self.alpha }

    /// Returns a copy of this color with the given alpha and the same RGB channels.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    #[must_use]
    pub const fn is_opaque(self) -> bool { self.alpha == ALPHA_OPAQUE }

    /// # Errors
    ///
    /// Returns [`ContrastError::InvalidHexColor`] if the input is not exactly
    /// `#RRGGBB` or `#RRGGBBAA`.
    pub fn try_from_hex_color(input: &str) -> CommonResult<RgbaValue> {
        match parse_hex_color(input) {
            Ok(("", color)) => Ok(color),
            _ => Err(ContrastError::InvalidHexColor {
                input: input.to_string(),
            }),
        }
    }
}

impl Default for RgbaValue {
    fn default() -> Self { Self::BLACK }
}

impl From<[u8; 3]> for RgbaValue {
    fn from([red, green, blue]: [u8; 3]) -> Self { Self::from_u8(red, green, blue) }
}

impl From<[u8; 4]> for RgbaValue {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl From<(u8, u8, u8)> for RgbaValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<(u8, u8, u8, u8)> for RgbaValue {
    fn from((red, green, blue, alpha): (u8, u8, u8, u8)) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

/// `0xRRGGBB`, always opaque. Bits above the low 24 are ignored.
impl From<u32> for RgbaValue {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self::from_u8(red, green, blue)
    }
}

impl From<RgbaValue> for [u8; 4] {
    fn from(color: RgbaValue) -> Self { [color.red, color.green, color.blue, color.alpha] }
}

impl TryFrom<&[u8]> for RgbaValue {
    type Error = ContrastError;

    fn try_from(channels: &[u8]) -> CommonResult<Self> {
        match *channels {
            [red, green, blue] => Ok(Self::from_u8(red, green, blue)),
            [red, green, blue, alpha] => Ok(Self::new(red, green, blue, alpha)),
            _ => Err(ContrastError::InvalidChannelCount {
                len: channels.len(),
            }),
        }
    }
}

impl FromStr for RgbaValue {
    type Err = ContrastError;

    fn from_str(input: &str) -> CommonResult<Self> { Self::try_from_hex_color(input) }
}

/// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
impl fmt::Display for RgbaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.alpha)?;
        }
        Ok(())
    }
}

/// Returns the alpha channel of `color`. A 3-channel color is opaque, so this returns
/// [`ALPHA_OPAQUE`] for it.
#[must_use]
pub fn color_get_a(color: impl Into<RgbaValue>) -> u8 { color.into().alpha() }

/// Returns a new color with the RGB channels of `color` and the given `alpha`. The
/// argument is taken by value, so the caller's color is never modified.
#[must_use]
pub fn color_set_a(color: impl Into<RgbaValue>, alpha: u8) -> RgbaValue {
    color.into().with_alpha(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_color_set_a_does_not_mutate_input() {
        let color = RgbaValue::from([1, 2, 3]);
        let new_color = color_set_a(color, 7);
        assert_eq2!(new_color, RgbaValue::new(1, 2, 3, 7));
        assert_eq2!(color, RgbaValue::new(1, 2, 3, 255));

        let array = [1, 2, 3];
        let _unused = color_set_a(array, 0);
        assert_eq2!(array, [1, 2, 3]);
    }

    #[test]
    fn test_color_get_a() {
        assert_eq2!(color_get_a([1, 2, 3, 128]), 128);
        assert_eq2!(color_get_a([1, 2, 3]), 255);
        assert_eq2!(color_get_a((1, 2, 3, 0)), 0);
    }

    #[test]
    fn test_from_u32() {
        assert_eq2!(RgbaValue::from(0x20_21_24_u32), RgbaValue::DARKEST);
        assert_eq2!(RgbaValue::from(0xFF_DE_E1_E6_u32), RgbaValue::from_u8(0xDE, 0xE1, 0xE6));
    }

    #[test_case(&[1, 2, 3], RgbaValue::new(1, 2, 3, 255))]
    #[test_case(&[1, 2, 3, 4], RgbaValue::new(1, 2, 3, 4))]
    fn test_try_from_slice(channels: &[u8], expected: RgbaValue) {
        let value = RgbaValue::try_from(channels).unwrap();
        assert_eq2!(value, expected);
        let array: [u8; 4] = value.into();
        assert_eq2!(&array[..channels.len()], channels);
    }

    #[test_case(&[])]
    #[test_case(&[1, 2])]
    #[test_case(&[1, 2, 3, 4, 5])]
    fn test_try_from_slice_rejects_bad_length(channels: &[u8]) {
        let result = RgbaValue::try_from(channels);
        assert!(matches!(
            result,
            Err(ContrastError::InvalidChannelCount { len }) if len == channels.len()
        ));
    }

    #[test]
    fn test_try_from_hex_color() {
        // Valid.
        {
            let value = RgbaValue::try_from_hex_color("#ff0000").unwrap();
            assert_eq2!(value, RgbaValue::from_u8(255, 0, 0));
            let value: RgbaValue = "#20212480".parse().unwrap();
            assert_eq2!(value, RgbaValue::DARKEST.with_alpha(0x80));
        }

        // Invalid.
        {
            assert!(RgbaValue::try_from_hex_color("#ff000").is_err());
            assert!(RgbaValue::try_from_hex_color("#ff00000").is_err());
            assert!(RgbaValue::try_from_hex_color("#ff0000 ").is_err());
        }
    }

    #[test]
    fn test_display() {
        assert_eq2!(RgbaValue::DARKEST.to_string(), "#202124");
        assert_eq2!(RgbaValue::new(0xde, 0xe1, 0xe6, 0x80).to_string(), "#dee1e680");
    }

    #[test]
    fn test_serde_defaults_alpha_to_opaque() {
        let value: RgbaValue =
            serde_json::from_str(r#"{"red":1,"green":2,"blue":3}"#).unwrap();
        assert_eq2!(value, RgbaValue::from_u8(1, 2, 3));
    }
}
