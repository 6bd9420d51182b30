// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbaValue`]
//! struct. The hex color string can be in the following formats:
//! - `#RRGGBB`, eg: `#FF0000` for opaque red.
//! - `#RRGGBBAA`, eg: `#FF000080` for red at alpha `0x80`.
//!
//! [`RgbaValue`]: crate::RgbaValue

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{map_res, opt}};

use crate::{ALPHA_OPAQUE, RgbaValue};

/// Parse function that generates an [`RgbaValue`] struct from a valid hex color
/// string. A missing alpha segment means the color is opaque.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input does not start with `#` followed by at least
/// three 2-digit hex segments.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbaValue> {
    (
        tag("#"),
        parse_hex_seg,
        parse_hex_seg,
        parse_hex_seg,
        opt(parse_hex_seg),
    )
        .map(|(_, red, green, blue, maybe_alpha)| {
            RgbaValue::new(red, green, blue, maybe_alpha.unwrap_or(ALPHA_OPAQUE))
        })
        .parse(input)
}

fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
        .parse(input)
}

/// Used by [`take_while_m_n`], as long as it returns `true` items will be taken from
/// the input.
fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

/// Used by [`map_res`] and it returns a [`Result`], not [`IResult`].
fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(input, 16)
}
