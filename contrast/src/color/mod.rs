// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color primitives.
//!
//! This module provides:
//! - **Primitive type**: [`RgbaValue`], an 8-bit-per-channel color with alpha.
//! - **Alpha accessors**: [`color_get_a`] and [`color_set_a`], which never mutate
//!   their input.
//! - **Parsing**: `#RRGGBB` / `#RRGGBBAA` hex strings via [`parse_hex_color`].
//!
//! [`RgbaValue`]: crate::RgbaValue
//! [`color_get_a`]: crate::color_get_a
//! [`color_set_a`]: crate::color_set_a
//! [`parse_hex_color`]: crate::parse_hex_color

// Attach.
mod hex_color_parser;
mod rgba_value;

// Re-export.
pub use hex_color_parser::*;
pub use rgba_value::*;
