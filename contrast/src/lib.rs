// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_contrast
//!
//! Picks a text color that stays readable on a given background.
//!
//! Given a desired foreground and an opaque background, the crate works out how far
//! the foreground has to be blended toward white (for dark backgrounds) or toward
//! near-black `#202124` (for light backgrounds) so that the result reaches a WCAG
//! contrast ratio of at least 4.5:1. If the foreground is already readable it is
//! returned unchanged.
//!
//! ```
//! use r3bl_contrast::{RgbaValue, get_color_with_minimum_contrast, get_contrast_ratio};
//!
//! let background = RgbaValue::WHITE;
//! let foreground = get_color_with_minimum_contrast([0xaa, 0xaa, 0xaa], background);
//! assert!(get_contrast_ratio(foreground, background) >= 4.5);
//! ```
//!
//! # Layout
//!
//! Leaf first, each layer only calls into the ones above it in this list:
//!
//! 1. [`color`]: the [`RgbaValue`] type, alpha accessors, hex parsing.
//! 2. [`luminance`]: sRGB linearization, relative luminance, contrast ratio.
//! 3. [`blend`]: source-over compositing of two possibly translucent colors.
//! 4. [`search`]: binary search over the blend weight for a target contrast.
//! 5. [`minimum_contrast`]: the public entry points and [`ContrastConfig`].
//!
//! Everything is a pure function over [`Copy`] values, so it is safe to call from
//! any number of threads.
//!
//! # Preconditions
//!
//! Colors that must be opaque (the background, and every color on the search path)
//! are checked with [`debug_assert!`]. Passing a translucent color there is a caller
//! bug and panics in debug and test builds. Parsing untrusted input (slices, hex
//! strings, JSON config) returns a [`ContrastError`] instead.
//!
//! [`RgbaValue`]: crate::RgbaValue
//! [`ContrastConfig`]: crate::ContrastConfig
//! [`ContrastError`]: crate::ContrastError

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod blend;
pub mod color;
pub mod common;
pub mod luminance;
pub mod minimum_contrast;
pub mod search;

// Re-export.
pub use blend::*;
pub use color::*;
pub use common::*;
pub use luminance::*;
pub use minimum_contrast::*;
pub use search::*;
