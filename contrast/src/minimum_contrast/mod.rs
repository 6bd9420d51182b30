// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Public entry points: pick a readable foreground color
//! ([`get_color_with_minimum_contrast`]) or just the blend amount
//! ([`get_blend_value_with_minimum_contrast`]). [`ContrastConfig`] exposes the same
//! operations with a different ratio, anchors or search tolerance.
//!
//! [`get_color_with_minimum_contrast`]: crate::get_color_with_minimum_contrast
//! [`get_blend_value_with_minimum_contrast`]: crate::get_blend_value_with_minimum_contrast
//! [`ContrastConfig`]: crate::ContrastConfig

// Attach.
mod contrast_config;
mod minimum_contrast_api;

// Re-export.
pub use contrast_config::*;
pub use minimum_contrast_api::*;
