// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Luminance and contrast math, as defined by
//! <https://www.w3.org/TR/WCAG20/#relativeluminancedef> and
//! <https://www.w3.org/TR/WCAG20/#contrast-ratiodef>.

// Attach.
mod contrast_ratio;
mod relative_luminance;
mod wcag_level;

// Re-export.
pub use contrast_ratio::*;
pub use relative_luminance::*;
pub use wcag_level::*;
