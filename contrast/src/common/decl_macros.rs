// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Debug-only check that a color is fully opaque. The contrast math is only defined
/// for opaque backgrounds, so a translucent color here is a caller bug.
///
/// ```should_panic
/// use r3bl_contrast::{RgbaValue, debug_assert_opaque};
/// let translucent = RgbaValue::WHITE.with_alpha(128);
/// debug_assert_opaque!(translucent, "base");
/// ```
#[macro_export]
macro_rules! debug_assert_opaque {
    ($color:expr, $name:literal) => {
        debug_assert!(
            $color.is_opaque(),
            concat!("`", $name, "` must be opaque, got {}"),
            $color
        )
    };
}
