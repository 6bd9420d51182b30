// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Recoverable errors. These only come from parsing untrusted input at the edges of
//! the crate (slices, hex strings, JSON config). Broken preconditions inside the color
//! math are caller bugs and are checked with [`debug_assert!`] instead.

/// Type alias to make it easy to work with [`Result`]s that carry a [`ContrastError`].
pub type CommonResult<T> = Result<T, ContrastError>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ContrastError {
    /// A color slice must hold 3 (RGB) or 4 (RGBA) channels.
    #[error("Color must have 3 or 4 channels, got {len}")]
    #[diagnostic(
        code(r3bl_contrast::color::invalid_channel_count),
        help("Pass [r, g, b] for an opaque color or [r, g, b, a] for a translucent one.")
    )]
    InvalidChannelCount { len: usize },

    #[error("Invalid hex color format: {input:?}")]
    #[diagnostic(
        code(r3bl_contrast::color::invalid_hex_color),
        help("Use `#RRGGBB` or `#RRGGBBAA`, eg: `#202124` or `#20212480`.")
    )]
    InvalidHexColor { input: String },

    #[error("Failed to parse contrast config")]
    #[diagnostic(code(r3bl_contrast::config::invalid_json))]
    InvalidConfig {
        #[from]
        source: serde_json::Error,
    },

    /// WCAG contrast ratios live in `[1.0, 21.0]`, anything else can never be met (or
    /// is always met) and points at a typo in the config.
    #[error("Minimum contrast ratio {min_ratio} is outside [1.0, 21.0]")]
    #[diagnostic(
        code(r3bl_contrast::config::min_ratio_out_of_range),
        help("WCAG AA body text uses 4.5, AA large text uses 3.0, AAA uses 7.0.")
    )]
    MinRatioOutOfRange { min_ratio: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn test_error_has_diagnostic_code() {
        let error = ContrastError::InvalidChannelCount { len: 5 };
        assert_eq!(error.to_string(), "Color must have 3 or 4 channels, got 5");
        let code = error.code().map(|it| it.to_string());
        assert_eq!(
            code.as_deref(),
            Some("r3bl_contrast::color::invalid_channel_count")
        );
        assert!(error.help().is_some());
    }

    #[test]
    fn test_serde_error_converts() {
        let result: Result<u8, _> = serde_json::from_str("not json");
        let error: ContrastError = result.unwrap_err().into();
        assert!(matches!(error, ContrastError::InvalidConfig { .. }));
        assert!(std::error::Error::source(&error).is_some());
    }
}
