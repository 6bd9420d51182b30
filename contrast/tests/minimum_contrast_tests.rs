// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end checks of the public API, using only what a downstream crate can see.

use std::{io::Write,
          sync::{Arc, Mutex}};

use pretty_assertions::assert_eq;
use r3bl_contrast::{BlendSearchResult, RgbaValue, alpha_blend, color_get_a, color_set_a,
                    get_blend_value_with_minimum_contrast, get_color_with_minimum_contrast,
                    get_contrast_ratio, search_blend_value_for_contrast_ratio};
use test_case::test_case;
use tracing::subscriber::set_default;
use tracing_subscriber::fmt::SubscriberBuilder;

const MIN_READABLE_CONTRAST_RATIO: f64 = 4.5;

#[test]
fn color_set_a_keeps_input() {
    let color = [1, 2, 3];
    assert_eq!(color_set_a(color, 128), RgbaValue::from([1, 2, 3, 128]));
    assert_eq!(color, [1, 2, 3]);
}

#[test]
fn color_get_a_defaults_to_opaque() {
    assert_eq!(color_get_a([1, 2, 3, 128]), 128);
    assert_eq!(color_get_a([1, 2, 3]), 255);
}

#[test]
fn alpha_blend_identities_and_translucency() {
    let fore = [200, 200, 200, 255];
    let back = [100, 100, 100, 255];
    assert_eq!(alpha_blend(fore, back, 0), RgbaValue::from(back));
    assert_eq!(alpha_blend(fore, back, 255), RgbaValue::from(fore));

    let back_transparent = color_set_a(back, 0);
    assert_eq!(color_get_a(alpha_blend(fore, back_transparent, 136)), 136);

    let fore_transparent = color_set_a(fore, 0);
    assert_eq!(
        color_get_a(alpha_blend(fore_transparent, back_transparent, 255)),
        0
    );
}

#[test]
fn foreground_already_meets_minimum() {
    assert_eq!(
        get_color_with_minimum_contrast([0, 0, 0], [255, 255, 255]),
        RgbaValue::from([0, 0, 0])
    );
}

#[test_case([0xaa, 0xaa, 0xaa], [0xff, 0xff, 0xff] ; "blend darker")]
#[test_case([0x33, 0x33, 0x33], [0x00, 0x00, 0x00] ; "blend lighter")]
fn blend_reaches_minimum(foreground: [u8; 3], background: [u8; 3]) {
    let result = get_color_with_minimum_contrast(foreground, background);
    assert_ne!(result, RgbaValue::from(foreground));
    assert!(get_contrast_ratio(result, background) >= MIN_READABLE_CONTRAST_RATIO);
}

/// The search works on integer mix values with a tolerance of 4, so the returned
/// fraction lands a little below the ideal one.
#[test_case(1.11, 0.4, 0.01)]
#[test_case(1.19, 0.65, 0.05)]
#[test_case(1.13728, 0.45, 0.05)]
fn blend_value_precision(contrast_ratio: f64, expected: f64, tolerance: f64) {
    let source = [0xde, 0xe1, 0xe6];
    let target = [0xff, 0xff, 0xff];
    let base = source;
    let mix = get_blend_value_with_minimum_contrast(source, target, base, contrast_ratio);
    let fraction = f64::from(mix) / 255.0;
    assert!(
        (fraction - expected).abs() <= tolerance,
        "mix: {mix}, fraction: {fraction}, expected: {expected}"
    );
}

#[test]
fn unreachable_ratio_returns_255() {
    let gray = [0x80, 0x80, 0x80];
    let mix = get_blend_value_with_minimum_contrast(gray, [0xff, 0xff, 0xff], gray, 21.0);
    assert_eq!(mix, 255);
}

#[derive(Clone, Debug, Default)]
struct LogBufferMock {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogBufferMock {
    fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
    }
}

impl Write for LogBufferMock {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

#[test]
fn search_emits_trace_events() {
    let log_buffer = LogBufferMock::default();
    let log_buffer_clone = log_buffer.clone();
    let subscriber = SubscriberBuilder::default()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || log_buffer_clone.clone())
        .finish();

    // Note that tests, or libraries for that matter, should NOT call
    // `subscriber::set_global_default()`.
    let _drop_guard = set_default(subscriber);

    let source = [0xde, 0xe1, 0xe6];
    let result = search_blend_value_for_contrast_ratio(source, [0xff, 0xff, 0xff], source, 1.19, 4);
    assert_eq!(result, BlendSearchResult::Reached { mix: 160 });

    let it = log_buffer.get_copy_of_buffer_as_string();
    assert_eq!(it.matches("contrast search probe").count(), 6);
    assert!(it.contains("contrast search done"));
    assert!(it.contains("source=#dee1e6"));
}
