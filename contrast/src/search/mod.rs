// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod find_blend_value;

// Re-export.
pub use find_blend_value::*;
