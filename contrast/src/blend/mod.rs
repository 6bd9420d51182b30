// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod alpha_blend;

// Re-export.
pub use alpha_blend::*;
