// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod renderer;
pub mod status_line;

// Re-export.
pub use renderer::*;
pub use status_line::*;
