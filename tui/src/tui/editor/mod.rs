// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod dirty_lines;
pub mod editor_config;
pub mod history;
pub mod line_buffer;

// Re-export.
pub use dirty_lines::*;
pub use editor_config::*;
pub use history::*;
pub use line_buffer::*;
