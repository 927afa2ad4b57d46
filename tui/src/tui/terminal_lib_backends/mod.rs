// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod cell_attr;
pub mod crossterm_backend;
pub mod input_event;
pub mod offscreen_grid;
pub mod raw_mode;
pub mod terminal_backend;

// Re-export.
pub use cell_attr::*;
pub use crossterm_backend::*;
pub use input_event::*;
pub use offscreen_grid::*;
pub use raw_mode::*;
pub use terminal_backend::*;
