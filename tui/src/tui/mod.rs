// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod editor;
pub mod render;
pub mod session;
pub mod syntax_highlighting;
pub mod terminal_lib_backends;

// Re-export.
pub use editor::*;
pub use render::*;
pub use session::*;
pub use syntax_highlighting::*;
pub use terminal_lib_backends::*;
