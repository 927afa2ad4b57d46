// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod editor_session;
pub mod file_io;
pub mod prompt;
pub mod settings;
pub mod shell_panel;

// Re-export.
pub use editor_session::*;
pub use file_io::*;
pub use prompt::*;
pub use settings::*;
pub use shell_panel::*;
