// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Include.
pub mod clap_config;
pub mod launcher;
pub mod ui_str;

// Reexport.
pub use clap_config::*;
pub use launcher::*;
pub use ui_str::*;
