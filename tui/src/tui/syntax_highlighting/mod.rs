// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod active_syntax;
pub mod color_registry;
pub mod highlighter;
pub mod syntax_parser;
pub mod token_lookup;

// Re-export.
pub use active_syntax::*;
pub use color_registry::*;
pub use highlighter::*;
pub use syntax_parser::*;
pub use token_lookup::*;
