// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # quill_tui
//!
//! The core of the `quill` terminal editor. It is split into two layers.
//!
//! - [`core`] has the ambient pieces that every other module leans on: the
//!   [`CommonResult`] error plumbing (built on [miette]), `tracing` subscriber setup,
//!   declarative macros, small stack allocated collection aliases and test fixtures.
//! - [`tui`] has the editor itself:
//!   1. [`LineBuffer`] owns the lines, the caret and the scroll offset. All mutation
//!      goes through it and every mutation marks [`DirtyLines`].
//!   2. [`EditorHistory`] keeps bounded undo / redo stacks of [`EditorContent`]
//!      snapshots.
//!   3. [`parse_syntax_definitions`] reads the syntax rule language into
//!      [`SyntaxDefinitions`], and [`Highlighter`] turns a visible line into
//!      [`StyledRun`]s (search overlay first, then boundary checked tokens).
//!   4. [`Renderer`] redraws only the dirty rows onto a [`TerminalBackend`] (crossterm
//!      for real terminals, [`OffscreenGrid`] for tests).
//!   5. [`EditorSession`] owns all of the above and turns [`EditorEvent`]s into
//!      operations. There are no globals.
//!
//! The main event loop is single threaded and synchronous: one blocking read of the
//! next input event, which is fully processed (mutate, mark dirty, redraw) before the
//! next read.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod tui;

// Re-export.
pub use core::*;
pub use tui::*;
