// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # quill
//!
//! A small terminal text editor built on [`quill_tui`].
//!
//! ```text
//! quill [file path] [--settings <file>] [--syntax <file>] [-l] [--log-level <level>]
//! ```
//!
//! - Bare file names typed into the open and save prompts live in `saves/`.
//! - `settings.config` and `highlight.syntax` are read from the current directory
//!   unless other paths are given.
//! - Press `Ctrl+H` (or `F1`) inside the editor to see every key binding.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

pub mod quill;
