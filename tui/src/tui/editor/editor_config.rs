// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const DEFAULT_MAX_LINE_LEN: usize = 1023;
pub const DEFAULT_MAX_LINE_COUNT: usize = 1000;
pub const DEFAULT_UNDO_STACK_SIZE: usize = 100;

/// Width of the line number gutter, eg: `"   1 | "` plus one spare column.
pub const GUTTER_WIDTH: usize = 8;

/// Caps on the size of a [`crate::LineBuffer`]. Edits that would exceed them are silent
/// no-ops (or truncations, when two lines are merged).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLimits {
    pub max_line_len: usize,
    pub max_line_count: usize,
}

impl Default for BufferLimits {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            max_line_count: DEFAULT_MAX_LINE_COUNT,
        }
    }
}

/// Everything that `settings.config` can change. See [`crate::parse_settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    pub tab_four_spaces: bool,
    pub auto_indent: bool,
    pub show_line_numbers: bool,
    pub undo_stack_size: usize,
    pub limits: BufferLimits,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_four_spaces: true,
            auto_indent: true,
            show_line_numbers: true,
            undo_stack_size: DEFAULT_UNDO_STACK_SIZE,
            limits: BufferLimits::default(),
        }
    }
}
