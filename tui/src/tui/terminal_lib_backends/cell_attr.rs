// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ColorPairId;

/// How a cell is painted. Backends decide what each variant looks like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellAttr {
    #[default]
    Plain,
    /// Foreground color registered with [`crate::TerminalBackend::register_color_pair`].
    ColorPair(ColorPairId),
    /// Black on yellow.
    SearchMatch,
}

/// Size of the terminal window, in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub col_width: usize,
    pub row_height: usize,
}

impl Size {
    #[must_use]
    pub fn new(col_width: usize, row_height: usize) -> Self { Self { col_width, row_height } }
}

/// Used when the terminal can't tell us its size.
pub const FALLBACK_SIZE: Size = Size {
    col_width: 80,
    row_height: 24,
};
