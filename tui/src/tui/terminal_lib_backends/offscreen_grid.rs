// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

use crate::{CellAttr, ColorPairId, CommonResult, Rgb1000, Size, TerminalBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub ch: char,
    pub attr: CellAttr,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attr: CellAttr::Plain,
        }
    }
}

/// An in memory [`TerminalBackend`]. Paints into a grid of cells that tests can inspect,
/// and counts how often each row was painted, so partial redraw can be verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffscreenGrid {
    size: Size,
    cells: Vec<Vec<GridCell>>,
    cursor: (usize, usize),
    colors: HashMap<ColorPairId, Rgb1000>,
    row_paint_counts: Vec<usize>,
    flush_count: usize,
}

impl OffscreenGrid {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cells: vec![vec![GridCell::default(); size.col_width]; size.row_height],
            cursor: (0, 0),
            colors: HashMap::new(),
            row_paint_counts: vec![0; size.row_height],
            flush_count: 0,
        }
    }

    /// Simulate a terminal resize. Contents are discarded.
    pub fn resize(&mut self, size: Size) {
        let colors = std::mem::take(&mut self.colors);
        *self = Self {
            colors,
            ..Self::new(size)
        };
    }

    /// The row with trailing blanks trimmed.
    #[must_use]
    pub fn row_as_string(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|it| it.iter().map(|cell| cell.ch).collect::<String>())
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        self.cells.get(row).and_then(|it| it.get(col)).copied()
    }

    #[must_use]
    pub fn cursor(&self) -> (usize, usize) { self.cursor }

    #[must_use]
    pub fn registered_color(&self, id: ColorPairId) -> Option<Rgb1000> {
        self.colors.get(&id).copied()
    }

    #[must_use]
    pub fn registered_color_count(&self) -> usize { self.colors.len() }

    /// How many times `row` was touched (put or clear) since the last
    /// [`OffscreenGrid::reset_paint_counts`].
    #[must_use]
    pub fn row_paint_count(&self, row: usize) -> usize {
        self.row_paint_counts.get(row).copied().unwrap_or_default()
    }

    pub fn reset_paint_counts(&mut self) { self.row_paint_counts.fill(0); }

    #[must_use]
    pub fn flush_count(&self) -> usize { self.flush_count }

    fn touch_row(&mut self, row: usize) {
        if let Some(count) = self.row_paint_counts.get_mut(row) {
            *count += 1;
        }
    }
}

impl TerminalBackend for OffscreenGrid {
    fn size(&self) -> Size { self.size }

    fn put_char(&mut self, row: usize, col: usize, ch: char, attr: CellAttr) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|it| it.get_mut(col)) {
            *cell = GridCell { ch, attr };
        }
    }

    fn put_str(&mut self, row: usize, col: usize, text: &str, attr: CellAttr) {
        self.touch_row(row);
        for (offset, ch) in text.chars().enumerate() {
            self.put_char(row, col + offset, ch, attr);
        }
    }

    fn clear_row(&mut self, row: usize) {
        self.touch_row(row);
        if let Some(it) = self.cells.get_mut(row) {
            it.fill(GridCell::default());
        }
    }

    fn move_cursor(&mut self, row: usize, col: usize) { self.cursor = (row, col); }

    fn register_color_pair(&mut self, id: ColorPairId, fg: Rgb1000) -> CellAttr {
        self.colors.insert(id, fg);
        CellAttr::ColorPair(id)
    }

    fn flush(&mut self) -> CommonResult<()> {
        self.flush_count += 1;
        Ok(())
    }
}
