// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CellAttr, ColorPairId, CommonResult, Rgb1000, Size};

/// Every char takes exactly one cell. Control chars (eg: `\t`) would move the terminal's
/// cursor instead, so they are shown as a blank.
#[must_use]
pub fn display_char(ch: char) -> char { if ch.is_control() { ' ' } else { ch } }

/// Everything the [`crate::Renderer`] needs from a character cell display. Rows and
/// columns are 0-based, with (0, 0) in the top left corner.
///
/// Painting is best effort: writes outside the display are ignored, and backend errors
/// are logged rather than returned. Only [`TerminalBackend::flush`] reports failure.
pub trait TerminalBackend {
    fn size(&self) -> Size;

    fn put_char(&mut self, row: usize, col: usize, ch: char, attr: CellAttr);

    fn put_str(&mut self, row: usize, col: usize, text: &str, attr: CellAttr) {
        for (offset, ch) in text.chars().enumerate() {
            self.put_char(row, col + offset, ch, attr);
        }
    }

    /// Blank out a whole row.
    fn clear_row(&mut self, row: usize);

    fn move_cursor(&mut self, row: usize, col: usize);

    /// Make `fg` available as a foreground color under `id`. Registering the same id
    /// again replaces the color.
    fn register_color_pair(&mut self, id: ColorPairId, fg: Rgb1000) -> CellAttr;

    /// # Errors
    ///
    /// Returns an error if the output can't be written.
    fn flush(&mut self) -> CommonResult<()>;
}
