// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Partial redraw
//!
//! Each call to [`Renderer::render`] paints one frame:
//! 1. Work out the [`Layout`] for the current terminal size. If it changed since the last
//!    frame (resize, gutter or shell panel toggled), every line is marked dirty.
//! 2. Scroll so that the caret is visible.
//! 3. Repaint only the text area rows whose line is dirty. Rows past the end of the
//!    buffer are cleared.
//! 4. Clear the [`crate::DirtyLines`].
//! 5. Always repaint the status line and the shell panel (when open), then place the
//!    cursor and flush.

use crate::{CellAttr, CommonResult, GUTTER_WIDTH, Highlighter, LineBuffer, SHELL_PANEL_HEADER,
            SHELL_PANEL_HEIGHT, ShellPanel, Size, TerminalBackend};

/// Where things go on screen for a given terminal size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Layout {
    pub size: Size,
    pub text_rows: usize,
    pub text_cols: usize,
    pub gutter_width: usize,
    pub status_row: usize,
    pub shell_panel_top: Option<usize>,
}

impl Layout {
    #[must_use]
    pub fn new(size: Size, show_line_numbers: bool, shell_panel_open: bool) -> Self {
        let panel_height = if shell_panel_open { SHELL_PANEL_HEIGHT } else { 0 };
        let text_rows = size.row_height.saturating_sub(panel_height + 1);
        let gutter_width = if show_line_numbers { GUTTER_WIDTH } else { 0 };
        Self {
            size,
            text_rows,
            text_cols: size.col_width.saturating_sub(gutter_width),
            gutter_width,
            status_row: text_rows,
            shell_panel_top: shell_panel_open
                .then_some(size.row_height.saturating_sub(SHELL_PANEL_HEIGHT)),
        }
    }
}

/// Everything a frame is painted from. The buffer is borrowed mutably so the renderer can
/// scroll it and clear its dirty lines.
#[derive(Debug)]
pub struct Frame<'a> {
    pub buffer: &'a mut LineBuffer,
    pub highlighter: Highlighter<'a>,
    pub show_line_numbers: bool,
    pub status_text: &'a str,
    pub shell_panel: Option<&'a ShellPanel>,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    last_layout: Option<Layout>,
}

fn clip(text: &str, width: usize) -> String { text.chars().take(width).collect() }

impl Renderer {
    /// Compute the layout for `backend`'s current size. Used to map mouse clicks.
    #[must_use]
    pub fn layout_for(
        backend: &dyn TerminalBackend,
        show_line_numbers: bool,
        shell_panel_open: bool,
    ) -> Layout {
        Layout::new(backend.size(), show_line_numbers, shell_panel_open)
    }

    /// Paint one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to flush.
    pub fn render(
        &mut self,
        frame: Frame<'_>,
        backend: &mut dyn TerminalBackend,
    ) -> CommonResult<()> {
        let Frame {
            buffer,
            highlighter,
            show_line_numbers,
            status_text,
            shell_panel,
        } = frame;

        let layout = Self::layout_for(backend, show_line_numbers, shell_panel.is_some());
        if self.last_layout != Some(layout) {
            buffer.mark_all_dirty();
            self.last_layout = Some(layout);
        }

        buffer.scroll_to_caret(layout.text_rows, layout.text_cols);
        let scr_ofs = buffer.scr_ofs();

        for screen_row in 0..layout.text_rows {
            let line_index = scr_ofs.row_index + screen_row;
            match buffer.line(line_index) {
                Some(line) => {
                    if buffer.dirty().is_dirty(line_index) {
                        paint_line(
                            backend,
                            &layout,
                            &highlighter,
                            (screen_row, line_index),
                            line,
                            scr_ofs.col_index,
                        );
                    }
                }
                None => backend.clear_row(screen_row),
            }
        }
        buffer.dirty_mut().clear();

        if layout.status_row < layout.size.row_height {
            backend.clear_row(layout.status_row);
            backend.put_str(
                layout.status_row,
                0,
                &clip(status_text, layout.size.col_width),
                CellAttr::Plain,
            );
        }

        if let (Some(panel), Some(top)) = (shell_panel, layout.shell_panel_top) {
            paint_shell_panel(backend, &layout, panel, top);
        }

        let caret = buffer.caret();
        if caret.row_index >= scr_ofs.row_index
            && caret.row_index < scr_ofs.row_index + layout.text_rows
        {
            backend.move_cursor(
                caret.row_index - scr_ofs.row_index,
                caret.col_index.saturating_sub(scr_ofs.col_index) + layout.gutter_width,
            );
        }

        backend.flush()
    }
}

fn paint_line(
    backend: &mut dyn TerminalBackend,
    layout: &Layout,
    highlighter: &Highlighter<'_>,
    (screen_row, line_index): (usize, usize),
    line: &[char],
    col_offset: usize,
) {
    backend.clear_row(screen_row);

    if layout.gutter_width > 0 {
        let gutter = format!("{:4} | ", line_index + 1);
        backend.put_str(
            screen_row,
            0,
            &clip(&gutter, layout.size.col_width),
            CellAttr::Plain,
        );
    }

    let mut col = layout.gutter_width;
    for run in highlighter.highlight_line(line, col_offset, layout.text_cols) {
        backend.put_str(screen_row, col, &run.text, run.attr);
        col += run.text.chars().count();
    }
}

fn paint_shell_panel(
    backend: &mut dyn TerminalBackend,
    layout: &Layout,
    panel: &ShellPanel,
    top: usize,
) {
    let width = layout.size.col_width;
    backend.clear_row(top);
    backend.put_str(top, 0, &clip(SHELL_PANEL_HEADER, width), CellAttr::Plain);

    let mut output = panel.lines().iter();
    for row in (top + 1)..layout.size.row_height {
        backend.clear_row(row);
        if let Some(line) = output.next() {
            backend.put_str(row, 0, &clip(line, width), CellAttr::Plain);
        }
    }
}
