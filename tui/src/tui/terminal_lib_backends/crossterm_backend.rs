// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow,
          collections::HashMap,
          io::{Stdout, Write}};

use crossterm::{cursor::MoveTo,
                style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic;

use crate::{CellAttr, ColorPairId, CommonResult, FALLBACK_SIZE, Rgb1000, Size,
            TerminalBackend, display_char};

/// Set to `true` to log every crossterm command that gets queued.
pub const DEBUG_SHOW_TERMINAL_BACKEND: bool = false;

#[macro_export]
macro_rules! queue_terminal_command {
    ($writer: expr, $arg_log_msg: expr $(, $command: expr)* $(,)?) => {{
        use ::crossterm::QueueableCommand;
        $(
            $crate::crossterm_op!(
                $arg_log_msg,
                QueueableCommand::queue($writer, $command),
                "crossterm: ✅ Succeeded",
                "crossterm: ❌ Failed"
            );
        )*
    }};
}

#[macro_export]
macro_rules! crossterm_op {
    (
        $arg_log_msg:expr, // Log message.
        $op:expr,          // The crossterm operation to perform.
        $success_msg:expr, // Success log message.
        $error_msg:expr    // Error log message.
    ) => {{
        use $crate::DEBUG_SHOW_TERMINAL_BACKEND;

        match $op {
            Ok(_) => {
                DEBUG_SHOW_TERMINAL_BACKEND.then(|| {
                    // % is Display, ? is Debug.
                    tracing::info!(
                        message = $success_msg,
                        details = %$arg_log_msg
                    );
                });
            }
            Err(err) => {
                // % is Display, ? is Debug.
                tracing::error!(
                    message = $error_msg,
                    details = %$arg_log_msg,
                    error = %err,
                );
            }
        }
    }};
}

fn u16_saturating(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }

/// Paints by queueing crossterm commands on a writer (stdout by default). Nothing shows
/// up until [`TerminalBackend::flush`]. Raw mode and the alternate screen are handled by
/// [`crate::RawMode`].
#[derive(Debug)]
pub struct CrosstermBackend<W: Write = Stdout> {
    writer: W,
    colors: HashMap<ColorPairId, Color>,
}

impl Default for CrosstermBackend<Stdout> {
    fn default() -> Self { Self::new(std::io::stdout()) }
}

impl<W: Write> CrosstermBackend<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            colors: HashMap::new(),
        }
    }

    pub fn writer(&self) -> &W { &self.writer }

    fn apply_attr(&mut self, attr: CellAttr) {
        match attr {
            CellAttr::Plain => {}
            CellAttr::ColorPair(id) => {
                if let Some(color) = self.colors.get(&id).copied() {
                    queue_terminal_command!(
                        &mut self.writer,
                        "ApplyAttr -> SetFgColor",
                        SetForegroundColor(color),
                    );
                }
            }
            CellAttr::SearchMatch => {
                queue_terminal_command!(
                    &mut self.writer,
                    "ApplyAttr -> SearchMatch",
                    SetForegroundColor(Color::Black),
                    SetBackgroundColor(Color::Yellow),
                );
            }
        }
    }
}

impl<W: Write> TerminalBackend for CrosstermBackend<W> {
    fn size(&self) -> Size {
        match crossterm::terminal::size() {
            Ok((cols, rows)) => Size::new(usize::from(cols), usize::from(rows)),
            Err(err) => {
                tracing::warn!(message = "could not read terminal size", error = %err);
                FALLBACK_SIZE
            }
        }
    }

    fn put_char(&mut self, row: usize, col: usize, ch: char, attr: CellAttr) {
        let mut buf = [0_u8; 4];
        self.put_str(row, col, ch.encode_utf8(&mut buf), attr);
    }

    fn put_str(&mut self, row: usize, col: usize, text: &str, attr: CellAttr) {
        if text.is_empty() {
            return;
        }
        queue_terminal_command!(
            &mut self.writer,
            "PutStr -> MoveTo",
            MoveTo(u16_saturating(col), u16_saturating(row)),
        );
        let text: Cow<'_, str> = if text.chars().any(char::is_control) {
            Cow::Owned(text.chars().map(display_char).collect())
        } else {
            Cow::Borrowed(text)
        };
        self.apply_attr(attr);
        queue_terminal_command!(&mut self.writer, "PutStr -> Print", Print(&text));
        if attr != CellAttr::Plain {
            queue_terminal_command!(&mut self.writer, "PutStr -> ResetColor", ResetColor);
        }
    }

    fn clear_row(&mut self, row: usize) {
        queue_terminal_command!(
            &mut self.writer,
            "ClearRow",
            MoveTo(0, u16_saturating(row)),
            Clear(ClearType::CurrentLine),
        );
    }

    fn move_cursor(&mut self, row: usize, col: usize) {
        queue_terminal_command!(
            &mut self.writer,
            "MoveCursor",
            MoveTo(u16_saturating(col), u16_saturating(row)),
        );
    }

    fn register_color_pair(&mut self, id: ColorPairId, fg: Rgb1000) -> CellAttr {
        let rgb = fg.to_rgb();
        self.colors.insert(
            id,
            Color::Rgb {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            },
        );
        CellAttr::ColorPair(id)
    }

    fn flush(&mut self) -> CommonResult<()> { self.writer.flush().into_diagnostic() }
}
