// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::{cursor::Show,
                event::{DisableMouseCapture, EnableMouseCapture},
                terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}};
use miette::IntoDiagnostic;

use crate::{CommonResult, queue_terminal_command};

/// Puts the terminal in raw mode, switches to the alternate screen and turns on mouse
/// capture. All of it is undone by [`RawMode::end`], or on drop, so the terminal is
/// restored even when the event loop bails out with an error.
#[derive(Debug)]
pub struct RawMode {
    is_active: bool,
}

impl RawMode {
    /// # Errors
    ///
    /// Returns an error if raw mode can't be enabled (eg: stdin is not a terminal).
    pub fn start() -> CommonResult<Self> {
        terminal::enable_raw_mode().into_diagnostic()?;
        let mut stdout = std::io::stdout();
        queue_terminal_command!(
            &mut stdout,
            "RawMode::start",
            EnterAlternateScreen,
            EnableMouseCapture,
            Show,
        );
        std::io::Write::flush(&mut stdout).into_diagnostic()?;
        tracing::debug!(message = "raw mode started");
        Ok(Self { is_active: true })
    }

    pub fn end(&mut self) {
        if !self.is_active {
            return;
        }
        self.is_active = false;
        let mut stdout = std::io::stdout();
        queue_terminal_command!(
            &mut stdout,
            "RawMode::end",
            DisableMouseCapture,
            LeaveAlternateScreen,
            Show,
        );
        if let Err(err) = std::io::Write::flush(&mut stdout) {
            tracing::error!(message = "could not flush stdout", error = %err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::error!(message = "could not disable raw mode", error = %err);
        }
        tracing::debug!(message = "raw mode ended");
    }
}

impl Drop for RawMode {
    fn drop(&mut self) { self.end(); }
}
