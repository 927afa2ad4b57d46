// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::process::{Command, Stdio};

/// Rows taken from the bottom of the terminal when the panel is open, header included.
pub const SHELL_PANEL_HEIGHT: usize = 10;

pub const SHELL_PANEL_HEADER: &str =
    "=== Shell Panel (Ctrl+W to close, Ctrl+E to run cmd) ===";

pub const MAX_SHELL_OUTPUT_LINES: usize = 256;

/// Output of the last shell command. Only stdout is captured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellPanel {
    lines: Vec<String>,
}

impl ShellPanel {
    #[must_use]
    pub fn lines(&self) -> &[String] { &self.lines }

    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.lines.truncate(MAX_SHELL_OUTPUT_LINES);
    }

    /// Run `cmd` through `sh -c` and replace the panel contents with its stdout lines.
    /// If the process can't be spawned, the panel shows a single error line instead.
    pub fn run_command(&mut self, cmd: &str) {
        tracing::info!(message = "running shell command", cmd = cmd);

        let result = Command::new("sh")
            .arg("-c")
            .arg(cmd)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        let lines = match result {
            Ok(output) => {
                tracing::debug!(
                    message = "shell command finished",
                    status = %output.status,
                    bytes = output.stdout.len()
                );
                String::from_utf8_lossy(&output.stdout)
                    .lines()
                    .map(String::from)
                    .collect()
            }
            Err(err) => {
                tracing::warn!(message = "failed to spawn shell command", cmd = cmd, %err);
                vec![format!("Error running command: {err}")]
            }
        };

        self.set_lines(lines);
    }
}
