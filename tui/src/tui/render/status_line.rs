// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Pos;

pub const QUILL_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const UNTITLED: &str = "Untitled";

pub const HELP_TEXT: &str = "[HELP] Ctrl+Q:Quit  Ctrl+S:Save  Ctrl+O:Open  Ctrl+Z:Undo  \
                             Ctrl+Y:Redo  Ctrl+G:Goto  Ctrl+F:Search  Ctrl+R:Replace  \
                             Ctrl+W:ShellPanel  Ctrl+E:ShellCmd  Ctrl+H:HideHelp  \
                             Ctrl+D:DupLine  Ctrl+K:KillLine  Ctrl+T:ToggleLN  Ctrl+U:Top  \
                             Ctrl+L:Bottom";

/// What the bottom (status) line shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusInfo<'a> {
    pub file_name: Option<&'a str>,
    pub caret: Pos,
    pub modified: bool,
    pub show_help: bool,
    /// One shot message, eg: the result of a save. Wins over everything else.
    pub message: Option<&'a str>,
}

impl StatusInfo<'_> {
    /// Line and column are shown 1-based.
    #[must_use]
    pub fn compose(&self) -> String {
        if let Some(message) = self.message {
            return message.to_string();
        }
        if self.show_help {
            return HELP_TEXT.to_string();
        }
        format!(
            "[quill v{QUILL_VERSION}] File: {name} | Ln: {ln}, Col: {col}{modified} (Press Ctrl+H for help)",
            name = self.file_name.unwrap_or(UNTITLED),
            ln = self.caret.row_index + 1,
            col = self.caret.col_index + 1,
            modified = if self.modified { " [Modified]" } else { "" },
        )
    }
}
