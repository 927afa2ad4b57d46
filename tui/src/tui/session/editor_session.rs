// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use crate::{ActiveSyntax, CommonResult, Continuation, EditorConfig, EditorEvent,
            EditorHistory, FileIoError, Frame, Highlighter, LineBuffer, Prompt, Renderer,
            SAVES_DIR, ShellPanel, StatusInfo, SyntaxDefinitions, TerminalBackend,
            WHEEL_SCROLL_LINES, load_lines, resolve_path_in, save_lines};

pub mod prompt_labels {
    pub const OPEN_FILE: &str = "Open file: ";
    pub const SAVE_AS: &str = "Save as: ";
    pub const GOTO_LINE: &str = "Goto line: ";
    pub const SEARCH_TERM: &str = "Search term: ";
    pub const OLD_TEXT: &str = "Old text: ";
    pub const NEW_TEXT: &str = "New text: ";
    pub const SHELL_COMMAND: &str = "Shell command: ";
}

use prompt_labels::*;

/// All the state of one editing session. There is exactly one owner (the main event
/// loop), which feeds it [`EditorEvent`]s and asks it to [`EditorSession::render`].
#[derive(Debug)]
pub struct EditorSession {
    buffer: LineBuffer,
    history: EditorHistory,
    config: EditorConfig,
    syntax_definitions: SyntaxDefinitions,
    active_syntax: Option<ActiveSyntax>,
    search_term: Vec<char>,
    file_name: Option<String>,
    saves_dir: PathBuf,
    modified: bool,
    show_help: bool,
    show_line_numbers: bool,
    shell_panel: ShellPanel,
    shell_panel_open: bool,
    status_message: Option<String>,
    renderer: Renderer,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default(), SyntaxDefinitions::default())
    }
}

mod accessors {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl EditorSession {
        #[must_use]
        pub fn new(config: EditorConfig, syntax_definitions: SyntaxDefinitions) -> Self {
            Self {
                buffer: LineBuffer::new(config.limits, config.auto_indent),
                history: EditorHistory::new(config.undo_stack_size),
                config,
                syntax_definitions,
                active_syntax: None,
                search_term: vec![],
                file_name: None,
                saves_dir: PathBuf::from(SAVES_DIR),
                modified: false,
                show_help: false,
                show_line_numbers: config.show_line_numbers,
                shell_panel: ShellPanel::default(),
                shell_panel_open: false,
                status_message: None,
                renderer: Renderer::default(),
            }
        }

        /// Where bare file names typed into the open and save prompts are resolved.
        #[must_use]
        pub fn with_saves_dir(mut self, saves_dir: impl Into<PathBuf>) -> Self {
            self.saves_dir = saves_dir.into();
            self
        }

        #[must_use]
        pub fn buffer(&self) -> &LineBuffer { &self.buffer }

        #[must_use]
        pub fn history(&self) -> &EditorHistory { &self.history }

        #[must_use]
        pub fn config(&self) -> &EditorConfig { &self.config }

        #[must_use]
        pub fn active_syntax(&self) -> Option<&ActiveSyntax> { self.active_syntax.as_ref() }

        #[must_use]
        pub fn search_term(&self) -> String { self.search_term.iter().collect() }

        #[must_use]
        pub fn file_name(&self) -> Option<&str> { self.file_name.as_deref() }

        #[must_use]
        pub fn is_modified(&self) -> bool { self.modified }

        #[must_use]
        pub fn is_help_shown(&self) -> bool { self.show_help }

        #[must_use]
        pub fn is_line_numbers_shown(&self) -> bool { self.show_line_numbers }

        #[must_use]
        pub fn shell_panel(&self) -> &ShellPanel { &self.shell_panel }

        #[must_use]
        pub fn is_shell_panel_open(&self) -> bool { self.shell_panel_open }

        #[must_use]
        pub fn status_message(&self) -> Option<&str> { self.status_message.as_deref() }
    }
}

mod file_ops {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl EditorSession {
        /// Replace the buffer with the contents of `path`. History is cleared, the syntax
        /// definition matching the file name is activated, and the session is no longer
        /// modified. On failure the buffer is left alone and the error becomes the status
        /// message.
        ///
        /// # Errors
        ///
        /// Returns the [`FileIoError`] if the file can't be read.
        pub fn load_path(
            &mut self,
            path: &Path,
            backend: &mut dyn TerminalBackend,
        ) -> Result<(), FileIoError> {
            let lines = match load_lines(path) {
                Ok(it) => it,
                Err(err) => {
                    tracing::warn!(message = "load failed", error = %err);
                    self.status_message = Some(err.to_string());
                    return Err(err);
                }
            };

            let path_str = path.display().to_string();
            self.buffer.replace_lines(lines);
            self.history.clear();
            self.modified = false;
            self.activate_syntax(&path_str, backend);
            self.status_message = Some(format!("File loaded from {path_str}"));
            self.file_name = Some(path_str);
            Ok(())
        }

        /// Open the file given on the command line. A file that does not exist yet
        /// starts an empty buffer that will be saved under that name.
        pub fn open_initial_file(&mut self, path: &Path, backend: &mut dyn TerminalBackend) {
            if !path.exists() {
                let path_str = path.display().to_string();
                self.activate_syntax(&path_str, backend);
                self.status_message = Some(format!("New file: {path_str}"));
                self.file_name = Some(path_str);
                return;
            }
            // The error is already shown as the status message.
            self.load_path(path, backend).ok();
        }

        /// Write the buffer to the current file, asking for a name first if there isn't
        /// one. A cancelled prompt does nothing.
        pub fn save(&mut self, backend: &mut dyn TerminalBackend, prompt: &mut dyn Prompt) {
            let is_new_name = self.file_name.is_none();
            let path = match &self.file_name {
                Some(it) => PathBuf::from(it),
                None => {
                    let name = prompt.prompt(SAVE_AS);
                    if name.is_empty() {
                        return;
                    }
                    resolve_path_in(&self.saves_dir, &name)
                }
            };

            let path_str = path.display().to_string();
            match save_lines(&path, self.buffer.lines_as_strings()) {
                Ok(()) => {
                    self.modified = false;
                    self.status_message = Some(format!("File saved as {path_str}"));
                    if is_new_name {
                        self.activate_syntax(&path_str, backend);
                    }
                    self.file_name = Some(path_str);
                }
                Err(err) => {
                    tracing::warn!(message = "save failed", error = %err);
                    self.status_message = Some(err.to_string());
                }
            }
        }

        fn activate_syntax(&mut self, file_name: &str, backend: &mut dyn TerminalBackend) {
            self.active_syntax =
                ActiveSyntax::activate(&self.syntax_definitions, file_name, backend);
            self.buffer.mark_all_dirty();
        }
    }
}

mod event_handling {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl EditorSession {
        /// Process one input event to completion. Prompts (open, save, goto, search,
        /// replace, shell command) block on `prompt`.
        pub fn handle_event(
            &mut self,
            event: EditorEvent,
            backend: &mut dyn TerminalBackend,
            prompt: &mut dyn Prompt,
        ) -> Continuation {
            if !matches!(event, EditorEvent::Resize(_)) {
                self.status_message = None;
            }

            match event {
                EditorEvent::Quit => return Continuation::Stop,
                EditorEvent::Save => self.save(backend, prompt),
                EditorEvent::Open => self.open(backend, prompt),
                EditorEvent::Undo => {
                    if self.history.undo(&mut self.buffer) {
                        self.modified = true;
                    }
                }
                EditorEvent::Redo => {
                    if self.history.redo(&mut self.buffer) {
                        self.modified = true;
                    }
                }
                EditorEvent::GotoLine => self.goto_line(prompt),
                EditorEvent::Search => self.search(prompt),
                EditorEvent::ReplaceAll => self.replace_all(prompt),
                EditorEvent::ToggleShellPanel => {
                    self.shell_panel_open = !self.shell_panel_open;
                    self.buffer.mark_all_dirty();
                }
                EditorEvent::RunShellCommand => self.run_shell_command(prompt),
                EditorEvent::ToggleHelp => {
                    self.show_help = !self.show_help;
                    self.buffer.mark_all_dirty();
                }
                EditorEvent::ToggleLineNumbers => {
                    self.show_line_numbers = !self.show_line_numbers;
                    self.buffer.mark_all_dirty();
                }
                EditorEvent::GotoTop => self.buffer.goto_top(),
                EditorEvent::GotoBottom => self.buffer.goto_bottom(),

                EditorEvent::DuplicateLine => self.edit(LineBuffer::duplicate_line),
                EditorEvent::KillLine => self.edit(LineBuffer::kill_line),
                EditorEvent::InsertChar(ch) => self.edit(|it| it.insert_char(ch)),
                EditorEvent::InsertTab => {
                    let tab_four_spaces = self.config.tab_four_spaces;
                    self.edit(|it| it.insert_tab(tab_four_spaces));
                }
                EditorEvent::InsertNewline => self.edit(LineBuffer::insert_newline),
                EditorEvent::Backspace => self.edit(LineBuffer::delete_before_cursor),
                EditorEvent::Delete => self.edit(LineBuffer::delete_at_cursor),

                EditorEvent::MoveLeft => self.buffer.move_left(),
                EditorEvent::MoveRight => self.buffer.move_right(),
                EditorEvent::MoveUp => self.buffer.move_up(),
                EditorEvent::MoveDown => self.buffer.move_down(),
                EditorEvent::Home => self.buffer.move_home(),
                EditorEvent::End => self.buffer.move_end(),
                EditorEvent::PageUp => self.buffer.page_up(),
                EditorEvent::PageDown => self.buffer.page_down(),
                EditorEvent::MouseClick { row, col } => {
                    let layout = Renderer::layout_for(
                        backend,
                        self.show_line_numbers,
                        self.shell_panel_open,
                    );
                    if row < layout.text_rows {
                        self.buffer.click_at(row, col, layout.gutter_width);
                    }
                }
                EditorEvent::WheelUp => self.buffer.scroll_caret_up(WHEEL_SCROLL_LINES),
                EditorEvent::WheelDown => self.buffer.scroll_caret_down(WHEEL_SCROLL_LINES),
                EditorEvent::Resize(size) => {
                    tracing::debug!(message = "terminal resized", ?size);
                    self.buffer.mark_all_dirty();
                }
            }

            Continuation::Continue
        }

        /// Apply a destructive edit. The state before it is pushed onto the undo stack
        /// only if the lines changed, so a no-op (eg: backspace at 0,0) leaves history and
        /// the modified flag alone.
        fn edit(&mut self, op: impl FnOnce(&mut LineBuffer)) {
            let before = self.buffer.content().clone();
            op(&mut self.buffer);
            if self.buffer.content().lines != before.lines {
                self.history.push(before);
                self.modified = true;
            }
        }

        fn open(&mut self, backend: &mut dyn TerminalBackend, prompt: &mut dyn Prompt) {
            let name = prompt.prompt(OPEN_FILE);
            if name.is_empty() {
                return;
            }
            let path = resolve_path_in(&self.saves_dir, &name);
            // The error is already shown as the status message.
            self.load_path(&path, backend).ok();
            self.buffer.mark_all_dirty();
        }

        fn goto_line(&mut self, prompt: &mut dyn Prompt) {
            let answer = prompt.prompt(GOTO_LINE);
            match answer.trim().parse::<usize>() {
                Ok(line_number) => self.buffer.goto_line(line_number),
                Err(_) => {
                    tracing::debug!(message = "ignoring goto target", answer = %answer);
                    self.buffer.mark_all_dirty();
                }
            }
        }

        /// An empty answer clears the search overlay.
        fn search(&mut self, prompt: &mut dyn Prompt) {
            self.search_term = prompt.prompt(SEARCH_TERM).chars().collect();
            self.buffer.mark_all_dirty();
        }

        fn replace_all(&mut self, prompt: &mut dyn Prompt) {
            let old = prompt.prompt(OLD_TEXT);
            if old.is_empty() {
                self.buffer.mark_all_dirty();
                return;
            }
            let new = prompt.prompt(NEW_TEXT);
            self.edit(|it| {
                let count = it.replace_all(&old, &new);
                tracing::info!(message = "replace all", old = %old, new = %new, count = count);
            });
        }

        /// The panel is opened so that the output can be seen.
        fn run_shell_command(&mut self, prompt: &mut dyn Prompt) {
            let cmd = prompt.prompt(SHELL_COMMAND);
            if !cmd.is_empty() {
                self.shell_panel.run_command(&cmd);
                self.shell_panel_open = true;
            }
            self.buffer.mark_all_dirty();
        }
    }
}

mod render_frame {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl EditorSession {
        /// Paint the current state onto `backend`. Only dirty lines are repainted.
        ///
        /// # Errors
        ///
        /// Returns an error if the backend fails to flush.
        pub fn render(&mut self, backend: &mut dyn TerminalBackend) -> CommonResult<()> {
            let status_text = StatusInfo {
                file_name: self.file_name.as_deref(),
                caret: self.buffer.caret(),
                modified: self.modified,
                show_help: self.show_help,
                message: self.status_message.as_deref(),
            }
            .compose();

            let highlighter = Highlighter::new(
                self.active_syntax.as_ref().map(|it| &it.token_lookup),
                Some(self.search_term.as_slice()),
            );

            let frame = Frame {
                buffer: &mut self.buffer,
                highlighter,
                show_line_numbers: self.show_line_numbers,
                status_text: &status_text,
                shell_panel: self.shell_panel_open.then_some(&self.shell_panel),
            };

            self.renderer.render(frame, backend)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellAttr, OffscreenGrid, Pos, ScriptedPrompt, Size, assert_eq2,
                parse_syntax_definitions, try_create_temp_dir};

    const SYNTAX: &str = "SYNTAX \".c\"\n{\n\"int\", \"return\" = (255, 0, 0);\n}\n";

    fn grid() -> OffscreenGrid { OffscreenGrid::new(Size::new(60, 20)) }

    fn type_text(session: &mut EditorSession, grid: &mut OffscreenGrid, text: &str) {
        let mut prompt = ScriptedPrompt::default();
        for ch in text.chars() {
            let event = if ch == '\n' {
                EditorEvent::InsertNewline
            } else {
                EditorEvent::InsertChar(ch)
            };
            session.handle_event(event, grid, &mut prompt);
        }
    }

    fn run(
        session: &mut EditorSession,
        grid: &mut OffscreenGrid,
        event: EditorEvent,
        answers: &[&str],
    ) -> Continuation {
        let mut prompt = ScriptedPrompt::new(answers.iter().copied());
        session.handle_event(event, grid, &mut prompt)
    }

    #[test]
    fn test_typing_and_rendering() {
        let mut grid = grid();
        let mut session = EditorSession::default();
        type_text(&mut session, &mut grid, "hello\nworld");
        session.render(&mut grid).unwrap();

        assert_eq2!(grid.row_as_string(0), "   1 |  hello");
        assert_eq2!(grid.row_as_string(1), "   2 |  world");
        assert!(grid.row_as_string(19).contains("Ln: 2, Col: 6 [Modified]"));
        assert_eq2!(grid.cursor(), (1, 8 + 5));
        assert_eq2!(session.history().undo_len(), 11);
    }

    #[test]
    fn test_quit() {
        let mut grid = grid();
        let mut session = EditorSession::default();
        assert_eq2!(
            run(&mut session, &mut grid, EditorEvent::MoveDown, &[]),
            Continuation::Continue
        );
        assert_eq2!(
            run(&mut session, &mut grid, EditorEvent::Quit, &[]),
            Continuation::Stop
        );
    }

    #[test]
    fn test_load_then_save_round_trip() {
        let temp_dir = try_create_temp_dir().unwrap();
        let path = temp_dir.join("main.c");
        let content = "int main() {\n    return 0;\n}\n";
        std::fs::write(&path, content).unwrap();

        let mut grid = grid();
        let mut session = EditorSession::new(
            EditorConfig::default(),
            parse_syntax_definitions(SYNTAX),
        )
        .with_saves_dir(temp_dir.join("saves"));

        let path_str = path.display().to_string();
        run(&mut session, &mut grid, EditorEvent::Open, &[&path_str]);
        assert_eq2!(session.buffer().line_count(), 3);
        assert_eq2!(session.file_name(), Some(path_str.as_str()));
        assert!(!session.is_modified());
        assert!(session.active_syntax().is_some());
        assert_eq2!(
            session.status_message(),
            Some(format!("File loaded from {path_str}").as_str())
        );

        // Keywords are colored.
        session.render(&mut grid).unwrap();
        assert!(matches!(grid.cell(0, 8).unwrap().attr, CellAttr::ColorPair(_)));
        assert!(matches!(grid.cell(1, 8 + 4).unwrap().attr, CellAttr::ColorPair(_)));

        std::fs::remove_file(&path).unwrap();
        run(&mut session, &mut grid, EditorEvent::Save, &[]);
        assert_eq2!(std::fs::read_to_string(&path).unwrap(), content);
        assert_eq2!(
            session.status_message(),
            Some(format!("File saved as {path_str}").as_str())
        );

        // Cleared by the next key.
        run(&mut session, &mut grid, EditorEvent::MoveRight, &[]);
        assert_eq2!(session.status_message(), None);
    }

    #[test]
    fn test_save_as_bare_name_goes_to_saves_dir() {
        let temp_dir = try_create_temp_dir().unwrap();
        let mut grid = grid();
        let mut session = EditorSession::default().with_saves_dir(temp_dir.join("saves"));
        type_text(&mut session, &mut grid, "abc");
        assert!(session.is_modified());

        // Cancelled prompt: nothing happens.
        run(&mut session, &mut grid, EditorEvent::Save, &[""]);
        assert_eq2!(session.file_name(), None);
        assert!(session.is_modified());

        run(&mut session, &mut grid, EditorEvent::Save, &["notes.txt"]);
        let saved = temp_dir.join("saves").join("notes.txt");
        assert_eq2!(std::fs::read_to_string(&saved).unwrap(), "abc\n");
        assert_eq2!(session.file_name(), Some(saved.display().to_string().as_str()));
        assert!(!session.is_modified());
    }

    #[test]
    fn test_failed_load_leaves_buffer_alone() {
        let temp_dir = try_create_temp_dir().unwrap();
        let mut grid = grid();
        let mut session = EditorSession::default().with_saves_dir(temp_dir.join("saves"));
        type_text(&mut session, &mut grid, "keep me");

        run(&mut session, &mut grid, EditorEvent::Open, &["missing.txt"]);
        assert_eq2!(session.buffer().lines_as_strings(), vec!["keep me"]);
        assert!(session.status_message().unwrap().starts_with("Error opening"));
        assert!(session.is_modified());

        session.render(&mut grid).unwrap();
        assert!(grid.row_as_string(19).starts_with("Error opening"));
    }

    #[test]
    fn test_open_non_utf8_file_is_refused() {
        let temp_dir = try_create_temp_dir().unwrap();
        let path = temp_dir.join("latin1.txt");
        let bytes = b"caf\xe9\nok\n";
        std::fs::write(&path, bytes).unwrap();

        let mut grid = grid();
        let mut session = EditorSession::default().with_saves_dir(temp_dir.join("saves"));
        type_text(&mut session, &mut grid, "keep me");

        let path_str = path.display().to_string();
        run(&mut session, &mut grid, EditorEvent::Open, &[&path_str]);
        assert_eq2!(session.buffer().lines_as_strings(), vec!["keep me"]);
        assert_eq2!(session.file_name(), None);
        assert!(session.status_message().unwrap().starts_with("Error opening"));
        assert_eq2!(std::fs::read(&path).unwrap(), bytes.to_vec());
    }

    #[test]
    fn test_open_initial_file_that_does_not_exist() {
        let temp_dir = try_create_temp_dir().unwrap();
        let path = temp_dir.join("new.c");
        let mut grid = grid();
        let mut session =
            EditorSession::new(EditorConfig::default(), parse_syntax_definitions(SYNTAX));

        session.open_initial_file(&path, &mut grid);
        assert_eq2!(session.file_name(), Some(path.display().to_string().as_str()));
        assert!(session.active_syntax().is_some());
        assert_eq2!(session.buffer().lines_as_strings(), vec![""]);
    }

    #[test]
    fn test_undo_redo() {
        let mut grid = grid();
        let mut session = EditorSession::default();
        type_text(&mut session, &mut grid, "ab");

        run(&mut session, &mut grid, EditorEvent::Undo, &[]);
        assert_eq2!(session.buffer().lines_as_strings(), vec!["a"]);
        assert_eq2!(session.buffer().caret(), Pos::new(0, 1));

        run(&mut session, &mut grid, EditorEvent::Redo, &[]);
        assert_eq2!(session.buffer().lines_as_strings(), vec!["ab"]);

        // A new edit after undo kills the redo stack.
        run(&mut session, &mut grid, EditorEvent::Undo, &[]);
        type_text(&mut session, &mut grid, "c");
        run(&mut session, &mut grid, EditorEvent::Redo, &[]);
        assert_eq2!(session.buffer().lines_as_strings(), vec!["ac"]);
    }

    #[test]
    fn test_noop_edits_leave_history_alone() {
        let mut grid = grid();
        let mut session = EditorSession::default();

        run(&mut session, &mut grid, EditorEvent::Backspace, &[]);
        run(&mut session, &mut grid, EditorEvent::Delete, &[]);
        run(&mut session, &mut grid, EditorEvent::KillLine, &[]);
        assert_eq2!(session.history().undo_len(), 0);
        assert!(!session.is_modified());

        type_text(&mut session, &mut grid, "ab");
        run(&mut session, &mut grid, EditorEvent::Undo, &[]);
        assert_eq2!(session.history().undo_len(), 1);
        assert_eq2!(session.history().redo_len(), 1);

        // Delete at the end of the buffer changes nothing and keeps the redo stack.
        run(&mut session, &mut grid, EditorEvent::Delete, &[]);
        assert_eq2!(session.history().undo_len(), 1);
        assert_eq2!(session.history().redo_len(), 1);

        // Replacing text that isn't there is not an edit either.
        run(&mut session, &mut grid, EditorEvent::ReplaceAll, &["zzz", "y"]);
        assert_eq2!(session.history().undo_len(), 1);
    }

    #[test]
    fn test_replace_all_and_undo() {
        let mut grid = grid();
        let mut session = EditorSession::default();
        type_text(&mut session, &mut grid, "foofoofoo");
        let undo_len = session.history().undo_len();

        run(&mut session, &mut grid, EditorEvent::ReplaceAll, &["foo", "ba"]);
        assert_eq2!(session.buffer().lines_as_strings(), vec!["bababa"]);
        assert_eq2!(session.history().undo_len(), undo_len + 1);

        run(&mut session, &mut grid, EditorEvent::Undo, &[]);
        assert_eq2!(session.buffer().lines_as_strings(), vec!["foofoofoo"]);

        // No old text: no snapshot.
        run(&mut session, &mut grid, EditorEvent::ReplaceAll, &[""]);
        assert_eq2!(session.history().undo_len(), undo_len);
    }

    #[test]
    fn test_goto_line() {
        let mut grid = grid();
        let mut session = EditorSession::default();
        type_text(&mut session, &mut grid, "1\n2\n3\n4\n5\n6\n7\n8\n9\n10");

        run(&mut session, &mut grid, EditorEvent::GotoLine, &["1000"]);
        assert_eq2!(session.buffer().caret(), Pos::new(9, 0));

        run(&mut session, &mut grid, EditorEvent::GotoLine, &["3"]);
        assert_eq2!(session.buffer().caret(), Pos::new(2, 0));

        run(&mut session, &mut grid, EditorEvent::GotoLine, &["three"]);
        assert_eq2!(session.buffer().caret(), Pos::new(2, 0));

        run(&mut session, &mut grid, EditorEvent::GotoTop, &[]);
        assert_eq2!(session.buffer().caret(), Pos::new(0, 0));
        run(&mut session, &mut grid, EditorEvent::GotoBottom, &[]);
        assert_eq2!(session.buffer().caret(), Pos::new(9, 2));
    }

    #[test]
    fn test_search_overlay() {
        let mut grid = grid();
        let mut session = EditorSession::default();
        type_text(&mut session, &mut grid, "find the needle");

        run(&mut session, &mut grid, EditorEvent::Search, &["needle"]);
        assert_eq2!(session.search_term(), "needle");
        session.render(&mut grid).unwrap();
        assert_eq2!(grid.cell(0, 8 + 9).unwrap().attr, CellAttr::SearchMatch);
        assert_eq2!(grid.cell(0, 8).unwrap().attr, CellAttr::Plain);

        run(&mut session, &mut grid, EditorEvent::Search, &[""]);
        session.render(&mut grid).unwrap();
        assert_eq2!(grid.cell(0, 8 + 9).unwrap().attr, CellAttr::Plain);
    }

    #[test]
    fn test_shell_panel() {
        let mut grid = grid();
        let mut session = EditorSession::default();

        run(&mut session, &mut grid, EditorEvent::RunShellCommand, &["echo hi"]);
        assert!(session.is_shell_panel_open());
        session.render(&mut grid).unwrap();
        assert_eq2!(grid.row_as_string(10), crate::SHELL_PANEL_HEADER);
        assert_eq2!(grid.row_as_string(11), "hi");

        run(&mut session, &mut grid, EditorEvent::ToggleShellPanel, &[]);
        session.render(&mut grid).unwrap();
        assert_eq2!(grid.row_as_string(10), "");
    }

    #[test]
    fn test_toggles() {
        let mut grid = grid();
        let mut session = EditorSession::default();
        type_text(&mut session, &mut grid, "x");

        run(&mut session, &mut grid, EditorEvent::ToggleLineNumbers, &[]);
        run(&mut session, &mut grid, EditorEvent::ToggleHelp, &[]);
        session.render(&mut grid).unwrap();
        assert_eq2!(grid.row_as_string(0), "x");
        assert!(grid.row_as_string(19).starts_with("[HELP]"));
    }

    #[test]
    fn test_mouse_click_accounts_for_gutter() {
        let mut grid = grid();
        let mut session = EditorSession::default();
        type_text(&mut session, &mut grid, "hello\nworld");
        session.render(&mut grid).unwrap();

        run(&mut session, &mut grid, EditorEvent::MouseClick { row: 0, col: 8 + 3 }, &[]);
        assert_eq2!(session.buffer().caret(), Pos::new(0, 3));

        // On the status line: ignored.
        run(&mut session, &mut grid, EditorEvent::MouseClick { row: 19, col: 0 }, &[]);
        assert_eq2!(session.buffer().caret(), Pos::new(0, 3));

        run(&mut session, &mut grid, EditorEvent::WheelDown, &[]);
        assert_eq2!(session.buffer().caret(), Pos::new(1, 3));
    }

    #[test]
    fn test_settings_flow_into_the_session() {
        let mut grid = grid();
        let config = EditorConfig {
            tab_four_spaces: false,
            undo_stack_size: 2,
            ..EditorConfig::default()
        };
        let mut session = EditorSession::new(config, SyntaxDefinitions::default());

        run(&mut session, &mut grid, EditorEvent::InsertTab, &[]);
        type_text(&mut session, &mut grid, "ab");
        assert_eq2!(session.buffer().lines_as_strings(), vec!["\tab"]);
        assert_eq2!(session.history().undo_len(), 2);
    }
}
