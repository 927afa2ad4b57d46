// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque,
          io::{Stdout, Write}};

use crossterm::{cursor::MoveTo,
                event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
                style::Print,
                terminal::{Clear, ClearType}};

use crate::queue_terminal_command;

/// Longest answer a prompt accepts. Extra keystrokes are ignored.
pub const MAX_PROMPT_INPUT_LEN: usize = 255;

/// Ask the user for one line of text. Blocks until the answer is in. An empty string
/// means the prompt was cancelled (or nothing was typed).
pub trait Prompt {
    fn prompt(&mut self, label: &str) -> String;
}

/// What happened after one key was fed to a [`PromptLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    Pending,
    Submit(String),
    Cancel,
}

/// The line editing state of a prompt, without any I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptLine {
    pub label: String,
    pub input: String,
}

impl PromptLine {
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            input: String::new(),
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) -> PromptStep {
        if key_event.kind == KeyEventKind::Release {
            return PromptStep::Pending;
        }
        match key_event.code {
            KeyCode::Enter => PromptStep::Submit(std::mem::take(&mut self.input)),
            KeyCode::Esc => PromptStep::Cancel,
            KeyCode::Backspace => {
                self.input.pop();
                PromptStep::Pending
            }
            KeyCode::Char(ch)
                if !ch.is_control()
                    && !key_event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    && self.input.chars().count() < MAX_PROMPT_INPUT_LEN =>
            {
                self.input.push(ch);
                PromptStep::Pending
            }
            _ => PromptStep::Pending,
        }
    }

    #[must_use]
    pub fn display_text(&self) -> String { format!("{}{}", self.label, self.input) }
}

/// Draws the prompt on the last row of the terminal and reads keys with a blocking
/// [`crossterm::event::read`]. The caller is expected to redraw the whole screen once
/// the prompt returns.
#[derive(Debug)]
pub struct CrosstermPrompt<W: Write = Stdout> {
    writer: W,
}

impl Default for CrosstermPrompt<Stdout> {
    fn default() -> Self { Self::new(std::io::stdout()) }
}

impl<W: Write> CrosstermPrompt<W> {
    #[must_use]
    pub fn new(writer: W) -> Self { Self { writer } }

    fn draw(&mut self, line: &PromptLine) {
        let row = crossterm::terminal::size()
            .map(|(_, rows)| rows.saturating_sub(1))
            .unwrap_or_default();
        let text = line.display_text();
        let col = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        queue_terminal_command!(
            &mut self.writer,
            "CrosstermPrompt::draw",
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            Print(text),
            MoveTo(col, row),
        );
        if let Err(err) = self.writer.flush() {
            tracing::error!(message = "could not flush prompt", error = %err);
        }
    }
}

impl<W: Write> Prompt for CrosstermPrompt<W> {
    fn prompt(&mut self, label: &str) -> String {
        let mut line = PromptLine::new(label);
        loop {
            self.draw(&line);
            let event = match crossterm::event::read() {
                Ok(it) => it,
                Err(err) => {
                    tracing::error!(message = "could not read prompt input", error = %err);
                    return String::new();
                }
            };
            let Event::Key(key_event) = event else {
                continue;
            };
            match line.handle_key(key_event) {
                PromptStep::Pending => {}
                PromptStep::Submit(answer) => return answer,
                PromptStep::Cancel => return String::new(),
            }
        }
    }
}

/// Answers prompts from a queue, for tests. Once the queue runs dry every prompt is
/// cancelled. Labels are recorded so tests can check what was asked.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    pub answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    #[must_use]
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: vec![],
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn prompt(&mut self, label: &str) -> String {
        self.asked.push(label.to_string());
        self.answers.pop_front().unwrap_or_default()
    }
}
