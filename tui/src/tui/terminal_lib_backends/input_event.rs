// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
                       MouseEvent, MouseEventKind};

use crate::Size;

/// Everything the editor reacts to. Produced from raw terminal events by
/// [`EditorEvent::from_crossterm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::AsRefStr)]
pub enum EditorEvent {
    // Commands.
    Quit,
    Save,
    Open,
    Undo,
    Redo,
    GotoLine,
    Search,
    ReplaceAll,
    ToggleShellPanel,
    RunShellCommand,
    ToggleHelp,
    DuplicateLine,
    KillLine,
    ToggleLineNumbers,
    GotoTop,
    GotoBottom,

    // Editing.
    InsertChar(char),
    InsertTab,
    InsertNewline,
    Backspace,
    Delete,

    // Navigation.
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Home,
    End,
    PageUp,
    PageDown,
    /// Position on screen, not in the buffer.
    MouseClick { row: usize, col: usize },
    WheelUp,
    WheelDown,

    Resize(Size),
}

impl EditorEvent {
    /// Returns `None` for events the editor ignores (key releases, focus changes,
    /// unbound keys, ...).
    #[must_use]
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key_event) => Self::from_key_event(key_event),
            Event::Mouse(mouse_event) => Self::from_mouse_event(mouse_event),
            Event::Resize(cols, rows) => Some(Self::Resize(Size::new(
                usize::from(cols),
                usize::from(rows),
            ))),
            _ => None,
        }
    }

    fn from_key_event(key_event: KeyEvent) -> Option<Self> {
        if key_event.kind == KeyEventKind::Release {
            return None;
        }

        let KeyEvent {
            code, modifiers, ..
        } = key_event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            let KeyCode::Char(ch) = code else {
                return None;
            };
            return Self::from_ctrl_char(ch.to_ascii_lowercase());
        }

        Some(match code {
            KeyCode::Char(ch) if modifiers.contains(KeyModifiers::ALT) || ch.is_control() => {
                return None;
            }
            KeyCode::Char(ch) => Self::InsertChar(ch),
            KeyCode::Tab => Self::InsertTab,
            KeyCode::Enter => Self::InsertNewline,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Delete => Self::Delete,
            KeyCode::Left => Self::MoveLeft,
            KeyCode::Right => Self::MoveRight,
            KeyCode::Up => Self::MoveUp,
            KeyCode::Down => Self::MoveDown,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::F(1) => Self::ToggleHelp,
            _ => return None,
        })
    }

    fn from_ctrl_char(ch: char) -> Option<Self> {
        Some(match ch {
            'q' => Self::Quit,
            's' => Self::Save,
            'o' => Self::Open,
            'z' => Self::Undo,
            'y' => Self::Redo,
            'g' => Self::GotoLine,
            'f' => Self::Search,
            'r' => Self::ReplaceAll,
            'w' => Self::ToggleShellPanel,
            'e' => Self::RunShellCommand,
            'h' => Self::ToggleHelp,
            'd' => Self::DuplicateLine,
            'k' => Self::KillLine,
            't' => Self::ToggleLineNumbers,
            'u' => Self::GotoTop,
            'l' => Self::GotoBottom,
            _ => return None,
        })
    }

    fn from_mouse_event(mouse_event: MouseEvent) -> Option<Self> {
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::MouseClick {
                row: usize::from(mouse_event.row),
                col: usize::from(mouse_event.column),
            }),
            MouseEventKind::ScrollUp => Some(Self::WheelUp),
            MouseEventKind::ScrollDown => Some(Self::WheelDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test_case(KeyCode::Char('q'), KeyModifiers::CONTROL, Some(EditorEvent::Quit))]
    #[test_case(KeyCode::Char('S'), KeyModifiers::CONTROL | KeyModifiers::SHIFT, Some(EditorEvent::Save))]
    #[test_case(KeyCode::Char('x'), KeyModifiers::CONTROL, None)]
    #[test_case(KeyCode::Char('a'), KeyModifiers::NONE, Some(EditorEvent::InsertChar('a')))]
    #[test_case(KeyCode::Char('A'), KeyModifiers::SHIFT, Some(EditorEvent::InsertChar('A')))]
    #[test_case(KeyCode::Char('a'), KeyModifiers::ALT, None)]
    #[test_case(KeyCode::F(1), KeyModifiers::NONE, Some(EditorEvent::ToggleHelp))]
    #[test_case(KeyCode::F(2), KeyModifiers::NONE, None)]
    #[test_case(KeyCode::Tab, KeyModifiers::NONE, Some(EditorEvent::InsertTab))]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, Some(EditorEvent::InsertNewline))]
    #[test_case(KeyCode::PageDown, KeyModifiers::NONE, Some(EditorEvent::PageDown))]
    fn test_key_mapping(code: KeyCode, modifiers: KeyModifiers, expected: Option<EditorEvent>) {
        assert_eq2!(EditorEvent::from_crossterm(key(code, modifiers)), expected);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key_event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key_event.kind = KeyEventKind::Release;
        assert_eq2!(EditorEvent::from_crossterm(Event::Key(key_event)), None);
    }

    #[test]
    fn test_mouse_and_resize() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq2!(
            EditorEvent::from_crossterm(click),
            Some(EditorEvent::MouseClick { row: 3, col: 12 })
        );
        assert_eq2!(
            EditorEvent::from_crossterm(Event::Resize(100, 40)),
            Some(EditorEvent::Resize(Size::new(100, 40)))
        );
        assert_eq2!(EditorEvent::from_crossterm(Event::FocusGained), None);
    }
}
