// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Line buffer
//!
//! [`LineBuffer`] owns the text being edited. Every mutation of the text, the caret or
//! the scroll offset goes through it, and every mutation records which lines changed in
//! its [`DirtyLines`].
//!
//! The part of the buffer that undo / redo cares about lives in [`EditorContent`]. Lines
//! are reference counted, so cloning a content (taking a snapshot) only copies pointers.
//! The first mutation of a shared line copies just that line (see [`Rc::make_mut`]).
//!
//! All out of range input is clamped. Nothing in here returns an error:
//! - Inserting into a full line, or splitting when the buffer holds the maximum number
//!   of lines, does nothing.
//! - Merging two lines truncates the result to the maximum line length.

use std::rc::Rc;

use super::{BufferLimits, DirtyLines};

/// The chars of a single line. Every `char` occupies exactly one display cell.
pub type LineChars = Vec<char>;

/// Number of lines that [`LineBuffer::page_up`] and [`LineBuffer::page_down`] move.
pub const PAGE_SIZE: usize = 5;

/// Number of lines that one mouse wheel notch moves.
pub const WHEEL_SCROLL_LINES: usize = 3;

/// A (row, col) position. Used for the caret (in buffer coordinates) and for the scroll
/// offset (the buffer position that is painted in the top left cell of the text area).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row_index: usize,
    pub col_index: usize,
}

impl Pos {
    #[must_use]
    pub fn new(row_index: usize, col_index: usize) -> Self { Self { row_index, col_index } }
}

/// Snapshot-able part of a [`LineBuffer`]. This is what [`crate::EditorHistory`] stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub lines: Vec<Rc<LineChars>>,
    pub caret: Pos,
    pub scr_ofs: Pos,
}

impl Default for EditorContent {
    fn default() -> Self {
        Self {
            lines: vec![Rc::new(LineChars::new())],
            caret: Pos::default(),
            scr_ofs: Pos::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    content: EditorContent,
    limits: BufferLimits,
    auto_indent: bool,
    dirty: DirtyLines,
}

impl Default for LineBuffer {
    fn default() -> Self { Self::new(BufferLimits::default(), true) }
}

mod construct_and_access {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl LineBuffer {
        #[must_use]
        pub fn new(limits: BufferLimits, auto_indent: bool) -> Self {
            Self {
                content: EditorContent::default(),
                limits,
                auto_indent,
                dirty: DirtyLines::new_all_dirty(),
            }
        }

        #[must_use]
        pub fn content(&self) -> &EditorContent { &self.content }

        /// Swap in a whole content, eg: when undoing. Everything is repainted.
        pub fn set_content(&mut self, content: EditorContent) {
            self.content = content;
            self.clamp_caret();
            self.dirty.mark_all();
        }

        #[must_use]
        pub fn limits(&self) -> BufferLimits { self.limits }

        pub fn set_limits(&mut self, limits: BufferLimits) { self.limits = limits; }

        #[must_use]
        pub fn auto_indent(&self) -> bool { self.auto_indent }

        pub fn set_auto_indent(&mut self, auto_indent: bool) { self.auto_indent = auto_indent; }

        #[must_use]
        pub fn line_count(&self) -> usize { self.content.lines.len() }

        #[must_use]
        pub fn line(&self, row_index: usize) -> Option<&[char]> {
            self.content.lines.get(row_index).map(|it| it.as_slice())
        }

        /// Returns an empty string when `row_index` is out of range.
        #[must_use]
        pub fn line_as_string(&self, row_index: usize) -> String {
            self.line(row_index)
                .map(|it| it.iter().collect())
                .unwrap_or_default()
        }

        #[must_use]
        pub fn lines_as_strings(&self) -> Vec<String> {
            (0..self.line_count())
                .map(|row_index| self.line_as_string(row_index))
                .collect()
        }

        #[must_use]
        pub fn caret(&self) -> Pos { self.content.caret }

        #[must_use]
        pub fn scr_ofs(&self) -> Pos { self.content.scr_ofs }

        #[must_use]
        pub fn dirty(&self) -> &DirtyLines { &self.dirty }

        pub fn dirty_mut(&mut self) -> &mut DirtyLines { &mut self.dirty }

        pub fn mark_all_dirty(&mut self) { self.dirty.mark_all(); }

        pub(super) fn current_line_len(&self) -> usize {
            self.line(self.content.caret.row_index).map_or(0, <[char]>::len)
        }

        pub(super) fn current_line_mut(&mut self) -> &mut LineChars {
            let row_index = self.content.caret.row_index;
            Rc::make_mut(&mut self.content.lines[row_index])
        }

        /// Restore the caret invariants after the lines changed underneath it.
        pub(super) fn clamp_caret(&mut self) {
            if self.content.lines.is_empty() {
                self.content.lines.push(Rc::new(LineChars::new()));
            }
            let last_row = self.line_count() - 1;
            let caret = &mut self.content.caret;
            caret.row_index = caret.row_index.min(last_row);
            let len = self.current_line_len();
            self.content.caret.col_index = self.content.caret.col_index.min(len);
        }
    }
}

mod content_mut {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    fn leading_spaces(line: &[char]) -> usize {
        line.iter().take_while(|&&ch| ch == ' ').count()
    }

    impl LineBuffer {
        /// Wholesale replacement, used when a file is loaded. An empty iterator leaves a
        /// single empty line. Lines past the line cap are dropped, and chars past the
        /// length cap are cut off.
        pub fn replace_lines(&mut self, lines: impl IntoIterator<Item = String>) {
            let max_line_len = self.limits.max_line_len;
            let mut new_lines: Vec<Rc<LineChars>> = lines
                .into_iter()
                .take(self.limits.max_line_count)
                .map(|line| Rc::new(line.chars().take(max_line_len).collect()))
                .collect();
            if new_lines.is_empty() {
                new_lines.push(Rc::new(LineChars::new()));
            }
            self.content = EditorContent {
                lines: new_lines,
                caret: Pos::default(),
                scr_ofs: Pos::default(),
            };
            self.dirty.mark_all();
        }

        pub fn insert_char(&mut self, ch: char) {
            if self.current_line_len() >= self.limits.max_line_len {
                return;
            }
            let Pos { row_index, col_index } = self.content.caret;
            self.current_line_mut().insert(col_index, ch);
            self.content.caret.col_index += 1;
            self.dirty.mark_line(row_index);
        }

        /// Four spaces, or a single `'\t'`. Stops early if the line fills up.
        pub fn insert_tab(&mut self, tab_four_spaces: bool) {
            if tab_four_spaces {
                for _ in 0..4 {
                    self.insert_char(' ');
                }
            } else {
                self.insert_char('\t');
            }
        }

        /// Backspace.
        pub fn delete_before_cursor(&mut self) {
            let Pos { row_index, col_index } = self.content.caret;
            match (row_index, col_index) {
                (0, 0) => {}
                (_, 0) => {
                    let removed = self.content.lines.remove(row_index);
                    let max_line_len = self.limits.max_line_len;
                    let prev = Rc::make_mut(&mut self.content.lines[row_index - 1]);
                    let prev_len = prev.len();
                    let room = max_line_len.saturating_sub(prev_len);
                    prev.extend(removed.iter().take(room));
                    self.content.caret = Pos::new(row_index - 1, prev_len.min(max_line_len));
                    self.dirty.mark_all();
                }
                _ => {
                    self.current_line_mut().remove(col_index - 1);
                    self.content.caret.col_index -= 1;
                    self.dirty.mark_line(row_index);
                }
            }
        }

        /// Forward delete.
        pub fn delete_at_cursor(&mut self) {
            let Pos { row_index, col_index } = self.content.caret;
            if col_index < self.current_line_len() {
                self.current_line_mut().remove(col_index);
                self.dirty.mark_line(row_index);
                return;
            }
            if row_index + 1 >= self.line_count() {
                return;
            }
            let next = self.content.lines.remove(row_index + 1);
            let room = self.limits.max_line_len.saturating_sub(col_index);
            self.current_line_mut().extend(next.iter().take(room));
            self.dirty.mark_all();
        }

        /// Split the current line at the caret. With auto indent the new line starts with
        /// the leading spaces of the line that was split.
        pub fn insert_newline(&mut self) {
            if self.line_count() >= self.limits.max_line_count {
                return;
            }
            let Pos { row_index, col_index } = self.content.caret;
            let max_line_len = self.limits.max_line_len;
            let current = self.current_line_mut();
            let remainder = current.split_off(col_index);

            let indent = if self.auto_indent {
                leading_spaces(&self.content.lines[row_index]).min(max_line_len)
            } else {
                0
            };

            let mut new_line: LineChars = vec![' '; indent];
            new_line.extend(remainder.into_iter().take(max_line_len - indent));

            self.content.lines.insert(row_index + 1, Rc::new(new_line));
            self.content.caret = Pos::new(row_index + 1, indent);
            self.dirty.mark_all();
        }

        pub fn duplicate_line(&mut self) {
            if self.line_count() >= self.limits.max_line_count {
                return;
            }
            let row_index = self.content.caret.row_index;
            let copy = Rc::clone(&self.content.lines[row_index]);
            self.content.lines.insert(row_index + 1, copy);
            self.content.caret.row_index += 1;
            self.clamp_caret();
            self.dirty.mark_all();
        }

        /// Remove the current line. The only line of a buffer is emptied instead.
        pub fn kill_line(&mut self) {
            let row_index = self.content.caret.row_index;
            if self.line_count() == 1 {
                self.current_line_mut().clear();
                self.content.caret.col_index = 0;
                self.dirty.mark_line(row_index);
                return;
            }
            self.content.lines.remove(row_index);
            self.content.caret = Pos::new(row_index.min(self.line_count() - 1), 0);
            self.dirty.mark_all();
        }

        /// Replace every non overlapping occurrence of `old`, scanning each line left to
        /// right. Results longer than the line cap are cut off. Returns the number of
        /// replacements.
        pub fn replace_all(&mut self, old: &str, new: &str) -> usize {
            if old.is_empty() {
                return 0;
            }
            let max_line_len = self.limits.max_line_len;
            let mut count = 0;
            for line in &mut self.content.lines {
                let text: String = line.iter().collect();
                let hits = text.matches(old).count();
                if hits == 0 {
                    continue;
                }
                count += hits;
                *line = Rc::new(text.replace(old, new).chars().take(max_line_len).collect());
            }
            self.clamp_caret();
            self.dirty.mark_all();
            count
        }
    }
}

mod caret_mut {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl LineBuffer {
        /// Move to `new_row` keeping the column if possible. Adjacent rows mark both
        /// lines, bigger jumps mark everything.
        fn move_to_row(&mut self, new_row: usize) {
            let old_row = self.content.caret.row_index;
            self.content.caret.row_index = new_row;
            self.clamp_caret();
            let new_row = self.content.caret.row_index;
            if old_row.abs_diff(new_row) <= 1 {
                self.dirty.mark_line(old_row);
                self.dirty.mark_line(new_row);
            } else {
                self.dirty.mark_all();
            }
        }

        pub fn move_left(&mut self) {
            let Pos { row_index, col_index } = self.content.caret;
            if col_index > 0 {
                self.content.caret.col_index -= 1;
                self.dirty.mark_line(row_index);
            } else if row_index > 0 {
                self.move_to_row(row_index - 1);
                self.content.caret.col_index = self.current_line_len();
            }
        }

        pub fn move_right(&mut self) {
            let Pos { row_index, col_index } = self.content.caret;
            if col_index < self.current_line_len() {
                self.content.caret.col_index += 1;
                self.dirty.mark_line(row_index);
            } else if row_index + 1 < self.line_count() {
                self.move_to_row(row_index + 1);
                self.content.caret.col_index = 0;
            }
        }

        pub fn move_up(&mut self) {
            let row_index = self.content.caret.row_index;
            if row_index > 0 {
                self.move_to_row(row_index - 1);
            }
        }

        pub fn move_down(&mut self) {
            let row_index = self.content.caret.row_index;
            if row_index + 1 < self.line_count() {
                self.move_to_row(row_index + 1);
            }
        }

        pub fn move_home(&mut self) {
            self.content.caret.col_index = 0;
            self.dirty.mark_line(self.content.caret.row_index);
        }

        pub fn move_end(&mut self) {
            self.content.caret.col_index = self.current_line_len();
            self.dirty.mark_line(self.content.caret.row_index);
        }

        pub fn page_up(&mut self) { self.scroll_caret_up(PAGE_SIZE); }

        pub fn page_down(&mut self) { self.scroll_caret_down(PAGE_SIZE); }

        pub fn scroll_caret_up(&mut self, lines: usize) {
            self.move_to_row(self.content.caret.row_index.saturating_sub(lines));
        }

        pub fn scroll_caret_down(&mut self, lines: usize) {
            self.move_to_row(self.content.caret.row_index.saturating_add(lines));
        }

        /// 1-based, clamped to `[1, line_count]`. The caret lands in column 0.
        pub fn goto_line(&mut self, line_number: usize) {
            let row_index = line_number.clamp(1, self.line_count()) - 1;
            self.content.caret = Pos::new(row_index, 0);
            self.dirty.mark_all();
        }

        pub fn goto_top(&mut self) {
            self.content.caret = Pos::default();
            self.dirty.mark_all();
        }

        pub fn goto_bottom(&mut self) {
            let row_index = self.line_count() - 1;
            self.content.caret.row_index = row_index;
            self.content.caret.col_index = self.current_line_len();
            self.dirty.mark_all();
        }

        /// Map a click in the text area to a buffer position. `gutter_width` is the
        /// number of columns taken by line numbers (0 when hidden).
        pub fn click_at(&mut self, screen_row: usize, screen_col: usize, gutter_width: usize) {
            let scr_ofs = self.content.scr_ofs;
            self.content.caret = Pos::new(
                scr_ofs.row_index + screen_row,
                scr_ofs.col_index + screen_col.saturating_sub(gutter_width),
            );
            self.clamp_caret();
            self.dirty.mark_all();
        }

        /// Slide the scroll offset so that the caret is inside a text area of
        /// `text_rows` x `text_cols`. Returns true if the offset moved.
        pub fn scroll_to_caret(&mut self, text_rows: usize, text_cols: usize) -> bool {
            let caret = self.content.caret;
            let before = self.content.scr_ofs;
            let scr_ofs = &mut self.content.scr_ofs;

            if caret.row_index < scr_ofs.row_index {
                scr_ofs.row_index = caret.row_index;
            } else if text_rows > 0 && caret.row_index >= scr_ofs.row_index + text_rows {
                scr_ofs.row_index = caret.row_index + 1 - text_rows;
            }

            if caret.col_index < scr_ofs.col_index {
                scr_ofs.col_index = caret.col_index;
            } else if text_cols > 0 && caret.col_index >= scr_ofs.col_index + text_cols {
                scr_ofs.col_index = caret.col_index + 1 - text_cols;
            }

            let moved = before != self.content.scr_ofs;
            if moved {
                self.dirty.mark_all();
            }
            moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, line_buffer};
    use test_case::test_case;

    fn tiny_limits() -> BufferLimits {
        BufferLimits {
            max_line_len: 5,
            max_line_count: 3,
        }
    }

    fn assert_caret_in_bounds(buffer: &LineBuffer) {
        let caret = buffer.caret();
        assert!(caret.row_index < buffer.line_count());
        assert!(caret.col_index <= buffer.line(caret.row_index).unwrap().len());
    }

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buffer = LineBuffer::default();
        assert_eq2!(buffer.line_count(), 1);
        assert_eq2!(buffer.line_as_string(0), "");
        assert_eq2!(buffer.caret(), Pos::default());
    }

    #[test]
    fn test_insert_char_moves_caret_and_marks_line() {
        let mut buffer = LineBuffer::default();
        buffer.dirty_mut().clear();
        buffer.insert_char('h');
        buffer.insert_char('i');
        assert_eq2!(buffer.line_as_string(0), "hi");
        assert_eq2!(buffer.caret(), Pos::new(0, 2));
        assert!(buffer.dirty().is_dirty(0));
        assert!(!buffer.dirty().is_all_dirty());
    }

    #[test]
    fn test_insert_char_into_full_line_is_noop() {
        let mut buffer = LineBuffer::new(tiny_limits(), false);
        for ch in "abcdefg".chars() {
            buffer.insert_char(ch);
        }
        assert_eq2!(buffer.line_as_string(0), "abcde");
        assert_eq2!(buffer.caret(), Pos::new(0, 5));
    }

    #[test]
    fn test_backspace_merges_with_previous_line() {
        let mut buffer = line_buffer!["abc", "def"];
        buffer.move_down();
        buffer.delete_before_cursor();
        assert_eq2!(buffer.lines_as_strings(), vec!["abcdef".to_string()]);
        assert_eq2!(buffer.caret(), Pos::new(0, 3));
        assert!(buffer.dirty().is_all_dirty());
    }

    #[test]
    fn test_backspace_merge_truncates_to_max_line_len() {
        let mut buffer = LineBuffer::new(tiny_limits(), false);
        buffer.replace_lines(["abc".to_string(), "def".to_string()]);
        buffer.move_down();
        buffer.delete_before_cursor();
        assert_eq2!(buffer.lines_as_strings(), vec!["abcde".to_string()]);
        assert_eq2!(buffer.caret(), Pos::new(0, 3));
    }

    #[test]
    fn test_forward_delete_merge_truncates_to_max_line_len() {
        let mut buffer = LineBuffer::new(tiny_limits(), false);
        buffer.replace_lines(["abc".to_string(), "def".to_string()]);
        buffer.move_end();
        buffer.dirty_mut().clear();

        buffer.delete_at_cursor();
        assert_eq2!(buffer.lines_as_strings(), vec!["abcde".to_string()]);
        assert_eq2!(buffer.caret(), Pos::new(0, 3));
        assert!(buffer.dirty().is_all_dirty());

        // Already full: the rest of the next line is dropped.
        buffer.replace_lines(["abcde".to_string(), "xy".to_string()]);
        buffer.move_end();
        buffer.delete_at_cursor();
        assert_eq2!(buffer.lines_as_strings(), vec!["abcde".to_string()]);
        assert_eq2!(buffer.caret(), Pos::new(0, 5));
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut buffer = line_buffer!["abc"];
        buffer.delete_before_cursor();
        assert_eq2!(buffer.line_as_string(0), "abc");
        assert_eq2!(buffer.caret(), Pos::default());
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut buffer = line_buffer!["abc", "def"];
        buffer.delete_at_cursor();
        assert_eq2!(buffer.line_as_string(0), "bc");

        buffer.move_end();
        buffer.delete_at_cursor();
        assert_eq2!(buffer.lines_as_strings(), vec!["bcdef".to_string()]);
        assert_eq2!(buffer.caret(), Pos::new(0, 2));

        // End of buffer.
        buffer.move_end();
        buffer.delete_at_cursor();
        assert_eq2!(buffer.lines_as_strings(), vec!["bcdef".to_string()]);
    }

    #[test]
    fn test_newline_with_auto_indent() {
        let mut buffer = LineBuffer::new(BufferLimits::default(), true);
        buffer.replace_lines(["    foo(bar)".to_string()]);
        buffer.move_end();
        for _ in 0..4 {
            buffer.move_left();
        }
        buffer.insert_newline();
        assert_eq2!(
            buffer.lines_as_strings(),
            vec!["    foo(".to_string(), "    bar)".to_string()]
        );
        assert_eq2!(buffer.caret(), Pos::new(1, 4));
    }

    #[test]
    fn test_newline_without_auto_indent() {
        let mut buffer = LineBuffer::new(BufferLimits::default(), false);
        buffer.replace_lines(["  ab".to_string()]);
        buffer.move_end();
        buffer.move_left();
        buffer.insert_newline();
        assert_eq2!(
            buffer.lines_as_strings(),
            vec!["  a".to_string(), "b".to_string()]
        );
        assert_eq2!(buffer.caret(), Pos::new(1, 0));
    }

    #[test]
    fn test_newline_at_line_cap_is_noop() {
        let mut buffer = LineBuffer::new(tiny_limits(), false);
        buffer.replace_lines(["a".to_string(), "b".to_string(), "c".to_string()]);
        buffer.insert_newline();
        assert_eq2!(buffer.line_count(), 3);
        buffer.duplicate_line();
        assert_eq2!(buffer.line_count(), 3);
    }

    #[test]
    fn test_duplicate_line() {
        let mut buffer = line_buffer!["one", "two"];
        buffer.move_end();
        buffer.duplicate_line();
        assert_eq2!(
            buffer.lines_as_strings(),
            vec!["one".to_string(), "one".to_string(), "two".to_string()]
        );
        assert_eq2!(buffer.caret(), Pos::new(1, 3));
    }

    #[test]
    fn test_kill_line() {
        let mut buffer = line_buffer!["one", "two"];
        buffer.goto_bottom();
        buffer.kill_line();
        assert_eq2!(buffer.lines_as_strings(), vec!["one".to_string()]);
        assert_eq2!(buffer.caret(), Pos::new(0, 0));

        buffer.move_end();
        buffer.kill_line();
        assert_eq2!(buffer.lines_as_strings(), vec![String::new()]);
        assert_eq2!(buffer.caret(), Pos::new(0, 0));
    }

    #[test_case(1000, 9)]
    #[test_case(0, 0)]
    #[test_case(1, 0)]
    #[test_case(5, 4)]
    fn test_goto_line_clamps(line_number: usize, expected_row: usize) {
        let mut buffer = LineBuffer::default();
        buffer.replace_lines((0..10).map(|it| format!("line {it}")));
        buffer.move_end();
        buffer.goto_line(line_number);
        assert_eq2!(buffer.caret(), Pos::new(expected_row, 0));
    }

    #[test]
    fn test_goto_top_and_bottom() {
        let mut buffer = line_buffer!["a", "bb", "ccc"];
        buffer.goto_bottom();
        assert_eq2!(buffer.caret(), Pos::new(2, 3));
        buffer.goto_top();
        assert_eq2!(buffer.caret(), Pos::new(0, 0));
    }

    #[test]
    fn test_replace_all() {
        let mut buffer = line_buffer!["foofoofoo", "no match", "xfoo"];
        let count = buffer.replace_all("foo", "ba");
        assert_eq2!(count, 4);
        assert_eq2!(
            buffer.lines_as_strings(),
            vec!["bababa".to_string(), "no match".to_string(), "xba".to_string()]
        );
    }

    #[test]
    fn test_replace_all_with_empty_needle_is_noop() {
        let mut buffer = line_buffer!["abc"];
        assert_eq2!(buffer.replace_all("", "x"), 0);
        assert_eq2!(buffer.line_as_string(0), "abc");
    }

    #[test]
    fn test_replace_all_clamps_caret() {
        let mut buffer = line_buffer!["aaaa"];
        buffer.move_end();
        buffer.replace_all("aa", "b");
        assert_eq2!(buffer.line_as_string(0), "bb");
        assert_eq2!(buffer.caret(), Pos::new(0, 2));
    }

    #[test]
    fn test_vertical_moves_clamp_column() {
        let mut buffer = line_buffer!["long line", "ab"];
        buffer.move_end();
        buffer.move_down();
        assert_eq2!(buffer.caret(), Pos::new(1, 2));
        buffer.move_up();
        assert_eq2!(buffer.caret(), Pos::new(0, 2));
    }

    #[test]
    fn test_horizontal_moves_wrap() {
        let mut buffer = line_buffer!["ab", "cd"];
        buffer.move_end();
        buffer.move_right();
        assert_eq2!(buffer.caret(), Pos::new(1, 0));
        buffer.move_left();
        assert_eq2!(buffer.caret(), Pos::new(0, 2));
    }

    #[test]
    fn test_page_moves() {
        let mut buffer = LineBuffer::default();
        buffer.replace_lines((0..12).map(|it| it.to_string()));
        buffer.page_down();
        assert_eq2!(buffer.caret().row_index, 5);
        buffer.page_down();
        buffer.page_down();
        assert_eq2!(buffer.caret().row_index, 11);
        buffer.page_up();
        assert_eq2!(buffer.caret().row_index, 6);
    }

    #[test]
    fn test_click_at_accounts_for_gutter_and_offset() {
        let mut buffer = line_buffer!["hello", "world", "!"];
        buffer.click_at(1, 10, 8);
        assert_eq2!(buffer.caret(), Pos::new(1, 2));
        buffer.click_at(20, 100, 8);
        assert_eq2!(buffer.caret(), Pos::new(2, 1));
    }

    #[test]
    fn test_scroll_to_caret() {
        let mut buffer = LineBuffer::default();
        buffer.replace_lines((0..30).map(|it| format!("{it:0>20}")));
        buffer.dirty_mut().clear();

        assert!(!buffer.scroll_to_caret(10, 10));
        assert!(buffer.dirty().is_clean());

        buffer.goto_line(15);
        buffer.move_end();
        assert!(buffer.scroll_to_caret(10, 10));
        assert_eq2!(buffer.scr_ofs(), Pos::new(5, 11));

        buffer.goto_top();
        assert!(buffer.scroll_to_caret(10, 10));
        assert_eq2!(buffer.scr_ofs(), Pos::new(0, 0));
    }

    #[test]
    fn test_replace_lines_resets_caret_and_truncates() {
        let mut buffer = LineBuffer::new(tiny_limits(), false);
        buffer.replace_lines(["a".to_string()]);
        buffer.move_end();
        buffer.replace_lines(
            ["123456789", "b", "c", "dropped"]
                .into_iter()
                .map(String::from),
        );
        assert_eq2!(
            buffer.lines_as_strings(),
            vec!["12345".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq2!(buffer.caret(), Pos::default());

        buffer.replace_lines(Vec::<String>::new());
        assert_eq2!(buffer.line_count(), 1);
    }

    #[test]
    fn test_caret_stays_in_bounds_through_edits() {
        let mut buffer = LineBuffer::new(tiny_limits(), true);
        let script = "ab\n  cd\x08\x08\x08\x08\x08xy\n\n\nzzzzzzz\x7f\x08\x08";
        for ch in script.chars() {
            match ch {
                '\n' => buffer.insert_newline(),
                '\x08' => buffer.delete_before_cursor(),
                '\x7f' => {
                    buffer.move_home();
                    buffer.delete_at_cursor();
                }
                _ => buffer.insert_char(ch),
            }
            assert_caret_in_bounds(&buffer);
            assert!(buffer.line_count() <= 3);
        }
    }

    #[test]
    fn test_snapshot_shares_untouched_lines() {
        let mut buffer = line_buffer!["first", "second"];
        let snapshot = buffer.content().clone();
        buffer.insert_char('x');
        assert!(Rc::ptr_eq(&snapshot.lines[1], &buffer.content().lines[1]));
        assert!(!Rc::ptr_eq(&snapshot.lines[0], &buffer.content().lines[0]));
        assert_eq2!(snapshot.lines[0].iter().collect::<String>(), "first");
    }
}
