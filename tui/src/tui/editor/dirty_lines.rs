// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::BTreeSet;

/// Tracks which lines of a [`crate::LineBuffer`] need to be painted again. The
/// [`crate::Renderer`] reads it once per frame and then calls [`DirtyLines::clear`].
///
/// `all` is a shortcut for "every line", used after edits that shift line indices
/// (merges, splits, scrolling, undo).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtyLines {
    lines: BTreeSet<usize>,
    all: bool,
}

impl DirtyLines {
    /// Start out with everything dirty, so the first frame paints the whole screen.
    #[must_use]
    pub fn new_all_dirty() -> Self {
        Self {
            lines: BTreeSet::new(),
            all: true,
        }
    }

    pub fn mark_line(&mut self, line_index: usize) {
        if !self.all {
            self.lines.insert(line_index);
        }
    }

    pub fn mark_all(&mut self) {
        self.all = true;
        self.lines.clear();
    }

    #[must_use]
    pub fn is_dirty(&self, line_index: usize) -> bool {
        self.all || self.lines.contains(&line_index)
    }

    #[must_use]
    pub fn is_all_dirty(&self) -> bool { self.all }

    #[must_use]
    pub fn is_clean(&self) -> bool { !self.all && self.lines.is_empty() }

    pub fn clear(&mut self) {
        self.all = false;
        self.lines.clear();
    }
}
