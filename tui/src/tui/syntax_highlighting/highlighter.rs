// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CellAttr, InlineVec, TokenLookup, display_char};

/// A stretch of chars painted with the same attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub attr: CellAttr,
}

impl StyledRun {
    #[must_use]
    pub fn new(text: impl Into<String>, attr: CellAttr) -> Self {
        Self {
            text: text.into(),
            attr,
        }
    }
}

pub type StyledRuns = InlineVec<StyledRun>;

/// Decides which attribute each visible char of a line gets.
///
/// At each position, in order:
/// 1. The search term, if any, matched literally and case sensitively.
/// 2. A token from the [`TokenLookup`], only on word boundaries.
/// 3. Otherwise a plain char.
///
/// Matches consume their whole length, so a token that starts inside a search match is
/// never colored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlighter<'a> {
    pub token_lookup: Option<&'a TokenLookup>,
    pub search_term: Option<&'a [char]>,
}

impl<'a> Highlighter<'a> {
    #[must_use]
    pub fn new(token_lookup: Option<&'a TokenLookup>, search_term: Option<&'a [char]>) -> Self {
        Self {
            token_lookup,
            search_term: search_term.filter(|it| !it.is_empty()),
        }
    }

    fn search_match_at(&self, line: &[char], col_index: usize) -> Option<usize> {
        let term = self.search_term?;
        line.get(col_index..)?
            .starts_with(term)
            .then_some(term.len())
    }

    /// Highlight `line` starting at `col_offset`, producing at most `width` chars of
    /// output. Adjacent chars with the same attribute end up in one run.
    #[must_use]
    pub fn highlight_line(&self, line: &[char], col_offset: usize, width: usize) -> StyledRuns {
        let mut runs = StyledRuns::new();
        let mut remaining = width;
        let mut col_index = col_offset;

        while col_index < line.len() && remaining > 0 {
            let (len, attr) = if let Some(len) = self.search_match_at(line, col_index) {
                (len, CellAttr::SearchMatch)
            } else if let Some((len, id)) = self
                .token_lookup
                .and_then(|it| it.match_at(line, col_index))
            {
                (len, CellAttr::ColorPair(id))
            } else {
                (1, CellAttr::Plain)
            };

            let visible_len = len.min(remaining);
            let text = line[col_index..col_index + visible_len]
                .iter()
                .copied()
                .map(display_char);
            let extends_last =
                attr == CellAttr::Plain && runs.last().is_some_and(|it| it.attr == attr);
            match runs.last_mut() {
                Some(last) if extends_last => last.text.extend(text),
                _ => runs.push(StyledRun::new(text.collect::<String>(), attr)),
            }

            remaining -= visible_len;
            col_index += len;
        }

        runs
    }
}
