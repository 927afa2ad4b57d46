// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::{BTreeMap, BTreeSet};

use crate::{ColorPair, ColorPairId, SyntaxDefinition};

/// `true` for chars that can be part of a word (identifier).
#[must_use]
pub fn is_word_char(ch: char) -> bool { ch.is_alphanumeric() || ch == '_' }

/// Every token of the active [`SyntaxDefinition`], flattened into one table sorted by
/// token text. When the same token shows up more than once, the last one wins.
///
/// [`TokenLookup::match_at`] searches the table once per distinct token length, shortest
/// first. All tokens that match at a given position are prefixes of one another, so the
/// first accepted match is the same one a front to back scan of the sorted table finds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenLookup {
    entries: Vec<(Vec<char>, ColorPairId)>,
    token_lengths: Vec<usize>,
}

impl TokenLookup {
    /// `color_pairs` has one entry per rule, as returned by
    /// [`crate::assign_color_pairs`]. Rules without a color pair are left out.
    #[must_use]
    pub fn new(definition: &SyntaxDefinition, color_pairs: &[Option<ColorPair>]) -> Self {
        let mut table: BTreeMap<Vec<char>, ColorPairId> = BTreeMap::new();

        for (rule, color_pair) in definition.rules.iter().zip(color_pairs) {
            let Some(color_pair) = color_pair else {
                continue;
            };
            for token in rule.tokens.iter().filter(|it| !it.is_empty()) {
                table.insert(token.chars().collect(), color_pair.id);
            }
        }

        let token_lengths = table
            .keys()
            .map(Vec::len)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            entries: table.into_iter().collect(),
            token_lengths,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Find a token that starts at `line[col_index]` and sits on word boundaries (judged
    /// against the whole line). Returns the token length and its color.
    #[must_use]
    pub fn match_at(&self, line: &[char], col_index: usize) -> Option<(usize, ColorPairId)> {
        let left_ok = col_index == 0
            || line
                .get(col_index - 1)
                .is_none_or(|&ch| !is_word_char(ch));
        if !left_ok {
            return None;
        }

        for &token_len in &self.token_lengths {
            let end = col_index + token_len;
            let Some(candidate) = line.get(col_index..end) else {
                break;
            };
            let right_ok = line.get(end).is_none_or(|&ch| !is_word_char(ch));
            if !right_ok {
                continue;
            }
            if let Ok(index) = self
                .entries
                .binary_search_by(|(token, _)| token.as_slice().cmp(candidate))
            {
                return Some((token_len, self.entries[index].1));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RgbColor, SyntaxRule, assert_eq2, assign_color_pairs};

    fn lookup(rules: &[&[&str]]) -> TokenLookup {
        let definition = SyntaxDefinition {
            extensions: vec![".c".into()],
            rules: rules
                .iter()
                .map(|tokens| SyntaxRule {
                    tokens: tokens.iter().map(|it| it.to_string()).collect(),
                    color: RgbColor::default(),
                })
                .collect(),
        };
        TokenLookup::new(&definition, &assign_color_pairs(&definition))
    }

    fn chars(it: &str) -> Vec<char> { it.chars().collect() }

    #[test]
    fn test_word_boundaries() {
        let table = lookup(&[&["int"]]);
        let line = chars("printing int x");
        assert_eq2!(table.match_at(&line, 2), None);
        assert_eq2!(table.match_at(&line, 9), Some((3, ColorPairId(1))));
        assert_eq2!(table.match_at(&chars("int"), 0), Some((3, ColorPairId(1))));
        assert_eq2!(table.match_at(&chars("int_x"), 0), None);
        assert_eq2!(table.match_at(&chars("(int)"), 1), Some((3, ColorPairId(1))));
    }

    #[test]
    fn test_prefix_tokens_pick_the_one_on_a_boundary() {
        let table = lookup(&[&["in"], &["int"]]);
        assert_eq2!(table.match_at(&chars("int x"), 0), Some((3, ColorPairId(2))));
        assert_eq2!(table.match_at(&chars("in x"), 0), Some((2, ColorPairId(1))));
    }

    #[test]
    fn test_duplicates_last_write_wins() {
        let table = lookup(&[&["let"], &["fn", "let"]]);
        assert_eq2!(table.len(), 2);
        assert_eq2!(table.match_at(&chars("let"), 0), Some((3, ColorPairId(2))));
    }

    #[test]
    fn test_non_word_tokens() {
        let table = lookup(&[&["==", "#include"]]);
        assert_eq2!(table.match_at(&chars("a == b"), 2), Some((2, ColorPairId(1))));
        assert_eq2!(table.match_at(&chars("#include <x>"), 0), Some((8, ColorPairId(1))));
    }

    #[test]
    fn test_empty_tokens_are_ignored() {
        let table = lookup(&[&[""]]);
        assert!(table.is_empty());
        assert_eq2!(table.match_at(&chars("abc"), 0), None);
    }
}
