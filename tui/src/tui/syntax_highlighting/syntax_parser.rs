// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parser for the `highlight.syntax` rule language. Here's an example:
//!
//! ```text
//! SYNTAX ".c" ".h"
//! {
//!     "int", "char", "void" = (86, 156, 214);
//!     "return",
//!     "if" = (197, 134, 192);
//! }
//! ```
//!
//! The file is processed line by line (see [`parse_syntax_definitions`]), and the
//! individual pieces (the `SYNTAX` header and each rule) are parsed with `nom`. Anything
//! malformed is skipped, so a broken rule never takes the rest of the file down with it.

use std::path::Path;

use nom::{IResult, Parser,
          bytes::complete::{tag, take_till, take_until},
          character::complete::{char, i64, multispace0},
          combinator::opt,
          multi::many0,
          sequence::{delimited, preceded, terminated}};

use crate::{CommonResult, RgbColor};

pub mod constants {
    pub const SYNTAX: &str = "SYNTAX";
    pub const QUOTE: char = '"';
    pub const COMMA: char = ',';
    pub const EQUALS: char = '=';
    pub const LEFT_PAREN: &str = "(";
    pub const RIGHT_PAREN: char = ')';
    pub const BLOCK_START: char = '{';
    pub const BLOCK_END: char = '}';
    pub const RULE_TERMINATOR: char = ';';
}

use constants::*;

pub const DEFAULT_SYNTAX_FILE: &str = "highlight.syntax";

/// A list of literal tokens that all get the same color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxRule {
    pub tokens: Vec<String>,
    pub color: RgbColor,
}

/// One `SYNTAX` block: which files it applies to, and its rules in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxDefinition {
    pub extensions: Vec<String>,
    pub rules: Vec<SyntaxRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxDefinitions {
    pub definitions: Vec<SyntaxDefinition>,
}

impl SyntaxDefinition {
    /// A file matches when its name ends with one of the extensions.
    #[must_use]
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }
}

impl SyntaxDefinitions {
    /// The first definition that matches wins.
    #[must_use]
    pub fn find_for_file_name(&self, file_name: &str) -> Option<&SyntaxDefinition> {
        self.definitions
            .iter()
            .find(|it| it.matches_file_name(file_name))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.definitions.is_empty() }
}

/// Read and parse a syntax file. A missing file just means "no highlighting", so it
/// yields empty definitions.
///
/// # Errors
///
/// Returns an error if the file exists but can't be read.
pub fn try_load_syntax_definitions(path: impl AsRef<Path>) -> CommonResult<SyntaxDefinitions> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let it = parse_syntax_definitions(&text);
            tracing::info!(
                message = "loaded syntax definitions",
                path = %path.display(),
                count = it.definitions.len()
            );
            Ok(it)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(message = "no syntax file", path = %path.display());
            Ok(SyntaxDefinitions::default())
        }
        Err(err) => Err(miette::miette!(
            "Could not read syntax file {}: {err}",
            path.display()
        )),
    }
}

/// Parse every `SYNTAX` block in `input`.
///
/// 1. A line starting with `SYNTAX` opens a definition. The line after it must start with
///    `{`, otherwise both lines are skipped.
/// 2. Rule lines are trimmed and joined with a space (blank lines skipped) until a line
///    containing `;` completes the rule.
/// 3. A line starting with `}` (or the end of input) closes the block. A partial rule
///    that was never terminated is thrown away.
#[must_use]
pub fn parse_syntax_definitions(input: &str) -> SyntaxDefinitions {
    let mut definitions = vec![];
    let mut lines = input.lines().map(str::trim);

    while let Some(line) = lines.next() {
        let Ok((_, extensions)) = parse_syntax_header(line) else {
            continue;
        };

        match lines.next() {
            None => break,
            Some(it) if !it.starts_with(BLOCK_START) => {
                tracing::debug!(message = "SYNTAX line without a block", line = line);
                continue;
            }
            Some(_) => {}
        }

        let mut definition = SyntaxDefinition {
            extensions,
            rules: vec![],
        };

        let mut rule_text = String::new();
        for line in lines.by_ref() {
            if line.starts_with(BLOCK_END) {
                break;
            }
            if line.is_empty() {
                continue;
            }
            rule_text.push_str(line);
            rule_text.push(' ');
            if !line.contains(RULE_TERMINATOR) {
                continue;
            }
            match parse_syntax_rule(rule_text.trim()) {
                Ok((_, rule)) => definition.rules.push(rule),
                Err(err) => {
                    tracing::debug!(message = "skipping malformed syntax rule", rule = %rule_text.trim(), ?err);
                }
            }
            rule_text.clear();
        }

        definitions.push(definition);
    }

    SyntaxDefinitions { definitions }
}

/// Text between a pair of double quotes. May be empty.
pub fn parse_quoted(input: &str) -> IResult<&str, &str> {
    delimited(char(QUOTE), take_till(|it: char| it == QUOTE), char(QUOTE)).parse(input)
}

/// - Parse input: `SYNTAX ".c" ".h"`.
/// - Empty extensions (`""`) are dropped.
#[rustfmt::skip]
pub fn parse_syntax_header(input: &str) -> IResult<&str, Vec<String>> {
    let (remainder, extensions) = preceded(
        /* start */ tag(SYNTAX),
        /* output */ many0(preceded(take_till(|it: char| it == QUOTE), parse_quoted)),
    ).parse(input)?;

    let extensions = extensions
        .into_iter()
        .filter(|it| !it.is_empty())
        .map(String::from)
        .collect();

    Ok((remainder, extensions))
}

/// - Parse input: `"int", "char" = (86, 156, 214);`.
/// - Tokens are optional, and the separating commas too.
/// - Unquoted text before `=` is ignored, so `int = (1, 2, 3);` is a rule with no
///   tokens. It still takes a slot (and a color pair).
/// - The closing paren is optional. All three numbers are required.
#[rustfmt::skip]
pub fn parse_syntax_rule(input: &str) -> IResult<&str, SyntaxRule> {
    let (remainder, tokens) = many0(
        delimited(
            /* start */ multispace0,
            /* output */ parse_quoted,
            /* end */ opt((multispace0, char(COMMA))),
        ),
    ).parse(input)?;

    let (remainder, _) = (
        take_till(|it: char| it == EQUALS),
        char(EQUALS),
        take_until(LEFT_PAREN),
    ).parse(remainder)?;

    let (remainder, color) = parse_rgb_triple(remainder)?;

    let rule = SyntaxRule {
        tokens: tokens.into_iter().map(String::from).collect(),
        color,
    };

    Ok((remainder, rule))
}

fn parse_comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(COMMA), multispace0).parse(input)
}

/// - Parse input: `(R, G, B)`, whitespace allowed anywhere.
/// - Components are clamped to `0..=255`.
#[rustfmt::skip]
pub fn parse_rgb_triple(input: &str) -> IResult<&str, RgbColor> {
    let (remainder, (r, _, g, _, b)) = delimited(
        /* start */ (tag(LEFT_PAREN), multispace0),
        /* output */ (i64, parse_comma, i64, parse_comma, i64),
        /* end */ terminated(multispace0, opt(char(RIGHT_PAREN))),
    ).parse(input)?;

    Ok((remainder, RgbColor::from_clamped(r, g, b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn rgb(r: u8, g: u8, b: u8) -> RgbColor { RgbColor { r, g, b } }

    const C_SYNTAX: &str = r#"
SYNTAX ".c" ".h"
{
    "int", "char", "void" = (86, 156, 214);

    "return",
    "if" = (197,134,192);
    "broken" = 12, 13, 14;
    "short" = (1, 2);
    "unterminated" = (1, 2, 3)
}

SYNTAX ".rs"
{
    "fn" = ( 300 , -5 , 7 );
    "let" = (1, 2, 3);
    "let" = (4, 5, 6);
}
"#;

    #[test]
    fn test_parse_two_definitions() {
        let defs = parse_syntax_definitions(C_SYNTAX);
        assert_eq2!(defs.definitions.len(), 2);

        let c = &defs.definitions[0];
        assert_eq2!(c.extensions, vec![".c".to_string(), ".h".to_string()]);
        assert_eq2!(
            c.rules,
            vec![
                SyntaxRule {
                    tokens: vec!["int".into(), "char".into(), "void".into()],
                    color: rgb(86, 156, 214),
                },
                SyntaxRule {
                    tokens: vec!["return".into(), "if".into()],
                    color: rgb(197, 134, 192),
                },
            ]
        );

        let rs = &defs.definitions[1];
        assert_eq2!(rs.extensions, vec![".rs".to_string()]);
        assert_eq2!(rs.rules.len(), 3);
        assert_eq2!(rs.rules[0].color, rgb(255, 0, 7));
    }

    #[test]
    fn test_unquoted_rule_keeps_its_slot() {
        let input = "SYNTAX \".c\"\n{\nint = (1, 2, 3);\n\"char\" = (4, 5, 6);\n}\n";
        let defs = parse_syntax_definitions(input);
        let rules = &defs.definitions[0].rules;
        assert_eq2!(rules.len(), 2);
        assert!(rules[0].tokens.is_empty());
        assert_eq2!(rules[1].tokens, vec!["char".to_string()]);
        assert_eq2!(rules[1].color, rgb(4, 5, 6));

        let pairs = crate::assign_color_pairs(&defs.definitions[0]);
        assert_eq2!(pairs[1].map(|it| it.id), Some(crate::ColorPairId(2)));
    }

    #[test]
    fn test_syntax_line_without_block_is_skipped() {
        let input = "SYNTAX \".py\"\n\"def\" = (1, 2, 3);\nSYNTAX \".js\"\n{\n\"var\" = (1, 1, 1);\n}\n";
        let defs = parse_syntax_definitions(input);
        assert_eq2!(defs.definitions.len(), 1);
        assert_eq2!(defs.definitions[0].extensions, vec![".js".to_string()]);
    }

    #[test]
    fn test_unclosed_block_at_end_of_input() {
        let input = "SYNTAX \".md\"\n{\n\"#\" = (1, 2, 3);\n\"partial\" = (4,";
        let defs = parse_syntax_definitions(input);
        assert_eq2!(defs.definitions.len(), 1);
        assert_eq2!(defs.definitions[0].rules.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_syntax_definitions("").is_empty());
        assert!(parse_syntax_definitions("just some text\n").is_empty());
    }

    #[test_case("\"a\" = (1, 2, 3);", &["a"], (1, 2, 3))]
    #[test_case("\"a\",\"b\"=(1,2,3)", &["a", "b"], (1, 2, 3))]
    #[test_case("\"==\" \"!=\" = ( 9 , 8 , 7 ) ;", &["==", "!="], (9, 8, 7))]
    #[test_case("= (0, 0, 0);", &[], (0, 0, 0))]
    #[test_case("int = (1,2,3);", &[], (1, 2, 3))]
    #[test_case("\"a\" junk = (4, 5, 6);", &["a"], (4, 5, 6))]
    fn test_parse_rule(input: &str, tokens: &[&str], expected: (u8, u8, u8)) {
        let (r, g, b) = expected;
        let (_, rule) = parse_syntax_rule(input).unwrap();
        assert_eq2!(rule.tokens, tokens.iter().map(|it| it.to_string()).collect::<Vec<_>>());
        assert_eq2!(rule.color, rgb(r, g, b));
    }

    #[test_case("\"a\" (1, 2, 3);" ; "no equals")]
    #[test_case("\"a\" = 1, 2, 3;" ; "no paren")]
    #[test_case("\"a\" = (1, 2);" ; "two numbers")]
    #[test_case("\"a\" = (x, y, z);" ; "not numbers")]
    fn test_parse_rule_rejects(input: &str) {
        assert!(parse_syntax_rule(input).is_err());
    }

    #[test]
    fn test_parse_header() {
        let (_, it) = parse_syntax_header("SYNTAX \".c\"  \"\" \".h\"").unwrap();
        assert_eq2!(it, vec![".c".to_string(), ".h".to_string()]);
        assert!(parse_syntax_header("{").is_err());
    }

    #[test]
    fn test_find_for_file_name() {
        let defs = parse_syntax_definitions(C_SYNTAX);
        assert_eq2!(
            defs.find_for_file_name("saves/main.h").map(|it| &it.extensions[0]),
            Some(&".c".to_string())
        );
        assert!(defs.find_for_file_name("notes.txt").is_none());
        assert!(defs.find_for_file_name("c").is_none());
    }

    #[test]
    fn test_missing_syntax_file_is_empty() {
        let dir = crate::try_create_temp_dir().unwrap();
        let defs = try_load_syntax_definitions(dir.join("nope.syntax")).unwrap();
        assert!(defs.is_empty());
    }
}
