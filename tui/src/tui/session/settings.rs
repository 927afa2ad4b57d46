// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `settings.config` has one `KEY = value;` pair per line. Blank lines, and lines that
//! start with `#` or `/`, are comments. Unknown keys and bad values are skipped.
//!
//! ```text
//! # Editor settings.
//! TAB_FOUR_SPACES = true;
//! AUTO_INDENT = false;
//! UNDO_STACK_SIZE = 500;
//! ```

use std::{path::Path, str::FromStr};

use miette::Diagnostic;
use nom::{IResult, Parser,
          bytes::complete::{take_till, take_till1},
          character::complete::char,
          combinator::opt,
          sequence::{separated_pair, terminated}};

use crate::{CommonResult, EditorConfig};

pub const DEFAULT_SETTINGS_FILE: &str = "settings.config";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumString, strum_macros::AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingsKey {
    TabFourSpaces,
    AutoIndent,
    ShowLineNumbers,
    MaxLineLength,
    MaxLines,
    UndoStackSize,
}

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum SettingsError {
    #[error("Settings file not found: {path}")]
    #[diagnostic(
        code(quill::settings::not_found),
        help("Pass an existing file to --settings, or leave it out to use the defaults")
    )]
    NotFound { path: String },

    #[error("Could not read settings file {path}: {source}")]
    #[diagnostic(code(quill::settings::read))]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// - Parse input: `KEY = value;`.
/// - Both sides are trimmed by the caller. The `;` is optional.
#[rustfmt::skip]
pub fn parse_setting_line(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        /* key */ take_till1(|it: char| it == '='),
        /* separator */ char('='),
        /* value */ terminated(take_till(|it: char| it == ';'), opt(char(';'))),
    ).parse(input)
}

fn parse_bool(value: &str) -> bool { value.eq_ignore_ascii_case("true") }

/// Zero and non numbers are rejected, leaving `target` alone.
fn set_positive(target: &mut usize, value: &str) -> bool {
    match value.parse::<usize>() {
        Ok(it) if it > 0 => {
            *target = it;
            true
        }
        _ => false,
    }
}

/// Apply every recognized line of `input` on top of [`EditorConfig::default`].
#[must_use]
pub fn parse_settings(input: &str) -> EditorConfig {
    let mut config = EditorConfig::default();

    for line in input.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') || line.starts_with('/') {
            continue;
        }

        let Ok((_, (key, value))) = parse_setting_line(line) else {
            tracing::debug!(message = "skipping malformed settings line", line = line);
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        let Ok(settings_key) = SettingsKey::from_str(key) else {
            tracing::debug!(message = "unknown settings key", key = key);
            continue;
        };

        let applied = match settings_key {
            SettingsKey::TabFourSpaces => {
                config.tab_four_spaces = parse_bool(value);
                true
            }
            SettingsKey::AutoIndent => {
                config.auto_indent = parse_bool(value);
                true
            }
            SettingsKey::ShowLineNumbers => {
                config.show_line_numbers = parse_bool(value);
                true
            }
            SettingsKey::MaxLineLength => {
                set_positive(&mut config.limits.max_line_len, value)
            }
            SettingsKey::MaxLines => set_positive(&mut config.limits.max_line_count, value),
            SettingsKey::UndoStackSize => set_positive(&mut config.undo_stack_size, value),
        };

        if !applied {
            tracing::debug!(
                message = "ignoring bad settings value",
                key = settings_key.as_ref(),
                value = value
            );
        }
    }

    config
}

/// Load settings from `path`. When the file is missing, the defaults are used, unless
/// `required` is set (the path was given explicitly on the command line).
///
/// # Errors
///
/// Returns [`SettingsError::NotFound`] for a missing required file, or
/// [`SettingsError::Read`] if the file exists but can't be read.
pub fn try_load_settings(path: impl AsRef<Path>, required: bool) -> CommonResult<EditorConfig> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let config = parse_settings(&text);
            tracing::info!(message = "loaded settings", path = %path.display(), ?config);
            Ok(config)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if required {
                return Err(SettingsError::NotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            tracing::debug!(message = "no settings file, using defaults", path = %path.display());
            Ok(EditorConfig::default())
        }
        Err(source) => Err(SettingsError::Read {
            path: path.display().to_string(),
            source,
        }
        .into()),
    }
}
