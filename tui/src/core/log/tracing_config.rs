// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use tracing_core::LevelFilter;

use crate::{CommonError, CommonErrorType, CommonResult};

/// Default log file, written in the current working directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging. The terminal itself is owned by the editor (raw mode,
/// alternate screen), so the only sink that makes sense is a file.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `File` holds the path to the log file. Eg: `/tmp/quill.log` or `log.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String),
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::DEBUG,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(filename: Option<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

/// Parse a level name such as `debug`, `INFO` or `off` into a [`LevelFilter`].
///
/// # Errors
///
/// Returns an [`CommonErrorType::InvalidArguments`] error for unknown level names.
pub fn try_parse_level_filter(level: &str) -> CommonResult<LevelFilter> {
    match LevelFilter::from_str(level.trim()) {
        Ok(it) => Ok(it),
        Err(_) => CommonError::new_error_result(
            CommonErrorType::InvalidArguments,
            &format!("Unknown log level: {level:?}. Try one of: off, error, warn, info, debug, trace"),
        ),
    }
}
