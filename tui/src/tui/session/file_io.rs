// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plain text files, one line per buffer line, each followed by `\n`.

use std::{io::Write,
          path::{Path, PathBuf}};

use miette::Diagnostic;

/// Where bare file names (no `/`) are read from and written to.
pub const SAVES_DIR: &str = "saves";

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum FileIoError {
    #[error("Error opening {path}: {source}")]
    #[diagnostic(code(quill::file_io::read))]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error opening {path}: not UTF-8 text ({source})")]
    #[diagnostic(
        code(quill::file_io::not_utf8),
        help("Only UTF-8 files can be edited, convert the file first")
    )]
    NotUtf8 {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Error writing {path}: {source}")]
    #[diagnostic(code(quill::file_io::write))]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating '{path}' dir: {source}")]
    #[diagnostic(
        code(quill::file_io::create_dir),
        help("Check the permissions of the current working directory")
    )]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A bare name like `notes.txt` lands in [`SAVES_DIR`]. Anything with a `/` in it is
/// used as is.
#[must_use]
pub fn resolve_path(name: &str) -> PathBuf { resolve_path_in(Path::new(SAVES_DIR), name) }

/// Same as [`resolve_path`] with a different directory for bare names.
#[must_use]
pub fn resolve_path_in(saves_dir: &Path, name: &str) -> PathBuf {
    if name.contains('/') {
        PathBuf::from(name)
    } else {
        saves_dir.join(name)
    }
}

/// Read a file into lines. One trailing `\n` (and `\r` before it) is stripped from each
/// line. An empty file gives no lines.
///
/// # Errors
///
/// Returns [`FileIoError::Read`] if the file can't be read, and
/// [`FileIoError::NotUtf8`] if it isn't UTF-8. Nothing is decoded lossily.
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>, FileIoError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| FileIoError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|source| FileIoError::NotUtf8 {
        path: path.display().to_string(),
        source,
    })?;

    let lines: Vec<String> = text
        .split_terminator('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();

    tracing::info!(message = "loaded file", path = %path.display(), lines = lines.len());
    Ok(lines)
}

/// Write every line followed by `\n`. A missing parent directory (eg: [`SAVES_DIR`]) is
/// created first.
///
/// # Errors
///
/// Returns [`FileIoError::CreateDir`] or [`FileIoError::Write`] on failure. A failed
/// write may leave a partial file behind.
pub fn save_lines(
    path: impl AsRef<Path>,
    lines: impl IntoIterator<Item = impl AsRef<str>>,
) -> Result<(), FileIoError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|source| FileIoError::CreateDir {
            path: parent.display().to_string(),
            source,
        })?;
        tracing::debug!(message = "created directory", path = %parent.display());
    }

    let write_err = |source| FileIoError::Write {
        path: path.display().to_string(),
        source,
    };

    let file = std::fs::File::create(path).map_err(write_err)?;
    let mut writer = std::io::BufWriter::new(file);
    let mut count = 0;
    for line in lines {
        writer.write_all(line.as_ref().as_bytes()).map_err(write_err)?;
        writer.write_all(b"\n").map_err(write_err)?;
        count += 1;
    }
    writer.flush().map_err(write_err)?;

    tracing::info!(message = "saved file", path = %path.display(), lines = count);
    Ok(())
}
