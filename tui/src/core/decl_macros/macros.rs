// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly at the end of each block.
///
/// ```
/// use quill_tui::{CommonResult, throws};
///
/// fn save_nothing() -> CommonResult<()> {
///     throws!({
///         let lines: Vec<String> = vec![];
///         assert!(lines.is_empty());
///     });
/// }
/// # save_nothing().unwrap();
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Short for `Ok(())` or `Ok($value)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Colorized diff on failure via [`pretty_assertions`]. The calling crate needs
/// `pretty_assertions` as a (dev) dependency.
///
/// [`pretty_assertions`]: https://docs.rs/pretty_assertions
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Build a [`crate::LineBuffer`] from string literals, with the default limits. Handy
/// in tests.
///
/// ```
/// use quill_tui::line_buffer;
///
/// let buffer = line_buffer!["abc", "def"];
/// assert_eq!(buffer.line_count(), 2);
/// assert_eq!(buffer.line_as_string(1), "def");
/// ```
#[macro_export]
macro_rules! line_buffer {
    () => {
        $crate::LineBuffer::default()
    };
    ($($line:expr),+ $(,)?) => {{
        let mut buffer = $crate::LineBuffer::default();
        buffer.replace_lines([$($line),+].iter().map(|it| it.to_string()));
        buffer
    }};
}
