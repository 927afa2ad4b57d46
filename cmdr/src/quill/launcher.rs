// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use crossterm::event::Event;
use miette::IntoDiagnostic;
use quill_tui::{CommonResult, Continuation, CrosstermBackend, CrosstermPrompt,
                DEFAULT_SETTINGS_FILE, DEFAULT_SYNTAX_FILE, EditorEvent, EditorSession,
                Prompt, RawMode, TerminalBackend, ok, try_load_settings,
                try_load_syntax_definitions};

use crate::quill::{CLIArg, GlobalOption};

/// Set up the terminal, run the editor until the user quits, then restore the terminal.
///
/// # Errors
///
/// Returns an error if the config files given on the command line can't be loaded, the
/// terminal can't be put in raw mode, or input can't be read.
pub fn run_app(cli_arg: &CLIArg) -> CommonResult<()> {
    let mut session = try_create_session(&cli_arg.global_options)?;

    let mut raw_mode = RawMode::start()?;
    let mut backend = CrosstermBackend::default();
    let mut prompt = CrosstermPrompt::default();

    if let Some(file_path) = &cli_arg.file_path {
        session.open_initial_file(Path::new(file_path), &mut backend);
    }

    let result = run_main_event_loop(&mut session, &mut backend, &mut prompt, || {
        crossterm::event::read().into_diagnostic()
    });

    raw_mode.end();
    result
}

/// Load settings and syntax rules. A settings file named on the command line must
/// exist; the default one is optional.
///
/// # Errors
///
/// Returns an error if a settings or syntax file exists but can't be read, or if an
/// explicit settings file is missing.
pub fn try_create_session(global_options: &GlobalOption) -> CommonResult<EditorSession> {
    let config = match &global_options.settings {
        Some(path) => try_load_settings(path, true)?,
        None => try_load_settings(DEFAULT_SETTINGS_FILE, false)?,
    };

    let syntax_path = global_options
        .syntax
        .as_deref()
        .unwrap_or(DEFAULT_SYNTAX_FILE);
    let syntax_definitions = try_load_syntax_definitions(syntax_path)?;

    ok!(EditorSession::new(config, syntax_definitions))
}

/// Render, then block on the next event, until [`Continuation::Stop`]. Events the
/// editor doesn't care about are skipped.
///
/// # Errors
///
/// Returns an error if rendering fails or `read_event` fails.
pub fn run_main_event_loop(
    session: &mut EditorSession,
    backend: &mut dyn TerminalBackend,
    prompt: &mut dyn Prompt,
    mut read_event: impl FnMut() -> CommonResult<Event>,
) -> CommonResult<()> {
    loop {
        session.render(backend)?;

        let event = read_event()?;
        let Some(editor_event) = EditorEvent::from_crossterm(event) else {
            continue;
        };

        // % is Display, ? is Debug.
        tracing::trace!(message = "main_event_loop -> event", event = editor_event.as_ref());

        if session.handle_event(editor_event, backend, prompt) == Continuation::Stop {
            tracing::debug!(message = "main_event_loop -> exit");
            break;
        }
    }

    ok!()
}
