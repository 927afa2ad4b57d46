// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use quill_tui::{DEFAULT_SETTINGS_FILE, DEFAULT_SYNTAX_FILE};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "quill")]
#[command(about = "A small terminal text editor with syntax highlighting")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nProvide a file path to edit it. Or no arguments to edit a new file.\nUSAGE:\n  quill [\x1b[32mfile path\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "file path")]
    pub file_path: Option<String>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = "debug",
        help = "Log level when logging is enabled: off, error, warn, info, debug, trace."
    )]
    pub log_level: String,

    #[arg(
        global = true,
        long,
        help = format!("Settings file. Defaults to `{DEFAULT_SETTINGS_FILE}`, if it exists.")
    )]
    pub settings: Option<String>,

    #[arg(
        global = true,
        long,
        help = format!("Syntax highlighting rules. Defaults to `{DEFAULT_SYNTAX_FILE}`.")
    )]
    pub syntax: Option<String>,
}
