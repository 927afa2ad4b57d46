// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use quill_cmdr::quill::{CLIArg, ISSUES_URL, goodbye_msg, run_app};
use quill_tui::{CommonResult, TracingConfig, ok, setup_default_miette_global_report_handler,
                try_initialize_logging_global, try_parse_level_filter};

fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;
    if should_log {
        let level_filter = try_parse_level_filter(&cli_arg.global_options.log_level)?;
        try_initialize_logging_global(TracingConfig::new_file(None, level_filter))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    if let Err(report) = run_app(&cli_arg) {
        // % is Display, ? is Debug.
        tracing::error!(
            message = "Could not run quill due to the following problem",
            error = ?report
        );
        return Err(report);
    }

    let user_name = std::env::var("USER").ok();
    println!("{}", goodbye_msg(user_name.as_deref()));

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}
