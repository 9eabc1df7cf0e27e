// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use learning::app;
use learning::cli::Cli;
use learning::config::RunConfig;
use learning::error::AppError;
use learning::logging;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("warning: {err:#}");
    }

    let config = RunConfig::from(&cli);
    tracing::debug!(?config, "starting");

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let result = app::run(&cli.invocation(), &config, &mut handle);

    if let Err(AppError::Io(err)) = &result {
        eprintln!("error: {err}");
    }
    app::exit_code(&result).into()
}
