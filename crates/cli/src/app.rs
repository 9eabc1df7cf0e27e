// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Greeting runner.
//!
//! Prints the fixed greeting, then the personalized greeting when a name
//! follows the program name. What a formatting failure means for the run
//! is decided by the configured [`FailurePolicy`].

use std::io::Write;

use crate::config::{FailurePolicy, RunConfig};
use crate::error::{AppError, ExitCode};
use crate::greeting;

/// Run with `args` (program name first), writing greeting lines to `out`.
pub fn run<S, W>(args: &[S], config: &RunConfig, out: &mut W) -> Result<(), AppError>
where
    S: AsRef<str>,
    W: Write + ?Sized,
{
    writeln!(out, "{}", greeting::greeting_message())?;

    let Some(name) = args.get(1) else {
        return Ok(());
    };
    let name: &str = name.as_ref();
    if args.len() > 2 {
        tracing::debug!("ignoring {} extra argument(s)", args.len() - 2);
    }

    let mut buffer = vec![0u8; config.capacity];
    match greeting::format_greeting(Some(buffer.as_mut_slice()), Some(name)) {
        Ok(personalized) => {
            writeln!(out, "{personalized}")?;
            Ok(())
        }
        Err(err) => match config.policy {
            FailurePolicy::Ignore => {
                tracing::debug!(
                    capacity = config.capacity,
                    "skipping personalized greeting: {err}"
                );
                Ok(())
            }
            FailurePolicy::Fail => Err(err.into()),
        },
    }
}

/// Run as the strict app: default capacity, formatting failure is fatal.
pub fn run_app<S, W>(args: &[S], out: &mut W) -> ExitCode
where
    S: AsRef<str>,
    W: Write + ?Sized,
{
    exit_code(&run(args, &RunConfig::app(), out))
}

/// Map a run result to its process exit code.
pub fn exit_code(result: &Result<(), AppError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::Success,
        Err(err) => err.exit_code(),
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
