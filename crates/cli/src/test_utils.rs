//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the learning crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::{self, Write};

use crate::app;
use crate::config::RunConfig;
use crate::error::AppError;

/// Builds an invocation argument list with a program name in front.
pub fn args(rest: &[&str]) -> Vec<String> {
    std::iter::once("program")
        .chain(rest.iter().copied())
        .map(String::from)
        .collect()
}

/// Runs the greeting runner against an in-memory sink.
///
/// Returns the run result and everything written to the sink.
pub fn run_captured(rest: &[&str], config: &RunConfig) -> (Result<(), AppError>, String) {
    let mut out = Vec::new();
    let result = app::run(&args(rest), config, &mut out);
    (result, String::from_utf8(out).unwrap())
}

/// An ASCII name of exactly `len` bytes.
pub fn name_of_len(len: usize) -> String {
    "n".repeat(len)
}

/// Writer whose every write fails, like a closed stdout pipe.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
