// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use thiserror::Error;

/// The single formatting failure.
///
/// Absent inputs, a zero capacity, and a greeting that does not fit all
/// produce this same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("formatting failure")]
pub struct FormatError;

/// Errors surfaced by the greeting runner.
#[derive(Debug, Error)]
pub enum AppError {
    /// The personalized greeting could not be formatted and the run
    /// treats that as fatal.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Writing a greeting line to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::Format(_) => ExitCode::FormatFailed,
            AppError::Io(_) => ExitCode::InternalError,
        }
    }
}

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// Strict runs only.
    FormatFailed = 1,
    InternalError = 2,
}

impl ExitCode {
    pub fn is_success(self) -> bool {
        self == ExitCode::Success
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
