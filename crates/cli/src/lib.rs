// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Greeting library behind the `learning` binary.
//!
//! A fixed greeting, a bounded personalized-greeting formatter, and the
//! runner that prints both.

pub mod app;
pub mod buffer;
pub mod cli;
pub mod config;
pub mod error;
pub mod greeting;
pub mod logging;

#[cfg(test)]
pub mod test_utils;

pub use error::{AppError, ExitCode, FormatError};
pub use greeting::{GREETING_MESSAGE, format_greeting, format_greeting_into, greeting_message};
