// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed greeting and the bounded personalized-greeting formatter.
//!
//! The formatter writes `Hello, {name}!` plus a NUL terminator into a
//! caller-supplied buffer. A greeting that would be truncated is a failure,
//! never a partial success.

use std::fmt::Write;

use crate::buffer::BoundedWriter;
use crate::error::FormatError;

/// The fixed greeting printed on every run.
pub const GREETING_MESSAGE: &str = "Hello, from learning!";

const PREFIX: &str = "Hello, ";
const SUFFIX: &str = "!";

/// Return the fixed greeting.
pub fn greeting_message() -> &'static str {
    GREETING_MESSAGE
}

/// Length of the personalized greeting for `name`, terminator excluded.
pub fn formatted_len(name: &str) -> usize {
    PREFIX.len() + name.len() + SUFFIX.len()
}

/// Smallest buffer capacity that holds the greeting for `name`.
pub fn required_capacity(name: &str) -> usize {
    formatted_len(name) + 1
}

/// Format `Hello, {name}!` into `buffer`.
///
/// Fails when either reference is absent, when the buffer has zero
/// capacity, or when the greeting and its terminator do not fit. On success
/// the returned text borrows from `buffer` and is followed by a `0` byte.
pub fn format_greeting<'a>(
    buffer: Option<&'a mut [u8]>,
    name: Option<&str>,
) -> Result<&'a str, FormatError> {
    let Some(buffer) = buffer else {
        tracing::debug!("greeting rejected: no output buffer");
        return Err(FormatError);
    };
    let Some(name) = name else {
        tracing::debug!("greeting rejected: no name");
        return Err(FormatError);
    };
    format_greeting_into(buffer, name)
}

/// [`format_greeting`] for callers that hold both references.
pub fn format_greeting_into<'a>(buffer: &'a mut [u8], name: &str) -> Result<&'a str, FormatError> {
    // A NUL inside the name would end the greeting early when read back.
    if name.contains('\0') {
        tracing::debug!("greeting rejected: name contains a NUL byte");
        return Err(FormatError);
    }

    let Some(mut writer) = BoundedWriter::new(buffer) else {
        tracing::debug!("greeting rejected: zero capacity");
        return Err(FormatError);
    };

    write!(writer, "{PREFIX}{name}{SUFFIX}").map_err(|_| FormatError)?;
    if writer.is_truncated() {
        tracing::debug!(
            required = writer.required(),
            written = writer.written(),
            capacity = writer.capacity(),
            "greeting does not fit buffer"
        );
    }
    writer.finish().ok_or(FormatError)
}

#[cfg(test)]
#[path = "greeting_tests.rs"]
mod tests;
