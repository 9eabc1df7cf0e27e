// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded, NUL-terminating writer over a caller-owned byte slice.
//!
//! Bytes that fit are copied, the rest are counted and dropped. One byte is
//! always held back for the terminator, so the written text is at most
//! `capacity - 1` bytes long.

use std::fmt;

/// `fmt::Write` sink over a fixed-capacity byte slice.
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    written: usize,
    required: usize,
}

impl<'a> BoundedWriter<'a> {
    /// Wrap `buf`, or `None` when it has no room for a terminator.
    pub fn new(buf: &'a mut [u8]) -> Option<Self> {
        if buf.is_empty() {
            return None;
        }
        Some(Self {
            buf,
            written: 0,
            required: 0,
        })
    }

    /// Slice length, terminator byte included.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes copied into the buffer so far, terminator excluded.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Bytes the full text needs, terminator excluded.
    pub fn required(&self) -> usize {
        self.required
    }

    /// Whether any byte of the text was dropped.
    pub fn is_truncated(&self) -> bool {
        self.required > self.written
    }

    /// Terminate the buffer and return the text, or `None` if any byte was
    /// dropped.
    pub fn finish(self) -> Option<&'a str> {
        let truncated = self.is_truncated();
        let Self { buf, written, .. } = self;
        buf[written] = 0;
        if truncated {
            return None;
        }
        let buf: &'a [u8] = buf;
        std::str::from_utf8(&buf[..written]).ok()
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        self.required = self.required.saturating_add(bytes.len());

        // written <= capacity - 1 holds from construction onwards
        let room = self.buf.len() - 1 - self.written;
        let n = room.min(bytes.len());
        self.buf[self.written..self.written + n].copy_from_slice(&bytes[..n]);
        self.written += n;
        Ok(())
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
