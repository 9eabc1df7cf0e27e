// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for run configuration.

/// Personalized greeting buffer capacity in bytes, terminator included (100).
///
/// Used by both the plain entry point and the strict app runner.
pub const CAPACITY: usize = 100;

/// Largest capacity accepted from the command line (64 KiB).
pub const MAX_CAPACITY: usize = 64 * 1024;

/// Logging defaults.
pub mod log {
    /// Environment variable holding a `tracing` filter directive.
    pub const ENV: &str = "LEARNING_LOG";

    /// Filter when neither the environment nor `--verbose` selects one.
    pub const FILTER: &str = "warn";

    /// Filter selected by `--verbose`.
    pub const VERBOSE_FILTER: &str = "debug";
}
