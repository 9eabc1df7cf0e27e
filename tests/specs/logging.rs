// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for diagnostic logging.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > Verbose logs go to stderr, stdout keeps only greetings
#[test]
fn verbose_logs_skipped_greeting_to_stderr() {
    learning_cmd()
        .args(["-v", "--capacity", "5", "VeryLongName"])
        .assert()
        .success()
        .stdout(FIXED_LINE)
        .stderr(predicates::str::contains("skipping personalized greeting"));
}

/// > LEARNING_LOG selects the filter
#[test]
fn log_env_selects_filter() {
    learning_cmd()
        .env("LEARNING_LOG", "debug")
        .args(["--capacity", "5", "VeryLongName"])
        .assert()
        .success()
        .stderr(predicates::str::contains("greeting does not fit buffer"));
}

/// > An invalid LEARNING_LOG filter falls back without stopping the run
#[test]
fn invalid_log_filter_warns_and_still_greets() {
    learning_cmd()
        .env("LEARNING_LOG", "learning=loud")
        .arg("World")
        .assert()
        .success()
        .stdout(format!("{FIXED_LINE}Hello, World!\n"))
        .stderr(predicates::str::contains("invalid LEARNING_LOG filter"));
}
