//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing learning CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::process::Command;

/// The fixed greeting line, newline included.
pub const FIXED_LINE: &str = "Hello, from learning!\n";

/// Returns a Command configured to run the learning binary.
///
/// `LEARNING_LOG` is cleared so host logging settings stay off stderr.
pub fn learning_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("learning"));
    cmd.env_remove("LEARNING_LOG");
    cmd
}

/// An ASCII name of exactly `len` bytes.
pub fn name_of_len(len: usize) -> String {
    "n".repeat(len)
}
