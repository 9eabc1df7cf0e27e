// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration.
//!
//! There is no config file: settings come from command-line flags and their
//! environment fallbacks, with defaults in [`defaults`].

pub mod defaults;

use crate::cli::Cli;

/// What the runner does when the personalized greeting cannot be formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Skip the personalized line and still succeed.
    #[default]
    Ignore,
    /// Report the failure as the outcome of the run.
    Fail,
}

/// Settings for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Personalized greeting buffer capacity, terminator included.
    pub capacity: usize,
    pub policy: FailurePolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::CAPACITY,
            policy: FailurePolicy::Ignore,
        }
    }
}

impl RunConfig {
    /// Configuration of the strict app runner.
    pub fn app() -> Self {
        Self {
            policy: FailurePolicy::Fail,
            ..Self::default()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        let policy = if cli.strict {
            FailurePolicy::Fail
        } else {
            FailurePolicy::Ignore
        };
        Self {
            capacity: cli.capacity,
            policy,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
