// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Stdout carries only greetings. The filter comes from `LEARNING_LOG` when
//! set, otherwise from `--verbose`. A filter that does not parse falls back
//! to the default and is reported once on stderr; it never stops a run.

use tracing_subscriber::EnvFilter;

use crate::config::defaults;

/// Pick the filter directive from the environment value and `--verbose`.
pub fn filter_directive(env: Option<&str>, verbose: bool) -> &str {
    match env.map(str::trim) {
        Some(spec) if !spec.is_empty() => spec,
        _ if verbose => defaults::log::VERBOSE_FILTER,
        _ => defaults::log::FILTER,
    }
}

/// Parse the selected directive, falling back to the default filter.
///
/// Returns the filter and, on fallback, the warning to log once the
/// subscriber is installed.
pub fn resolve_filter(env: Option<&str>, verbose: bool) -> (EnvFilter, Option<String>) {
    let directive = filter_directive(env, verbose);
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => {
            let warning = format!(
                "invalid {} filter {directive:?}, using {:?}: {err}",
                defaults::log::ENV,
                defaults::log::FILTER
            );
            (EnvFilter::new(defaults::log::FILTER), Some(warning))
        }
    }
}

/// Install the global subscriber.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let env = std::env::var(defaults::log::ENV).ok();
    let (filter, warning) = resolve_filter(env.as_deref(), verbose);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;

    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
