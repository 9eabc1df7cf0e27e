// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use clap::Parser;

use crate::config::defaults;

/// Print a greeting, and a personalized one when given a name
#[derive(Parser)]
#[command(name = "learning")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Name to greet
    // Names may start with '-'; only known flags are taken as flags.
    #[arg(value_name = "NAME", allow_hyphen_values = true)]
    pub name: Option<String>,

    /// Arguments after the name (ignored)
    #[arg(value_name = "EXTRA", hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Exit with status 1 when the personalized greeting does not fit
    #[arg(long)]
    pub strict: bool,

    /// Greeting buffer capacity in bytes, terminator included
    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = defaults::CAPACITY,
        value_parser = parse_capacity,
    )]
    pub capacity: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Rebuild the invocation argument list: program name, then the name
    /// and any extra arguments.
    pub fn invocation(&self) -> Vec<String> {
        let program = std::env::args_os()
            .next()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_else(|| "learning".to_string());

        let mut args = vec![program];
        if let Some(name) = &self.name {
            args.push(name.clone());
            args.extend(self.extra.iter().cloned());
        }
        args
    }
}

fn parse_capacity(value: &str) -> Result<usize, String> {
    let capacity: usize = value.parse().map_err(|e| format!("{e}"))?;
    if capacity == 0 {
        return Err("capacity must be at least 1 byte".to_string());
    }
    if capacity > defaults::MAX_CAPACITY {
        return Err(format!(
            "capacity must be at most {} bytes",
            defaults::MAX_CAPACITY
        ));
    }
    Ok(capacity)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
