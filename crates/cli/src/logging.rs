// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr, kept separate from the command's reported output.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `--debug` nor an environment filter is given.
const DEFAULT_FILTER: &str = "warn";

/// Resolve the filter: `--debug` forces debug, then the environment, then warn.
pub fn filter(debug: bool, env_directives: Option<&str>) -> EnvFilter {
    if debug {
        return EnvFilter::new("debug");
    }
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init(debug: bool) {
    let directives = crate::env::log_filter();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(debug, directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
