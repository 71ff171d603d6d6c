// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

use runner_core::DEFAULT_TRACER;

/// Version string shown by `--version`
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

/// Directory for trace log files: RUNNER_LOG_DIR > current directory
pub fn log_dir() -> PathBuf {
    std::env::var("RUNNER_LOG_DIR")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// System-call tracer used by `--call-trace` (default `strace`)
pub fn tracer() -> String {
    std::env::var("RUNNER_TRACER")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TRACER.to_string())
}

/// Tracing filter directives: RUNNER_LOG > RUST_LOG
pub fn log_filter() -> Option<String> {
    ["RUNNER_LOG", "RUST_LOG"]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|s| !s.is_empty()))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
