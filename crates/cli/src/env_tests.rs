// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn clear() {
    for key in ["RUNNER_LOG_DIR", "RUNNER_TRACER", "RUNNER_LOG", "RUST_LOG"] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn defaults_without_environment() {
    clear();
    assert_eq!(log_dir(), PathBuf::from("."));
    assert_eq!(tracer(), "strace");
    assert_eq!(log_filter(), None);
}

#[test]
#[serial]
fn log_dir_from_environment() {
    clear();
    std::env::set_var("RUNNER_LOG_DIR", "/tmp/runner-logs");
    assert_eq!(log_dir(), PathBuf::from("/tmp/runner-logs"));
    clear();
}

#[test]
#[serial]
fn blank_tracer_falls_back_to_default() {
    clear();
    std::env::set_var("RUNNER_TRACER", "  ");
    assert_eq!(tracer(), "strace");
    std::env::set_var("RUNNER_TRACER", "ltrace");
    assert_eq!(tracer(), "ltrace");
    clear();
}

#[test]
#[serial]
fn runner_log_wins_over_rust_log() {
    clear();
    std::env::set_var("RUST_LOG", "info");
    assert_eq!(log_filter().as_deref(), Some("info"));
    std::env::set_var("RUNNER_LOG", "runner_engine=debug");
    assert_eq!(log_filter().as_deref(), Some("runner_engine=debug"));
    clear();
}

#[test]
fn version_includes_package_version() {
    assert!(VERSION.starts_with(env!("CARGO_PKG_VERSION")));
}
