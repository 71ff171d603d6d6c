// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trace logs and captured output on failure.

use crate::prelude::*;

#[test]
fn log_trace_echoes_output_of_failures() {
    cli()
        .args(&["--log-trace", "sh", "-c", "echo from-stdout; echo from-stderr >&2; exit 1"])
        .passes()
        .stdout_has("\nfrom-stdout\n")
        .stdout_has("\nfrom-stderr\n");
}

#[test]
fn output_is_hidden_without_log_trace() {
    // The quotes keep the echoed word out of the "Executing:" line
    cli().args(&["sh", "-c", "echo hid''den; exit 1"]).passes().stdout_lacks("hidden");
}

#[test]
fn call_trace_writes_log_in_working_directory() {
    let dir = TempDir::new().unwrap();
    // `env` runs the command unchanged, standing in for strace
    cli()
        .env("RUNNER_TRACER", "env")
        .current_dir(dir.path())
        .args(&["--call-trace", "sh", "-c", "echo syscalls >&2; exit 1"])
        .passes()
        .stdout_has("Executing: sh -c echo syscalls >&2; exit 1");

    let logs = files_with_prefix(dir.path(), "call-trace-");
    assert_eq!(logs.len(), 1, "expected one call-trace log, found {logs:?}");
    assert!(logs[0].ends_with(".log"));
    let content = std::fs::read_to_string(dir.path().join(&logs[0])).unwrap();
    assert!(content.contains("syscalls"));
}

#[test]
fn call_trace_on_success_writes_nothing() {
    let dir = TempDir::new().unwrap();
    cli()
        .env("RUNNER_TRACER", "env")
        .current_dir(dir.path())
        .args(&["--call-trace", "true"])
        .passes();

    assert!(files_with_prefix(dir.path(), "call-trace-").is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn sys_trace_writes_log_to_configured_directory() {
    let dir = TempDir::new().unwrap();
    cli()
        .env("RUNNER_LOG_DIR", dir.path())
        .args(&["--sys-trace", "sh", "-c", "sleep 0.2; exit 1"])
        .passes()
        .stdout_has("return code: 1 amount: 1");

    let logs = files_with_prefix(dir.path(), "sys-trace-");
    assert_eq!(logs.len(), 1, "expected one sys-trace log, found {logs:?}");
    let content = std::fs::read_to_string(dir.path().join(&logs[0])).unwrap();
    assert!(content.contains("Disk I/O:"));
    assert!(content.contains("% Memory:"));
    assert!(content.contains("Threads: ["));
    assert!(content.contains("Network Counters:"));
}
