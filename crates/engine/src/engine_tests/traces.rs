// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use runner_core::LogCategory;

#[tokio::test]
async fn sys_trace_persists_once_per_failure() {
    let mut h = setup(args(&["false"]), TraceFlags::default().sys_trace(true), -1);

    h.engine.run(3).await.unwrap();

    let logs = h.writer.calls_for(LogCategory::SysTrace);
    assert_eq!(logs.len(), 3);
    assert_eq!(h.sampler.calls(), 3);
    let pid = h.sampler.pids()[0];
    assert_eq!(logs[0].content, FakeSampler::snapshot_for(pid).to_string());
}

#[tokio::test]
async fn sys_trace_samples_but_never_persists_successes() {
    let mut h = setup(args(&["true"]), TraceFlags::default().sys_trace(true), -1);

    h.engine.run(2).await.unwrap();

    assert_eq!(h.sampler.calls(), 2);
    assert!(h.writer.calls().is_empty());
}

#[tokio::test]
async fn sampling_failure_does_not_affect_attempt() {
    let spec = CommandSpec::new(args(&["false"]), TraceFlags::default().sys_trace(true)).unwrap();
    let mut h = setup_with(spec, -1, FakeSampler::process_gone());

    let outcome = h.engine.run(2).await.unwrap();

    assert_eq!(outcome.attempts, 2);
    assert_eq!(h.engine.handle().return_codes().count(1), 2);
    assert!(h.writer.calls_for(LogCategory::SysTrace).is_empty());
}

#[tokio::test]
async fn sampler_untouched_without_sys_trace() {
    let mut h = setup(args(&["false"]), TraceFlags::default(), -1);

    h.engine.run(2).await.unwrap();

    assert_eq!(h.sampler.calls(), 0);
    assert!(h.writer.calls().is_empty());
}

/// `env` stands in for the system-call tracer: it runs the wrapped command.
#[tokio::test]
async fn call_trace_persists_stderr_of_failures() {
    let flags = TraceFlags::default().call_trace(true);
    let spec = CommandSpec::with_tracer(sh("echo traced >&2; exit 2"), flags, "env").unwrap();
    assert_eq!(spec.program(), "env");
    let mut h = setup_with(spec, -1, FakeSampler::new());

    h.engine.run(2).await.unwrap();

    let logs = h.writer.calls_for(LogCategory::CallTrace);
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].content, "traced\n");
    assert_eq!(h.engine.spec().argv().iter().filter(|a| *a == "env").count(), 1);
}

#[tokio::test]
async fn call_trace_ignores_successes() {
    let flags = TraceFlags::default().call_trace(true);
    let spec = CommandSpec::with_tracer(sh("echo noise >&2"), flags, "env").unwrap();
    let mut h = setup_with(spec, -1, FakeSampler::new());

    h.engine.run(1).await.unwrap();

    assert!(h.writer.calls().is_empty());
}

#[tokio::test]
async fn log_trace_echoes_stdout_then_stderr_on_failure() {
    let flags = TraceFlags::default().log_trace(true);
    let mut h = setup(sh("echo out; echo err >&2; exit 1"), flags, -1);

    h.engine.run(1).await.unwrap();

    assert_eq!(h.console.echoed(), vec!["out".to_string(), "err".to_string()]);
}

#[tokio::test]
async fn log_trace_skips_empty_streams() {
    let flags = TraceFlags::default().log_trace(true);
    let mut h = setup(sh("echo only-err >&2; exit 4"), flags, -1);

    h.engine.run(1).await.unwrap();

    assert_eq!(h.console.echoed(), vec!["only-err".to_string()]);
}

#[tokio::test]
async fn log_trace_silent_on_success() {
    let flags = TraceFlags::default().log_trace(true);
    let mut h = setup(sh("echo fine"), flags, -1);

    h.engine.run(1).await.unwrap();

    assert!(h.console.echoed().is_empty());
}

#[tokio::test]
async fn output_is_captured_not_echoed_without_log_trace() {
    let mut h = setup(sh("echo hidden; exit 1"), TraceFlags::default(), -1);

    h.engine.run(1).await.unwrap();

    assert!(h.console.echoed().is_empty());
}
