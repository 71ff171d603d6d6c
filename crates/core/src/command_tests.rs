// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_command_is_rejected() {
    let err = CommandSpec::new(Vec::new(), TraceFlags::default()).unwrap_err();
    assert_eq!(err, ConfigError::NoCommand);
    assert_eq!(err.to_string(), "no command specified");
}

#[test]
fn empty_command_is_rejected_even_with_call_trace() {
    let flags = TraceFlags::default().call_trace(true);
    let err = CommandSpec::new(Vec::new(), flags).unwrap_err();
    assert_eq!(err, ConfigError::NoCommand);
}

#[test]
fn plain_command_keeps_argv() {
    let spec = CommandSpec::new(args(&["ls", "-l", "/tmp"]), TraceFlags::default()).unwrap();
    assert_eq!(spec.argv(), args(&["ls", "-l", "/tmp"]).as_slice());
    assert_eq!(spec.program(), "ls");
    assert_eq!(spec.args(), args(&["-l", "/tmp"]).as_slice());
}

#[test]
fn call_trace_prefixes_default_tracer_once() {
    let flags = TraceFlags::default().call_trace(true);
    let spec = CommandSpec::new(args(&["hostname"]), flags).unwrap();
    assert_eq!(spec.argv(), args(&["strace", "hostname"]).as_slice());
    assert_eq!(spec.argv().iter().filter(|a| *a == DEFAULT_TRACER).count(), 1);
}

#[test]
fn call_trace_uses_custom_tracer() {
    let flags = TraceFlags::default().call_trace(true);
    let spec = CommandSpec::with_tracer(args(&["false"]), flags, "ltrace").unwrap();
    assert_eq!(spec.program(), "ltrace");
    assert_eq!(spec.args(), args(&["false"]).as_slice());
}

#[test]
fn blank_tracer_is_rejected_only_with_call_trace() {
    let traced = TraceFlags::default().call_trace(true);
    assert_eq!(
        CommandSpec::with_tracer(args(&["true"]), traced, " ").unwrap_err(),
        ConfigError::EmptyTracer
    );
    assert!(CommandSpec::with_tracer(args(&["true"]), TraceFlags::default(), "").is_ok());
}

#[yare::parameterized(
    none     = { TraceFlags::default(),                   false, false, false },
    sys      = { TraceFlags::default().sys_trace(true),   true,  false, false },
    call     = { TraceFlags::default().call_trace(true),  false, true,  false },
    log      = { TraceFlags::default().log_trace(true),   false, false, true  },
)]
fn flag_setters_are_independent(flags: TraceFlags, sys: bool, call: bool, log: bool) {
    assert_eq!(flags.sys_trace, sys);
    assert_eq!(flags.call_trace, call);
    assert_eq!(flags.log_trace, log);
}

#[test]
fn display_joins_argv() {
    let flags = TraceFlags::default().call_trace(true);
    let spec = CommandSpec::new(args(&["echo", "hi"]), flags).unwrap();
    assert_eq!(spec.to_string(), "strace echo hi");
}
