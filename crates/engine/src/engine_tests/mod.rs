// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use runner_adapters::{FakeConsole, FakeLogWriter, FakeSampler};
use runner_core::TraceFlags;

mod budget;
mod interrupt;
mod spawn;
mod traces;

type TestEngine = Engine<FakeSampler, FakeLogWriter, FakeConsole>;

struct TestHarness {
    engine: TestEngine,
    sampler: FakeSampler,
    writer: FakeLogWriter,
    console: FakeConsole,
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// `sh -c <script>`
fn sh(script: &str) -> Vec<String> {
    args(&["sh", "-c", script])
}

fn setup_with(spec: CommandSpec, budget: i64, sampler: FakeSampler) -> TestHarness {
    let writer = FakeLogWriter::new();
    let console = FakeConsole::new();
    let engine = Engine::new(
        spec,
        budget,
        EngineDeps { sampler: sampler.clone(), writer: writer.clone(), console: console.clone() },
    );
    TestHarness { engine, sampler, writer, console }
}

fn setup(argv: Vec<String>, flags: TraceFlags, budget: i64) -> TestHarness {
    let spec = CommandSpec::new(argv, flags).unwrap();
    setup_with(spec, budget, FakeSampler::new())
}

#[tokio::test]
async fn successful_command_records_zero() {
    let mut h = setup(args(&["true"]), TraceFlags::default(), -1);

    let outcome = h.engine.run(3).await.unwrap();

    assert_eq!(outcome, RunOutcome { attempts: 3, stop: StopReason::Completed });
    assert_eq!(h.engine.handle().return_codes().count(0), 3);
    assert_eq!(h.engine.remaining_failures(), -1);
}

#[tokio::test]
async fn exit_codes_are_recorded_verbatim() {
    let mut h = setup(sh("exit 3"), TraceFlags::default(), -1);

    h.engine.run(2).await.unwrap();

    let codes = h.engine.handle().return_codes();
    assert_eq!(codes.count(3), 2);
    assert_eq!(codes.total(), 2);
}

#[cfg(unix)]
#[tokio::test]
async fn signal_termination_is_negative_code() {
    let mut h = setup(sh("kill -9 $$"), TraceFlags::default(), -1);

    h.engine.run(1).await.unwrap();

    assert_eq!(h.engine.handle().return_codes().count(-9), 1);
    assert_eq!(h.engine.remaining_failures(), -2);
}

#[tokio::test]
async fn fresh_engine_summary_is_header_only() {
    let h = setup(args(&["true"]), TraceFlags::default(), -1);
    assert_eq!(h.engine.summary(), runner_core::SUMMARY_HEADER);
}

#[tokio::test]
async fn mixed_outcomes_summary() {
    let dir = tempfile::TempDir::new().unwrap();
    let marker = dir.path().join("ran-once");
    // Fails on the second attempt only
    let script = format!(
        concat!(
            "if [ -f {m}.2 ]; then exit 0; ",
            "elif [ -f {m} ]; then touch {m}.2; exit 1; ",
            "else touch {m}; exit 0; fi"
        ),
        m = marker.display()
    );
    let mut h = setup(sh(&script), TraceFlags::default(), -1);

    h.engine.run(4).await.unwrap();

    similar_asserts::assert_eq!(
        h.engine.summary(),
        "--- command execution statistics ---\n\
         return code: 0 amount: 3\n\
         return code: 1 amount: 1\n\
         most frequent return code: 0"
    );
}

#[tokio::test]
async fn histogram_accumulates_across_runs() {
    let mut h = setup(args(&["false"]), TraceFlags::default(), -1);

    h.engine.run(2).await.unwrap();
    h.engine.run(3).await.unwrap();

    assert_eq!(h.engine.handle().attempts(), 5);
    assert_eq!(h.engine.remaining_failures(), -6);
}

#[tokio::test]
async fn zero_repetitions_run_nothing() {
    let mut h = setup(args(&["false"]), TraceFlags::default(), 2);

    let outcome = h.engine.run(0).await.unwrap();

    assert_eq!(outcome, RunOutcome { attempts: 0, stop: StopReason::Completed });
    assert!(h.engine.handle().return_codes().is_empty());
}

#[test]
fn exit_code_from_status() {
    let status = std::process::Command::new("sh").args(["-c", "exit 7"]).status().unwrap();
    assert_eq!(exit_code(status), 7);
}
