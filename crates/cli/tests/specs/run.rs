// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Running commands and reporting statistics.

use crate::prelude::*;

#[test]
fn single_success_reports_zero() {
    let run = cli().args(&["true"]).passes();
    similar_asserts::assert_eq!(
        run.stdout(),
        "Executing: true\n\
         --- command execution statistics ---\n\
         return code: 0 amount: 1\n\
         most frequent return code: 0\n"
    );
}

#[test]
fn quoted_command_is_split() {
    cli()
        .args(&["-c", "2", "sh -c true"])
        .passes()
        .stdout_has("Executing: sh -c true")
        .stdout_has("return code: 0 amount: 2");
}

#[test]
fn failing_command_still_exits_zero() {
    cli()
        .args(&["--count", "3", "false"])
        .passes()
        .stdout_has("return code: 1 amount: 3")
        .stdout_has("most frequent return code: 1");
}

#[test]
fn failed_count_stops_early() {
    cli()
        .args(&["-c", "5", "--failed-count", "2", "false"])
        .passes()
        .stdout_has("return code: 1 amount: 2")
        .stdout_lacks("amount: 3");
}

#[test]
fn zero_failed_count_runs_nothing() {
    let run = cli().args(&["-c", "3", "--failed-count", "0", "true"]).passes();
    assert_eq!(run.stdout(), format!("Executing: true\n{HEADER}\n"));
}

#[test]
fn trailing_words_are_passed_through() {
    cli()
        .args(&["-c", "1", "sh", "-c", "exit 3"])
        .passes()
        .stdout_has("return code: 3 amount: 1");
}

#[test]
fn missing_program_aborts_with_error() {
    cli()
        .args(&["-c", "3", "runner-spec-no-such-program"])
        .exits(1)
        .stdout_has(HEADER)
        .stdout_lacks("return code:")
        .stderr_has("failed to spawn `runner-spec-no-such-program`");
}

#[test]
fn debug_flag_logs_attempts_to_stderr() {
    cli()
        .args(&["--debug", "false"])
        .passes()
        .stderr_has("attempt finished")
        .stdout_lacks("attempt finished");
}

#[cfg(unix)]
#[test]
fn interrupt_during_first_attempt_still_reports() {
    cli()
        .args(&["sh", "-c", "kill -INT $PPID"])
        .passes()
        .stdout_has("Executing: sh -c kill -INT $PPID")
        .stdout_has(HEADER);
}
