// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use similar_asserts::assert_eq;

#[test]
fn empty_histogram_is_header_only() {
    assert_eq!(format_summary(&ReturnCodes::new()), SUMMARY_HEADER);
}

#[test]
fn three_successes_one_failure() {
    let mut codes = ReturnCodes::new();
    for code in [0, 1, 0, 0] {
        codes.record(code);
    }
    assert_eq!(
        format_summary(&codes),
        "--- command execution statistics ---\n\
         return code: 0 amount: 3\n\
         return code: 1 amount: 1\n\
         most frequent return code: 0"
    );
}

#[test]
fn negative_codes_are_listed() {
    let mut codes = ReturnCodes::new();
    codes.record(-15);
    codes.record(-15);
    codes.record(2);
    let summary = format_summary(&codes);
    assert!(summary.contains("return code: -15 amount: 2"));
    assert!(summary.ends_with("most frequent return code: -15"));
}
