// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable execution statistics.

use crate::return_codes::ReturnCodes;

pub const SUMMARY_HEADER: &str = "--- command execution statistics ---";

/// Format the statistics report for a histogram.
///
/// ```text
/// --- command execution statistics ---
/// return code: 0 amount: 3
/// return code: 1 amount: 1
/// most frequent return code: 0
/// ```
///
/// An empty histogram yields the header alone.
pub fn format_summary(codes: &ReturnCodes) -> String {
    let mut out = String::from(SUMMARY_HEADER);
    for (code, count) in codes.iter() {
        out.push_str(&format!("\nreturn code: {} amount: {}", code, count));
    }
    if let Some(code) = codes.most_frequent() {
        out.push_str(&format!("\nmost frequent return code: {}", code));
    }
    out
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
