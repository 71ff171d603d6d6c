// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Return-code histogram and attempt classification.

use std::collections::BTreeMap;

/// How a finished attempt is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success,
    /// Any non-zero code, including negative codes for signal termination.
    Failure { code: i32 },
}

impl AttemptOutcome {
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            AttemptOutcome::Success
        } else {
            AttemptOutcome::Failure { code }
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(self, AttemptOutcome::Failure { .. })
    }
}

crate::simple_display! {
    AttemptOutcome {
        Success => "success",
        Failure { .. } => "failure",
    }
}

/// Occurrence count per exit code.
///
/// Grows monotonically; the total across all codes equals the number of
/// attempts recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnCodes {
    counts: BTreeMap<i32, u32>,
}

impl ReturnCodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, code: i32) {
        *self.counts.entry(code).or_insert(0) += 1;
    }

    pub fn count(&self, code: i32) -> u32 {
        self.counts.get(&code).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&n| u64::from(n)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct codes with their counts, lowest code first.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.counts.iter().map(|(&code, &count)| (code, count))
    }

    /// Code with the highest count. Ties go to the lowest code.
    pub fn most_frequent(&self) -> Option<i32> {
        let mut best: Option<(i32, u32)> = None;
        for (code, count) in self.iter() {
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((code, count)),
            }
        }
        best.map(|(code, _)| code)
    }
}

#[cfg(test)]
#[path = "return_codes_tests.rs"]
mod tests;
