// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retry budget: how many more failed attempts are tolerated.

use std::fmt;

/// Remaining allowed failures.
///
/// - negative: unlimited; decrementing never reaches zero
/// - zero: exhausted, no further attempts
/// - positive `n`: up to `n` more failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget(i64);

impl RetryBudget {
    pub const UNLIMITED: RetryBudget = RetryBudget(-1);

    pub fn new(remaining: i64) -> Self {
        Self(remaining)
    }

    pub fn remaining(self) -> i64 {
        self.0
    }

    pub fn is_unlimited(self) -> bool {
        self.0 < 0
    }

    /// Only an exact zero stops the run loop.
    pub fn is_exhausted(self) -> bool {
        self.0 == 0
    }

    /// Charge one failed attempt.
    pub fn consume(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self::UNLIMITED
    }
}

impl From<i64> for RetryBudget {
    fn from(remaining: i64) -> Self {
        Self(remaining)
    }
}

impl fmt::Display for RetryBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unlimited() {
            write!(f, "unlimited")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;
