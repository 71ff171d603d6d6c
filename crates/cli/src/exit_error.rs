// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Run code returns `ExitError` (wrapped in `anyhow`) instead of calling
//! `std::process::exit()`, so `main()` decides how the process ends.

use std::fmt;

/// Exit code for a command line that parsed but cannot be run.
pub const USAGE_EXIT_CODE: i32 = 2;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(USAGE_EXIT_CODE, message)
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Process exit status for an error bubbled up to `main`. Defaults to 1.
pub fn exit_status_for(err: &anyhow::Error) -> u8 {
    let code = err.downcast_ref::<ExitError>().map(|e| e.code).unwrap_or(1);
    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
