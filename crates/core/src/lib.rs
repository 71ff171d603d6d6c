// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! runner-core: Data model for the command runner

pub mod macros;

pub mod budget;
pub mod command;
pub mod log_category;
pub mod return_codes;
pub mod summary;

pub use budget::RetryBudget;
pub use command::{CommandSpec, ConfigError, TraceFlags, DEFAULT_TRACER};
pub use log_category::LogCategory;
pub use return_codes::{AttemptOutcome, ReturnCodes};
pub use summary::{format_summary, SUMMARY_HEADER};
