// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Execution engine: runs a command repeatedly under a retry budget and
//! keeps return-code statistics.

mod engine;
mod error;
mod handle;

pub use engine::{Engine, EngineDeps, RunOutcome, StopReason};
pub use error::EngineError;
pub use handle::EngineHandle;
