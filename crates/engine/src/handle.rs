// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared view of engine state, readable while a run is in flight.

use std::sync::Arc;

use parking_lot::Mutex;
use runner_core::{format_summary, AttemptOutcome, RetryBudget, ReturnCodes};

#[derive(Debug)]
pub(crate) struct EngineState {
    pub(crate) budget: RetryBudget,
    pub(crate) return_codes: ReturnCodes,
}

impl EngineState {
    pub(crate) fn new(budget: RetryBudget) -> Self {
        Self { budget, return_codes: ReturnCodes::new() }
    }

    /// Charge a finished attempt: failures consume budget, every attempt is counted.
    pub(crate) fn record(&mut self, code: i32) -> AttemptOutcome {
        let outcome = AttemptOutcome::from_code(code);
        if outcome.is_failure() {
            self.budget.consume();
        }
        self.return_codes.record(code);
        outcome
    }
}

/// Cloneable handle onto an [`Engine`](crate::Engine)'s statistics.
///
/// Interrupt handlers hold one of these so they can print partial results
/// after the run future has been dropped.
#[derive(Clone, Debug)]
pub struct EngineHandle {
    state: Arc<Mutex<EngineState>>,
}

impl EngineHandle {
    pub(crate) fn new(state: Arc<Mutex<EngineState>>) -> Self {
        Self { state }
    }

    /// Statistics report for the attempts completed so far.
    pub fn summary(&self) -> String {
        format_summary(&self.state.lock().return_codes)
    }

    pub fn return_codes(&self) -> ReturnCodes {
        self.state.lock().return_codes.clone()
    }

    pub fn remaining_failures(&self) -> i64 {
        self.state.lock().budget.remaining()
    }

    /// Attempts completed so far.
    pub fn attempts(&self) -> u64 {
        self.state.lock().return_codes.total()
    }
}
