// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The run loop: spawn, sample, wait, classify, repeat.

use std::process::{ExitStatus, Output, Stdio};
use std::sync::Arc;

use parking_lot::Mutex;
use runner_adapters::{Console, LogWriter, ResourceSampler, TraceSnapshot};
use runner_core::{AttemptOutcome, CommandSpec, LogCategory, RetryBudget};
use tokio::process::Command;

use crate::error::EngineError;
use crate::handle::{EngineHandle, EngineState};

/// Adapters the engine drives for side effects
#[derive(Clone)]
pub struct EngineDeps<S, W, C> {
    pub sampler: S,
    pub writer: W,
    pub console: C,
}

/// Why a run returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// All requested repetitions were attempted.
    Completed,
    /// The retry budget reached zero before the repetitions ran out.
    BudgetExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Attempts executed by this call to [`Engine::run`].
    pub attempts: u32,
    pub stop: StopReason,
}

/// Runs one command repeatedly, one attempt at a time.
pub struct Engine<S, W, C> {
    spec: CommandSpec,
    deps: EngineDeps<S, W, C>,
    state: Arc<Mutex<EngineState>>,
}

impl<S, W, C> Engine<S, W, C>
where
    S: ResourceSampler,
    W: LogWriter,
    C: Console,
{
    pub fn new(
        spec: CommandSpec,
        budget: impl Into<RetryBudget>,
        deps: EngineDeps<S, W, C>,
    ) -> Self {
        let state = Arc::new(Mutex::new(EngineState::new(budget.into())));
        Self { spec, deps, state }
    }

    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    /// Handle for reading statistics from outside the run loop.
    pub fn handle(&self) -> EngineHandle {
        EngineHandle::new(Arc::clone(&self.state))
    }

    /// Remaining allowed failures. Negative means unlimited.
    pub fn remaining_failures(&self) -> i64 {
        self.state.lock().budget.remaining()
    }

    /// Overwrite the retry budget. Bookkeeping for the owner of the engine
    /// between runs; the run loop maintains it on its own.
    pub fn set_remaining_failures(&mut self, remaining: i64) {
        self.state.lock().budget = RetryBudget::new(remaining);
    }

    pub fn summary(&self) -> String {
        self.handle().summary()
    }

    /// Run the command up to `repetitions` times.
    ///
    /// Stops early once the retry budget is exactly zero. Non-zero exits are
    /// recorded, never returned as errors. A spawn failure aborts the run
    /// without touching the budget or the histogram.
    ///
    /// Dropping the returned future kills the in-flight child; statistics of
    /// completed attempts stay readable through [`Engine::handle`].
    pub async fn run(&mut self, repetitions: u32) -> Result<RunOutcome, EngineError> {
        tracing::info!(command = %self.spec, repetitions, budget = %self.budget(), "starting run");

        let mut attempts = 0;
        for _ in 0..repetitions {
            if self.budget().is_exhausted() {
                tracing::info!(attempts, "retry budget exhausted, stopping");
                return Ok(RunOutcome { attempts, stop: StopReason::BudgetExhausted });
            }
            self.attempt(attempts + 1).await?;
            attempts += 1;
        }

        tracing::info!(attempts, "run complete");
        Ok(RunOutcome { attempts, stop: StopReason::Completed })
    }

    fn budget(&self) -> RetryBudget {
        self.state.lock().budget
    }

    async fn attempt(&self, attempt: u32) -> Result<AttemptOutcome, EngineError> {
        let flags = self.spec.flags();

        let mut cmd = Command::new(self.spec.program());
        cmd.args(self.spec.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd
            .spawn()
            .map_err(|source| EngineError::Spawn { command: self.spec.to_string(), source })?;
        let pid = child.id();
        tracing::debug!(attempt, pid, "spawned");

        let snapshot = match (flags.sys_trace, pid) {
            (true, Some(pid)) => self.sample(pid).await,
            _ => None,
        };

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| EngineError::Wait { command: self.spec.to_string(), source })?;
        let code = exit_code(output.status);

        let (outcome, remaining) = {
            let mut state = self.state.lock();
            let outcome = state.record(code);
            (outcome, state.budget.remaining())
        };
        tracing::debug!(attempt, exit_code = code, %outcome, remaining, "attempt finished");

        if outcome.is_failure() {
            self.on_failure(snapshot, &output).await;
        }
        Ok(outcome)
    }

    /// Best-effort: the process may already be gone.
    async fn sample(&self, pid: u32) -> Option<TraceSnapshot> {
        let sampler = self.deps.sampler.clone();
        match tokio::task::spawn_blocking(move || sampler.capture(pid)).await {
            Ok(Ok(snapshot)) => Some(snapshot),
            Ok(Err(e)) => {
                tracing::warn!(pid, error = %e, "resource sampling failed");
                None
            }
            Err(e) => {
                tracing::warn!(pid, error = %e, "resource sampling task failed");
                None
            }
        }
    }

    async fn on_failure(&self, snapshot: Option<TraceSnapshot>, output: &Output) {
        let flags = self.spec.flags();

        if let Some(snapshot) = snapshot.filter(|_| flags.sys_trace) {
            self.persist(LogCategory::SysTrace, &snapshot.to_string()).await;
        }

        if flags.call_trace {
            self.persist(LogCategory::CallTrace, &String::from_utf8_lossy(&output.stderr)).await;
        }

        if flags.log_trace {
            for captured in [&output.stdout, &output.stderr] {
                if !captured.is_empty() {
                    self.deps.console.echo(String::from_utf8_lossy(captured).trim_end());
                }
            }
        }
    }

    async fn persist(&self, category: LogCategory, content: &str) {
        if let Err(e) = self.deps.writer.write_log(category, content).await {
            tracing::warn!(%category, error = %e, "failed to persist trace log");
        }
    }
}

/// Exit code of a finished child. Signal termination maps to `-signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

#[cfg(test)]
#[path = "engine_tests/mod.rs"]
mod tests;
