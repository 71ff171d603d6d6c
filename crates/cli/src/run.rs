// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire the parsed command line to an engine and report its statistics.

use anyhow::Context;
use runner_adapters::{FileLogWriter, ProcSampler, StdoutConsole};
use runner_core::CommandSpec;
use runner_engine::{Engine, EngineDeps, RunOutcome};

use crate::args::Cli;
use crate::exit_error::ExitError;

/// How the run loop ended, from the CLI's point of view.
enum Finish {
    Done(RunOutcome),
    Interrupted,
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for interrupts");
        std::future::pending::<()>().await;
    }
}

pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    println!("Executing: {}", cli.cmd.join(" "));

    let tracer = crate::env::tracer();
    let spec = CommandSpec::with_tracer(cli.command_args(), cli.trace_flags(), &tracer)
        .map_err(|e| ExitError::usage(e.to_string()))?;

    let deps = EngineDeps {
        sampler: ProcSampler::new(),
        writer: FileLogWriter::new(crate::env::log_dir()),
        console: StdoutConsole,
    };
    let mut engine = Engine::new(spec, cli.failed_count, deps);
    let handle = engine.handle();

    // The interrupt listener must be registered before the first child spawns.
    // Dropping the run future on interrupt kills the in-flight child.
    let result = tokio::select! {
        biased;
        _ = interrupted() => Ok(Finish::Interrupted),
        result = engine.run(cli.count) => result.map(Finish::Done),
    };

    match &result {
        Ok(Finish::Done(outcome)) => {
            tracing::debug!(attempts = outcome.attempts, stop = ?outcome.stop, "run finished")
        }
        Ok(Finish::Interrupted) => tracing::info!(attempts = handle.attempts(), "interrupted"),
        Err(_) => {}
    }

    println!("{}", handle.summary());
    result.map(|_| ()).context("run aborted")
}
