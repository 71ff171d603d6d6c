// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command specification: the argument vector to run and its trace flags.

use std::fmt;

use thiserror::Error;

/// Default system-call tracing front-end used for call-trace.
pub const DEFAULT_TRACER: &str = "strace";

/// Errors raised while building a [`CommandSpec`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no command specified")]
    NoCommand,

    #[error("call-trace tracer must not be empty")]
    EmptyTracer,
}

/// Which diagnostics to capture when an attempt fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceFlags {
    /// Sample process resource usage and persist it as a `sys-trace` log.
    pub sys_trace: bool,
    /// Run under a system-call tracer and persist its stderr as a `call-trace` log.
    pub call_trace: bool,
    /// Echo captured stdout/stderr to the console.
    pub log_trace: bool,
}

impl TraceFlags {
    crate::flag_setters! { sys_trace, call_trace, log_trace }
}

/// Immutable description of the command an engine runs.
///
/// When call-trace is enabled the tracer is prepended to the argument vector
/// once, at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    argv: Vec<String>,
    flags: TraceFlags,
}

impl CommandSpec {
    /// Build a spec using [`DEFAULT_TRACER`] for call-trace.
    pub fn new(args: Vec<String>, flags: TraceFlags) -> Result<Self, ConfigError> {
        Self::with_tracer(args, flags, DEFAULT_TRACER)
    }

    /// Build a spec with an explicit call-trace front-end.
    pub fn with_tracer(
        args: Vec<String>,
        flags: TraceFlags,
        tracer: &str,
    ) -> Result<Self, ConfigError> {
        if args.is_empty() {
            return Err(ConfigError::NoCommand);
        }

        let argv = if flags.call_trace {
            if tracer.trim().is_empty() {
                return Err(ConfigError::EmptyTracer);
            }
            let mut wrapped = Vec::with_capacity(args.len() + 1);
            wrapped.push(tracer.to_string());
            wrapped.extend(args);
            wrapped
        } else {
            args
        };

        Ok(Self { argv, flags })
    }

    /// Full argument vector as spawned, tracer included.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Program to execute (first element of [`argv`](Self::argv)).
    pub fn program(&self) -> &str {
        // argv is never empty: construction rejects empty vectors
        self.argv.first().map(String::as_str).unwrap_or_default()
    }

    /// Arguments passed to [`program`](Self::program).
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }

    pub fn flags(&self) -> TraceFlags {
        self.flags
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
