// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line surface.

use clap::Parser;
use runner_core::TraceFlags;

/// A wrapper for any command with some useful options.
#[derive(Parser, Debug)]
#[command(name = "runner", version = crate::env::VERSION)]
pub struct Cli {
    /// Number of times to run the given command.
    #[arg(short = 'c', long, value_name = "COUNT", default_value_t = 1)]
    pub count: u32,

    /// Number of allowed failed command invocation attempts (negative for unlimited).
    #[arg(long, value_name = "N", default_value_t = -1, allow_negative_numbers = true)]
    pub failed_count: i64,

    /// If execution fails, a system trace log will be created.
    #[arg(long)]
    pub sys_trace: bool,

    /// If execution fails, a system calls log will be created.
    #[arg(long)]
    pub call_trace: bool,

    /// If execution fails, add the command output logs.
    #[arg(long)]
    pub log_trace: bool,

    /// Show debug logging for each step of the run.
    #[arg(long)]
    pub debug: bool,

    /// Command to run, either quoted as one string or as separate words.
    #[arg(value_name = "CMD", trailing_var_arg = true, allow_hyphen_values = true)]
    pub cmd: Vec<String>,
}

impl Cli {
    /// The command as discrete arguments.
    ///
    /// A single quoted string is split on whitespace; separate words are
    /// taken as given so arguments may contain spaces.
    pub fn command_args(&self) -> Vec<String> {
        match self.cmd.as_slice() {
            [single] => single.split_whitespace().map(str::to_string).collect(),
            words => words.to_vec(),
        }
    }

    pub fn trace_flags(&self) -> TraceFlags {
        TraceFlags::default()
            .sys_trace(self.sys_trace)
            .call_trace(self.call_trace)
            .log_trace(self.log_trace)
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
