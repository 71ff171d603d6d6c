// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers for driving the `runner` binary.

use std::path::Path;
use std::process::Output;

pub use tempfile::TempDir;

pub const HEADER: &str = "--- command execution statistics ---";

pub struct Cli {
    cmd: assert_cmd::Command,
}

/// `runner` with a clean environment for its own variables.
pub fn cli() -> Cli {
    let mut cmd = assert_cmd::Command::cargo_bin("runner").unwrap();
    for key in ["RUNNER_LOG_DIR", "RUNNER_TRACER", "RUNNER_LOG", "RUST_LOG"] {
        cmd.env_remove(key);
    }
    Cli { cmd }
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Run and expect exit code 0
    pub fn passes(mut self) -> RunAssert {
        RunAssert { output: self.cmd.assert().success().get_output().clone() }
    }

    /// Run and expect the given non-zero exit code
    pub fn exits(mut self, code: i32) -> RunAssert {
        RunAssert { output: self.cmd.assert().code(code).get_output().clone() }
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    pub fn stdout_has(&self, expected: &str) -> &Self {
        let stdout = self.stdout();
        assert!(stdout.contains(expected), "stdout missing {expected:?}:\n{stdout}");
        self
    }

    pub fn stdout_lacks(&self, unexpected: &str) -> &Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(unexpected), "stdout has {unexpected:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(&self, expected: &str) -> &Self {
        let stderr = self.stderr();
        assert!(stderr.contains(expected), "stderr missing {expected:?}:\n{stderr}");
        self
    }
}

/// Names of files in `dir` that start with `prefix`.
pub fn files_with_prefix(dir: &Path, prefix: &str) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with(prefix))
        .collect();
    names.sort();
    names
}
