// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors that abort a run.
///
/// A command exiting non-zero is not an error here; it is recorded as a
/// failed attempt.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The command could not be started (not found, permission denied).
    /// Nothing is recorded and no budget is consumed.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// Waiting on the child or collecting its output failed.
    #[error("failed to wait for `{command}`: {source}")]
    Wait {
        command: String,
        source: std::io::Error,
    },
}
