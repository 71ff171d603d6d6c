// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence of trace logs for failed attempts.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Local, NaiveTime};
use runner_core::LogCategory;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

/// Errors from log persistence
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
}

/// Adapter that stores a trace log and reports where it went.
#[async_trait]
pub trait LogWriter: Clone + Send + Sync + 'static {
    async fn write_log(&self, category: LogCategory, content: &str) -> Result<PathBuf, LogError>;
}

/// `<category>-<HH-MM-SS>.log`
pub fn log_file_name(category: LogCategory, time: NaiveTime) -> String {
    format!("{}-{}.log", category, time.format("%H-%M-%S"))
}

/// Writes plain-text log files into a directory, named by local wall-clock time.
///
/// Logs of the same category written within the same second share a file;
/// later content is appended after a blank line.
#[derive(Clone, Debug)]
pub struct FileLogWriter {
    dir: PathBuf,
}

impl FileLogWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn append(path: &Path, content: &str) -> std::io::Result<()> {
        let existing = tokio::fs::metadata(path).await.map(|m| m.len()).unwrap_or(0);
        let mut file = tokio::fs::OpenOptions::new().create(true).append(true).open(path).await?;
        if existing > 0 {
            file.write_all(b"\n\n").await?;
        }
        file.write_all(content.as_bytes()).await?;
        file.flush().await
    }
}

#[async_trait]
impl LogWriter for FileLogWriter {
    async fn write_log(&self, category: LogCategory, content: &str) -> Result<PathBuf, LogError> {
        let path = self.dir.join(log_file_name(category, Local::now().time()));
        Self::append(&path, content)
            .await
            .map_err(|source| LogError::Write { path: path.clone(), source })?;
        tracing::debug!(%category, path = %path.display(), "wrote trace log");
        Ok(path)
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{LogError, LogWriter};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use runner_core::LogCategory;
    use std::path::PathBuf;
    use std::sync::Arc;

    /// Recorded log write
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LogCall {
        pub category: LogCategory,
        pub content: String,
    }

    /// Fake log writer for testing
    #[derive(Clone, Default)]
    pub struct FakeLogWriter {
        calls: Arc<Mutex<Vec<LogCall>>>,
    }

    impl FakeLogWriter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded writes
        pub fn calls(&self) -> Vec<LogCall> {
            self.calls.lock().clone()
        }

        pub fn calls_for(&self, category: LogCategory) -> Vec<LogCall> {
            self.calls.lock().iter().filter(|c| c.category == category).cloned().collect()
        }
    }

    #[async_trait]
    impl LogWriter for FakeLogWriter {
        async fn write_log(
            &self,
            category: LogCategory,
            content: &str,
        ) -> Result<PathBuf, LogError> {
            self.calls.lock().push(LogCall { category, content: content.to_string() });
            Ok(PathBuf::from(format!("{}.log", category)))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeLogWriter, LogCall};

#[cfg(test)]
#[path = "log_writer_tests.rs"]
mod tests;
