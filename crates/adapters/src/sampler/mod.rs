// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource sampling for running processes.

mod procfs;
mod snapshot;

pub use procfs::ProcSampler;
pub use snapshot::{DiskIo, NetIo, ThreadSample, TraceSnapshot};

use std::path::PathBuf;

use thiserror::Error;

/// Errors from resource sampling. None of these are fatal to an attempt.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("process {pid} not found")]
    NotFound { pid: u32 },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Captures a point-in-time resource snapshot for a live process.
pub trait ResourceSampler: Clone + Send + Sync + 'static {
    fn capture(&self, pid: u32) -> Result<TraceSnapshot, SampleError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{DiskIo, NetIo, ResourceSampler, SampleError, ThreadSample, TraceSnapshot};
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct FakeSamplerState {
        pids: Vec<u32>,
        process_gone: bool,
    }

    /// Fake sampler for testing. Records every pid it is asked to sample.
    #[derive(Clone)]
    pub struct FakeSampler {
        inner: Arc<Mutex<FakeSamplerState>>,
    }

    impl Default for FakeSampler {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeSamplerState {
                    pids: Vec::new(),
                    process_gone: false,
                })),
            }
        }
    }

    impl FakeSampler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sampler that always reports the process as already exited.
        pub fn process_gone() -> Self {
            let sampler = Self::default();
            sampler.inner.lock().process_gone = true;
            sampler
        }

        /// Pids passed to `capture`, in call order
        pub fn pids(&self) -> Vec<u32> {
            self.inner.lock().pids.clone()
        }

        pub fn calls(&self) -> usize {
            self.inner.lock().pids.len()
        }

        /// Snapshot returned for a successful capture of `pid`.
        pub fn snapshot_for(pid: u32) -> TraceSnapshot {
            TraceSnapshot {
                pid,
                disk_io: DiskIo { read_count: 1, write_count: 2, ..DiskIo::default() },
                memory_percent: 0.5,
                cpu_percent: 1.0,
                threads: vec![ThreadSample { id: pid, user_time: 0.0, system_time: 0.0 }],
                net_io: NetIo { bytes_sent: 10, bytes_recv: 20, ..NetIo::default() },
            }
        }
    }

    impl ResourceSampler for FakeSampler {
        fn capture(&self, pid: u32) -> Result<TraceSnapshot, SampleError> {
            let mut inner = self.inner.lock();
            inner.pids.push(pid);
            if inner.process_gone {
                return Err(SampleError::NotFound { pid });
            }
            Ok(Self::snapshot_for(pid))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSampler;

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
