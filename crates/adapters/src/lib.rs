// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for the side effects of running a command: resource sampling,
//! trace log persistence, and console output.

pub mod console;
pub mod log_writer;
pub mod sampler;

pub use console::{Console, StdoutConsole};
pub use log_writer::{log_file_name, FileLogWriter, LogError, LogWriter};
pub use sampler::{
    DiskIo, NetIo, ProcSampler, ResourceSampler, SampleError, ThreadSample, TraceSnapshot,
};

#[cfg(any(test, feature = "test-support"))]
pub use console::FakeConsole;
#[cfg(any(test, feature = "test-support"))]
pub use log_writer::{FakeLogWriter, LogCall};
#[cfg(any(test, feature = "test-support"))]
pub use sampler::FakeSampler;
