// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-visible output channel for captured command output.

use std::io::Write;

pub trait Console: Clone + Send + Sync + 'static {
    fn echo(&self, text: &str);
}

/// Prints to stdout, each block preceded by a blank line.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn echo(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "\n{}", text);
        let _ = out.flush();
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::Console;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Fake console for testing
    #[derive(Clone, Default)]
    pub struct FakeConsole {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl FakeConsole {
        pub fn new() -> Self {
            Self::default()
        }

        /// Everything echoed so far
        pub fn echoed(&self) -> Vec<String> {
            self.lines.lock().clone()
        }
    }

    impl Console for FakeConsole {
        fn echo(&self, text: &str) {
            self.lines.lock().push(text.to_string());
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeConsole;
