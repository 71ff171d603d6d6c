// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Categories of diagnostic logs persisted for failed attempts.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    /// Resource-usage snapshot taken while the command ran.
    SysTrace,
    /// System-call tracer output (the tracer writes to stderr).
    CallTrace,
}

crate::simple_display! {
    LogCategory {
        SysTrace => "sys-trace",
        CallTrace => "call-trace",
    }
}
