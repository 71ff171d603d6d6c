// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time resource usage captured for a running process.

use std::fmt;

/// System-wide disk I/O counters, summed over whole devices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskIo {
    pub read_count: u64,
    pub write_count: u64,
    pub read_bytes: u64,
    pub write_bytes: u64,
    pub read_time_ms: u64,
    pub write_time_ms: u64,
}

impl fmt::Display for DiskIo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            concat!(
                "read_count={} write_count={} read_bytes={} write_bytes={} ",
                "read_time={}ms write_time={}ms"
            ),
            self.read_count,
            self.write_count,
            self.read_bytes,
            self.write_bytes,
            self.read_time_ms,
            self.write_time_ms
        )
    }
}

/// System-wide network counters, summed over all interfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetIo {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errin: u64,
    pub errout: u64,
    pub dropin: u64,
    pub dropout: u64,
}

impl fmt::Display for NetIo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            concat!(
                "bytes_sent={} bytes_recv={} packets_sent={} packets_recv={} ",
                "errin={} errout={} dropin={} dropout={}"
            ),
            self.bytes_sent,
            self.bytes_recv,
            self.packets_sent,
            self.packets_recv,
            self.errin,
            self.errout,
            self.dropin,
            self.dropout
        )
    }
}

/// CPU time consumed by one thread of the sampled process, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreadSample {
    pub id: u32,
    pub user_time: f64,
    pub system_time: f64,
}

impl fmt::Display for ThreadSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(user={:.2}s system={:.2}s)", self.id, self.user_time, self.system_time)
    }
}

/// Resource usage of a process and the system around it.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSnapshot {
    pub pid: u32,
    pub disk_io: DiskIo,
    /// Resident memory as a percentage of total system memory.
    pub memory_percent: f64,
    /// Average CPU utilization since the process started.
    pub cpu_percent: f64,
    pub threads: Vec<ThreadSample>,
    pub net_io: NetIo,
}

/// Newline-joined text, one resource per line.
impl fmt::Display for TraceSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Disk I/O: {}", self.disk_io)?;
        writeln!(f, "% Memory: {:.3}", self.memory_percent)?;
        writeln!(f, "% CPU: {:.1}", self.cpu_percent)?;
        let threads: Vec<String> = self.threads.iter().map(ToString::to_string).collect();
        writeln!(f, "Threads: [{}]", threads.join(", "))?;
        write!(f, "Network Counters: {}", self.net_io)
    }
}
