// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource sampler backed by the Linux `/proc` filesystem.
//!
//! The procfs root is configurable so tests can point the sampler at a
//! fixture tree instead of the live system.

use std::io;
use std::path::{Path, PathBuf};

use super::snapshot::{DiskIo, NetIo, ThreadSample, TraceSnapshot};
use super::{ResourceSampler, SampleError};

/// Kernel clock ticks per second as reported through procfs (USER_HZ).
const CLOCK_TICKS_PER_SEC: f64 = 100.0;

/// Bytes per sector in `/proc/diskstats`, independent of the device.
const SECTOR_SIZE: u64 = 512;

// Zero-based field offsets in /proc/<pid>/stat, counted after the `(comm)` field.
const STAT_UTIME: usize = 11;
const STAT_STIME: usize = 12;
const STAT_STARTTIME: usize = 19;

#[derive(Debug, Clone)]
pub struct ProcSampler {
    root: PathBuf,
}

impl Default for ProcSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcSampler {
    pub fn new() -> Self {
        Self::with_root("/proc")
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn pid_dir(&self, pid: u32) -> PathBuf {
        self.root.join(pid.to_string())
    }

    fn read(&self, path: PathBuf) -> Result<String, SampleError> {
        std::fs::read_to_string(&path).map_err(|source| SampleError::Read { path, source })
    }

    /// Read a per-process file, mapping a vanished process to `NotFound`.
    fn read_pid_file(&self, pid: u32, name: &str) -> Result<String, SampleError> {
        let path = self.pid_dir(pid).join(name);
        std::fs::read_to_string(&path).map_err(|source| {
            if is_gone(&source) {
                SampleError::NotFound { pid }
            } else {
                SampleError::Read { path, source }
            }
        })
    }

    fn memory_percent(&self, pid: u32) -> Result<f64, SampleError> {
        let status = self.read_pid_file(pid, "status")?;
        // Kernel threads and zombies carry no VmRSS line
        let rss_kb = parse_kb_field(&status, "VmRSS:").unwrap_or(0);

        let meminfo_path = self.root.join("meminfo");
        let meminfo = self.read(meminfo_path.clone())?;
        let total_kb = parse_kb_field(&meminfo, "MemTotal:").ok_or_else(|| SampleError::Parse {
            path: meminfo_path,
            message: "missing MemTotal".to_string(),
        })?;

        if total_kb == 0 {
            return Ok(0.0);
        }
        Ok(rss_kb as f64 / total_kb as f64 * 100.0)
    }

    fn cpu_percent(&self, pid: u32) -> Result<f64, SampleError> {
        let stat_path = self.pid_dir(pid).join("stat");
        let stat = self.read_pid_file(pid, "stat")?;
        let fields = stat_fields(&stat).ok_or_else(|| SampleError::Parse {
            path: stat_path.clone(),
            message: "malformed stat line".to_string(),
        })?;
        let ticks = |index: usize| -> Result<u64, SampleError> {
            fields.get(index).and_then(|v| v.parse::<u64>().ok()).ok_or_else(|| {
                SampleError::Parse {
                    path: stat_path.clone(),
                    message: format!("missing field {}", index),
                }
            })
        };
        let busy_secs = (ticks(STAT_UTIME)? + ticks(STAT_STIME)?) as f64 / CLOCK_TICKS_PER_SEC;
        let started_secs = ticks(STAT_STARTTIME)? as f64 / CLOCK_TICKS_PER_SEC;

        let uptime_path = self.root.join("uptime");
        let uptime = self.read(uptime_path.clone())?;
        let uptime_secs = uptime
            .split_whitespace()
            .next()
            .and_then(|v| v.parse::<f64>().ok())
            .ok_or_else(|| SampleError::Parse {
                path: uptime_path,
                message: "malformed uptime".to_string(),
            })?;

        let elapsed = uptime_secs - started_secs;
        if elapsed <= 0.0 {
            return Ok(0.0);
        }
        Ok(busy_secs / elapsed * 100.0)
    }

    fn threads(&self, pid: u32) -> Result<Vec<ThreadSample>, SampleError> {
        let task_dir = self.pid_dir(pid).join("task");
        let entries = std::fs::read_dir(&task_dir).map_err(|source| {
            if is_gone(&source) {
                SampleError::NotFound { pid }
            } else {
                SampleError::Read { path: task_dir.clone(), source }
            }
        })?;

        let mut threads = Vec::new();
        for entry in entries.flatten() {
            let Some(id) = entry.file_name().to_str().and_then(|n| n.parse::<u32>().ok()) else {
                continue;
            };
            // Threads may exit between listing and reading
            let Ok(stat) = std::fs::read_to_string(entry.path().join("stat")) else {
                continue;
            };
            let Some(fields) = stat_fields(&stat) else {
                continue;
            };
            let secs = |index: usize| {
                fields.get(index).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0) as f64
                    / CLOCK_TICKS_PER_SEC
            };
            threads.push(ThreadSample {
                id,
                user_time: secs(STAT_UTIME),
                system_time: secs(STAT_STIME),
            });
        }
        threads.sort_by_key(|t| t.id);
        Ok(threads)
    }
}

impl ResourceSampler for ProcSampler {
    fn capture(&self, pid: u32) -> Result<TraceSnapshot, SampleError> {
        if !self.pid_dir(pid).exists() {
            return Err(SampleError::NotFound { pid });
        }

        let memory_percent = self.memory_percent(pid)?;
        let cpu_percent = self.cpu_percent(pid)?;
        let threads = self.threads(pid)?;
        let disk_io = parse_diskstats(&self.read(self.root.join("diskstats"))?);
        let net_io = parse_net_dev(&self.read(self.root.join("net").join("dev"))?);

        tracing::debug!(pid, threads = threads.len(), "captured resource snapshot");

        Ok(TraceSnapshot { pid, disk_io, memory_percent, cpu_percent, threads, net_io })
    }
}

fn is_gone(err: &io::Error) -> bool {
    // ESRCH surfaces when the process exits mid-read
    err.kind() == io::ErrorKind::NotFound || err.raw_os_error() == Some(3)
}

/// Value of a `Key:   1234 kB` line.
fn parse_kb_field(content: &str, key: &str) -> Option<u64> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(key))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|v| v.parse().ok())
}

/// Fields of a stat line following `(comm)`. The command name may contain
/// spaces and parentheses, so split after the last `)`.
fn stat_fields(stat: &str) -> Option<Vec<&str>> {
    let close = stat.rfind(')')?;
    Some(stat.get(close + 1..)?.split_whitespace().collect())
}

/// Sum `/proc/diskstats` over whole devices, skipping partitions.
pub(crate) fn parse_diskstats(content: &str) -> DiskIo {
    let rows: Vec<Vec<&str>> = content
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|fields| fields.len() >= 11)
        .collect();
    let names: Vec<&str> = rows.iter().map(|fields| fields[2]).collect();

    let mut io = DiskIo::default();
    for fields in &rows {
        if is_partition(fields[2], &names) {
            continue;
        }
        let num = |index: usize| fields[index].parse::<u64>().unwrap_or(0);
        io.read_count += num(3);
        io.read_bytes += num(5) * SECTOR_SIZE;
        io.read_time_ms += num(6);
        io.write_count += num(7);
        io.write_bytes += num(9) * SECTOR_SIZE;
        io.write_time_ms += num(10);
    }
    io
}

/// `sda1` under `sda`, `nvme0n1p2` under `nvme0n1`. `loop10` is not under `loop1`.
fn is_partition(name: &str, devices: &[&str]) -> bool {
    devices.iter().any(|parent| {
        let Some(suffix) = name.strip_prefix(parent) else {
            return false;
        };
        if suffix.is_empty() {
            return false;
        }
        let digits = if parent.ends_with(|c: char| c.is_ascii_digit()) {
            match suffix.strip_prefix('p') {
                Some(rest) => rest,
                None => return false,
            }
        } else {
            suffix
        };
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    })
}

/// Sum `/proc/net/dev` across all interfaces.
pub(crate) fn parse_net_dev(content: &str) -> NetIo {
    let mut io = NetIo::default();
    for line in content.lines() {
        let Some((_iface, counters)) = line.split_once(':') else {
            continue;
        };
        let fields: Vec<u64> =
            counters.split_whitespace().map(|v| v.parse().unwrap_or(0)).collect();
        if fields.len() < 12 {
            continue;
        }
        io.bytes_recv += fields[0];
        io.packets_recv += fields[1];
        io.errin += fields[2];
        io.dropin += fields[3];
        io.bytes_sent += fields[8];
        io.packets_sent += fields[9];
        io.errout += fields[10];
        io.dropout += fields[11];
    }
    io
}

#[cfg(test)]
#[path = "procfs_tests.rs"]
mod tests;
