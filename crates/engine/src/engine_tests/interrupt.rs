// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Duration;

#[tokio::test]
async fn summary_survives_dropped_run() {
    let dir = tempfile::TempDir::new().unwrap();
    let marker = dir.path().join("first-done");
    // First attempt fails fast, second hangs until cancelled
    let script = format!(
        "if [ -f {m} ]; then sleep 30; else touch {m}; exit 2; fi",
        m = marker.display()
    );
    let mut h = setup(sh(&script), TraceFlags::default(), -1);
    let handle = h.engine.handle();

    let result = tokio::time::timeout(Duration::from_secs(2), h.engine.run(5)).await;

    assert!(result.is_err(), "run should still be waiting on the second attempt");
    assert_eq!(handle.attempts(), 1);
    assert!(handle.summary().contains("return code: 2 amount: 1"));
    assert_eq!(handle.remaining_failures(), -2);
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn dropped_run_kills_child() {
    let dir = tempfile::TempDir::new().unwrap();
    let pid_file = dir.path().join("pid");
    let script = format!("echo $$ > {}; exec sleep 30", pid_file.display());
    let mut h = setup(sh(&script), TraceFlags::default(), -1);

    let result = tokio::time::timeout(Duration::from_millis(500), h.engine.run(1)).await;
    assert!(result.is_err());

    let pid = std::fs::read_to_string(&pid_file).unwrap().trim().to_string();
    let proc_dir = std::path::Path::new("/proc").join(&pid);
    // The kill is asynchronous; allow the reaper a moment
    for _ in 0..50 {
        let alive = std::fs::read_to_string(proc_dir.join("stat"))
            .map(|stat| !stat.contains(") Z "))
            .unwrap_or(false);
        if !alive {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("child {pid} still running after the run was dropped");
}

#[tokio::test]
async fn handle_reflects_progress_between_runs() {
    let mut h = setup(args(&["false"]), TraceFlags::default(), 3);
    let handle = h.engine.handle();

    h.engine.run(1).await.unwrap();
    assert_eq!(handle.attempts(), 1);
    assert_eq!(handle.remaining_failures(), 2);

    h.engine.run(1).await.unwrap();
    assert_eq!(handle.return_codes().count(1), 2);
}
