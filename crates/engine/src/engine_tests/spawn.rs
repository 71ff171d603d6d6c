// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

const MISSING: &str = "runner-test-no-such-program-7f3a";

#[tokio::test]
async fn spawn_failure_aborts_run() {
    let mut h = setup(args(&[MISSING, "--flag"]), TraceFlags::default(), 3);

    let err = h.engine.run(4).await.unwrap_err();

    match err {
        EngineError::Spawn { command, source } => {
            assert_eq!(command, format!("{} --flag", MISSING));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected spawn error, got {other:?}"),
    }
}

#[tokio::test]
async fn spawn_failure_leaves_budget_and_histogram_alone() {
    let mut h = setup(args(&[MISSING]), TraceFlags::default().sys_trace(true), 3);

    assert!(h.engine.run(1).await.is_err());

    assert_eq!(h.engine.remaining_failures(), 3);
    assert!(h.engine.handle().return_codes().is_empty());
    assert_eq!(h.sampler.calls(), 0);
    assert!(h.writer.calls().is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn permission_denied_is_spawn_error() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().unwrap();
    let script = dir.path().join("not-executable.sh");
    std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o644)).unwrap();

    let mut h = setup(vec![script.display().to_string()], TraceFlags::default(), -1);

    assert!(matches!(h.engine.run(1).await, Err(EngineError::Spawn { .. })));
    assert_eq!(h.engine.handle().attempts(), 0);
}
