// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help and argument errors.

use crate::prelude::*;

#[test]
fn help_lists_options() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--count <COUNT>")
        .stdout_has("--failed-count <N>")
        .stdout_has("--sys-trace")
        .stdout_has("--call-trace")
        .stdout_has("--log-trace");
}

#[test]
fn version_shows_package_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn bad_count_is_a_usage_error() {
    cli().args(&["-c", "lots", "true"]).exits(2).stderr_has("--count");
}

#[test]
fn missing_command_is_a_configuration_error() {
    cli()
        .exits(2)
        .stdout_has("Executing: ")
        .stdout_lacks(HEADER)
        .stderr_has("no command specified");
}
