// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    debug_flag_wins    = { true,  Some("error"),     "debug" },
    env_directives     = { false, Some("info"),      "info" },
    default_level      = { false, None,              "warn" },
    invalid_level      = { false, Some("runner=notalevel"), "warn" },
)]
fn resolves_filter(debug: bool, env: Option<&str>, expected: &str) {
    assert_eq!(filter(debug, env).to_string(), expected);
}
