// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    zero_budget           = { 0, 3, 0, StopReason::BudgetExhausted },
    budget_below_reps     = { 2, 5, 2, StopReason::BudgetExhausted },
    budget_equals_reps    = { 3, 3, 3, StopReason::Completed },
    budget_above_reps     = { 5, 2, 2, StopReason::Completed },
    zero_budget_zero_reps = { 0, 0, 0, StopReason::Completed },
)]
fn failing_command_runs_min_of_budget_and_reps(
    budget: i64,
    reps: u32,
    expected_attempts: u32,
    expected_stop: StopReason,
) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let mut h = setup(args(&["false"]), TraceFlags::default(), budget);

        let outcome = h.engine.run(reps).await.unwrap();

        assert_eq!(outcome.attempts, expected_attempts);
        assert_eq!(outcome.stop, expected_stop);
        assert_eq!(h.engine.handle().attempts(), u64::from(expected_attempts));
        assert_eq!(h.engine.remaining_failures(), (budget - i64::from(reps)).max(0));
    });
}

#[yare::parameterized(
    minus_one  = { -1, 3 },
    minus_five = { -5, 4 },
)]
fn unlimited_budget_runs_every_repetition(budget: i64, reps: u32) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let mut h = setup(args(&["false"]), TraceFlags::default(), budget);

        let outcome = h.engine.run(reps).await.unwrap();

        assert_eq!(outcome, RunOutcome { attempts: reps, stop: StopReason::Completed });
        assert_eq!(h.engine.remaining_failures(), budget - i64::from(reps));
        assert_eq!(h.engine.handle().return_codes().count(1), reps);
    });
}

#[tokio::test]
async fn successes_never_touch_budget() {
    let mut h = setup(args(&["true"]), TraceFlags::default(), 2);

    let outcome = h.engine.run(5).await.unwrap();

    assert_eq!(outcome.attempts, 5);
    assert_eq!(h.engine.remaining_failures(), 2);
}

#[tokio::test]
async fn exhausted_budget_stops_later_runs() {
    let mut h = setup(args(&["false"]), TraceFlags::default(), 1);

    h.engine.run(3).await.unwrap();
    let again = h.engine.run(3).await.unwrap();

    assert_eq!(again, RunOutcome { attempts: 0, stop: StopReason::BudgetExhausted });
    assert_eq!(h.engine.handle().attempts(), 1);
}

#[tokio::test]
async fn budget_accessor_pair() {
    let mut h = setup(args(&["false"]), TraceFlags::default(), 0);
    assert_eq!(h.engine.remaining_failures(), 0);

    h.engine.set_remaining_failures(2);
    assert_eq!(h.engine.handle().remaining_failures(), 2);

    let outcome = h.engine.run(5).await.unwrap();
    assert_eq!(outcome.attempts, 2);
    assert_eq!(h.engine.remaining_failures(), 0);
}
