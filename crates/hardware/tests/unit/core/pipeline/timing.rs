//! Pipeline fill and throughput tests.
//!
//! A drained pipeline writes back the first instruction on the fifth clock and
//! then retires one instruction per clock.

use rstest::rstest;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

fn straight_line(n: usize) -> Vec<u32> {
    (1..=n as u32).map(|r| addiu(r, 0, r as i16)).collect()
}

#[rstest]
#[case(1)]
#[case(4)]
#[case(12)]
fn last_writeback_lands_on_clock_n_plus_four(#[case] n: usize) {
    let mut ctx = TestContext::new().load_program(&straight_line(n));
    let last = n;

    ctx.run((n + 3) as u64);
    assert_eq!(ctx.get_reg(last), 0, "not written back before clock N+4");

    ctx.tick();
    assert_eq!(ctx.get_reg(last), last as u64);
    for r in 1..=n {
        assert_eq!(ctx.get_reg(r), r as u64);
    }
}

#[test]
fn one_retirement_per_clock_in_steady_state() {
    let mut ctx = TestContext::new().load_program(&straight_line(16));
    ctx.run(4);
    assert_eq!(ctx.cpu().stats.instructions_retired, 0);

    for clock in 1..=16u64 {
        ctx.tick();
        assert_eq!(ctx.cpu().stats.instructions_retired, clock);
        assert_eq!(ctx.get_reg(clock as usize), clock);
    }
}

#[test]
fn fault_checks_stop_after_the_window() {
    let mut ctx = TestContext::new().load_program(&straight_line(8));
    assert!(ctx.cpu().pipeline.fault_present);

    ctx.run(5);
    assert!(ctx.cpu().pipeline.fault_present);

    ctx.tick();
    assert!(!ctx.cpu().pipeline.fault_present);
    assert!(!ctx.cpu().pipeline.is_checked());
}
