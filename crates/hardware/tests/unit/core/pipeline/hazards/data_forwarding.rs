//! Operand Forwarding Tests.
//!
//! Verifies that EX reads the DC/WB result without committing it, and never
//! forwards from a killed instruction.

use vr4300_core::common::Fault;
use vr4300_core::core::pipeline::hazards::{forward, load_interlock};
use vr4300_core::core::pipeline::{BusRequest, DcWbLatch, ExDcLatch, LatchHeader};
use vr4300_core::common::RegisterFile;
use vr4300_core::isa::OpcodeFlags;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

fn pending(dest: usize, result: u64) -> DcWbLatch {
    DcWbLatch {
        dest,
        result,
        common: LatchHeader::default(),
    }
}

// ══════════════════════════════════════════════════════════
// 1. Forwarding unit
// ══════════════════════════════════════════════════════════

#[test]
fn forward_substitutes_only_matching_register() {
    let mut regs = RegisterFile::new();
    regs.write(4, 40);
    regs.write(5, 50);
    let dcwb = pending(4, 99);

    assert_eq!(forward(&regs, &dcwb, 4), 99);
    assert_eq!(forward(&regs, &dcwb, 5), 50);
    assert_eq!(regs.read(4), 40, "register file is never modified");
}

#[test]
fn killed_result_is_not_forwarded() {
    let mut regs = RegisterFile::new();
    regs.write(4, 40);
    let dcwb = DcWbLatch {
        common: LatchHeader::killed(0, Fault::DataAddressError),
        ..pending(4, 99)
    };
    assert_eq!(forward(&regs, &dcwb, 4), 40);
}

#[test]
fn killed_load_does_not_interlock() {
    let exdc = ExDcLatch {
        request: BusRequest::read(0, 4, true),
        ..ExDcLatch::default()
    };
    let dcwb = DcWbLatch {
        common: LatchHeader::killed(0, Fault::ColdReset),
        ..pending(4, 0)
    };
    assert!(!load_interlock(OpcodeFlags::RS_RT, 4, 4, &exdc, &dcwb));
}

// ══════════════════════════════════════════════════════════
// 2. Back-to-back ALU chains
// ══════════════════════════════════════════════════════════

#[test]
fn back_to_back_dependencies_need_no_stall() {
    let mut ctx = TestContext::new().load_program(&[
        addiu(1, 0, 1),
        addu(1, 1, 1),
        addu(1, 1, 1),
        addu(1, 1, 1),
        or(2, 1, 0),
    ]);
    ctx.run(5 + 4);
    assert_eq!(ctx.get_reg(1), 8);
    assert_eq!(ctx.get_reg(2), 8);
    assert_eq!(ctx.cpu().stats.load_interlocks, 0);
}

#[test]
fn lui_ori_pair_builds_constant() {
    let mut ctx = TestContext::new().load_program(&[lui(3, 0x8000), ori(3, 3, 0x1234)]);
    ctx.run(6);
    assert_eq!(ctx.get_reg(3), 0xFFFF_FFFF_8000_1234);
}
