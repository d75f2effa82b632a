use super::builder::instruction::*;
use super::harness::TestContext;
use super::isa::*;
use vr4300_core::isa::instruction::InstructionBits;
use vr4300_core::isa::{InstructionSet, OpcodeFlags};

// ─── InstructionBuilder: field placement ───────────────────────────────────

#[test]
fn builder_addu_encodes_r_type() {
    let inst = addu(1, 2, 3);
    assert_eq!(inst.opcode(), OP_SPECIAL);
    assert_eq!(inst.rd(), 1);
    assert_eq!(inst.rs(), 2);
    assert_eq!(inst.rt(), 3);
    assert_eq!(inst.funct(), FUNCT_ADDU);
}

#[test]
fn builder_lw_encodes_negative_offset() {
    let inst = lw(4, -8, 29);
    assert_eq!(inst.opcode(), OP_LW);
    assert_eq!(inst.rt(), 4);
    assert_eq!(inst.rs(), 29);
    assert_eq!(inst.simm(), (-8i64) as u64);
}

#[test]
fn nop_decodes_to_canonical_nop() {
    let opcode = MipsSubset.decode(nop());
    assert_eq!(opcode.id, SLL);
    assert!(!opcode.flags.needs_rs);
    assert_ne!(opcode.flags, OpcodeFlags::NONE);
}

// ─── TestContext ───────────────────────────────────────────────────────────

#[test]
fn harness_runs_straight_line_program() {
    let mut ctx = TestContext::new().load_program(&[addiu(1, 0, 5), addiu(2, 1, 6)]);
    ctx.run(10);
    assert_eq!(ctx.get_reg(1), 5);
    assert_eq!(ctx.get_reg(2), 11);
}
