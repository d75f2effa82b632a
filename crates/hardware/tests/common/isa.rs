//! Reference MIPS subset.
//!
//! A small instruction set implementing the `InstructionSet` contract, enough to
//! drive the pipeline through ALU operations, loads and stores.

use vr4300_core::Vr4300;
use vr4300_core::core::pipeline::BusRequest;
use vr4300_core::isa::instruction::InstructionBits;
use vr4300_core::isa::{InstructionSet, Opcode, OpcodeFlags, OpcodeId};

pub const OP_SPECIAL: u32 = 0x00;
pub const OP_ADDIU: u32 = 0x09;
pub const OP_ORI: u32 = 0x0D;
pub const OP_LUI: u32 = 0x0F;
pub const OP_LB: u32 = 0x20;
pub const OP_LW: u32 = 0x23;
pub const OP_LBU: u32 = 0x24;
pub const OP_SB: u32 = 0x28;
pub const OP_SW: u32 = 0x2B;
pub const OP_LD: u32 = 0x37;
pub const OP_SD: u32 = 0x3F;

pub const FUNCT_SLL: u32 = 0x00;
pub const FUNCT_ADDU: u32 = 0x21;
pub const FUNCT_OR: u32 = 0x25;

pub const SLL: OpcodeId = OpcodeId::NOP;
pub const ADDU: OpcodeId = OpcodeId(1);
pub const OR: OpcodeId = OpcodeId(2);
pub const ADDIU: OpcodeId = OpcodeId(3);
pub const ORI: OpcodeId = OpcodeId(4);
pub const LUI: OpcodeId = OpcodeId(5);
pub const LB: OpcodeId = OpcodeId(6);
pub const LBU: OpcodeId = OpcodeId(7);
pub const LW: OpcodeId = OpcodeId(8);
pub const LD: OpcodeId = OpcodeId(9);
pub const SB: OpcodeId = OpcodeId(10);
pub const SW: OpcodeId = OpcodeId(11);
pub const SD: OpcodeId = OpcodeId(12);
pub const INVALID: OpcodeId = OpcodeId(13);

const fn op(id: OpcodeId, flags: OpcodeFlags) -> Opcode {
    Opcode { id, flags }
}

fn sext32(value: u64) -> u64 {
    i64::from(value as u32 as i32) as u64
}

/// The reference instruction set. Unknown encodings execute as no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct MipsSubset;

impl MipsSubset {
    fn load(vr4300: &mut Vr4300, rs: u64, size: u8, signed: bool) {
        let iw = vr4300.pipeline.rfex.iw;
        let exdc = &mut vr4300.pipeline.exdc;
        exdc.dest = iw.rt();
        exdc.result = 0;
        exdc.request = BusRequest::read(rs.wrapping_add(iw.simm()), size, signed);
    }

    fn store(vr4300: &mut Vr4300, rs: u64, rt: u64, size: u8) {
        let iw = vr4300.pipeline.rfex.iw;
        let address = rs.wrapping_add(iw.simm());
        let lane_bits = u32::from(size) * 8;
        let mask = if lane_bits == 64 { !0 } else { (1u64 << lane_bits) - 1 };
        let shift = (8 - u32::from(size) - (address & 7) as u32) * 8;
        vr4300.pipeline.exdc.request =
            BusRequest::write(address, (rt & mask) << shift, mask << shift, size);
    }
}

impl InstructionSet for MipsSubset {
    fn decode(&self, iw: u32) -> Opcode {
        match iw.opcode() {
            OP_SPECIAL => match iw.funct() {
                FUNCT_SLL => op(SLL, OpcodeFlags { needs_rs: false, needs_rt: true }),
                FUNCT_ADDU => op(ADDU, OpcodeFlags::RS_RT),
                FUNCT_OR => op(OR, OpcodeFlags::RS_RT),
                _ => op(INVALID, OpcodeFlags::NONE),
            },
            OP_ADDIU => op(ADDIU, OpcodeFlags::RS),
            OP_ORI => op(ORI, OpcodeFlags::RS),
            OP_LUI => op(LUI, OpcodeFlags::NONE),
            OP_LB => op(LB, OpcodeFlags::RS),
            OP_LBU => op(LBU, OpcodeFlags::RS),
            OP_LW => op(LW, OpcodeFlags::RS),
            OP_LD => op(LD, OpcodeFlags::RS),
            OP_SB => op(SB, OpcodeFlags::RS_RT),
            OP_SW => op(SW, OpcodeFlags::RS_RT),
            OP_SD => op(SD, OpcodeFlags::RS_RT),
            _ => op(INVALID, OpcodeFlags::NONE),
        }
    }

    fn execute(&self, vr4300: &mut Vr4300, opcode: Opcode, rs: u64, rt: u64) {
        let iw = vr4300.pipeline.rfex.iw;
        let (dest, result) = match opcode.id {
            SLL => (iw.rd(), sext32(rt << iw.sa())),
            ADDU => (iw.rd(), sext32(rs.wrapping_add(rt))),
            OR => (iw.rd(), rs | rt),
            ADDIU => (iw.rt(), sext32(rs.wrapping_add(iw.simm()))),
            ORI => (iw.rt(), rs | iw.uimm()),
            LUI => (iw.rt(), sext32(iw.uimm() << 16)),
            LB => return Self::load(vr4300, rs, 1, true),
            LBU => return Self::load(vr4300, rs, 1, false),
            LW => return Self::load(vr4300, rs, 4, true),
            LD => return Self::load(vr4300, rs, 8, false),
            SB => return Self::store(vr4300, rs, rt, 1),
            SW => return Self::store(vr4300, rs, rt, 4),
            SD => return Self::store(vr4300, rs, rt, 8),
            _ => return,
        };
        let exdc = &mut vr4300.pipeline.exdc;
        exdc.dest = dest;
        exdc.result = result;
    }

    fn mnemonic(&self, opcode: OpcodeId) -> String {
        let name = match opcode {
            SLL => "sll",
            ADDU => "addu",
            OR => "or",
            ADDIU => "addiu",
            ORI => "ori",
            LUI => "lui",
            LB => "lb",
            LBU => "lbu",
            LW => "lw",
            LD => "ld",
            SB => "sb",
            SW => "sw",
            SD => "sd",
            _ => "invalid",
        };
        name.to_string()
    }
}
