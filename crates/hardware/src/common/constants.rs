//! Global System Constants.
//!
//! This module defines processor-wide constants used across the simulator. It includes:
//! 1. **Instruction Constants:** Instruction width and the canonical no-op encoding.
//! 2. **Register Constants:** Register file size and the hard-wired zero register.
//! 3. **Exception Vectors:** Reset and general exception entry points.
//! 4. **Coprocessor-0 Bits:** Status register fields consulted by the pipeline.

/// Size of a VR4300 instruction in bytes.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Encoding of `SLL r0, r0, 0`, the canonical no-op.
pub const NOP_INSTRUCTION: u32 = 0x0000_0000;

/// Decode mask meaning "no mask": the instruction word is decoded as fetched.
pub const DECODE_MASK_NONE: u32 = !0;

/// Number of general-purpose registers.
pub const GPR_COUNT: usize = 32;

/// Index of the hard-wired zero register (`r0`).
pub const REGISTER_R0: usize = 0;

/// Cold reset (and NMI) entry point, in kseg1.
pub const RESET_VECTOR: u64 = 0xFFFF_FFFF_BFC0_0000;

/// General exception vector when `Status.BEV` is clear.
pub const GENERAL_VECTOR: u64 = 0xFFFF_FFFF_8000_0180;

/// General exception vector when `Status.BEV` is set (bootstrap vectors).
pub const GENERAL_VECTOR_BEV: u64 = 0xFFFF_FFFF_BFC0_0380;

/// `Status.EXL`: exception level.
pub const STATUS_EXL: u32 = 1 << 1;

/// `Status.ERL`: error level (set on reset).
pub const STATUS_ERL: u32 = 1 << 2;

/// `Status.KSU` field shift.
pub const STATUS_KSU_SHIFT: u32 = 3;

/// `Status.KSU` field mask (after shifting).
pub const STATUS_KSU_MASK: u32 = 0x3;

/// `Status.BEV`: bootstrap exception vectors.
pub const STATUS_BEV: u32 = 1 << 22;

/// `Cause.ExcCode` field shift.
pub const CAUSE_EXCCODE_SHIFT: u32 = 2;

/// `Cause.ExcCode` field mask (after shifting).
pub const CAUSE_EXCCODE_MASK: u32 = 0x1F;
