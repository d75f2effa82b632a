//! Instruction encoding and field extraction.
//!
//! Provides bit extraction for the MIPS instruction formats. Only the fields the
//! pipeline itself consumes (register indices for interlock detection and
//! operand fetch) are needed by the core; the rest serve instruction sets.

/// Bit mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Bit position of the `rs` field (bits 21-25).
pub const RS_SHIFT: u32 = 21;
/// Bit position of the `rt` field (bits 16-20).
pub const RT_SHIFT: u32 = 16;
/// Bit position of the `rd` field (bits 11-15).
pub const RD_SHIFT: u32 = 11;
/// Bit position of the primary opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the primary opcode and function fields.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit position of the shift amount field (bits 6-10).
pub const SA_SHIFT: u32 = 6;

/// Trait for extracting fields from an encoded instruction word.
pub trait InstructionBits {
    /// Primary opcode (bits 26-31).
    fn opcode(&self) -> u32;

    /// First source register `rs` (bits 21-25).
    fn rs(&self) -> usize;

    /// Second source (or I-type destination) register `rt` (bits 16-20).
    fn rt(&self) -> usize;

    /// R-type destination register `rd` (bits 11-15).
    fn rd(&self) -> usize;

    /// Shift amount (bits 6-10).
    fn sa(&self) -> u32;

    /// SPECIAL function field (bits 0-5).
    fn funct(&self) -> u32;

    /// 16-bit immediate, sign-extended to 64 bits.
    fn simm(&self) -> u64;

    /// 16-bit immediate, zero-extended.
    fn uimm(&self) -> u64;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn sa(&self) -> u32 {
        (self >> SA_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn simm(&self) -> u64 {
        i64::from(*self as u16 as i16) as u64
    }

    #[inline(always)]
    fn uimm(&self) -> u64 {
        u64::from(*self as u16)
    }
}
