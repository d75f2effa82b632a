//! Instruction Set contract.
//!
//! The pipeline does not implement instruction semantics. It decodes and
//! dispatches through an [`InstructionSet`], which owns the opcode table:
//!
//! * `decode` maps an instruction word to an [`Opcode`] (operation id plus
//!   hazard flags). The all-zero word must decode to [`OpcodeId::NOP`].
//! * `execute` runs the operation against the processor with forwarded source
//!   operands, writing the EX/DC latch's result, destination, and bus request.

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

use crate::core::Vr4300;

/// Operation identifier assigned by an instruction set's decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpcodeId(pub u16);

impl OpcodeId {
    /// The canonical no-op. Latches power up holding it.
    pub const NOP: Self = Self(0);
}

/// Hazard flags declared by an opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OpcodeFlags {
    /// The operation reads `rs`.
    pub needs_rs: bool,
    /// The operation reads `rt`.
    pub needs_rt: bool,
}

impl OpcodeFlags {
    /// No source register is read.
    pub const NONE: Self = Self {
        needs_rs: false,
        needs_rt: false,
    };
    /// Only `rs` is read.
    pub const RS: Self = Self {
        needs_rs: true,
        needs_rt: false,
    };
    /// Both `rs` and `rt` are read.
    pub const RS_RT: Self = Self {
        needs_rs: true,
        needs_rt: true,
    };
}

/// Decoded opcode record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Opcode {
    /// Operation identifier.
    pub id: OpcodeId,
    /// Source-register hazard flags.
    pub flags: OpcodeFlags,
}

impl Opcode {
    /// Decoded form of the canonical no-op.
    pub const NOP: Self = Self {
        id: OpcodeId::NOP,
        flags: OpcodeFlags::NONE,
    };
}

/// Opcode decode and dispatch table.
///
/// Implementations own instruction semantics; the pipeline only calls them.
pub trait InstructionSet {
    /// Decodes an instruction word.
    fn decode(&self, iw: u32) -> Opcode;

    /// Executes a decoded operation.
    ///
    /// On entry the EX/DC latch holds `r0` as destination and no bus request, so
    /// operations that neither write a register nor touch memory may leave it
    /// alone. The instruction word is in `vr4300.pipeline.rfex.iw`.
    ///
    /// # Arguments
    ///
    /// * `vr4300` - Processor state, including the pipeline latches.
    /// * `opcode` - The decoded operation.
    /// * `rs` - Forwarded value of the `rs` register.
    /// * `rt` - Forwarded value of the `rt` register.
    fn execute(&self, vr4300: &mut Vr4300, opcode: Opcode, rs: u64, rt: u64);

    /// Mnemonic for tracing; defaults to the numeric id.
    fn mnemonic(&self, opcode: OpcodeId) -> String {
        format!("op#{}", opcode.0)
    }
}
