//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the four registers that sit between the five stages:
//! IC → RF → EX → DC → WB.
//!
//! 1. **Instruction Flow:** Each latch carries the partial state of one in-flight instruction.
//! 2. **Fault Propagation:** Every latch starts with a [`LatchHeader`] whose `fault` marks the
//!    instruction as killed; downstream stages must not apply its side effects.
//! 3. **Bus Requests:** The EX/DC latch carries the memory operation issued by EX.
//!
//! Latches are long-lived slots overwritten once per clock; they are never allocated
//! or freed while the pipeline runs.

use crate::common::Fault;
use crate::common::constants::{DECODE_MASK_NONE, NOP_INSTRUCTION, REGISTER_R0};
use crate::core::units::segment::{DEFAULT_SEGMENT, Segment};
use crate::isa::Opcode;

/// Header shared by every latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatchHeader {
    /// Program counter of the instruction occupying the stage.
    pub pc: u64,
    /// Fault raised against the instruction, if any.
    pub fault: Option<Fault>,
}

impl LatchHeader {
    /// Header of an instruction killed by `fault`.
    pub const fn killed(pc: u64, fault: Fault) -> Self {
        Self {
            pc,
            fault: Some(fault),
        }
    }

    /// Returns `true` if the instruction carries a fault.
    #[inline(always)]
    pub const fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }
}

/// IC/RF latch: the fetch cursor.
///
/// `pc` is the next address IC will fetch; `common.pc` is the address it fetched last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IcRfLatch {
    /// Next program counter to fetch.
    pub pc: u64,
    /// Segment the fetch cursor was last resolved into.
    pub segment: &'static Segment,
    /// Common header.
    pub common: LatchHeader,
}

impl Default for IcRfLatch {
    fn default() -> Self {
        Self {
            pc: 0,
            segment: &DEFAULT_SEGMENT,
            common: LatchHeader::default(),
        }
    }
}

/// RF/EX latch: the instruction word and its decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RfExLatch {
    /// Decoded opcode, finalised by IC on the clock after RF read the word.
    pub opcode: Opcode,
    /// Raw instruction word.
    pub iw: u32,
    /// Mask applied to `iw` before decode; reset to all ones once applied.
    pub iw_mask: u32,
    /// Common header.
    pub common: LatchHeader,
}

impl Default for RfExLatch {
    fn default() -> Self {
        Self {
            opcode: Opcode::NOP,
            iw: NOP_INSTRUCTION,
            iw_mask: DECODE_MASK_NONE,
            common: LatchHeader::default(),
        }
    }
}

/// Kind of memory operation carried by a [`BusRequest`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BusRequestKind {
    /// No memory operation.
    #[default]
    None,
    /// Data read, serviced through the data-cache-busy path.
    Read,
    /// Data write, applied by DC.
    Write,
}

/// A memory operation not yet applied to the bus.
///
/// `dqm` is the byte-lane mask. For writes it selects the bytes of the
/// doubleword at `address & !7` that `word` replaces. For reads it selects the
/// bits of the destination register replaced by the (extended) loaded value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusRequest {
    /// Operation kind.
    pub kind: BusRequestKind,
    /// Virtual address until DC translates it, physical afterwards.
    pub address: u64,
    /// Store data, or read data once serviced.
    pub word: u64,
    /// Byte-lane mask.
    pub dqm: u64,
    /// Access size in bytes (1, 2, 4 or 8).
    pub size: u8,
    /// Sign-extend read data.
    pub signed: bool,
}

impl BusRequest {
    /// Read of `size` bytes replacing the whole destination register.
    pub const fn read(address: u64, size: u8, signed: bool) -> Self {
        Self {
            kind: BusRequestKind::Read,
            address,
            word: 0,
            dqm: !0,
            size,
            signed,
        }
    }

    /// Write of `word` under the byte-lane mask `dqm`.
    pub const fn write(address: u64, word: u64, dqm: u64, size: u8) -> Self {
        Self {
            kind: BusRequestKind::Write,
            address,
            word,
            dqm,
            size,
            signed: false,
        }
    }

    /// Returns `true` if a memory operation is pending.
    #[inline(always)]
    pub fn is_pending(&self) -> bool {
        self.kind != BusRequestKind::None
    }
}

/// EX/DC latch: the execution result and any pending memory operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExDcLatch {
    /// Destination register index.
    pub dest: usize,
    /// Result value; for loads, the destination bits to keep.
    pub result: u64,
    /// Pending memory operation.
    pub request: BusRequest,
    /// Segment data accesses were last resolved into.
    pub segment: &'static Segment,
    /// Common header.
    pub common: LatchHeader,
}

impl Default for ExDcLatch {
    fn default() -> Self {
        Self {
            dest: REGISTER_R0,
            result: 0,
            request: BusRequest::default(),
            segment: &DEFAULT_SEGMENT,
            common: LatchHeader::default(),
        }
    }
}

/// DC/WB latch: the value about to be committed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DcWbLatch {
    /// Destination register index.
    pub dest: usize,
    /// Final result value.
    pub result: u64,
    /// Common header.
    pub common: LatchHeader,
}
