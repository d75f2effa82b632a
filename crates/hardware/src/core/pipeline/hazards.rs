//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic that keeps EX consistent with the
//! instruction one step ahead of it in DC/WB. It provides:
//! 1. **Hazard Detection:** Identifies the load-delay interlock that must stall EX.
//! 2. **Operand Forwarding:** Reads source registers as they will look after the
//!    pending DC/WB writeback, without committing it.

use crate::common::RegisterFile;
use crate::common::constants::REGISTER_R0;
use crate::core::pipeline::latches::{DcWbLatch, ExDcLatch};
use crate::isa::OpcodeFlags;

/// Checks whether EX must hold for a load-delay interlock.
///
/// The need flags are only honoured while the EX/DC latch still holds a bus
/// request from the previous clock. Without one, DC/WB holds a final value and
/// forwarding covers every dependency.
///
/// # Arguments
///
/// * `flags` - Hazard flags of the opcode about to execute.
/// * `rs` - Source register index `rs` of that instruction.
/// * `rt` - Source register index `rt` of that instruction.
/// * `exdc` - The EX/DC latch before EX overwrites it.
/// * `dcwb` - The DC/WB latch.
///
/// # Returns
///
/// `true` if the instruction must not execute this clock.
pub fn load_interlock(
    flags: OpcodeFlags,
    rs: usize,
    rt: usize,
    exdc: &ExDcLatch,
    dcwb: &DcWbLatch,
) -> bool {
    if !exdc.request.is_pending() || dcwb.common.is_faulted() || dcwb.dest == REGISTER_R0 {
        return false;
    }

    (flags.needs_rs && dcwb.dest == rs) || (flags.needs_rt && dcwb.dest == rt)
}

/// Reads a source register with the DC/WB result forwarded.
///
/// The register file is only read. A killed DC/WB instruction is never
/// forwarded from, and `r0` always reads as zero.
#[inline(always)]
pub fn forward(regs: &RegisterFile, dcwb: &DcWbLatch, idx: usize) -> u64 {
    if idx == REGISTER_R0 {
        0
    } else if idx == dcwb.dest && !dcwb.common.is_faulted() {
        dcwb.result
    } else {
        regs.read(idx)
    }
}
