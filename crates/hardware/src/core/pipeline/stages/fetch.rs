//! Instruction Cache (IC) Stage.
//!
//! IC owns the fetch cursor in the IC/RF latch. Each clock it also finishes the
//! decode of the word RF read on the previous clock, so the opcode in the RF/EX
//! latch is ready when EX runs next.

use crate::common::constants::{DECODE_MASK_NONE, INSTRUCTION_SIZE};
use crate::core::cpu::{Ports, Vr4300, trap};

use super::StageOutcome;

/// Executes the IC stage.
///
/// Fetch is speculative: the cursor advances as soon as the address resolves,
/// and a later fault discards the fetched instructions by killing their latches.
///
/// # Arguments
///
/// * `vr4300` - Processor state.
/// * `ports` - Bus, segment resolver and instruction set.
///
/// # Returns
///
/// [`StageOutcome::Aborted`] if the fetch address maps to no segment.
pub fn ic_stage(vr4300: &mut Vr4300, ports: &mut Ports<'_>) -> StageOutcome {
    let pipeline = &mut vr4300.pipeline;
    let pc = pipeline.icrf.pc;
    pipeline.icrf.common.pc = pc;

    let rfex = &mut pipeline.rfex;
    rfex.iw &= rfex.iw_mask;
    rfex.opcode = ports.isa.decode(rfex.iw);
    rfex.iw_mask = DECODE_MASK_NONE;

    if !pipeline.icrf.segment.contains(pc) {
        match ports.segments.resolve(pc, vr4300.cp0.status) {
            Some(segment) => pipeline.icrf.segment = segment,
            None => {
                trap::instruction_address_error(vr4300);
                return StageOutcome::Aborted;
            }
        }
    }

    let icrf = &mut vr4300.pipeline.icrf;
    icrf.common.fault = None;
    icrf.pc = pc.wrapping_add(INSTRUCTION_SIZE);
    StageOutcome::Continue
}
