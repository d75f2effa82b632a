//! Execute (EX) Stage.
//!
//! This module implements the hazard-critical stage of the pipeline. It performs:
//! 1. **Interlock Detection:** Holds an instruction whose source register is still being loaded.
//! 2. **Operand Forwarding:** Reads `rs`/`rt` with the DC/WB result bypassed in.
//! 3. **Dispatch:** Runs the opcode, which fills the EX/DC latch.

use tracing::trace;

use crate::common::constants::REGISTER_R0;
use crate::core::cpu::{Ports, Vr4300, trap};
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::BusRequest;
use crate::isa::instruction::InstructionBits;

use super::StageOutcome;

/// Executes the EX stage.
///
/// Either the opcode runs to completion or the stage aborts before dispatch;
/// no partial result is ever left in the EX/DC latch.
///
/// # Arguments
///
/// * `vr4300` - Processor state.
/// * `ports` - Bus, segment resolver and instruction set.
///
/// # Returns
///
/// [`StageOutcome::Aborted`] on a load-delay interlock.
pub fn ex_stage(vr4300: &mut Vr4300, ports: &mut Ports<'_>) -> StageOutcome {
    let pipeline = &mut vr4300.pipeline;
    pipeline.exdc.common = pipeline.rfex.common;

    let opcode = pipeline.rfex.opcode;
    let iw = pipeline.rfex.iw;
    let (rs, rt) = (iw.rs(), iw.rt());

    if hazards::load_interlock(opcode.flags, rs, rt, &pipeline.exdc, &pipeline.dcwb) {
        trap::load_delay_interlock(vr4300);
        return StageOutcome::Aborted;
    }

    let rs_val = hazards::forward(&vr4300.regs, &pipeline.dcwb, rs);
    let rt_val = hazards::forward(&vr4300.regs, &pipeline.dcwb, rt);

    if vr4300.trace_instructions {
        trace!(
            target: "vr4300::exec",
            pc = format_args!("{:#018x}", pipeline.rfex.common.pc),
            opcode = %ports.isa.mnemonic(opcode.id),
        );
    }

    pipeline.exdc.dest = REGISTER_R0;
    pipeline.exdc.request = BusRequest::default();
    ports.isa.execute(vr4300, opcode, rs_val, rt_val);
    StageOutcome::Continue
}
