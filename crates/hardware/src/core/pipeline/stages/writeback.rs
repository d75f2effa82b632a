//! Writeback (WB) Stage.
//!
//! The final stage commits the DC/WB result to the register file. A killed
//! instruction is never committed.

use crate::core::cpu::Vr4300;

use super::StageOutcome;

/// Executes the WB stage.
///
/// `r0` is re-pinned to zero by the register file on every write, even when an
/// instruction targets it.
pub fn wb_stage(vr4300: &mut Vr4300) -> StageOutcome {
    let dcwb = &vr4300.pipeline.dcwb;
    if dcwb.common.is_faulted() {
        return StageOutcome::Continue;
    }

    vr4300.regs.write(dcwb.dest, dcwb.result);
    vr4300.stats.instructions_retired += 1;
    StageOutcome::Continue
}
