//! Register Fetch (RF) Stage.
//!
//! RF moves the fetched instruction into the RF/EX latch. Only cache-enabled
//! segments are fetched from; an uncached fetch raises a fault instead of being
//! modelled cycle by cycle.

use crate::core::cpu::{Ports, Vr4300, trap};

use super::StageOutcome;

/// Executes the RF stage.
///
/// The decode mask is left alone: EX may have set it on this clock and IC
/// applies it on the same clock.
pub fn rf_stage(vr4300: &mut Vr4300, ports: &mut Ports<'_>) -> StageOutcome {
    let pipeline = &mut vr4300.pipeline;
    pipeline.rfex.common = pipeline.icrf.common;

    let segment = pipeline.icrf.segment;
    if !segment.cached {
        trap::uncached_fetch(vr4300);
        return StageOutcome::Aborted;
    }

    let physical = segment.translate(pipeline.rfex.common.pc);
    pipeline.rfex.iw = ports.bus.read_word(physical);
    StageOutcome::Continue
}
