//! Data Cache (DC) Stage.
//!
//! DC hands the EX result to the DC/WB latch and services the pending bus
//! request. Writes go to the bus immediately. Reads are not completed here:
//! they raise a data-cache-busy fault, and the value reaches DC/WB through the
//! load fix-up on the next clock.

use crate::core::cpu::{Ports, Vr4300, trap};
use crate::core::pipeline::latches::BusRequestKind;

use super::StageOutcome;

/// Executes the DC stage.
///
/// # Arguments
///
/// * `vr4300` - Processor state.
/// * `ports` - Bus, segment resolver and instruction set.
///
/// # Returns
///
/// [`StageOutcome::Aborted`] on an unmapped address or a pending read.
pub fn dc_stage(vr4300: &mut Vr4300, ports: &mut Ports<'_>) -> StageOutcome {
    let pipeline = &mut vr4300.pipeline;
    let exdc = &mut pipeline.exdc;

    pipeline.dcwb.common = exdc.common;
    pipeline.dcwb.result = exdc.result;
    pipeline.dcwb.dest = exdc.dest;

    if !exdc.request.is_pending() {
        return StageOutcome::Continue;
    }

    let address = exdc.request.address;
    let mut segment = exdc.segment;
    if !segment.contains(address) {
        match ports.segments.resolve(address, vr4300.cp0.status) {
            Some(found) => segment = found,
            None => {
                trap::data_address_error(vr4300);
                return StageOutcome::Aborted;
            }
        }
    }

    exdc.segment = segment;
    exdc.request.address = segment.translate(address);

    match exdc.request.kind {
        BusRequestKind::Read => {
            trap::data_cache_busy(vr4300, ports);
            StageOutcome::Aborted
        }
        BusRequestKind::Write => {
            let request = exdc.request;
            ports
                .bus
                .write(request.address, request.word, request.dqm);
            StageOutcome::Continue
        }
        BusRequestKind::None => StageOutcome::Continue,
    }
}
