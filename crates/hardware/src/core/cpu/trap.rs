//! Fault Handling Logic.
//!
//! This module implements the entry point for each pipeline fault. It performs
//! the following:
//! 1. **Interlocks:** Load-delay and data-cache-busy faults stall the pipeline and
//!    select the stage the next clock resumes at. No instruction is killed.
//! 2. **Exceptions:** Address errors and uncached fetch kill the faulting
//!    instruction and everything younger, then redirect fetch to the handler.
//! 3. **Cold Reset:** Kills every latch and restarts fetch at the reset vector.
//!
//! Each entry point is called by the stage that detected the fault, after the
//! stage has written its output header and before it aborts.

use tracing::{debug, trace, warn};

use crate::common::Fault;
use crate::common::constants::RESET_VECTOR;
use crate::core::arch::ExcCode;
use crate::core::pipeline::{BusRequestKind, Resume, Stage};

use super::{Ports, Vr4300};

/// Load-delay interlock raised by EX.
///
/// The bus request the interlock was detected against is dropped, so the
/// replayed EX on the next clock forwards the loaded value instead of holding
/// again.
pub fn load_delay_interlock(vr4300: &mut Vr4300) {
    let pipeline = &mut vr4300.pipeline;
    trace!(
        pc = format_args!("{:#018x}", pipeline.rfex.common.pc),
        dest = pipeline.dcwb.dest,
        fault = %Fault::LoadDelayInterlock,
        "load-delay interlock"
    );

    pipeline.exdc.request.kind = BusRequestKind::None;
    pipeline.resume = Resume::At(Stage::Ex);
    vr4300.stats.record(Fault::LoadDelayInterlock);
}

/// Data-cache-busy fault raised by DC on a pending read.
///
/// The read is serviced here from the translated address. The data is merged
/// into DC/WB when the next clock resumes at the fix-up point.
pub fn data_cache_busy(vr4300: &mut Vr4300, ports: &mut Ports<'_>) {
    let pipeline = &mut vr4300.pipeline;
    let request = &mut pipeline.exdc.request;
    request.word = ports.bus.read(request.address, request.size);
    trace!(
        address = format_args!("{:#010x}", request.address),
        size = request.size,
        fault = %Fault::DataCacheBusy,
        "data cache busy"
    );

    pipeline.cycles_to_stall = vr4300.load_stall_cycles;
    pipeline.resume = Resume::ExFixup;
    vr4300.stats.record(Fault::DataCacheBusy);
}

/// Instruction address error raised by IC.
pub fn instruction_address_error(vr4300: &mut Vr4300) {
    let pc = vr4300.pipeline.icrf.common.pc;
    warn!(pc = format_args!("{pc:#018x}"), "fetch from unmapped address");
    enter_exception(
        vr4300,
        Stage::Ic,
        Fault::InstructionAddressError,
        ExcCode::AddressErrorLoad,
        pc,
        Some(pc),
    );
}

/// Uncached instruction fetch raised by RF.
pub fn uncached_fetch(vr4300: &mut Vr4300) {
    let pc = vr4300.pipeline.rfex.common.pc;
    enter_exception(
        vr4300,
        Stage::Rf,
        Fault::UncachedFetch,
        ExcCode::InstructionBusError,
        pc,
        None,
    );
}

/// Data address error raised by DC.
pub fn data_address_error(vr4300: &mut Vr4300) {
    let exdc = &vr4300.pipeline.exdc;
    let (pc, address) = (exdc.common.pc, exdc.request.address);
    let code = if exdc.request.kind == BusRequestKind::Write {
        ExcCode::AddressErrorStore
    } else {
        ExcCode::AddressErrorLoad
    };
    warn!(
        pc = format_args!("{pc:#018x}"),
        address = format_args!("{address:#018x}"),
        "data access to unmapped address"
    );
    enter_exception(
        vr4300,
        Stage::Dc,
        Fault::DataAddressError,
        code,
        pc,
        Some(address),
    );
}

/// Takes a cold reset.
///
/// Reset overrides any stall or partial sequence in progress. The caller
/// continues into the checked path on the same clock, which drains the killed
/// latches and fetches the reset vector.
pub fn cold_reset(vr4300: &mut Vr4300) {
    debug!("cold reset");
    vr4300.signals.cold_reset = false;
    vr4300.cp0.cold_reset();

    let pipeline = &mut vr4300.pipeline;
    pipeline.cycles_to_stall = 0;
    pipeline.kill(Stage::Wb, Fault::ColdReset);
    pipeline.icrf.pc = RESET_VECTOR;
    pipeline.fault_present = true;
    pipeline.exception_history = 0;
    pipeline.resume = Resume::Full;
    vr4300.stats.record(Fault::ColdReset);
}

fn enter_exception(
    vr4300: &mut Vr4300,
    stage: Stage,
    fault: Fault,
    code: ExcCode,
    epc: u64,
    badvaddr: Option<u64>,
) {
    debug!(
        fault = %fault,
        epc = format_args!("{epc:#018x}"),
        "exception"
    );

    let vector = vr4300.cp0.enter_exception(code, epc, badvaddr);
    let pipeline = &mut vr4300.pipeline;
    pipeline.kill(stage, fault);
    pipeline.icrf.pc = vector;
    pipeline.fault_present = true;
    pipeline.exception_history = 0;
    pipeline.resume = Resume::Full;
    vr4300.stats.record(fault);
}
