//! Fault/Resume State Machine and Cycle Driver.
//!
//! This module implements the per-clock control of the pipeline. It provides:
//! 1. **Pipeline State:** The four latches plus the stall counter, fault flag,
//!    exception history and resume point.
//! 2. **Fast Path:** WB, DC, EX, RF, IC with no fault checks, taken in steady state.
//! 3. **Checked Path:** The same sequence started at the resume point, where a
//!    stage whose input latch is killed only passes the kill downstream.
//! 4. **Load Fix-up:** Merges serviced read data into the DC/WB latch.
//!
//! Faults are rare, so the checked path only runs while one may still be in
//! flight: from the clock a fault is raised until the exception history passes
//! the fault window, or while a partial sequence is pending.

use crate::common::Fault;
use crate::common::constants::{NOP_INSTRUCTION, REGISTER_R0};
use crate::core::cpu::{Ports, Vr4300, trap};
use crate::core::pipeline::latches::{BusRequest, DcWbLatch, ExDcLatch, IcRfLatch, RfExLatch};
use crate::core::pipeline::stages::{
    StageOutcome, dc_stage, ex_stage, ic_stage, rf_stage, wb_stage,
};

/// Pipeline stages, oldest instruction first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Writeback.
    Wb,
    /// Data cache.
    Dc,
    /// Execute.
    Ex,
    /// Register fetch.
    Rf,
    /// Instruction cache.
    Ic,
}

impl Stage {
    /// Per-clock execution order.
    pub const ORDER: [Self; 5] = [Self::Wb, Self::Dc, Self::Ex, Self::Rf, Self::Ic];
}

/// Where the next clock starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Resume {
    /// The whole sequence, starting at WB.
    #[default]
    Full,
    /// A partial sequence starting at the given stage. The older stages already
    /// completed their work for the current instructions.
    At(Stage),
    /// Fix up DC/WB with serviced read data, then continue from EX.
    ExFixup,
}

impl Resume {
    const fn first_stage(self) -> Stage {
        match self {
            Self::Full => Stage::Wb,
            Self::At(stage) => stage,
            Self::ExFixup => Stage::Ex,
        }
    }
}

/// Pipeline latches and fault/resume state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    /// IC/RF latch.
    pub icrf: IcRfLatch,
    /// RF/EX latch.
    pub rfex: RfExLatch,
    /// EX/DC latch.
    pub exdc: ExDcLatch,
    /// DC/WB latch.
    pub dcwb: DcWbLatch,
    /// Clocks to idle before any stage runs again.
    pub cycles_to_stall: u32,
    /// A killed instruction may still be in flight.
    pub fault_present: bool,
    /// Checked clocks since the last fault was raised.
    pub exception_history: u32,
    /// Where the next clock starts.
    pub resume: Resume,
}

impl Pipeline {
    /// A pipeline whose latches are all killed, about to fetch from `pc`.
    ///
    /// The killed latches drain through the checked path, so the first
    /// instruction at `pc` is written back on the fifth clock.
    pub fn drained(pc: u64) -> Self {
        let mut pipeline = Self::default();
        pipeline.icrf.pc = pc;
        pipeline.kill(Stage::Wb, Fault::ColdReset);
        pipeline.fault_present = true;
        pipeline
    }

    /// Kills the instruction in `from` and every younger one.
    ///
    /// The header of each killed latch keeps its program counter and takes
    /// `fault`. A fault detected by DC kills the DC/WB latch too, since DC has
    /// already copied the faulting instruction into it.
    pub fn kill(&mut self, from: Stage, fault: Fault) {
        if from <= Stage::Dc {
            self.dcwb.common.fault = Some(fault);
        }
        if from <= Stage::Ex {
            self.exdc.common.fault = Some(fault);
        }
        if from <= Stage::Rf {
            self.rfex.common.fault = Some(fault);
        }
        self.icrf.common.fault = Some(fault);
    }

    /// Returns `true` when the next clock takes the checked path.
    pub fn is_checked(&self) -> bool {
        self.fault_present || self.resume != Resume::Full
    }
}

/// Advances the processor by one clock.
///
/// Cold reset is handled first and overrides any stall. A stalled pipeline
/// otherwise only counts the stall down.
pub fn cycle(vr4300: &mut Vr4300, ports: &mut Ports<'_>) {
    vr4300.stats.cycles += 1;

    if vr4300.signals.cold_reset {
        trap::cold_reset(vr4300);
    } else if vr4300.pipeline.cycles_to_stall > 0 {
        vr4300.pipeline.cycles_to_stall -= 1;
        vr4300.stats.stall_cycles += 1;
        return;
    }

    if vr4300.pipeline.is_checked() {
        checked_cycle(vr4300, ports);
        return;
    }

    for stage in Stage::ORDER {
        if run_stage(vr4300, ports, stage) == StageOutcome::Aborted {
            return;
        }
    }
}

fn checked_cycle(vr4300: &mut Vr4300, ports: &mut Ports<'_>) {
    let pipeline = &mut vr4300.pipeline;
    if pipeline.exception_history > vr4300.fault_window {
        pipeline.fault_present = false;
    }
    // Counts every checked clock, partial sequences included, so the window is
    // measured in clocks rather than in full sequences.
    pipeline.exception_history = pipeline.exception_history.saturating_add(1);

    let resume = pipeline.resume;
    if resume == Resume::ExFixup {
        fixup_load(pipeline);
    }

    let first = resume.first_stage();
    for stage in Stage::ORDER.into_iter().filter(|stage| *stage >= first) {
        if checked_stage(vr4300, ports, stage) == StageOutcome::Aborted {
            return;
        }
    }

    vr4300.pipeline.resume = Resume::Full;
}

fn run_stage(vr4300: &mut Vr4300, ports: &mut Ports<'_>, stage: Stage) -> StageOutcome {
    match stage {
        Stage::Wb => wb_stage(vr4300),
        Stage::Dc => dc_stage(vr4300, ports),
        Stage::Ex => ex_stage(vr4300, ports),
        Stage::Rf => rf_stage(vr4300, ports),
        Stage::Ic => ic_stage(vr4300, ports),
    }
}

/// Runs `stage` unless its input latch is killed, in which case the kill moves
/// one latch down as an inert bubble.
fn checked_stage(vr4300: &mut Vr4300, ports: &mut Ports<'_>, stage: Stage) -> StageOutcome {
    let pipeline = &mut vr4300.pipeline;
    match stage {
        Stage::Wb if pipeline.dcwb.common.is_faulted() => {}
        Stage::Dc if pipeline.exdc.common.is_faulted() => {
            pipeline.dcwb = DcWbLatch {
                dest: REGISTER_R0,
                result: 0,
                common: pipeline.exdc.common,
            };
        }
        Stage::Ex if pipeline.rfex.common.is_faulted() => {
            let exdc = &mut pipeline.exdc;
            exdc.common = pipeline.rfex.common;
            exdc.dest = REGISTER_R0;
            exdc.request = BusRequest::default();
        }
        Stage::Rf if pipeline.icrf.common.is_faulted() => {
            pipeline.rfex.common = pipeline.icrf.common;
            pipeline.rfex.iw = NOP_INSTRUCTION;
        }
        _ => return run_stage(vr4300, ports, stage),
    }
    StageOutcome::Continue
}

/// Completes a serviced read by merging its data into the DC/WB latch.
fn fixup_load(pipeline: &mut Pipeline) {
    let exdc = &pipeline.exdc;
    pipeline.dcwb.result = merge_load(exdc.result, &exdc.request);
}

/// Merges serviced read data into the destination register's previous bits.
///
/// The data is sign- or zero-extended from the access size, then replaces the
/// bits selected by the request's `dqm`; the remaining bits come from
/// `previous`.
///
/// # Arguments
///
/// * `previous` - Destination bits to keep, as left in the EX/DC result.
/// * `request` - The serviced read request; `word` holds the right-justified bus data.
///
/// # Returns
///
/// The value to commit.
pub fn merge_load(previous: u64, request: &BusRequest) -> u64 {
    let data = extend(request.word, request.size, request.signed);
    (previous & !request.dqm) | (data & request.dqm)
}

/// Extends the low `size` bytes of `word` to 64 bits.
pub const fn extend(word: u64, size: u8, signed: bool) -> u64 {
    let bytes = if size == 0 || size > 8 { 8 } else { size };
    let shift = 64 - (bytes as u32) * 8;
    if signed {
        (((word << shift) as i64) >> shift) as u64
    } else {
        (word << shift) >> shift
    }
}
