//! Processor Definition and Initialization.
//!
//! This module defines `Vr4300`, the single owned unit holding all processor
//! state. It coordinates the following:
//! 1. **State Management:** General-purpose registers and coprocessor 0.
//! 2. **Pipeline Control:** The latches and fault/resume state of the five-stage pipeline.
//! 3. **External Inputs:** The cold-reset signal, read once per clock.
//! 4. **System Integration:** The bus, segment resolver and instruction set,
//!    lent to each clock as [`Ports`].

/// Fault-raising entry points invoked by the stages.
pub mod trap;

use std::fmt;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::arch::Cp0;
use crate::core::pipeline::Pipeline;
use crate::core::pipeline::engine;
use crate::core::units::segment::SegmentResolver;
use crate::isa::InstructionSet;
use crate::soc::Bus;
use crate::stats::PipelineStats;

/// External signals sampled by the cycle driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Signals {
    /// Cold reset is asserted. Cleared when the reset is taken.
    pub cold_reset: bool,
}

/// Collaborators lent to the processor for one clock.
pub struct Ports<'a> {
    /// Physical memory bus.
    pub bus: &'a mut dyn Bus,
    /// Segment resolver for fetch and data addresses.
    pub segments: &'a dyn SegmentResolver,
    /// Opcode decode and dispatch table.
    pub isa: &'a dyn InstructionSet,
}

impl fmt::Debug for Ports<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ports").finish_non_exhaustive()
    }
}

/// VR4300 processor state.
///
/// Registers, coprocessor 0 and the pipeline form one unit owned by a single
/// caller. Each instance is independent; nothing is shared between processors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vr4300 {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Coprocessor-0 registers.
    pub cp0: Cp0,
    /// Pipeline latches and fault/resume state.
    pub pipeline: Pipeline,
    /// External signals.
    pub signals: Signals,
    /// Pipeline statistics.
    pub stats: PipelineStats,
    /// Checked clocks without a fresh fault before the fast path resumes.
    pub fault_window: u32,
    /// Extra stall clocks charged when a data read is serviced.
    pub load_stall_cycles: u32,
    /// Log every executed instruction at trace level.
    pub trace_instructions: bool,
}

impl Vr4300 {
    /// Creates a processor in its power-on state.
    ///
    /// With `general.start_pc` set the pipeline starts drained and fetching
    /// from that address. Otherwise cold reset is asserted and taken on the
    /// first clock.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration.
    pub fn new(config: &Config) -> Self {
        let (pipeline, cold_reset) = match config.general.start_pc {
            Some(pc) => (Pipeline::drained(pc), false),
            None => (Pipeline::default(), true),
        };

        Self {
            regs: RegisterFile::new(),
            cp0: Cp0::default(),
            pipeline,
            signals: Signals { cold_reset },
            stats: PipelineStats::default(),
            fault_window: config.pipeline.fault_window,
            load_stall_cycles: config.pipeline.load_stall_cycles,
            trace_instructions: config.general.trace_instructions,
        }
    }

    /// Advances the processor by one clock.
    pub fn cycle(&mut self, ports: &mut Ports<'_>) {
        engine::cycle(self, ports);
    }

    /// Asserts the cold-reset signal; it is taken on the next clock.
    pub fn assert_cold_reset(&mut self) {
        self.signals.cold_reset = true;
    }
}
