//! Simulator: owns the processor next to its memory, segment map and
//! instruction set.
//!
//! The processor borrows the other three as [`Ports`] for each clock, so no
//! component needs a back-reference to another.

use tracing::debug;

use crate::common::Result;
use crate::config::Config;
use crate::core::Vr4300;
use crate::core::cpu::Ports;
use crate::core::units::segment::SegmentTable;
use crate::isa::InstructionSet;
use crate::soc::Memory;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator<I> {
    /// Processor state.
    pub cpu: Vr4300,
    /// Physical memory.
    pub memory: Memory,
    /// Segment map used for address resolution.
    pub segments: SegmentTable,
    /// Instruction set executed by the pipeline.
    pub isa: I,
}

impl<I: InstructionSet> Simulator<I> {
    /// Creates a simulator in its power-on state.
    pub fn new(config: &Config, isa: I) -> Self {
        debug!(
            ram_size = config.memory.ram_size,
            start_pc = ?config.general.start_pc,
            "creating simulator"
        );
        Self {
            cpu: Vr4300::new(config),
            memory: Memory::new(config.memory.ram_size),
            segments: SegmentTable,
            isa,
        }
    }

    /// Copies an image into physical memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageOutOfRange`](crate::common::Error::ImageOutOfRange)
    /// if the image does not fit.
    pub fn load_image(&mut self, physical: u64, bytes: &[u8]) -> Result<()> {
        self.memory.load(physical, bytes)
    }

    /// Advances the simulator by one clock.
    pub fn tick(&mut self) {
        let mut ports = Ports {
            bus: &mut self.memory,
            segments: &self.segments,
            isa: &self.isa,
        };
        self.cpu.cycle(&mut ports);
    }

    /// Advances the simulator by `cycles` clocks.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.tick();
        }
    }
}
