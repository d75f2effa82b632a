//! VR4300 pipeline simulator library.
//!
//! This crate implements the cycle-accurate five-stage pipeline of the NEC VR4300
//! (64-bit MIPS) with the following:
//! 1. **Core:** Pipeline latches, IC/RF/EX/DC/WB stages, and the fault/resume state machine.
//! 2. **Hazards:** Load-delay interlocks and DC/WB operand forwarding.
//! 3. **Architecture:** General-purpose registers, coprocessor 0 and the segment map.
//! 4. **SoC:** The memory bus contract and big-endian RAM.
//! 5. **Simulation:** Configuration, the simulator driver, and statistics.
//!
//! Instruction semantics are supplied by the caller through [`isa::InstructionSet`].

/// Common types and constants (faults, errors, register file).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// Processor core (arch, cpu, pipeline, units).
pub mod core;
/// Instruction set contract and instruction-word fields.
pub mod isa;
/// Simulation driver.
pub mod sim;
/// System-on-chip (bus trait and memory).
pub mod soc;
/// Pipeline statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse it from JSON.
pub use crate::config::Config;
/// Processor state; holds registers, coprocessor 0 and the pipeline.
pub use crate::core::Vr4300;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
