//! Core processor implementation.
//!
//! This module contains the VR4300 processor: its coprocessor-0 state, the
//! five-stage pipeline, the fault entry points, and the address segment unit.

/// Architecture-specific components (coprocessor 0).
pub mod arch;

/// Processor state and fault entry points.
pub mod cpu;

/// Instruction pipeline (latches, hazards, stages, fault/resume engine).
pub mod pipeline;

/// Execution units (address segments).
pub mod units;

pub use self::cpu::Vr4300;
