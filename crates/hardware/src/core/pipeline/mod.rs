//! VR4300 five-stage pipeline.
//!
//! This module contains the pipeline core. It includes:
//! 1. **Latches:** The IC/RF, RF/EX, EX/DC and DC/WB registers.
//! 2. **Hazards:** Load-delay interlock detection and DC/WB forwarding.
//! 3. **Stages:** IC, RF, EX, DC and WB.
//! 4. **Engine:** The fault/resume state machine and the per-clock driver.

/// Fault/resume state machine and cycle driver.
pub mod engine;

/// Interlock detection and operand forwarding.
pub mod hazards;

/// Inter-stage latch structures.
pub mod latches;

/// The five stage functions.
pub mod stages;

pub use engine::{Pipeline, Resume, Stage};
pub use latches::{
    BusRequest, BusRequestKind, DcWbLatch, ExDcLatch, IcRfLatch, LatchHeader, RfExLatch,
};
pub use stages::StageOutcome;
