//! Common utilities and types used throughout the VR4300 simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Instruction width, exception vectors, and coprocessor-0 bit fields.
//! 2. **Error Handling:** The pipeline `Fault` taxonomy and host-level `Error`.
//! 3. **Register Management:** The general-purpose register file with `r0` pinned to zero.

/// Processor-wide constants.
pub mod constants;

/// Fault taxonomy and host error types.
pub mod error;

/// General-purpose register file.
pub mod reg;

pub use error::{Error, Fault, Result};
pub use reg::RegisterFile;
