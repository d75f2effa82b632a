//! VR4300 architectural state outside the integer register file.
//!
//! 1. **CP0:** The system-control coprocessor registers and exception entry.

/// Coprocessor-0 registers and exception entry.
pub mod cp0;

pub use cp0::{Cp0, ExcCode};
