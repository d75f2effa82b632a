//! Pipeline stage implementations.
//!
//! This module contains the five stages of the VR4300 pipeline. It includes:
//! 1. **IC:** Advances the fetch cursor and finalises decode of the word RF read.
//! 2. **RF:** Reads the instruction word through a cache-enabled segment.
//! 3. **EX:** Detects load-delay interlocks, forwards operands and dispatches the opcode.
//! 4. **DC:** Translates and applies the pending bus request.
//! 5. **WB:** Commits the result to the register file.
//!
//! Stages run in reverse order (WB first) so an older instruction always reads
//! its input latch before a younger one overwrites it.

/// Register fetch stage (RF).
pub mod decode;

/// Execute stage (EX).
pub mod execute;

/// Instruction cache stage (IC).
pub mod fetch;

/// Data cache stage (DC).
pub mod memory;

/// Writeback stage (WB).
pub mod writeback;

/// RF stage entry point.
pub use decode::rf_stage;
/// EX stage entry point.
pub use execute::ex_stage;
/// IC stage entry point.
pub use fetch::ic_stage;
/// DC stage entry point.
pub use memory::dc_stage;
/// WB stage entry point.
pub use writeback::wb_stage;

/// Result of running one stage.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageOutcome {
    /// Continue with the next (younger) stage.
    Continue,
    /// A fault was raised; nothing else runs this clock.
    Aborted,
}
