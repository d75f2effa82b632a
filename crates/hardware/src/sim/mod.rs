//! Simulation driver.
//!
//! Provides the [`Simulator`] that owns a processor and the collaborators it
//! is clocked against.

/// Simulator owning processor, memory, segment map and instruction set.
pub mod simulator;

pub use simulator::Simulator;
