//! System-on-chip side of the processor: the memory bus contract and RAM.

/// Physical memory.
pub mod memory;

/// The `Bus` trait consumed by the pipeline.
pub mod traits;

pub use memory::Memory;
pub use traits::Bus;
