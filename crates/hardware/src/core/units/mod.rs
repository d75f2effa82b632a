//! Processor units consulted by the pipeline stages.
//!
//! The only unit the pipeline core drives directly is address segment
//! resolution; caches, the TLB and the FPU belong to instruction sets and
//! the memory system.

/// Virtual address segments and the segment resolver contract.
pub mod segment;
