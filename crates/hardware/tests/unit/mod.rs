//! # Unit Components
//!
//! Tests for each building block of the simulator: shared types, the
//! processor core, configuration, the memory system and statistics.



/// Unit tests for coprocessor 0, segments and the pipeline.
pub mod core;
