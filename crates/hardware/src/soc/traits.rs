//! Memory bus contract.
//!
//! This module defines the `Bus` trait the pipeline uses to reach memory. It provides:
//! 1. **Instruction Fetch:** 32-bit reads for the RF stage.
//! 2. **Data Reads:** Right-justified reads serviced when a data-cache-busy fault drains.
//! 3. **Data Writes:** Byte-lane masked doubleword writes issued by the DC stage.
//!
//! All addresses are physical. Byte order is big-endian; lane 0 of a doubleword
//! is its most significant byte.

/// A physical memory bus.
pub trait Bus {
    /// Reads the 32-bit instruction word at `address`.
    fn read_word(&mut self, address: u64) -> u32;

    /// Reads `size` bytes (1, 2, 4 or 8) at `address`, right-justified.
    fn read(&mut self, address: u64, size: u8) -> u64;

    /// Writes `word` into the doubleword containing `address` under the byte-lane
    /// mask `dqm`. Only bytes whose mask byte is nonzero are written.
    fn write(&mut self, address: u64, word: u64, dqm: u64);
}
