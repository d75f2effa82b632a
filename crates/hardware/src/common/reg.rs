//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 64-bit
//! general-purpose registers of the VR4300. It provides:
//! 1. **Storage:** Maintains registers `r0`-`r31`.
//! 2. **Invariant Enforcement:** Register `r0` is re-pinned to zero after every write.
//! 3. **Observability:** A register dump for debugging.

use std::fmt;

use super::constants::{GPR_COUNT, REGISTER_R0};

/// General-purpose register file.
///
/// Register `r0` is hard-wired to zero. Every write re-pins it, so no
/// instruction can leave it non-zero, even one that explicitly targets it.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u64; GPR_COUNT],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with all registers set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; GPR_COUNT],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u64 {
        self.regs[idx & (GPR_COUNT - 1)]
    }

    /// Writes a register, then pins `r0` back to zero.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 64-bit value to write.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: u64) {
        self.regs[idx & (GPR_COUNT - 1)] = val;
        self.regs[REGISTER_R0] = 0;
    }

    /// Returns a copy of all 32 registers.
    pub const fn snapshot(&self) -> [u64; GPR_COUNT] {
        self.regs
    }
}

impl fmt::Debug for RegisterFile {
    /// Dumps registers in pairs with hexadecimal formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..GPR_COUNT).step_by(2) {
            writeln!(
                f,
                "r{:<2}={:#018x} r{:<2}={:#018x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            )?;
        }
        Ok(())
    }
}
