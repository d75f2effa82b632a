//! Physical System Memory (RDRAM).
//!
//! This module implements the main system memory. It provides:
//! 1. **Buffer:** A byte vector holding RAM contents, mapped at physical address zero.
//! 2. **Bus:** The [`Bus`] implementation used by the pipeline.
//! 3. **Loading:** Image placement for program setup.
//!
//! Accesses outside the buffer read as zero (a `nop` when fetched) and writes to
//! them are dropped, the way an open bus behaves.

use crate::common::{Error, Result};
use crate::soc::traits::Bus;

/// Big-endian RAM mapped at physical address zero.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    buffer: Vec<u8>,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.buffer.len())
            .finish()
    }
}

impl Memory {
    /// Creates zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            buffer: vec![0; size],
        }
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` for zero-sized memory.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Copies `data` into memory at physical address `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageOutOfRange`] if the image does not fit.
    pub fn load(&mut self, addr: u64, data: &[u8]) -> Result<()> {
        let size = self.buffer.len();
        let out_of_range = || Error::ImageOutOfRange {
            addr,
            len: data.len(),
            size,
        };
        let start = usize::try_from(addr).map_err(|_| out_of_range())?;
        let end = start.checked_add(data.len()).ok_or_else(out_of_range)?;
        let dst = self.buffer.get_mut(start..end).ok_or_else(out_of_range)?;
        dst.copy_from_slice(data);
        Ok(())
    }

    /// Reads one byte; out-of-range reads return zero.
    pub fn read_u8(&self, addr: u64) -> u8 {
        usize::try_from(addr)
            .ok()
            .and_then(|i| self.buffer.get(i).copied())
            .unwrap_or(0)
    }

    /// Writes one byte; out-of-range writes are dropped.
    pub fn write_u8(&mut self, addr: u64, val: u8) {
        if let Some(byte) = usize::try_from(addr)
            .ok()
            .and_then(|i| self.buffer.get_mut(i))
        {
            *byte = val;
        }
    }
}

impl Bus for Memory {
    fn read_word(&mut self, address: u64) -> u32 {
        self.read(address & !3, 4) as u32
    }

    fn read(&mut self, address: u64, size: u8) -> u64 {
        (0..u64::from(size)).fold(0, |acc, i| {
            (acc << 8) | u64::from(self.read_u8(address.wrapping_add(i)))
        })
    }

    fn write(&mut self, address: u64, word: u64, dqm: u64) {
        let base = address & !7;
        for lane in 0..8u64 {
            let shift = (7 - lane) * 8;
            if (dqm >> shift) & 0xFF != 0 {
                self.write_u8(base + lane, (word >> shift) as u8);
            }
        }
    }
}
