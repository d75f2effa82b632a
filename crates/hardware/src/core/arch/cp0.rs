//! Coprocessor 0 (System Control).
//!
//! This module holds the subset of coprocessor-0 state the pipeline touches. It provides:
//! 1. **Registers:** Status, Cause, EPC and BadVAddr.
//! 2. **Exception Codes:** The Cause.ExcCode values raised by pipeline faults.
//! 3. **Exception Entry:** Recording a fault and selecting the handler vector.

use crate::common::constants::{
    CAUSE_EXCCODE_MASK, CAUSE_EXCCODE_SHIFT, GENERAL_VECTOR, GENERAL_VECTOR_BEV, STATUS_BEV,
    STATUS_ERL, STATUS_EXL,
};

/// Cause.ExcCode values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ExcCode {
    /// Address error on instruction fetch or data load.
    AddressErrorLoad = 4,
    /// Address error on data store.
    AddressErrorStore = 5,
    /// Bus error on instruction fetch.
    InstructionBusError = 6,
}

/// Coprocessor-0 register set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cp0 {
    /// Status register.
    pub status: u32,
    /// Cause register.
    pub cause: u32,
    /// Exception program counter.
    pub epc: u64,
    /// Bad virtual address.
    pub badvaddr: u64,
}

impl Cp0 {
    /// Records an exception and returns the vector to fetch from.
    ///
    /// EPC is only overwritten when Status.EXL is clear, so a nested exception
    /// keeps the return address of the outer one.
    ///
    /// # Arguments
    ///
    /// * `code` - The exception code written to Cause.
    /// * `epc` - Address of the faulting instruction.
    /// * `badvaddr` - The offending virtual address, for address errors.
    ///
    /// # Returns
    ///
    /// The general exception vector, relocated to the bootstrap region when Status.BEV is set.
    pub fn enter_exception(&mut self, code: ExcCode, epc: u64, badvaddr: Option<u64>) -> u64 {
        self.cause = (self.cause & !(CAUSE_EXCCODE_MASK << CAUSE_EXCCODE_SHIFT))
            | ((code as u32) << CAUSE_EXCCODE_SHIFT);
        if let Some(vaddr) = badvaddr {
            self.badvaddr = vaddr;
        }
        if self.status & STATUS_EXL == 0 {
            self.epc = epc;
        }
        self.status |= STATUS_EXL;

        if self.status & STATUS_BEV != 0 {
            GENERAL_VECTOR_BEV
        } else {
            GENERAL_VECTOR
        }
    }

    /// Applies the cold-reset state: error level and bootstrap vectors.
    pub fn cold_reset(&mut self) {
        self.status |= STATUS_ERL | STATUS_BEV;
    }

    /// Current Cause.ExcCode field.
    pub const fn exc_code(&self) -> u32 {
        (self.cause >> CAUSE_EXCCODE_SHIFT) & CAUSE_EXCCODE_MASK
    }
}
