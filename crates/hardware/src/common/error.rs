//! Fault and Error definitions.
//!
//! This module defines the two failure vocabularies of the simulator. It provides:
//! 1. **Pipeline Faults:** Modeled exceptions and interlocks carried in latch headers.
//! 2. **Host Errors:** Failures of the host environment (configuration, image loading).
//!
//! Faults are never host errors: every fault is expected, routed through the
//! resume state machine and eventually drained.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Pipeline fault kinds.
///
/// Each kind is assigned by the stage that detects it (or by the cold-reset
/// signal). The resume state machine only reacts to faults; it never invents one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fault {
    /// Instruction fetch from an address no segment maps (IC stage).
    InstructionAddressError,

    /// Instruction fetch from a segment that is not cache-enabled (RF stage).
    UncachedFetch,

    /// Execute needs a register the instruction in DC/WB has not produced yet (EX stage).
    LoadDelayInterlock,

    /// Data access to an address no segment maps (DC stage).
    DataAddressError,

    /// Data read pending in the data cache (DC stage).
    DataCacheBusy,

    /// External cold-reset signal.
    ColdReset,
}

impl Fault {
    /// Short mnemonic used in logs (`IADE`, `UNC`, `LDI`, `DADE`, `DCB`, `RST`).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::InstructionAddressError => "IADE",
            Self::UncachedFetch => "UNC",
            Self::LoadDelayInterlock => "LDI",
            Self::DataAddressError => "DADE",
            Self::DataCacheBusy => "DCB",
            Self::ColdReset => "RST",
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Host-level errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("cannot read configuration file {path}: {source}")]
    ConfigFile {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// An image does not fit inside physical memory.
    #[error("image of {len} bytes at {addr:#x} exceeds memory of {size} bytes")]
    ImageOutOfRange {
        /// Physical load address.
        addr: u64,
        /// Image length in bytes.
        len: usize,
        /// Memory size in bytes.
        size: usize,
    },
}

/// Convenience alias for host-level results.
pub type Result<T> = std::result::Result<T, Error>;
