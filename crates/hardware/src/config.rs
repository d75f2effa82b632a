//! Configuration system for the VR4300 simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline constants (RAM size, fault window).
//! 2. **Structures:** Hierarchical config for general, pipeline and memory settings.
//! 3. **Loading:** Parsing from JSON text or a JSON file.
//!
//! Every field is optional in JSON; missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Error, Result};

/// Default configuration constants for the simulator.
mod defaults {
    /// Checked clocks without a fresh fault before the fast path resumes.
    ///
    /// Covers the depth of the pipeline, so a killed instruction has always
    /// drained out of the DC/WB latch before fault checks stop.
    pub const FAULT_WINDOW: u32 = 4;

    /// Extra stall clocks charged per serviced data read.
    pub const LOAD_STALL_CYCLES: u32 = 0;

    /// Size of RDRAM (8 MiB, expansion-pak configuration).
    pub const RAM_SIZE: usize = 8 * 1024 * 1024;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use vr4300_core::config::Config;
///
/// let json = r#"{
///     "general": { "start_pc": 2147483648, "trace_instructions": true },
///     "pipeline": { "load_stall_cycles": 2 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.start_pc, Some(0x8000_0000));
/// assert_eq!(config.pipeline.load_stall_cycles, 2);
/// assert_eq!(config.pipeline.fault_window, 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline timing settings
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigFile`] if the file cannot be read and
    /// [`Error::Config`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Start fetching here with a drained pipeline instead of taking a cold reset
    #[serde(default)]
    pub start_pc: Option<u64>,

    /// Log every executed instruction at trace level (`vr4300::exec` target)
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Pipeline timing settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Exception-history threshold after which fault checks stop
    #[serde(default = "PipelineConfig::default_fault_window")]
    pub fault_window: u32,

    /// Extra stall clocks per serviced data read
    #[serde(default = "PipelineConfig::default_load_stall_cycles")]
    pub load_stall_cycles: u32,
}

impl PipelineConfig {
    fn default_fault_window() -> u32 {
        defaults::FAULT_WINDOW
    }

    fn default_load_stall_cycles() -> u32 {
        defaults::LOAD_STALL_CYCLES
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fault_window: defaults::FAULT_WINDOW,
            load_stall_cycles: defaults::LOAD_STALL_CYCLES,
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// RAM size in bytes
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,
}

impl MemoryConfig {
    fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_size: defaults::RAM_SIZE,
        }
    }
}
