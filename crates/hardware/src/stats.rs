//! Pipeline statistics collection and reporting.
//!
//! This module tracks what the pipeline did with its clocks. It provides:
//! 1. **Throughput:** Clocks and retired instructions, with derived CPI.
//! 2. **Stalls:** Idle clocks, load-delay interlocks and serviced data reads.
//! 3. **Exceptions:** Faults that redirected fetch.

use std::fmt;

use crate::common::Fault;

/// Pipeline statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Clocks elapsed.
    pub cycles: u64,
    /// Clocks spent counting down a stall.
    pub stall_cycles: u64,
    /// Instructions committed by WB, including no-ops.
    pub instructions_retired: u64,
    /// Load-delay interlocks raised by EX.
    pub load_interlocks: u64,
    /// Data reads serviced through the data-cache-busy path.
    pub data_cache_busy: u64,
    /// Exceptions taken (cold reset excluded).
    pub exceptions: u64,
    /// Cold resets taken.
    pub cold_resets: u64,
}

impl PipelineStats {
    /// Counts a fault against its counter.
    pub fn record(&mut self, fault: Fault) {
        match fault {
            Fault::LoadDelayInterlock => self.load_interlocks += 1,
            Fault::DataCacheBusy => self.data_cache_busy += 1,
            Fault::ColdReset => self.cold_resets += 1,
            Fault::InstructionAddressError | Fault::UncachedFetch | Fault::DataAddressError => {
                self.exceptions += 1;
            }
        }
    }

    /// Clocks per retired instruction, or zero before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "VR4300 PIPELINE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "stalls.cycles            {}", self.stall_cycles)?;
        writeln!(f, "stalls.load_interlock    {}", self.load_interlocks)?;
        writeln!(f, "stalls.dcache_busy       {}", self.data_cache_busy)?;
        writeln!(f, "exceptions               {}", self.exceptions)?;
        writeln!(f, "cold_resets              {}", self.cold_resets)?;
        write!(f, "==========================================================")
    }
}
