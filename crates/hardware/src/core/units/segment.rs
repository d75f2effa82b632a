//! Address Segment Resolution.
//!
//! This module implements the VR4300 virtual-address segment map. It provides:
//! 1. **Segments:** Address windows with a translation offset and a cacheability flag.
//! 2. **Resolution:** The `SegmentResolver` contract consumed by the IC and DC stages.
//! 3. **Default Map:** The 32-bit compatibility segments (kuseg, kseg0, kseg1, ksseg, kseg3).
//!
//! The pipeline holds a borrowed, non-owning `&'static Segment` and revalidates it
//! with [`Segment::contains`] whenever the running address leaves its window.
//! The TLB is not modelled; mapped segments translate by identity.

use crate::common::constants::{STATUS_ERL, STATUS_EXL, STATUS_KSU_MASK, STATUS_KSU_SHIFT};

/// A virtual address window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    /// First virtual address of the window.
    pub start: u64,
    /// Length of the window in bytes.
    pub length: u64,
    /// Value subtracted from a virtual address to obtain the physical address.
    pub offset: u64,
    /// Whether instruction fetch may go through the cache.
    pub cached: bool,
}

impl Segment {
    /// Returns `true` if `address` lies in `[start, start + length)`.
    #[inline(always)]
    pub const fn contains(&self, address: u64) -> bool {
        address.wrapping_sub(self.start) < self.length
    }

    /// Translates a virtual address inside this segment to a physical one.
    #[inline(always)]
    pub const fn translate(&self, address: u64) -> u64 {
        address.wrapping_sub(self.offset)
    }
}

/// Segment held by a freshly initialised pipeline. It contains no address, so the
/// first fetch or data access always consults the resolver.
pub static DEFAULT_SEGMENT: Segment = Segment {
    start: 1,
    length: 0,
    offset: 0,
    cached: false,
};

/// Resolves an address to the segment containing it.
pub trait SegmentResolver {
    /// Returns the segment containing `address` under the privilege implied by
    /// the coprocessor-0 `status` word, or `None` if no segment maps it.
    fn resolve(&self, address: u64, status: u32) -> Option<&'static Segment>;
}

/// Operating mode derived from the status word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Kernel mode (KSU = 0, or EXL/ERL set).
    Kernel,
    /// Supervisor mode (KSU = 1).
    Supervisor,
    /// User mode (KSU = 2).
    User,
}

impl Mode {
    /// Extracts the operating mode from a status word.
    pub const fn from_status(status: u32) -> Self {
        if status & (STATUS_EXL | STATUS_ERL) != 0 {
            return Self::Kernel;
        }
        match (status >> STATUS_KSU_SHIFT) & STATUS_KSU_MASK {
            0 => Self::Kernel,
            1 => Self::Supervisor,
            // KSU = 3 is undefined; the VR4300 treats it as user mode.
            _ => Self::User,
        }
    }
}

/// User segment, mapped (2 GiB).
pub static KUSEG: Segment = Segment {
    start: 0x0000_0000_0000_0000,
    length: 0x8000_0000,
    offset: 0,
    cached: true,
};

/// Kernel segment 0, unmapped and cached (512 MiB).
pub static KSEG0: Segment = Segment {
    start: 0xFFFF_FFFF_8000_0000,
    length: 0x2000_0000,
    offset: 0xFFFF_FFFF_8000_0000,
    cached: true,
};

/// Kernel segment 1, unmapped and uncached (512 MiB).
pub static KSEG1: Segment = Segment {
    start: 0xFFFF_FFFF_A000_0000,
    length: 0x2000_0000,
    offset: 0xFFFF_FFFF_A000_0000,
    cached: false,
};

/// Supervisor segment, mapped (512 MiB).
pub static KSSEG: Segment = Segment {
    start: 0xFFFF_FFFF_C000_0000,
    length: 0x2000_0000,
    offset: 0,
    cached: true,
};

/// Kernel segment 3, mapped (512 MiB).
pub static KSEG3: Segment = Segment {
    start: 0xFFFF_FFFF_E000_0000,
    length: 0x2000_0000,
    offset: 0,
    cached: true,
};

static USER_SEGMENTS: [&Segment; 1] = [&KUSEG];
static SUPERVISOR_SEGMENTS: [&Segment; 2] = [&KUSEG, &KSSEG];
static KERNEL_SEGMENTS: [&Segment; 5] = [&KUSEG, &KSEG0, &KSEG1, &KSSEG, &KSEG3];

/// The VR4300 32-bit compatibility segment map.
#[derive(Clone, Copy, Debug, Default)]
pub struct SegmentTable;

impl SegmentTable {
    /// Segments visible in `mode`, lowest address first.
    pub fn visible(mode: Mode) -> &'static [&'static Segment] {
        match mode {
            Mode::Kernel => &KERNEL_SEGMENTS,
            Mode::Supervisor => &SUPERVISOR_SEGMENTS,
            Mode::User => &USER_SEGMENTS,
        }
    }
}

impl SegmentResolver for SegmentTable {
    fn resolve(&self, address: u64, status: u32) -> Option<&'static Segment> {
        Self::visible(Mode::from_status(status))
            .iter()
            .copied()
            .find(|segment| segment.contains(address))
    }
}
