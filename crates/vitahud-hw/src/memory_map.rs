//! Per-process memory pools visible through the current address space.
//!
//! The limits are the largest pool a title can be granted. A reported total
//! above the limit means the pool is shared with the system and only its free
//! space is meaningful.

/// Main user memory (LPDDR2)
pub mod main {
    /// Largest user main pool (512 MiB)
    pub const LIMIT: u32 = 512 * 1024 * 1024;
}

/// Video memory (CDRAM)
pub mod cdram {
    /// Largest user CDRAM pool (128 MiB)
    pub const LIMIT: u32 = 128 * 1024 * 1024;
}

/// Physically contiguous memory
pub mod phycont {
    /// Largest user physically contiguous pool (26 MiB)
    pub const LIMIT: u32 = 26 * 1024 * 1024;
}

/// Memory blocks are allocated in whole pages
pub const PAGE_SIZE: usize = 0x1000;
