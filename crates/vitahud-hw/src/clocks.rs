//! Selectable clock steps per clock domain, in MHz.
//!
//! Steps are ordered from slowest to fastest. `DEFAULT` is the frequency the
//! system programs when no override is active.

/// Application CPU cluster
pub mod cpu {
    pub const STEPS: &[u32] = &[41, 83, 111, 166, 222, 333, 444, 500];
    pub const DEFAULT: u32 = 333;
}

/// GPU core (SGX543 ES4 domain)
pub mod gpu_es4 {
    pub const STEPS: &[u32] = &[41, 55, 83, 111, 166, 222];
    pub const DEFAULT: u32 = 111;
}

/// Main bus
pub mod bus {
    pub const STEPS: &[u32] = &[55, 83, 111, 166, 222];
    pub const DEFAULT: u32 = 222;
}

/// GPU crossbar
pub mod gpu_xbar {
    pub const STEPS: &[u32] = &[83, 111, 166];
    pub const DEFAULT: u32 = 111;
}

/// Venezia media coprocessor
pub mod venezia {
    pub const STEPS: &[u32] = &[41, 55, 83, 111, 166];
    pub const DEFAULT: u32 = 166;
}
