//! Interfaces to everything the overlay does not own.
//!
//! The host kernel, the clock override engine and the profile store are all
//! provided by the embedding environment. The overlay only talks to them
//! through the traits in this module, which keeps every drawing and sampling
//! path testable against [`crate::sim`].

use std::fmt;
use std::ptr::NonNull;
use vitahud_hw::specs::cpu::CORES;

/// Clock domains the override engine can program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Cpu,
    GpuEs4,
    Bus,
    GpuXbar,
    Venezia,
}

impl Device {
    pub const ALL: [Device; 5] = [
        Device::Cpu,
        Device::GpuEs4,
        Device::Bus,
        Device::GpuXbar,
        Device::Venezia,
    ];

    /// Position in [`Device::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Per-device override state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcMode {
    /// The system picks the frequency
    #[default]
    Default,
    /// A user-selected frequency overrides the system
    Manual,
}

/// Memory pools of the current address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryPool {
    /// Main user memory
    Main,
    /// Video memory
    Cdram,
    /// Physically contiguous memory
    Phycont,
}

impl MemoryPool {
    pub const ALL: [MemoryPool; 3] = [MemoryPool::Main, MemoryPool::Cdram, MemoryPool::Phycont];

    /// Position in [`MemoryPool::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Free and total bytes of one memory pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolInfo {
    pub free: u32,
    pub total: u32,
}

/// A negative status code returned by a kernel service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelError(pub i32);

impl KernelError {
    /// The raw status handed back to the host.
    pub fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kernel error {:#010X}", self.0 as u32)
    }
}

impl std::error::Error for KernelError {}

/// A kernel memory block: an id plus the base address of its mapping.
#[derive(Debug)]
pub struct MemBlock {
    uid: i32,
    base: NonNull<u8>,
    size: usize,
}

impl MemBlock {
    /// # Safety
    ///
    /// `base` must be valid for reads and writes of `size` bytes until the
    /// block is handed back through [`Kernel::free_mem_block`].
    pub unsafe fn new(uid: i32, base: NonNull<u8>, size: usize) -> Self {
        Self { uid, base, size }
    }

    pub fn uid(&self) -> i32 {
        self.uid
    }

    pub fn base(&self) -> NonNull<u8> {
        self.base
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Kernel services consumed by the sampler and the compositor.
pub trait Kernel {
    /// Low 32 bits of the process timer, in microseconds. Wraps.
    fn process_time_low(&self) -> u32;

    /// Cumulative idle clock of each application core, in microseconds.
    fn cpu_idle_clocks(&self) -> [u64; CORES];

    /// Free/total of a pool, or `None` when the address space has no handle
    /// for it.
    fn memory_pool_info(&self, pool: MemoryPool) -> Option<PoolInfo>;

    /// `false` on models powered from the wall.
    fn has_battery(&self) -> bool;

    /// Charge in percent. Values outside 0-100 are errors.
    fn battery_percent(&self) -> i32;

    /// Battery temperature in hundredths of a degree Celsius.
    fn battery_temp(&self) -> i32;

    /// Estimated remaining life in minutes.
    fn battery_life_time(&self) -> i32;

    fn is_battery_charging(&self) -> bool;

    /// Title id of the foreground application.
    fn title_id(&self) -> &str;

    fn alloc_mem_block(&mut self, name: &str, size: usize) -> Result<MemBlock, KernelError>;

    fn free_mem_block(&mut self, block: MemBlock);

    /// Lift the access restriction on privileged pages and return the
    /// previous setting.
    fn unrestrict_access(&self) -> u32;

    /// Put back a setting returned by [`Kernel::unrestrict_access`].
    fn restore_access(&self, saved: u32);
}

/// The clock override engine.
pub trait Overclock {
    fn mode(&self, device: Device) -> OcMode;

    fn set_mode(&mut self, device: Device, mode: OcMode);

    /// Current frequency in MHz.
    fn frequency(&self, device: Device) -> u32;

    /// Step the manual frequency one notch up or down.
    fn change_manual(&mut self, device: Device, increase: bool);

    /// Seed the manual frequency from the current one.
    fn reset_manual(&mut self, device: Device);

    /// Whether the live settings differ from the saved profile.
    fn has_changed(&self) -> bool;
}

/// The profile store, per title or global.
pub trait Profiles {
    fn exists(&self, global: bool) -> bool;

    fn save(&mut self, global: bool);

    fn delete(&mut self, global: bool);
}

/// Keeps privileged pages writable for as long as it lives.
///
/// Every raw framebuffer write happens while one of these is held; dropping
/// it restores the previous restriction, including on early returns.
pub struct AccessGuard<'k, K: Kernel + ?Sized> {
    kernel: &'k K,
    saved: u32,
}

impl<'k, K: Kernel + ?Sized> AccessGuard<'k, K> {
    pub fn new(kernel: &'k K) -> Self {
        let saved = kernel.unrestrict_access();
        Self { kernel, saved }
    }
}

impl<K: Kernel + ?Sized> Drop for AccessGuard<'_, K> {
    fn drop(&mut self) {
        self.kernel.restore_access(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimConfig, SimKernel};

    #[test]
    fn guard_restores_on_drop() {
        let kernel = SimKernel::new(SimConfig::default());
        let before = kernel.access_control();
        {
            let _guard = AccessGuard::new(&kernel);
            assert_ne!(kernel.access_control(), before);
        }
        assert_eq!(kernel.access_control(), before);
    }

    #[test]
    fn guard_restores_on_early_return() {
        fn bail(kernel: &SimKernel) -> Option<()> {
            let _guard = AccessGuard::new(kernel);
            None::<()>?;
            Some(())
        }

        let kernel = SimKernel::new(SimConfig::default());
        let before = kernel.access_control();
        assert!(bail(&kernel).is_none());
        assert_eq!(kernel.access_control(), before);
    }

    #[test]
    fn kernel_error_display() {
        let err = KernelError(-0x7FFE_FFFF);
        assert_eq!(err.code(), -0x7FFE_FFFF);
        assert_eq!(err.to_string(), "kernel error 0x80010001");
    }
}
