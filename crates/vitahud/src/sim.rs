//! In-process host used by the preview window, the headless runner and the
//! tests.
//!
//! Time only moves when [`SimKernel::advance`] is called. Each core accrues
//! idle clock in proportion to its configured load, so the sampler sees
//! exactly the loads that were asked for.

use crate::host::{
    Device, Kernel, KernelError, MemBlock, MemoryPool, OcMode, Overclock, PoolInfo, Profiles,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ptr::NonNull;
use std::rc::Rc;
use tracing::{debug, trace};
use vitahud_hw::clocks;
use vitahud_hw::specs::cpu::CORES;

const MIB: u32 = 1024 * 1024;

/// Access-control value while privileged pages are locked
const ACCESS_RESTRICTED: u32 = 0x5555_5555;

/// Access-control value with every domain opened up
const ACCESS_UNRESTRICTED: u32 = 0xFFFF_FFFF;

/// Status returned when an allocation is refused
pub const ERROR_NO_MEMORY: i32 = 0x8002_0410_u32 as i32;

/// Initial readings of a simulated device.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub has_battery: bool,
    pub title_id: String,
    /// Target load of each core, 0-100
    pub core_loads: [u8; CORES],
    pub battery_percent: i32,
    /// Hundredths of a degree Celsius
    pub battery_temp: i32,
    /// Minutes
    pub battery_life_time: i32,
    pub battery_charging: bool,
    /// Indexed by [`MemoryPool::index`]
    pub pools: [Option<PoolInfo>; 3],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            has_battery: true,
            title_id: "PCSE00000".to_string(),
            core_loads: [35, 60, 20, 10],
            battery_percent: 87,
            battery_temp: 3_150,
            battery_life_time: 245,
            battery_charging: false,
            pools: [
                Some(PoolInfo {
                    free: 148 * MIB,
                    total: 365 * MIB,
                }),
                Some(PoolInfo {
                    free: 40 * MIB,
                    total: 112 * MIB,
                }),
                None,
            ],
        }
    }
}

/// Simulated kernel services.
#[derive(Debug)]
pub struct SimKernel {
    now_us: u64,
    idle: [u64; CORES],
    config: SimConfig,
    access: Cell<u32>,
    /// Leaked boxes, reclaimed in `free_mem_block` or on drop
    blocks: HashMap<i32, NonNull<[u8]>>,
    next_uid: i32,
    fail_alloc: Option<i32>,
}

impl SimKernel {
    pub fn new(config: SimConfig) -> Self {
        Self {
            now_us: 0,
            idle: [0; CORES],
            config,
            access: Cell::new(ACCESS_RESTRICTED),
            blocks: HashMap::new(),
            next_uid: 0x0001_0001,
            fail_alloc: None,
        }
    }

    /// Move the clock forward, accruing idle time on every core.
    pub fn advance(&mut self, us: u64) {
        self.now_us += us;
        for (idle, load) in self.idle.iter_mut().zip(self.config.core_loads) {
            let load = load.min(100) as u64;
            *idle += us * (100 - load) / 100;
        }
    }

    pub fn set_core_loads(&mut self, loads: [u8; CORES]) {
        self.config.core_loads = loads;
    }

    pub fn set_battery(&mut self, percent: i32, temp: i32, life_time: i32, charging: bool) {
        self.config.battery_percent = percent;
        self.config.battery_temp = temp;
        self.config.battery_life_time = life_time;
        self.config.battery_charging = charging;
    }

    pub fn set_pool(&mut self, pool: MemoryPool, info: Option<PoolInfo>) {
        self.config.pools[pool.index()] = info;
    }

    pub fn set_title_id(&mut self, title_id: &str) {
        self.config.title_id = title_id.to_string();
    }

    /// Make every following allocation fail with `code`, or succeed again
    /// with `None`.
    pub fn set_fail_alloc(&mut self, code: Option<i32>) {
        self.fail_alloc = code;
    }

    /// Current access-control register value.
    pub fn access_control(&self) -> u32 {
        self.access.get()
    }

    /// Number of memory blocks allocated and not yet freed.
    pub fn live_blocks(&self) -> usize {
        self.blocks.len()
    }
}

impl Kernel for SimKernel {
    fn process_time_low(&self) -> u32 {
        self.now_us as u32
    }

    fn cpu_idle_clocks(&self) -> [u64; CORES] {
        self.idle
    }

    fn memory_pool_info(&self, pool: MemoryPool) -> Option<PoolInfo> {
        self.config.pools[pool.index()]
    }

    fn has_battery(&self) -> bool {
        self.config.has_battery
    }

    fn battery_percent(&self) -> i32 {
        self.config.battery_percent
    }

    fn battery_temp(&self) -> i32 {
        self.config.battery_temp
    }

    fn battery_life_time(&self) -> i32 {
        self.config.battery_life_time
    }

    fn is_battery_charging(&self) -> bool {
        self.config.battery_charging
    }

    fn title_id(&self) -> &str {
        &self.config.title_id
    }

    fn alloc_mem_block(&mut self, name: &str, size: usize) -> Result<MemBlock, KernelError> {
        if let Some(code) = self.fail_alloc {
            debug!(name, size, "refusing allocation");
            return Err(KernelError(code));
        }

        let uid = self.next_uid;
        self.next_uid += 1;

        let storage = vec![0u8; size].into_boxed_slice();
        // SAFETY: `Box::into_raw` never returns null.
        let raw = unsafe { NonNull::new_unchecked(Box::into_raw(storage)) };
        self.blocks.insert(uid, raw);
        trace!(name, uid, size, "allocated block");

        // SAFETY: the allocation is owned by no live reference and stays put
        // until `free_mem_block` or drop reclaims it.
        Ok(unsafe { MemBlock::new(uid, raw.cast::<u8>(), size) })
    }

    fn free_mem_block(&mut self, block: MemBlock) {
        match self.blocks.remove(&block.uid()) {
            // SAFETY: `raw` came from `Box::into_raw` and was removed from the
            // table, so it is reclaimed exactly once.
            Some(raw) => drop(unsafe { Box::from_raw(raw.as_ptr()) }),
            None => debug!(uid = block.uid(), "freeing unknown block"),
        }
    }

    fn unrestrict_access(&self) -> u32 {
        self.access.replace(ACCESS_UNRESTRICTED)
    }

    fn restore_access(&self, saved: u32) {
        self.access.set(saved);
    }
}

impl Drop for SimKernel {
    fn drop(&mut self) {
        for (_, raw) in self.blocks.drain() {
            // SAFETY: every entry came from `Box::into_raw` and is still owned
            // by the table.
            drop(unsafe { Box::from_raw(raw.as_ptr()) });
        }
    }
}

/// Per-device override: `None` follows the system default, `Some` is a
/// manual frequency in MHz.
type Snapshot = [Option<u32>; 5];

#[derive(Debug, Default)]
struct ClockState {
    modes: [OcMode; 5],
    manual: [u32; 5],
    title_profile: Option<Snapshot>,
    global_profile: Option<Snapshot>,
}

impl ClockState {
    fn snapshot(&self) -> Snapshot {
        let mut snapshot = [None; 5];
        for device in Device::ALL {
            let i = device.index();
            if self.modes[i] == OcMode::Manual {
                snapshot[i] = Some(self.manual[i]);
            }
        }
        snapshot
    }
}

fn steps(device: Device) -> (&'static [u32], u32) {
    match device {
        Device::Cpu => (clocks::cpu::STEPS, clocks::cpu::DEFAULT),
        Device::GpuEs4 => (clocks::gpu_es4::STEPS, clocks::gpu_es4::DEFAULT),
        Device::Bus => (clocks::bus::STEPS, clocks::bus::DEFAULT),
        Device::GpuXbar => (clocks::gpu_xbar::STEPS, clocks::gpu_xbar::DEFAULT),
        Device::Venezia => (clocks::venezia::STEPS, clocks::venezia::DEFAULT),
    }
}

/// Shared clock and profile state behind the simulated collaborators.
#[derive(Debug, Clone, Default)]
pub struct SimClocks {
    state: Rc<RefCell<ClockState>>,
}

impl SimClocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overclock(&self) -> SimOverclock {
        SimOverclock {
            state: Rc::clone(&self.state),
        }
    }

    pub fn profiles(&self) -> SimProfiles {
        SimProfiles {
            state: Rc::clone(&self.state),
        }
    }
}

/// Simulated clock override engine.
#[derive(Debug, Clone)]
pub struct SimOverclock {
    state: Rc<RefCell<ClockState>>,
}

impl Overclock for SimOverclock {
    fn mode(&self, device: Device) -> OcMode {
        self.state.borrow().modes[device.index()]
    }

    fn set_mode(&mut self, device: Device, mode: OcMode) {
        self.state.borrow_mut().modes[device.index()] = mode;
    }

    fn frequency(&self, device: Device) -> u32 {
        let state = self.state.borrow();
        match state.modes[device.index()] {
            OcMode::Manual => state.manual[device.index()],
            OcMode::Default => steps(device).1,
        }
    }

    fn change_manual(&mut self, device: Device, increase: bool) {
        let (steps, _) = steps(device);
        let mut state = self.state.borrow_mut();
        let current = state.manual[device.index()];
        let next = if increase {
            steps.iter().copied().find(|&f| f > current)
        } else {
            steps.iter().rev().copied().find(|&f| f < current)
        };
        if let Some(freq) = next {
            state.manual[device.index()] = freq;
        }
    }

    fn reset_manual(&mut self, device: Device) {
        let current = self.frequency(device);
        self.state.borrow_mut().manual[device.index()] = current;
    }

    fn has_changed(&self) -> bool {
        let state = self.state.borrow();
        let applied = state
            .title_profile
            .or(state.global_profile)
            .unwrap_or_default();
        state.snapshot() != applied
    }
}

/// Simulated profile store.
#[derive(Debug, Clone)]
pub struct SimProfiles {
    state: Rc<RefCell<ClockState>>,
}

impl Profiles for SimProfiles {
    fn exists(&self, global: bool) -> bool {
        let state = self.state.borrow();
        if global {
            state.global_profile.is_some()
        } else {
            state.title_profile.is_some()
        }
    }

    fn save(&mut self, global: bool) {
        let mut state = self.state.borrow_mut();
        let snapshot = Some(state.snapshot());
        if global {
            state.global_profile = snapshot;
        } else {
            state.title_profile = snapshot;
        }
    }

    fn delete(&mut self, global: bool) {
        let mut state = self.state.borrow_mut();
        if global {
            state.global_profile = None;
        } else {
            state.title_profile = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_follows_load() {
        let mut sim = SimKernel::new(SimConfig {
            core_loads: [0, 25, 100, 150],
            ..SimConfig::default()
        });
        sim.advance(1_000);
        assert_eq!(sim.cpu_idle_clocks(), [1_000, 750, 0, 0]);
        assert_eq!(sim.process_time_low(), 1_000);
    }

    #[test]
    fn blocks_are_tracked() {
        let mut sim = SimKernel::new(SimConfig::default());
        let block = sim.alloc_mem_block("test", 4096).unwrap();
        assert_eq!(block.size(), 4096);
        assert_eq!(sim.live_blocks(), 1);
        sim.free_mem_block(block);
        assert_eq!(sim.live_blocks(), 0);

        // Writes through the handed-out base stay valid while other blocks
        // come and go
        let block = sim.alloc_mem_block("first", 64).unwrap();
        let others: Vec<_> = (0..32)
            .map(|_| sim.alloc_mem_block("filler", 16).unwrap())
            .collect();
        unsafe {
            block.base().as_ptr().write_bytes(0xAB, 64);
            assert_eq!(*block.base().as_ptr().add(63), 0xAB);
        }
        for other in others {
            sim.free_mem_block(other);
        }
        sim.free_mem_block(block);
        assert_eq!(sim.live_blocks(), 0);

        // Blocks still allocated are reclaimed with the kernel
        sim.alloc_mem_block("leftover", 64).unwrap();
        drop(sim);
        let mut sim = SimKernel::new(SimConfig::default());

        sim.set_fail_alloc(Some(ERROR_NO_MEMORY));
        let err = sim.alloc_mem_block("test", 4096).unwrap_err();
        assert_eq!(err.code(), ERROR_NO_MEMORY);
    }

    #[test]
    fn manual_steps_are_clamped() {
        let clocks = SimClocks::new();
        let mut oc = clocks.overclock();
        oc.reset_manual(Device::GpuXbar);
        oc.set_mode(Device::GpuXbar, OcMode::Manual);
        for _ in 0..5 {
            oc.change_manual(Device::GpuXbar, true);
        }
        assert_eq!(oc.frequency(Device::GpuXbar), 166);
        for _ in 0..5 {
            oc.change_manual(Device::GpuXbar, false);
        }
        assert_eq!(oc.frequency(Device::GpuXbar), 83);
    }

    #[test]
    fn global_profile_applies_without_title_profile() {
        let clocks = SimClocks::new();
        let mut oc = clocks.overclock();
        let mut profiles = clocks.profiles();

        oc.reset_manual(Device::Bus);
        oc.set_mode(Device::Bus, OcMode::Manual);
        oc.change_manual(Device::Bus, false);
        assert!(oc.has_changed());

        profiles.save(true);
        assert!(!oc.has_changed());

        oc.set_mode(Device::Bus, OcMode::Default);
        profiles.save(false);
        assert!(!oc.has_changed());
        profiles.delete(false);
        assert!(oc.has_changed());
    }
}
