//! Telemetry sampler.
//!
//! Turns the raw counters exposed by the kernel into the figures the overlay
//! shows: per-core CPU load, a smoothed peak load, frames per second, battery
//! state and memory pool usage. Nothing here draws; the compositor only reads
//! through the accessors.
//!
//! Battery and memory readings carry a version counter that moves whenever a
//! stored field actually changes, so each panel can tell whether it is stale
//! without resetting anything shared.

use crate::host::{Kernel, MemoryPool, PoolInfo};
use tracing::trace;
use vitahud_hw::specs::battery::{MAX_LIFETIME_MINUTES, MAX_PERCENT, MAX_TEMP_C, TEMP_DIVISOR};
use vitahud_hw::specs::cpu::CORES;
use vitahud_hw::specs::timer::TICKS_PER_SECOND;

/// Minimum time between two per-core average computations, in microseconds
pub const CPU_SAMPLE_PERIOD_US: u32 = 500_000;

/// Number of instantaneous samples averaged into the peak load
pub const PEAK_SAMPLES: usize = 10;

/// Store `value` into `slot`, bumping `version` only on a real change.
fn assign<T: PartialEq>(slot: &mut T, value: T, version: &mut u32) {
    if *slot != value {
        *slot = value;
        *version = version.wrapping_add(1);
    }
}

/// `100 - idle/elapsed * 100`, clamped to a percentage.
fn usage(idle_delta: u64, tick_delta: u32) -> i32 {
    let usage = (100.0 - (idle_delta as f32 / tick_delta as f32) * 100.0) as i32;
    usage.clamp(0, 100)
}

/// Last accepted battery readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatteryState {
    percent: i32,
    temp: i32,
    lifetime_hours: i32,
    lifetime_minutes: i32,
    charging: bool,
    version: u32,
}

impl BatteryState {
    /// Charge, 0-100
    pub fn percent(&self) -> i32 {
        self.percent
    }

    /// Temperature in whole degrees Celsius, 0-99
    pub fn temp(&self) -> i32 {
        self.temp
    }

    pub fn lifetime_hours(&self) -> i32 {
        self.lifetime_hours
    }

    pub fn lifetime_minutes(&self) -> i32 {
        self.lifetime_minutes
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    /// Bumped on every field change.
    pub fn version(&self) -> u32 {
        self.version
    }
}

/// Free/total bytes of the three pools, sharing one version counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryUsage {
    pools: [PoolInfo; 3],
    version: u32,
}

impl MemoryUsage {
    pub fn pool(&self, pool: MemoryPool) -> PoolInfo {
        self.pools[pool.index()]
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Store a reading. The version moves only when free or total differ.
    pub fn update(&mut self, pool: MemoryPool, info: PoolInfo) {
        let slot = &mut self.pools[pool.index()];
        assign(&mut slot.free, info.free, &mut self.version);
        assign(&mut slot.total, info.total, &mut self.version);
    }
}

/// Sampler state.
#[derive(Debug, Clone, Default)]
pub struct Perf {
    // Per-core average, refreshed every CPU_SAMPLE_PERIOD_US
    loads: [i32; CORES],
    avg_tick_last: u32,
    avg_idle_last: [u64; CORES],

    // Instantaneous max-core samples, refreshed on every poll
    peak_samples: [i32; PEAK_SAMPLES],
    peak_rotation: usize,
    inst_tick_last: u32,
    inst_idle_last: [u64; CORES],

    fps: i32,
    fps_count: i32,
    fps_tick_last: u32,

    battery: BatteryState,
    memory: MemoryUsage,
}

impl Perf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Average load of `core` over the last completed sampling period.
    ///
    /// Panics if `core` is not below [`CORES`].
    pub fn load(&self, core: usize) -> i32 {
        self.loads[core]
    }

    pub fn loads(&self) -> [i32; CORES] {
        self.loads
    }

    /// Mean of the peak ring. Unfilled slots count as zero.
    pub fn peak(&self) -> i32 {
        self.peak_samples.iter().sum::<i32>() / PEAK_SAMPLES as i32
    }

    /// Frames counted in the last closed one-second window.
    pub fn fps(&self) -> i32 {
        self.fps
    }

    pub fn battery(&self) -> &BatteryState {
        &self.battery
    }

    pub fn memory(&self) -> &MemoryUsage {
        &self.memory
    }

    /// Sample the per-core idle clocks.
    pub fn poll_cpu<K: Kernel + ?Sized>(&mut self, kernel: &K) {
        let now = kernel.process_time_low();
        let idle = kernel.cpu_idle_clocks();

        let avg_elapsed = now.wrapping_sub(self.avg_tick_last);
        if avg_elapsed >= CPU_SAMPLE_PERIOD_US {
            for (core, clock) in idle.iter().enumerate() {
                let delta = clock.wrapping_sub(self.avg_idle_last[core]);
                self.loads[core] = usage(delta, avg_elapsed);
            }
            self.avg_idle_last = idle;
            self.avg_tick_last = now;
            trace!(loads = ?self.loads, "cpu average");
        }

        let inst_elapsed = now.wrapping_sub(self.inst_tick_last);
        if inst_elapsed == 0 {
            return;
        }

        let max_usage = idle
            .iter()
            .zip(self.inst_idle_last.iter())
            .map(|(clock, last)| usage(clock.wrapping_sub(*last), inst_elapsed))
            .max()
            .unwrap_or(0);

        self.peak_samples[self.peak_rotation] = max_usage;
        self.peak_rotation = (self.peak_rotation + 1) % PEAK_SAMPLES;
        self.inst_idle_last = idle;
        self.inst_tick_last = now;
    }

    /// Count one presented frame.
    pub fn calc_fps<K: Kernel + ?Sized>(&mut self, kernel: &K) {
        let now = kernel.process_time_low();
        if now.wrapping_sub(self.fps_tick_last) > TICKS_PER_SECOND {
            self.fps = self.fps_count;
            self.fps_count = 0;
            self.fps_tick_last = now;
            trace!(fps = self.fps, "fps window closed");
        }
        self.fps_count += 1;
    }

    /// Read free/total of every pool. Missing pools read as empty.
    pub fn poll_memory<K: Kernel + ?Sized>(&mut self, kernel: &K) {
        for pool in MemoryPool::ALL {
            let info = kernel.memory_pool_info(pool).unwrap_or_default();
            self.memory.update(pool, info);
        }
    }

    /// Read the power controller, keeping the previous value of any reading
    /// that is out of range.
    pub fn poll_battery<K: Kernel + ?Sized>(&mut self, kernel: &K) {
        if !kernel.has_battery() {
            return;
        }

        let batt = &mut self.battery;

        let percent = kernel.battery_percent();
        if (0..=MAX_PERCENT).contains(&percent) {
            assign(&mut batt.percent, percent, &mut batt.version);
        } else {
            trace!(percent, "discarding battery percent");
        }

        let temp = kernel.battery_temp() / TEMP_DIVISOR;
        if (0..=MAX_TEMP_C).contains(&temp) {
            assign(&mut batt.temp, temp, &mut batt.version);
        } else {
            trace!(temp, "discarding battery temperature");
        }

        let lifetime = kernel.battery_life_time();
        if (0..MAX_LIFETIME_MINUTES).contains(&lifetime) {
            let hours = lifetime / 60;
            assign(&mut batt.lifetime_hours, hours, &mut batt.version);
            assign(&mut batt.lifetime_minutes, lifetime - hours * 60, &mut batt.version);
        } else {
            trace!(lifetime, "discarding battery lifetime");
        }

        let charging = kernel.is_battery_charging();
        assign(&mut batt.charging, charging, &mut batt.version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimConfig, SimKernel};

    fn kernel(loads: [u8; CORES]) -> SimKernel {
        SimKernel::new(SimConfig {
            core_loads: loads,
            ..SimConfig::default()
        })
    }

    #[test]
    fn average_waits_for_sample_period() {
        let mut sim = kernel([75, 50, 25, 0]);
        let mut perf = Perf::new();

        sim.advance(400_000);
        perf.poll_cpu(&sim);
        assert_eq!(perf.loads(), [0, 0, 0, 0]);

        sim.advance(100_000);
        perf.poll_cpu(&sim);
        assert_eq!(perf.loads(), [75, 50, 25, 0]);
    }

    #[test]
    fn average_uses_ticks_since_last_average() {
        let mut sim = kernel([75, 75, 75, 75]);
        let mut perf = Perf::new();

        sim.advance(500_000);
        perf.poll_cpu(&sim);
        assert_eq!(perf.load(0), 75);

        // Idle for half the window, fully busy for the other half
        sim.set_core_loads([0, 0, 0, 0]);
        sim.advance(250_000);
        perf.poll_cpu(&sim);
        sim.set_core_loads([100, 100, 100, 100]);
        sim.advance(250_000);
        perf.poll_cpu(&sim);
        assert_eq!(perf.loads(), [50, 50, 50, 50]);
    }

    #[test]
    fn peak_cold_start_divides_by_ring_size() {
        let mut sim = kernel([75, 50, 25, 0]);
        let mut perf = Perf::new();

        for _ in 0..3 {
            sim.advance(100_000);
            perf.poll_cpu(&sim);
        }
        // Three samples of 75 over ten slots
        assert_eq!(perf.peak(), 22);

        for _ in 0..PEAK_SAMPLES {
            sim.advance(100_000);
            perf.poll_cpu(&sim);
        }
        assert_eq!(perf.peak(), 75);
    }

    #[test]
    fn peak_ring_overwrites_oldest() {
        let mut sim = kernel([100, 0, 0, 0]);
        let mut perf = Perf::new();
        for _ in 0..PEAK_SAMPLES {
            sim.advance(10_000);
            perf.poll_cpu(&sim);
        }
        assert_eq!(perf.peak(), 100);

        sim.set_core_loads([0, 0, 0, 0]);
        for _ in 0..4 {
            sim.advance(10_000);
            perf.poll_cpu(&sim);
        }
        assert_eq!(perf.peak(), 60);
    }

    #[test]
    fn zero_elapsed_adds_no_sample() {
        let mut sim = kernel([50, 50, 50, 50]);
        let mut perf = Perf::new();
        sim.advance(10_000);
        perf.poll_cpu(&sim);
        perf.poll_cpu(&sim);
        perf.poll_cpu(&sim);
        assert_eq!(perf.peak(), 5);
    }

    #[test]
    fn tick_counter_wraps() {
        let mut sim = kernel([75, 50, 25, 0]);
        let mut perf = Perf::new();

        sim.advance(u32::MAX as u64 - 100_000);
        perf.poll_cpu(&sim);

        sim.advance(600_000);
        assert!(sim.process_time_low() < 600_000);
        perf.poll_cpu(&sim);
        assert_eq!(perf.loads(), [75, 50, 25, 0]);
    }

    #[test]
    fn fps_latches_after_one_second() {
        let mut sim = kernel([0; CORES]);
        let mut perf = Perf::new();

        for _ in 0..30 {
            sim.advance(30_000);
            perf.calc_fps(&sim);
        }
        assert_eq!(perf.fps(), 0);

        sim.advance(200_000);
        perf.calc_fps(&sim);
        assert_eq!(perf.fps(), 30);

        // The new window already holds the boundary frame
        for _ in 0..59 {
            sim.advance(10_000);
            perf.calc_fps(&sim);
        }
        assert_eq!(perf.fps(), 30);
        sim.advance(500_000);
        perf.calc_fps(&sim);
        assert_eq!(perf.fps(), 60);
    }

    #[test]
    fn memory_version_moves_only_on_change() {
        let mut usage = MemoryUsage::default();
        let info = PoolInfo {
            free: 1024,
            total: 4096,
        };

        usage.update(MemoryPool::Main, info);
        let version = usage.version();
        assert_ne!(version, 0);

        usage.update(MemoryPool::Main, info);
        assert_eq!(usage.version(), version);

        usage.update(MemoryPool::Main, PoolInfo { free: 0, ..info });
        assert_ne!(usage.version(), version);
        assert_eq!(usage.pool(MemoryPool::Main).free, 0);
    }

    #[test]
    fn missing_pool_reads_zero() {
        let mut sim = kernel([0; CORES]);
        sim.set_pool(
            MemoryPool::Cdram,
            Some(PoolInfo {
                free: 10,
                total: 20,
            }),
        );
        sim.set_pool(MemoryPool::Phycont, None);

        let mut perf = Perf::new();
        perf.poll_memory(&sim);
        assert_eq!(perf.memory().pool(MemoryPool::Phycont), PoolInfo::default());
        assert_eq!(perf.memory().pool(MemoryPool::Cdram).total, 20);

        let version = perf.memory().version();
        perf.poll_memory(&sim);
        assert_eq!(perf.memory().version(), version);
    }

    #[test]
    fn battery_readings() {
        let mut sim = kernel([0; CORES]);
        sim.set_battery(64, 3_175, 135, true);

        let mut perf = Perf::new();
        perf.poll_battery(&sim);
        let batt = *perf.battery();
        assert_eq!(batt.percent(), 64);
        assert_eq!(batt.temp(), 31);
        assert_eq!(batt.lifetime_hours(), 2);
        assert_eq!(batt.lifetime_minutes(), 15);
        assert!(batt.is_charging());

        perf.poll_battery(&sim);
        assert_eq!(perf.battery().version(), batt.version());
    }

    #[test]
    fn out_of_range_battery_readings_are_dropped() {
        let mut sim = kernel([0; CORES]);
        sim.set_battery(50, 2_500, 90, false);
        let mut perf = Perf::new();
        perf.poll_battery(&sim);

        sim.set_battery(101, 10_000, 6_000, false);
        let version = perf.battery().version();
        perf.poll_battery(&sim);

        let batt = perf.battery();
        assert_eq!(batt.percent(), 50);
        assert_eq!(batt.temp(), 25);
        assert_eq!(batt.lifetime_hours(), 1);
        assert_eq!(batt.lifetime_minutes(), 30);
        assert_eq!(batt.version(), version);

        sim.set_battery(-1, -100, -5, false);
        perf.poll_battery(&sim);
        assert_eq!(perf.battery().percent(), 50);
    }

    #[test]
    fn no_battery_skips_polling() {
        let sim = SimKernel::new(SimConfig {
            has_battery: false,
            ..SimConfig::default()
        });
        let mut perf = Perf::new();
        perf.poll_battery(&sim);
        assert_eq!(*perf.battery(), BatteryState::default());
    }
}
