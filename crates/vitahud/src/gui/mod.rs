//! Overlay compositor.
//!
//! Panels are drawn into an off-screen canvas and copied onto the live
//! framebuffer by [`Gui::blit`]. Templates (labels, outlines, the menu
//! skeleton) are drawn once per mode or resolution change; the `draw_*`
//! section methods then only overwrite the values. Battery and memory
//! sections additionally skip drawing while their readings are unchanged.
//!
//! In direct OSD style nothing goes through the canvas: [`Gui::draw_direct`]
//! writes FPS and battery text straight into the framebuffer.

mod battery;
mod blit;
mod canvas;
pub mod layout;
mod text;

use crate::color::{Rgba, scale_color, units_from_size, value_from_size};
use crate::font::Font;
use crate::host::{
    AccessGuard, Kernel, KernelError, MemoryPool, OcMode, Overclock, PoolInfo, Profiles,
};
use crate::input::{DisplayMode, MenuControl};
use crate::perf::{BatteryState, MemoryUsage, Perf};
use crate::surface::{FrameBuf, PixelFormat};
use blit::BlitRegion;
use canvas::Canvas;
use layout::{
    BATT_W, GUI_HEIGHT, GUI_OSD_HEIGHT, GUI_WIDTH, OSD_OFFSET, Scaler, by, cx, cx2, lx, rx, rx2,
    ty,
};
use std::fmt::Write;
use text::{LineBuf, Painter};
use tracing::{debug, warn};
use vitahud_hw::memory_map;

const VERSION_LABEL: &str = concat!("vitahud v", env!("CARGO_PKG_VERSION"));
const HEADER_LABEL: &str = "OC monitor";

/// Header text scale
const SMALL_TEXT: f32 = 0.5;

/// Battery icon color relative to the percentage text
const BATT_ICON_DIM: f32 = 0.75;

/// Menu skeleton, in [`MenuControl`] order
const MENU_LABELS: [&str; 5] = [
    "CPU [         ]",
    "ES4 [         ]",
    "BUS [         ]",
    "XBR [         ]",
    "VNZ [         ]",
];

/// Text line of a menu row, counted up from the bottom of the canvas.
fn menu_line(ctrl: MenuControl) -> i32 {
    6 - ctrl as i32
}

fn painter(canvas: &mut Option<Canvas>, font: Font, scaler: Scaler) -> Option<Painter<'_>> {
    canvas
        .as_mut()
        .map(|canvas| Painter::new(canvas.surface(), font, scaler))
}

/// Compositor state.
pub struct Gui {
    fb: FrameBuf,
    fb_last_width: u32,
    scaler: Scaler,
    font: Font,
    canvas: Option<Canvas>,

    // Force the next battery/memory redraw regardless of versions
    lazy_batt: bool,
    lazy_mem: bool,
    // Data versions each consumer drew last
    seen_batt_full: u32,
    seen_batt_osd: u32,
    seen_mem: u32,
}

impl Default for Gui {
    fn default() -> Self {
        Self::new()
    }
}

impl Gui {
    pub fn new() -> Self {
        let fb = FrameBuf::default();
        Self {
            fb,
            fb_last_width: fb.width,
            scaler: Scaler::default(),
            font: Font::for_width(fb.width),
            canvas: None,
            lazy_batt: false,
            lazy_mem: false,
            seen_batt_full: 0,
            seen_batt_osd: 0,
            seen_mem: 0,
        }
    }

    /// Allocate the canvas. Calling it again while allocated does nothing.
    pub fn init<K: Kernel + ?Sized>(&mut self, kernel: &mut K) -> Result<(), KernelError> {
        if self.canvas.is_none() {
            self.canvas = Some(Canvas::alloc(kernel)?);
        }
        Ok(())
    }

    pub fn deinit<K: Kernel + ?Sized>(&mut self, kernel: &mut K) {
        if let Some(canvas) = self.canvas.take() {
            canvas.free(kernel);
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.canvas.is_some()
    }

    /// Install the framebuffer about to be displayed.
    ///
    /// # Safety
    ///
    /// `fb.base`, when non-null, must stay valid for `fb.pitch * fb.height`
    /// pixels until the next call or until `self` is dropped, and nothing
    /// else may access it while a draw or blit call runs.
    pub unsafe fn set_framebuffer(&mut self, fb: FrameBuf) {
        if fb.width != self.fb.width || fb.height != self.fb.height {
            debug!(width = fb.width, height = fb.height, "framebuffer geometry");
        }
        if fb.pixel_format == PixelFormat::Unknown {
            warn!("unsupported framebuffer pixel format, overlay disabled");
        }
        self.fb = fb;
        self.scaler = Scaler::for_framebuffer(fb.width, fb.height);
        self.font = Font::for_width(fb.width);
    }

    pub fn framebuffer(&self) -> &FrameBuf {
        &self.fb
    }

    pub fn font(&self) -> Font {
        self.font
    }

    /// Whether the framebuffer width moved since the last call. A change
    /// forces the next battery and memory redraw.
    pub fn fb_resolution_changed(&mut self) -> bool {
        let changed = self.fb_last_width != self.fb.width;
        if changed {
            self.invalidate();
        }
        self.fb_last_width = self.fb.width;
        changed
    }

    /// Force the next battery and memory redraw.
    pub fn invalidate(&mut self) {
        self.lazy_batt = true;
        self.lazy_mem = true;
    }

    /// Clear the canvas and draw everything static of the Full panel.
    pub fn draw_template(&mut self) {
        let Some(mut p) = painter(&mut self.canvas, self.font, self.scaler) else {
            return;
        };
        p.fg = Rgba::WHITE;
        p.bg = Rgba::BLACK;
        p.clear();

        // Header
        p.scaled(SMALL_TEXT, |p| {
            p.print(cx2(18, SMALL_TEXT), ty(8, 0), VERSION_LABEL);
            p.print(rx2(10, 10, SMALL_TEXT), ty(8, 0), HEADER_LABEL);
        });

        // Battery
        p.print(rx(10, 9), ty(32, 0), "C");
        p.print(rx(14 + 6 + BATT_W, 1), ty(32, 0), "%");
        battery::draw_template(&mut p, rx(14 + BATT_W, 0), ty(35, 0));

        // CPU
        p.print(lx(10, 0), ty(44, 1), "CPU:");
        p.print(rx(10, 16), ty(44, 1), "%    %    %    %");
        p.print(lx(10, 0), ty(44, 2), "Peak:");
        p.print(rx(10, 1), ty(44, 2), "%");

        // Memory
        p.print(lx(10, 0), ty(56, 3), "MEM:");
        p.print(lx(10, 0), ty(56, 4), "VMEM:");
        p.print(lx(10, 0), ty(56, 5), "PHY:");

        // Menu
        for (label, ctrl) in MENU_LABELS.iter().zip(MenuControl::ALL) {
            p.print(cx(15), by(10, menu_line(ctrl)), label);
        }
    }

    /// Clear the canvas and draw everything static of the OSD panel.
    pub fn draw_osd_template(&mut self) {
        let Some(mut p) = painter(&mut self.canvas, self.font, self.scaler) else {
            return;
        };
        p.fg = Rgba::WHITE;
        p.bg = Rgba::BLACK;
        p.clear();

        // CPU
        p.print(lx(10, 0), ty(8, 0), "CPU:");
        p.print(rx(10, 16), ty(8, 0), "%    %    %    %");
        p.print(lx(10, 10), ty(10, 1), "%");

        // FPS
        p.print(lx(10, 3), ty(10, 1), "FPS");

        // Battery
        p.print(rx(20 + BATT_W, 1), ty(10, 1), "%");
        battery::draw_template(&mut p, rx(14 + BATT_W, 0), ty(13, 1));
    }

    /// Title id of the running application, top left.
    pub fn draw_header(&mut self, title_id: &str) {
        let Some(mut p) = painter(&mut self.canvas, self.font, self.scaler) else {
            return;
        };
        p.scaled(SMALL_TEXT, |p| {
            p.print_fmt(lx(10, 0), ty(8, 0), format_args!("{title_id:<9}"));
        });
    }

    /// Remaining time, temperature, charge and icon.
    pub fn draw_batt_section(&mut self, has_battery: bool, batt: &BatteryState) {
        let Some(mut p) = painter(&mut self.canvas, self.font, self.scaler) else {
            return;
        };

        if !has_battery {
            p.print(lx(10, 0), ty(32, 0), "A/C");
            return;
        }

        if batt.version() == self.seen_batt_full && !self.lazy_batt {
            return;
        }
        self.seen_batt_full = batt.version();
        self.lazy_batt = false;

        // Temperature
        let temp = batt.temp();
        p.colored(scale_color(temp.into(), 30, 60), |p| {
            p.print_fmt(rx(10, 11), ty(32, 0), format_args!("{temp:2}"));
        });

        // Remaining time
        let hours = batt.lifetime_hours();
        let minutes = batt.lifetime_minutes();
        if batt.is_charging() {
            p.print(lx(10, 0), ty(32, 0), "Charging   ");
        } else if hours == 0 && minutes <= 1 {
            p.print(lx(10, 0), ty(32, 0), "Calibrating");
        } else {
            let wide = hours >= 10;
            let pad = if wide { " " } else { "" };
            p.print_fmt(lx(10, 0), ty(32, 0), format_args!("  {pad} h   m   "));
            p.print(lx(10, 0), ty(42, 0), "~");

            let budget = 2 * 60;
            let color = scale_color((budget - (hours * 60 + minutes)).into(), 0, budget.into());
            p.colored(color, |p| {
                p.print_fmt(lx(10, 2), ty(32, 0), format_args!("{hours}"));
                let x = lx(10, if wide { 6 } else { 5 });
                p.print_fmt(x, ty(32, 0), format_args!("{minutes:02}"));
            });
        }

        // Charge
        let percent = batt.percent();
        let color = scale_color((60 - percent).into(), 0, 100);
        p.colored(color, |p| {
            p.print_fmt(rx(20 + BATT_W, 4), ty(32, 0), format_args!("{percent:3}"));
        });
        battery::draw_level(
            &mut p,
            rx(14 + BATT_W, 0),
            ty(35, 0),
            percent,
            batt.is_charging(),
            color.dimmed(BATT_ICON_DIM),
        );
    }

    /// Per-core average loads and the peak load.
    pub fn draw_cpu_section(&mut self, perf: &Perf) {
        let Some(mut p) = painter(&mut self.canvas, self.font, self.scaler) else {
            return;
        };

        for (i, load) in perf.loads().into_iter().enumerate() {
            let x = rx(10, 19 - i as i32 * 5);
            p.colored(scale_color(load.into(), 0, 100), |p| {
                p.print_fmt(x, ty(44, 1), format_args!("{load:3}"));
            });
        }

        let peak = perf.peak();
        p.colored(scale_color(peak.into(), 0, 100), |p| {
            p.print_fmt(rx(10, 4), ty(44, 2), format_args!("{peak:3}"));
        });
    }

    /// Usage of the three memory pools.
    pub fn draw_memory_section(&mut self, mem: &MemoryUsage) {
        if mem.version() == self.seen_mem && !self.lazy_mem {
            return;
        }
        let Some(mut p) = painter(&mut self.canvas, self.font, self.scaler) else {
            return;
        };
        self.seen_mem = mem.version();
        self.lazy_mem = false;

        let pools = [
            (MemoryPool::Main, memory_map::main::LIMIT),
            (MemoryPool::Cdram, memory_map::cdram::LIMIT),
            (MemoryPool::Phycont, memory_map::phycont::LIMIT),
        ];
        for (line, (pool, limit)) in (3..).zip(pools) {
            draw_memory_usage(&mut p, line, mem.pool(pool), limit);
        }
    }

    /// Frequencies, selection markers and the profile row.
    pub fn draw_menu<O, P>(
        &mut self,
        selected: MenuControl,
        show_global: bool,
        oc: &O,
        profiles: &P,
    ) where
        O: Overclock + ?Sized,
        P: Profiles + ?Sized,
    {
        let Some(mut p) = painter(&mut self.canvas, self.font, self.scaler) else {
            return;
        };

        for ctrl in MenuControl::ALL {
            let Some(device) = ctrl.device() else {
                continue;
            };
            let y = by(10, menu_line(ctrl));

            let (left, right) = if selected == ctrl { (">", "<") } else { (" ", " ") };
            p.colored(Rgba::HIGHLIGHT, |p| {
                p.print(cx(19), y, left);
                p.print(cx(19) + lx(0, 18), y, right);
            });

            let color = match oc.mode(device) {
                OcMode::Manual => Rgba::HIGHLIGHT,
                OcMode::Default => Rgba::WHITE,
            };
            let freq = oc.frequency(device);
            p.colored(color, |p| {
                p.print_fmt(cx(15) + lx(0, 6), y, format_args!("{freq:3} MHz"));
            });
        }

        // Profile row
        let y = by(10, menu_line(MenuControl::Profile));
        let save = (!show_global && oc.has_changed()) || !profiles.exists(show_global);
        let label = match (save, show_global) {
            (true, true) => "   save default   ",
            (true, false) => "   save profile   ",
            (false, true) => "  delete default  ",
            (false, false) => "  delete profile  ",
        };
        p.print(cx(18), y, label);

        let (start, span) = if save { (16, 15) } else { (18, 17) };
        let (left, right) = if selected == MenuControl::Profile {
            (">", "<")
        } else {
            (" ", " ")
        };
        p.colored(Rgba::HIGHLIGHT, |p| {
            p.print(cx(start), y, left);
            p.print(cx(start) + lx(0, span), y, right);
        });
    }

    /// Per-core loads and peak of the OSD panel.
    pub fn draw_osd_cpu(&mut self, perf: &Perf) {
        let Some(mut p) = painter(&mut self.canvas, self.font, self.scaler) else {
            return;
        };

        for (i, load) in perf.loads().into_iter().enumerate() {
            let x = rx(10, 19 - i as i32 * 5);
            p.colored(scale_color(load.into(), 0, 100), |p| {
                p.print_fmt(x, ty(8, 0), format_args!("{load:3}"));
            });
        }

        let peak = perf.peak();
        p.colored(scale_color(peak.into(), 0, 100), |p| {
            p.print_fmt(lx(10, 7), ty(10, 1), format_args!("{peak:3}"));
        });
    }

    /// Charge and icon of the OSD panel.
    pub fn draw_osd_batt(&mut self, batt: &BatteryState) {
        if batt.version() == self.seen_batt_osd && !self.lazy_batt {
            return;
        }
        let Some(mut p) = painter(&mut self.canvas, self.font, self.scaler) else {
            return;
        };
        self.seen_batt_osd = batt.version();
        self.lazy_batt = false;

        let percent = batt.percent();
        let color = scale_color((60 - percent).into(), 0, 100);
        p.colored(color, |p| {
            p.print_fmt(rx(20 + BATT_W, 4), ty(10, 1), format_args!("{percent:3}"));
        });
        battery::draw_level(
            &mut p,
            rx(14 + BATT_W, 0),
            ty(13, 1),
            percent,
            batt.is_charging(),
            color.dimmed(BATT_ICON_DIM),
        );
    }

    /// Frame rate of the OSD panel.
    pub fn draw_osd_fps(&mut self, fps: i32) {
        let Some(mut p) = painter(&mut self.canvas, self.font, self.scaler) else {
            return;
        };
        p.colored(scale_color((30 - fps).into(), 0, 30), |p| {
            if fps > 99 {
                p.print_fmt(lx(10, 0), ty(10, 1), format_args!("{fps:3}"));
            } else {
                p.print_fmt(lx(10, 0), ty(10, 1), format_args!("{fps:2} "));
            }
        });
    }

    /// Draw the FPS top-left and, when given, the battery charge top-right,
    /// directly onto the framebuffer with a transparent background.
    pub fn draw_direct<K: Kernel + ?Sized>(&mut self, kernel: &K, fps: i32, battery: Option<i32>) {
        let _guard = AccessGuard::new(kernel);
        // SAFETY: validity of the installed framebuffer is guaranteed by the
        // caller of `set_framebuffer`.
        let Some(mut fb) = (unsafe { self.fb.surface() }) else {
            return;
        };
        let font = self.font;
        let scale = 1.0;

        let mut line = LineBuf::new();
        let _ = write!(line, "{fps}");
        for (i, &code) in line.as_bytes().iter().enumerate() {
            let x = OSD_OFFSET + font.advance(i, scale);
            font.draw_glyph(&mut fb, x, OSD_OFFSET, code, Rgba::FPS, None, scale);
        }

        if let Some(percent) = battery {
            let mut line = LineBuf::new();
            let _ = write!(line, "{percent}%");
            let right = self.fb.width as i32 - OSD_OFFSET;
            for (i, &code) in line.as_bytes().iter().rev().enumerate() {
                let x = right - font.advance(i + 1, scale);
                font.draw_glyph(&mut fb, x, OSD_OFFSET, code, Rgba::FPS, None, scale);
            }
        }
    }

    /// Copy the canvas onto the framebuffer: the OSD panel at the fixed
    /// offset, or the Full panel centered. Hidden copies nothing.
    pub fn blit<K: Kernel + ?Sized>(&mut self, kernel: &K, mode: DisplayMode) {
        let height = match mode {
            DisplayMode::Hidden => return,
            DisplayMode::Osd => GUI_OSD_HEIGHT,
            DisplayMode::Full => GUI_HEIGHT,
        };
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };

        let w = self.scaler.x(GUI_WIDTH);
        let h = self.scaler.y(height);
        let (x, y) = match mode {
            DisplayMode::Osd => (OSD_OFFSET, OSD_OFFSET),
            _ => (
                self.fb.width as i32 / 2 - w / 2,
                self.fb.height as i32 / 2 - h / 2,
            ),
        };
        let region = BlitRegion {
            x,
            y,
            w,
            h,
            height,
        };

        let _guard = AccessGuard::new(kernel);
        // SAFETY: see `draw_direct`.
        let Some(mut fb) = (unsafe { self.fb.surface() }) else {
            return;
        };
        let src = canvas.surface();
        blit::copy(&src, &mut fb, self.fb.height, &region, &self.scaler);
    }
}

/// One line of the memory panel.
fn draw_memory_usage(p: &mut Painter<'_>, line: i32, info: PoolInfo, limit: u32) {
    let PoolInfo { free, total } = info;
    let y = ty(56, line);

    if total == 0 && free == 0 {
        p.print(rx(10, 16), y, "          unused");
    } else if total <= limit && total > free {
        let used = total - free;
        p.print_fmt(
            rx(10, 11),
            y,
            format_args!("{:<2} /     {:<2}", units_from_size(used), units_from_size(total)),
        );

        let total_i = i64::from(total);
        let color = scale_color(used.into(), total_i - total_i / 10, total_i + total_i / 10);
        p.colored(color, |p| {
            p.print_fmt(rx(10, 16), y, format_args!(" {:3}", value_from_size(used)));
            p.print_fmt(rx(10, 7), y, format_args!(" {:3}", value_from_size(total)));
        });
    } else {
        let wide = i32::from(free >= 1024);
        p.print_fmt(
            rx(10, 15 + wide),
            y,
            format_args!("         {} free", units_from_size(free)),
        );
        p.colored(Rgba::GREEN, |p| {
            p.print_fmt(rx(10, 11 + wide), y, format_args!(" {:3}", value_from_size(free)));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Device;
    use crate::sim::{SimClocks, SimConfig, SimKernel, SimOverclock, SimProfiles};
    use crate::surface::Surface;

    const MARK: Rgba = Rgba::new(1, 2, 3, 4);

    fn setup() -> (Gui, SimKernel) {
        let mut kernel = SimKernel::new(SimConfig::default());
        let mut gui = Gui::new();
        gui.init(&mut kernel).unwrap();
        canvas(&mut gui).fill(Rgba::BLACK);
        (gui, kernel)
    }

    fn canvas(gui: &mut Gui) -> Surface<'_> {
        gui.canvas.as_mut().unwrap().surface()
    }

    fn battery(kernel: &mut SimKernel, percent: i32) -> BatteryState {
        battery_with(kernel, percent, 200, false)
    }

    fn battery_with(
        kernel: &mut SimKernel,
        percent: i32,
        life_time: i32,
        charging: bool,
    ) -> BatteryState {
        kernel.set_battery(percent, 3_000, life_time, charging);
        let mut perf = Perf::new();
        perf.poll_battery(kernel);
        *perf.battery()
    }

    /// Canvas pixels of a rectangle, row by row.
    fn region(gui: &mut Gui, x: i32, y: i32, w: i32, h: i32) -> Vec<Rgba> {
        let surface = canvas(gui);
        let mut pixels = Vec::new();
        for yy in y..y + h {
            for xx in x..x + w {
                pixels.extend(surface.get(xx as usize, yy as usize));
            }
        }
        pixels
    }

    fn has_color(gui: &mut Gui, x: i32, y: i32, w: i32, h: i32, color: Rgba) -> bool {
        region(gui, x, y, w, h).contains(&color)
    }

    fn clocks() -> (SimOverclock, SimProfiles) {
        let clocks = SimClocks::new();
        (clocks.overclock(), clocks.profiles())
    }

    /// Is anything but background in the given canvas rectangle?
    fn has_ink(gui: &mut Gui, x: i32, y: i32, w: i32, h: i32) -> bool {
        let surface = canvas(gui);
        (y..y + h).any(|yy| {
            (x..x + w).any(|xx| {
                let px = surface.get(xx as usize, yy as usize);
                px.is_some() && px != Some(Rgba::BLACK)
            })
        })
    }

    #[test]
    fn drawing_before_init_is_a_no_op() {
        let mut kernel = SimKernel::new(SimConfig::default());
        let mut gui = Gui::new();
        gui.draw_template();
        gui.draw_cpu_section(&Perf::new());
        gui.draw_memory_section(&MemoryUsage::default());
        gui.blit(&kernel, DisplayMode::Full);
        assert!(!gui.is_initialized());

        gui.init(&mut kernel).unwrap();
        gui.init(&mut kernel).unwrap();
        assert_eq!(kernel.live_blocks(), 1);
        gui.deinit(&mut kernel);
        assert_eq!(kernel.live_blocks(), 0);
    }

    #[test]
    fn template_labels_the_panels() {
        let (mut gui, _kernel) = setup();
        gui.draw_template();
        assert!(has_ink(&mut gui, lx(10, 0), ty(44, 1), 48, 24));
        assert!(has_ink(&mut gui, cx(15), by(10, 6), 180, 24));
        // The value slots stay blank until a section draws them
        assert!(!has_ink(&mut gui, rx(10, 19), ty(44, 1), 36, 24));
    }

    #[test]
    fn battery_section_redraws_on_new_version() {
        let (mut gui, mut kernel) = setup();
        let value_x = rx(20 + BATT_W, 4);
        let batt = battery(&mut kernel, 50);

        gui.draw_template();
        gui.draw_batt_section(true, &batt);
        assert!(has_ink(&mut gui, value_x, ty(32, 0), 36, 24));

        // Same version: the slot is left alone
        canvas(&mut gui).fill(Rgba::BLACK);
        gui.draw_batt_section(true, &batt);
        assert!(!has_ink(&mut gui, value_x, ty(32, 0), 36, 24));

        // Forced after a mode change
        gui.invalidate();
        gui.draw_batt_section(true, &batt);
        assert!(has_ink(&mut gui, value_x, ty(32, 0), 36, 24));
    }

    #[test]
    fn osd_and_full_battery_track_versions_separately() {
        let (mut gui, mut kernel) = setup();
        let batt = battery(&mut kernel, 42);

        gui.draw_osd_batt(&batt);
        canvas(&mut gui).fill(Rgba::BLACK);
        // The OSD consumer saw this version, the Full one has not
        gui.draw_batt_section(true, &batt);
        assert!(has_ink(&mut gui, rx(20 + BATT_W, 4), ty(32, 0), 36, 24));
    }

    #[test]
    fn no_battery_reads_ac() {
        let (mut gui, _kernel) = setup();
        gui.draw_batt_section(false, &BatteryState::default());
        assert!(has_ink(&mut gui, lx(10, 0), ty(32, 0), 36, 24));
        assert!(!has_ink(&mut gui, rx(20 + BATT_W, 4), ty(32, 0), 36, 24));
    }

    #[test]
    fn memory_section_is_lazy() {
        let (mut gui, _kernel) = setup();
        let mut mem = MemoryUsage::default();
        mem.update(
            MemoryPool::Main,
            PoolInfo {
                free: 100 << 20,
                total: 300 << 20,
            },
        );

        gui.draw_memory_section(&mem);
        assert!(has_ink(&mut gui, rx(10, 16), ty(56, 3), 48, 24));

        canvas(&mut gui).fill(Rgba::BLACK);
        gui.draw_memory_section(&mem);
        assert!(!has_ink(&mut gui, rx(10, 16), ty(56, 3), 48, 24));

        assert!(!gui.fb_resolution_changed());
        let mut pixels = vec![MARK; 640 * 368];
        // SAFETY: `pixels` outlives every draw call below.
        unsafe { gui.set_framebuffer(FrameBuf::from_pixels(&mut pixels, 640, 368, 640)) };
        assert!(gui.fb_resolution_changed());
        assert!(!gui.fb_resolution_changed());
        gui.draw_memory_section(&mem);
        let scaler = Scaler::for_framebuffer(640, 368);
        assert!(has_ink(
            &mut gui,
            scaler.x(rx(10, 16)),
            scaler.y(ty(56, 3)),
            32,
            16
        ));
    }

    #[test]
    fn battery_lifetime_text_by_state() {
        let (mut gui, mut kernel) = setup();
        let mut text = |batt: BatteryState| {
            canvas(&mut gui).fill(Rgba::BLACK);
            gui.invalidate();
            gui.draw_batt_section(true, &batt);
            region(&mut gui, lx(10, 0), ty(32, 0), lx(0, 11), 24)
        };

        let charging = text(battery_with(&mut kernel, 87, 245, true));
        let calibrating = text(battery_with(&mut kernel, 87, 1, false));
        let remaining = text(battery_with(&mut kernel, 87, 245, false));
        let long = text(battery_with(&mut kernel, 87, 700, false));
        assert_ne!(charging, calibrating);
        assert_ne!(charging, remaining);
        assert_ne!(calibrating, remaining);
        // Ten hours or more shifts the minutes right
        assert_ne!(remaining, long);

        // The labels are plain white, the time is colored against the budget
        assert!(!charging.contains(&Rgba::GREEN));
        assert!(!calibrating.contains(&Rgba::GREEN));
        assert!(remaining.contains(&Rgba::GREEN));
    }

    #[test]
    fn remaining_time_digits_are_colored() {
        let (mut gui, mut kernel) = setup();
        // 4 h 05 m is over the two hour budget, so fully green
        gui.draw_batt_section(true, &battery_with(&mut kernel, 87, 245, false));
        assert!(has_color(&mut gui, lx(10, 2), ty(32, 0), 12, 24, Rgba::GREEN));
        assert!(has_color(&mut gui, lx(10, 5), ty(32, 0), 24, 24, Rgba::GREEN));
        // The unit letter between them is white
        assert!(has_ink(&mut gui, lx(10, 3), ty(32, 0), 12, 24));
        assert!(!has_color(&mut gui, lx(10, 3), ty(32, 0), 12, 24, Rgba::GREEN));
    }

    #[test]
    fn memory_lines_by_pool_state() {
        let (mut gui, _kernel) = setup();
        let mut mem = MemoryUsage::default();
        // Reported above the pool limit: only the free space is meaningful
        mem.update(
            MemoryPool::Main,
            PoolInfo {
                free: 200 << 20,
                total: 600 << 20,
            },
        );
        // 95 of 100 MiB used
        mem.update(
            MemoryPool::Cdram,
            PoolInfo {
                free: 5 << 20,
                total: 100 << 20,
            },
        );
        gui.draw_memory_section(&mem);

        let (main_y, cdram_y, phy_y) = (ty(56, 3), ty(56, 4), ty(56, 5));
        assert!(has_color(&mut gui, 0, main_y, GUI_WIDTH, 24, Rgba::GREEN));
        assert!(has_ink(&mut gui, rx(10, 4), main_y, 48, 24));
        assert!(!has_color(&mut gui, 0, cdram_y, GUI_WIDTH, 24, Rgba::GREEN));
        assert!(has_ink(&mut gui, rx(10, 16), cdram_y, 48, 24));

        // No handle: "unused" right-aligned, nothing to its left
        assert!(has_ink(&mut gui, rx(10, 6), phy_y, lx(0, 6), 24));
        assert!(!has_ink(&mut gui, rx(10, 16), phy_y, lx(0, 10), 24));
    }

    #[test]
    fn menu_marks_the_selected_row() {
        let (mut gui, _kernel) = setup();
        let (oc, profiles) = clocks();
        let cpu_y = by(10, menu_line(MenuControl::Cpu));
        let es4_y = by(10, menu_line(MenuControl::GpuEs4));
        let right = cx(19) + lx(0, 18);

        gui.draw_menu(MenuControl::Cpu, false, &oc, &profiles);
        assert!(has_color(&mut gui, cx(19), cpu_y, 12, 24, Rgba::HIGHLIGHT));
        assert!(has_color(&mut gui, right, cpu_y, 12, 24, Rgba::HIGHLIGHT));
        assert!(!has_color(&mut gui, cx(19), es4_y, 12, 24, Rgba::HIGHLIGHT));

        gui.draw_menu(MenuControl::GpuEs4, false, &oc, &profiles);
        assert!(!has_color(&mut gui, cx(19), cpu_y, 12, 24, Rgba::HIGHLIGHT));
        assert!(!has_color(&mut gui, right, cpu_y, 12, 24, Rgba::HIGHLIGHT));
        assert!(has_color(&mut gui, cx(19), es4_y, 12, 24, Rgba::HIGHLIGHT));
    }

    #[test]
    fn manual_frequency_is_highlighted() {
        let (mut gui, _kernel) = setup();
        let (mut oc, profiles) = clocks();
        let freq_x = cx(15) + lx(0, 6);
        let cpu_y = by(10, menu_line(MenuControl::Cpu));
        let es4_y = by(10, menu_line(MenuControl::GpuEs4));

        gui.draw_menu(MenuControl::Profile, false, &oc, &profiles);
        assert!(has_color(&mut gui, freq_x, cpu_y, lx(0, 7), 24, Rgba::WHITE));
        assert!(!has_color(&mut gui, freq_x, cpu_y, lx(0, 7), 24, Rgba::HIGHLIGHT));

        oc.reset_manual(Device::Cpu);
        oc.set_mode(Device::Cpu, OcMode::Manual);
        gui.draw_menu(MenuControl::Profile, false, &oc, &profiles);
        assert!(has_color(&mut gui, freq_x, cpu_y, lx(0, 7), 24, Rgba::HIGHLIGHT));
        assert!(!has_color(&mut gui, freq_x, es4_y, lx(0, 7), 24, Rgba::HIGHLIGHT));
    }

    #[test]
    fn profile_row_offers_save_or_delete() {
        let (mut gui, _kernel) = setup();
        let (mut oc, mut profiles) = clocks();
        let y = by(10, menu_line(MenuControl::Profile));
        let mut label = |global: bool, oc: &SimOverclock, profiles: &SimProfiles| {
            gui.draw_menu(MenuControl::Cpu, global, oc, profiles);
            region(&mut gui, cx(18), y, lx(0, 18), 24)
        };

        let save_profile = label(false, &oc, &profiles);
        let save_default = label(true, &oc, &profiles);
        profiles.save(false);
        let delete_profile = label(false, &oc, &profiles);
        profiles.save(true);
        let delete_default = label(true, &oc, &profiles);

        let labels = [&save_profile, &save_default, &delete_profile, &delete_default];
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }

        // Unsaved changes offer a title save, the global choice ignores them
        oc.reset_manual(Device::Cpu);
        oc.set_mode(Device::Cpu, OcMode::Manual);
        assert!(oc.has_changed());
        assert_eq!(label(false, &oc, &profiles), save_profile);
        assert_eq!(label(true, &oc, &profiles), delete_default);
    }

    #[test]
    fn blit_keeps_corners() {
        let (mut gui, kernel) = setup();
        let mut pixels = vec![MARK; 960 * 544];
        // SAFETY: `pixels` outlives the blit.
        unsafe { gui.set_framebuffer(FrameBuf::from_pixels(&mut pixels, 960, 544, 960)) };
        gui.draw_template();

        let before = kernel.access_control();
        gui.blit(&kernel, DisplayMode::Full);
        assert_eq!(kernel.access_control(), before);

        let x0 = 480 - GUI_WIDTH / 2;
        let y0 = 272 - GUI_HEIGHT / 2;
        let at = |x: i32, y: i32| pixels[(y * 960 + x) as usize];
        assert_eq!(at(x0, y0), MARK);
        assert_eq!(at(x0 + 8, y0), MARK);
        assert_eq!(at(x0 + 9, y0), Rgba::BLACK);
        assert_eq!(at(x0 + GUI_WIDTH - 10, y0), Rgba::BLACK);
        assert_eq!(at(x0 + GUI_WIDTH - 9, y0), MARK);
        assert_eq!(at(x0, y0 + GUI_HEIGHT - 1), MARK);
        assert_eq!(at(x0, y0 + 100), Rgba::BLACK);
        assert_eq!(at(x0 - 1, y0 + 100), MARK);
        assert_eq!(at(x0, y0 + GUI_HEIGHT), MARK);
    }

    #[test]
    fn osd_blit_uses_fixed_offset() {
        let (mut gui, kernel) = setup();
        let mut pixels = vec![MARK; 960 * 544];
        // SAFETY: `pixels` outlives the blit.
        unsafe { gui.set_framebuffer(FrameBuf::from_pixels(&mut pixels, 960, 544, 960)) };
        gui.draw_osd_template();
        gui.blit(&kernel, DisplayMode::Osd);
        gui.blit(&kernel, DisplayMode::Hidden);

        let at = |x: i32, y: i32| pixels[(y * 960 + x) as usize];
        assert_eq!(at(OSD_OFFSET + 9, OSD_OFFSET), Rgba::BLACK);
        assert_eq!(at(OSD_OFFSET + 9, OSD_OFFSET + GUI_OSD_HEIGHT), MARK);
        assert_eq!(at(OSD_OFFSET + GUI_WIDTH, OSD_OFFSET + 20), MARK);
    }

    #[test]
    fn direct_draw_is_transparent() {
        let (mut gui, kernel) = setup();
        let mut pixels = vec![MARK; 960 * 544];
        // SAFETY: `pixels` outlives the draw.
        unsafe { gui.set_framebuffer(FrameBuf::from_pixels(&mut pixels, 960, 544, 960)) };

        let before = kernel.access_control();
        gui.draw_direct(&kernel, 59, Some(87));
        assert_eq!(kernel.access_control(), before);

        let fps_box = |x: usize, y: usize| (10..10 + 24).contains(&x) && (10..34).contains(&y);
        let batt_box = |x: usize, y: usize| (950 - 36..950).contains(&x) && (10..34).contains(&y);
        for (i, px) in pixels.iter().enumerate() {
            let (x, y) = (i % 960, i / 960);
            if fps_box(x, y) || batt_box(x, y) {
                assert!(*px == MARK || *px == Rgba::FPS);
            } else {
                assert_eq!(*px, MARK, "({x}, {y})");
            }
        }
        assert!(pixels.contains(&Rgba::FPS));
    }

    #[test]
    fn unknown_format_is_ignored() {
        let (mut gui, kernel) = setup();
        let mut pixels = vec![MARK; 960 * 544];
        let mut fb = FrameBuf::from_pixels(&mut pixels, 960, 544, 960);
        fb.pixel_format = PixelFormat::Unknown;
        // SAFETY: `pixels` outlives the draws.
        unsafe { gui.set_framebuffer(fb) };
        gui.draw_template();
        gui.blit(&kernel, DisplayMode::Full);
        gui.draw_direct(&kernel, 60, None);
        assert!(pixels.iter().all(|&p| p == MARK));
    }

    #[test]
    fn font_follows_framebuffer() {
        let mut gui = Gui::new();
        assert_eq!(gui.font(), Font::LARGE);
        // SAFETY: detached descriptors are never written through.
        unsafe { gui.set_framebuffer(FrameBuf::detached(720, 408)) };
        assert_eq!(gui.font(), Font::MEDIUM);
        unsafe { gui.set_framebuffer(FrameBuf::detached(640, 368)) };
        assert_eq!(gui.font(), Font::SMALL);
    }
}
