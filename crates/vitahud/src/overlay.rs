//! The overlay context.
//!
//! [`Overlay`] owns the sampler, the compositor, the input state machine and
//! the host collaborators, and exposes every entry point the host calls. The
//! host is expected to call, per frame:
//!
//! 1. the `poll_*` methods and [`Overlay::calc_fps`],
//! 2. [`Overlay::set_framebuffer`] when the display driver reports one,
//! 3. [`Overlay::check_input`] with the current buttons,
//! 4. the template once [`Overlay::fb_resolution_changed`] or
//!    [`Overlay::mode_changed`] report a change,
//! 5. the section draws for the current mode,
//! 6. [`Overlay::blit`].
//!
//! [`Overlay::frame`] runs exactly that sequence.

use crate::config::{OsdStyle, OverlayConfig};
use crate::gui::Gui;
use crate::host::{Kernel, KernelError, Overclock, Profiles};
use crate::input::{DisplayMode, Input, MenuControl};
use crate::perf::Perf;
use crate::surface::FrameBuf;
use tracing::{info, instrument, warn};

pub struct Overlay<K, O, P> {
    kernel: K,
    oc: O,
    profiles: P,
    config: OverlayConfig,
    perf: Perf,
    gui: Gui,
    input: Input,
}

impl<K: Kernel, O: Overclock, P: Profiles> Overlay<K, O, P> {
    pub fn new(kernel: K, oc: O, profiles: P, config: OverlayConfig) -> Self {
        Self {
            kernel,
            oc,
            profiles,
            input: Input::new(config.bindings),
            config,
            perf: Perf::new(),
            gui: Gui::new(),
        }
    }

    /// Allocate the canvas. This is the only call that can fail.
    #[instrument(level = "trace", skip(self))]
    pub fn init(&mut self) -> Result<(), KernelError> {
        if let Err(err) = self.gui.init(&mut self.kernel) {
            warn!(code = err.code(), "canvas allocation failed");
            return Err(err);
        }
        info!(osd_style = ?self.config.osd_style, "overlay initialized");
        Ok(())
    }

    pub fn deinit(&mut self) {
        self.gui.deinit(&mut self.kernel);
        info!("overlay shut down");
    }

    /// Install the framebuffer the display driver is about to show.
    ///
    /// # Safety
    ///
    /// `fb.base`, when non-null, must stay valid for `fb.pitch * fb.height`
    /// pixels until the next call or until the overlay is dropped, and must
    /// not be accessed elsewhere while a draw or blit call runs.
    pub unsafe fn set_framebuffer(&mut self, fb: FrameBuf) {
        // SAFETY: forwarded contract.
        unsafe { self.gui.set_framebuffer(fb) }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn check_input(&mut self, buttons: u32) {
        self.input.check(buttons, &mut self.oc, &mut self.profiles);
    }

    /// Whether the framebuffer width changed since the last call.
    pub fn fb_resolution_changed(&mut self) -> bool {
        self.gui.fb_resolution_changed()
    }

    /// Whether the display mode changed since the last call. Reports each
    /// change once.
    pub fn mode_changed(&mut self) -> bool {
        let changed = self.input.take_mode_changed();
        if changed {
            self.gui.invalidate();
        }
        changed
    }

    pub fn mode(&self) -> DisplayMode {
        self.input.mode()
    }

    pub fn menu(&self) -> MenuControl {
        self.input.menu()
    }

    pub fn perf(&self) -> &Perf {
        &self.perf
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn framebuffer(&self) -> &FrameBuf {
        self.gui.framebuffer()
    }

    pub fn is_initialized(&self) -> bool {
        self.gui.is_initialized()
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn kernel_mut(&mut self) -> &mut K {
        &mut self.kernel
    }

    pub fn oc(&self) -> &O {
        &self.oc
    }

    pub fn profiles(&self) -> &P {
        &self.profiles
    }

    pub fn poll_cpu(&mut self) {
        self.perf.poll_cpu(&self.kernel);
    }

    pub fn poll_memory(&mut self) {
        self.perf.poll_memory(&self.kernel);
    }

    pub fn poll_battery(&mut self) {
        self.perf.poll_battery(&self.kernel);
    }

    pub fn calc_fps(&mut self) {
        self.perf.calc_fps(&self.kernel);
    }

    pub fn draw_template(&mut self) {
        self.gui.draw_template();
    }

    pub fn draw_osd_template(&mut self) {
        self.gui.draw_osd_template();
    }

    pub fn draw_header(&mut self) {
        self.gui.draw_header(self.kernel.title_id());
    }

    pub fn draw_batt_section(&mut self) {
        self.gui
            .draw_batt_section(self.kernel.has_battery(), self.perf.battery());
    }

    pub fn draw_cpu_section(&mut self) {
        self.gui.draw_cpu_section(&self.perf);
    }

    pub fn draw_memory_section(&mut self) {
        self.gui.draw_memory_section(self.perf.memory());
    }

    /// The profile row follows the global modifier as held at the last
    /// input poll.
    pub fn draw_menu(&mut self) {
        self.gui.draw_menu(
            self.input.menu(),
            self.input.global_held(),
            &self.oc,
            &self.profiles,
        );
    }

    pub fn draw_osd_cpu(&mut self) {
        self.gui.draw_osd_cpu(&self.perf);
    }

    pub fn draw_osd_batt(&mut self) {
        self.gui.draw_osd_batt(self.perf.battery());
    }

    pub fn draw_osd_fps(&mut self) {
        self.gui.draw_osd_fps(self.perf.fps());
    }

    /// FPS and battery charge straight onto the framebuffer. The charge is
    /// left out on devices without a battery.
    pub fn draw_direct(&mut self) {
        let battery = self
            .kernel
            .has_battery()
            .then(|| self.perf.battery().percent());
        self.gui.draw_direct(&self.kernel, self.perf.fps(), battery);
    }

    /// Copy the canvas for the current mode onto the framebuffer. The direct
    /// OSD style has nothing to copy.
    pub fn blit(&mut self) {
        let mode = self.input.mode();
        if mode == DisplayMode::Osd && self.config.osd_style == OsdStyle::Direct {
            return;
        }
        self.gui.blit(&self.kernel, mode);
    }

    /// Run one frame: sample, read input, draw and blit.
    #[instrument(level = "trace", skip(self))]
    pub fn frame(&mut self, buttons: u32) {
        self.poll_cpu();
        self.poll_memory();
        self.poll_battery();
        self.calc_fps();

        self.check_input(buttons);

        // Both calls must run so each one-shot flag is consumed
        let resolution_changed = self.fb_resolution_changed();
        let mode_changed = self.mode_changed();
        let changed = resolution_changed || mode_changed;

        match self.mode() {
            DisplayMode::Hidden => {}
            DisplayMode::Osd => match self.config.osd_style {
                OsdStyle::Direct => self.draw_direct(),
                OsdStyle::Panel => {
                    if changed {
                        self.draw_osd_template();
                    }
                    self.draw_osd_cpu();
                    self.draw_osd_batt();
                    self.draw_osd_fps();
                    self.blit();
                }
            },
            DisplayMode::Full => {
                if changed {
                    self.draw_template();
                }
                self.draw_header();
                self.draw_batt_section();
                self.draw_cpu_section();
                self.draw_memory_section();
                self.draw_menu();
                self.blit();
            }
        }
    }
}
