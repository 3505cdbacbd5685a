//! Drives the overlay frame by frame against the simulated host, the way the
//! display driver hook would.

use vitahud::sim::{ERROR_NO_MEMORY, SimClocks, SimConfig, SimKernel, SimOverclock, SimProfiles};
use vitahud::{
    Device, DisplayMode, FrameBuf, MenuControl, OcMode, OsdStyle, Overclock, Overlay, OverlayConfig,
    Rgba,
};
use vitahud_hw::buttons::{CROSS, DOWN, RIGHT, SELECT, UP};

/// Simulated time per frame (60 Hz)
const FRAME_US: u64 = 16_667;

/// What the game drew; anything else was put there by the overlay
const SCENE: Rgba = Rgba::new(1, 2, 3, 255);

struct Host {
    overlay: Overlay<SimKernel, SimOverclock, SimProfiles>,
    pixels: Vec<Rgba>,
    width: u32,
    height: u32,
}

impl Host {
    fn new(sim: SimConfig, osd_style: OsdStyle) -> Self {
        let clocks = SimClocks::new();
        let config = OverlayConfig {
            osd_style,
            ..OverlayConfig::default()
        };
        let mut overlay = Overlay::new(
            SimKernel::new(sim),
            clocks.overclock(),
            clocks.profiles(),
            config,
        );
        overlay.init().unwrap();
        Self {
            overlay,
            pixels: vec![SCENE; 960 * 544],
            width: 960,
            height: 544,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![SCENE; (width * height) as usize];
    }

    fn frame(&mut self, buttons: u32) {
        self.overlay.kernel_mut().advance(FRAME_US);
        self.pixels.fill(SCENE);
        let fb = FrameBuf::from_pixels(&mut self.pixels, self.width, self.height, self.width);
        unsafe { self.overlay.set_framebuffer(fb) };
        self.overlay.frame(buttons);
    }

    /// Press and release, one frame each.
    fn tap(&mut self, buttons: u32) {
        self.frame(buttons);
        self.frame(0);
    }

    fn switch_mode(&mut self, dir: u32) {
        self.frame(SELECT);
        self.frame(SELECT | dir);
        self.frame(0);
    }

    fn at(&self, x: u32, y: u32) -> Rgba {
        self.pixels[(y * self.width + x) as usize]
    }

    fn any_in(&self, x0: u32, y0: u32, x1: u32, y1: u32, pred: impl Fn(Rgba) -> bool) -> bool {
        (y0..y1).any(|y| (x0..x1).any(|x| pred(self.at(x, y))))
    }
}

#[test]
fn hidden_leaves_the_frame_alone() {
    let mut host = Host::new(SimConfig::default(), OsdStyle::Direct);
    for _ in 0..10 {
        host.frame(0);
    }
    assert_eq!(host.overlay.mode(), DisplayMode::Hidden);
    assert!(host.pixels.iter().all(|&p| p == SCENE));
}

#[test]
fn mode_steps_up_and_down_and_clamps() {
    let mut host = Host::new(SimConfig::default(), OsdStyle::Direct);

    host.switch_mode(UP);
    assert_eq!(host.overlay.mode(), DisplayMode::Osd);
    // `frame` consumed the change
    assert!(!host.overlay.mode_changed());

    host.switch_mode(UP);
    assert_eq!(host.overlay.mode(), DisplayMode::Full);

    // Holding does not repeat; another press stays at the top
    host.frame(SELECT | UP);
    host.frame(SELECT | UP);
    assert_eq!(host.overlay.mode(), DisplayMode::Full);
    assert!(!host.overlay.mode_changed());

    host.switch_mode(DOWN);
    host.switch_mode(DOWN);
    host.switch_mode(DOWN);
    assert_eq!(host.overlay.mode(), DisplayMode::Hidden);
}

#[test]
fn mode_change_is_reported_once_to_hosts_driving_the_steps() {
    let mut host = Host::new(SimConfig::default(), OsdStyle::Direct);
    let overlay = &mut host.overlay;

    overlay.check_input(SELECT);
    assert!(!overlay.mode_changed());
    overlay.check_input(SELECT | UP);
    assert_eq!(overlay.mode(), DisplayMode::Osd);
    assert!(overlay.mode_changed());
    assert!(!overlay.mode_changed());

    overlay.check_input(SELECT);
    overlay.check_input(SELECT | UP);
    assert_eq!(overlay.mode(), DisplayMode::Full);
    assert!(overlay.mode_changed());
}

#[test]
fn full_panel_is_centered_with_rounded_corners() {
    let mut host = Host::new(SimConfig::default(), OsdStyle::Direct);
    host.switch_mode(UP);
    host.switch_mode(UP);
    host.frame(0);

    // 300x376 canvas centered on 960x544 lands at (330, 84)
    assert_ne!(host.at(480, 272), SCENE);
    assert_ne!(host.at(340, 200), SCENE);
    assert_eq!(host.at(329, 200), SCENE);
    assert_eq!(host.at(630, 200), SCENE);
    assert_eq!(host.at(480, 83), SCENE);
    assert_eq!(host.at(480, 460), SCENE);
    // Corners stay clear
    assert_eq!(host.at(330, 84), SCENE);
    assert_eq!(host.at(629, 459), SCENE);
}

#[test]
fn direct_osd_prints_fps_and_battery() {
    let mut host = Host::new(SimConfig::default(), OsdStyle::Direct);
    host.switch_mode(UP);
    for _ in 0..130 {
        host.frame(0);
    }
    assert_eq!(host.overlay.perf().fps(), 60);

    let ink = |p: Rgba| p == Rgba::FPS;
    // FPS top left, charge top right
    assert!(host.any_in(10, 10, 60, 40, ink));
    assert!(host.any_in(900, 10, 950, 40, ink));
    // Nothing else is touched, there is no panel
    assert_eq!(host.at(480, 272), SCENE);
    assert_eq!(host.at(100, 60), SCENE);
}

#[test]
fn direct_osd_without_battery_skips_charge() {
    let sim = SimConfig {
        has_battery: false,
        ..SimConfig::default()
    };
    let mut host = Host::new(sim, OsdStyle::Direct);
    host.switch_mode(UP);
    host.frame(0);

    assert!(host.any_in(10, 10, 60, 40, |p| p == Rgba::FPS));
    assert!(!host.any_in(700, 0, 960, 60, |p| p != SCENE));
}

#[test]
fn panel_osd_sits_in_the_corner() {
    let mut host = Host::new(SimConfig::default(), OsdStyle::Panel);
    host.switch_mode(UP);
    host.frame(0);

    // 300x64 at (10, 10)
    assert_ne!(host.at(160, 40), SCENE);
    assert_eq!(host.at(160, 80), SCENE);
    assert_eq!(host.at(320, 40), SCENE);
    assert_eq!(host.at(480, 272), SCENE);
}

#[test]
fn smaller_framebuffer_scales_the_panel() {
    let mut host = Host::new(SimConfig::default(), OsdStyle::Direct);
    host.switch_mode(UP);
    host.switch_mode(UP);

    host.resize(480, 272);
    host.frame(0);

    // 150x188 centered on 480x272 lands at (165, 42)
    assert_ne!(host.at(240, 136), SCENE);
    assert_eq!(host.at(160, 136), SCENE);
    assert_eq!(host.at(320, 136), SCENE);
}

#[test]
fn menu_drives_the_clocks() {
    let mut host = Host::new(SimConfig::default(), OsdStyle::Direct);
    host.switch_mode(UP);
    host.switch_mode(UP);
    assert_eq!(host.overlay.menu(), MenuControl::Cpu);

    let before = host.overlay.oc().frequency(Device::Cpu);
    host.tap(CROSS);
    assert_eq!(host.overlay.oc().mode(Device::Cpu), OcMode::Manual);
    host.tap(RIGHT);
    assert!(host.overlay.oc().frequency(Device::Cpu) > before);

    host.tap(DOWN);
    assert_eq!(host.overlay.menu(), MenuControl::GpuEs4);
    assert_eq!(host.overlay.oc().mode(Device::GpuEs4), OcMode::Default);
}

#[test]
fn header_follows_the_running_title() {
    let mut host = Host::new(SimConfig::default(), OsdStyle::Direct);
    host.switch_mode(UP);
    host.switch_mode(UP);

    // Title id at half scale, top left of the panel at (330, 84)
    let header = |host: &Host| -> Vec<Rgba> {
        (92..104)
            .flat_map(|y| (340..394).map(move |x| (x, y)))
            .map(|(x, y)| host.at(x, y))
            .collect()
    };
    let before = header(&host);
    assert!(before.iter().any(|&p| p == Rgba::WHITE));

    host.overlay.kernel_mut().set_title_id("PCSB01234");
    host.frame(0);
    assert_ne!(header(&host), before);
}

#[test]
fn access_restriction_survives_frames() {
    let mut host = Host::new(SimConfig::default(), OsdStyle::Direct);
    let before = host.overlay.kernel().access_control();
    host.switch_mode(UP);
    host.frame(0);
    host.switch_mode(UP);
    host.frame(0);
    assert_eq!(host.overlay.kernel().access_control(), before);
}

#[test]
fn failed_init_reports_the_kernel_code() {
    let clocks = SimClocks::new();
    let mut kernel = SimKernel::new(SimConfig::default());
    kernel.set_fail_alloc(Some(ERROR_NO_MEMORY));
    let mut overlay = Overlay::new(
        kernel,
        clocks.overclock(),
        clocks.profiles(),
        OverlayConfig::default(),
    );

    let err = overlay.init().unwrap_err();
    assert_eq!(err.code(), ERROR_NO_MEMORY);
    assert!(!overlay.is_initialized());

    // Frames still run, they just draw nothing
    let mut pixels = vec![SCENE; 960 * 544];
    let fb = FrameBuf::from_pixels(&mut pixels, 960, 544, 960);
    unsafe { overlay.set_framebuffer(fb) };
    for buttons in [SELECT, SELECT | UP, 0, SELECT, SELECT | UP, 0] {
        overlay.kernel_mut().advance(FRAME_US);
        overlay.frame(buttons);
    }
    assert_eq!(overlay.mode(), DisplayMode::Full);
    assert!(pixels.iter().all(|&p| p == SCENE));
}

#[test]
fn deinit_returns_the_canvas() {
    let mut host = Host::new(SimConfig::default(), OsdStyle::Direct);
    assert_eq!(host.overlay.kernel().live_blocks(), 1);
    host.overlay.deinit();
    assert_eq!(host.overlay.kernel().live_blocks(), 0);
    assert!(!host.overlay.is_initialized());
}
