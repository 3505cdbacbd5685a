//! Desktop Preview Window
//!
//! Runs the overlay against the simulated host in a winit window, presenting
//! through softbuffer. A synthetic game scene stands in for the application
//! framebuffer; the overlay draws on top of it every frame, exactly as it
//! would on the device.

use crate::capture;
use crate::color::Rgba;
use crate::overlay::Overlay;
use crate::sim::{SimKernel, SimOverclock, SimProfiles};
use crate::surface::{FrameBuf, Surface as PixelSurface};
use softbuffer::{Context, Surface};
use std::num::NonZeroU32;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{error, info};
use vitahud_hw::buttons;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

/// Target presentation interval (60 Hz)
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// File written by the screenshot key
const SCREENSHOT_PATH: &str = "vitahud.png";

pub type SimOverlay = Overlay<SimKernel, SimOverclock, SimProfiles>;

/// Pad button driven by a physical key, if any.
pub fn button_for_key(key: KeyCode) -> Option<u32> {
    let mask = match key {
        KeyCode::ArrowUp => buttons::UP,
        KeyCode::ArrowDown => buttons::DOWN,
        KeyCode::ArrowLeft => buttons::LEFT,
        KeyCode::ArrowRight => buttons::RIGHT,
        KeyCode::Backspace => buttons::SELECT,
        KeyCode::Enter => buttons::START,
        KeyCode::KeyX => buttons::CROSS,
        KeyCode::KeyZ => buttons::CIRCLE,
        KeyCode::KeyA => buttons::SQUARE,
        KeyCode::KeyS => buttons::TRIANGLE,
        KeyCode::KeyQ => buttons::LTRIGGER,
        KeyCode::KeyW => buttons::RTRIGGER,
        _ => return None,
    };
    Some(mask)
}

/// Paint the stand-in game frame: a vertical gradient with a bar sweeping
/// across it.
pub fn draw_scene(fb: &mut PixelSurface<'_>, frame: u64) {
    let width = fb.width();
    let height = fb.height();
    let bar = (frame as usize * 4) % width.max(1);

    for y in 0..height {
        let shade = (y * 160 / height.max(1)) as u8;
        let Some(row) = fb.row_mut(y) else {
            break;
        };
        for (x, px) in row.iter_mut().enumerate() {
            *px = if x.abs_diff(bar) < 24 {
                Rgba::new(220, 120, 40, 255)
            } else {
                Rgba::new(20, 40 + shade / 2, 60 + shade, 255)
            };
        }
    }
}

/// Overlay preview application
pub struct PreviewDisplay {
    overlay: SimOverlay,
    width: u32,
    height: u32,
    /// Game framebuffer the overlay draws into
    pixels: Vec<Rgba>,
    buttons: u32,
    frame: u64,
    last_tick: Instant,
    next_frame: Instant,

    // Display state
    window: Option<Rc<Window>>,
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,
    error: Option<Box<dyn std::error::Error>>,
}

impl PreviewDisplay {
    pub fn new(overlay: SimOverlay, width: u32, height: u32) -> Self {
        let now = Instant::now();
        Self {
            overlay,
            width,
            height,
            pixels: vec![Rgba::BLACK; width as usize * height as usize],
            buttons: 0,
            frame: 0,
            last_tick: now,
            next_frame: now,
            window: None,
            surface: None,
            error: None,
        }
    }

    fn create_surface(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(Rc<Window>, Surface<Rc<Window>, Rc<Window>>), Box<dyn std::error::Error>> {
        let window = Rc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title("vitahud")
                    .with_resizable(false)
                    .with_inner_size(winit::dpi::PhysicalSize::new(self.width, self.height)),
            )?,
        );

        let context = Context::new(window.clone())?;
        let mut surface = Surface::new(&context, window.clone())?;
        let (Some(width), Some(height)) =
            (NonZeroU32::new(self.width), NonZeroU32::new(self.height))
        else {
            return Err("framebuffer size must be non-zero".into());
        };
        surface.resize(width, height)?;
        Ok((window, surface))
    }

    /// Advance the simulation by the real time elapsed and run one overlay
    /// frame over a fresh scene.
    fn step(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.overlay.kernel_mut().advance(elapsed.as_micros() as u64);

        let frame = self.frame;
        draw_scene(&mut self.frame_surface(), frame);

        let fb = FrameBuf::from_pixels(&mut self.pixels, self.width, self.height, self.width);
        // SAFETY: `pixels` is never reallocated and outlives the overlay's
        // use of it; nothing else touches it while `frame` runs.
        unsafe { self.overlay.set_framebuffer(fb) };
        self.overlay.frame(self.buttons);
        self.frame += 1;
    }

    /// The game framebuffer as a drawable surface.
    fn frame_surface(&mut self) -> PixelSurface<'_> {
        let (width, height) = (self.width as usize, self.height as usize);
        PixelSurface::new(&mut self.pixels, width, height, width)
    }

    fn screenshot(&mut self) {
        let surface = self.frame_surface();
        if let Err(e) = capture::write_png(Path::new(SCREENSHOT_PATH), &surface) {
            error!("Failed to write screenshot: {}", e);
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        info!("=== Preview Stopped ===");
        info!("Frames: {}", self.frame);
        self.overlay.deinit();
        event_loop.exit();
    }
}

impl ApplicationHandler for PreviewDisplay {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        match self.create_surface(event_loop) {
            Ok((window, surface)) => {
                self.window = Some(window.clone());
                self.surface = Some(surface);
                // Kick off the first frame
                window.request_redraw();
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };
                let pressed = event.state.is_pressed();
                if let Some(b) = button_for_key(key) {
                    if pressed {
                        self.buttons |= b;
                    } else {
                        self.buttons &= !b;
                    }
                }
                if pressed && !event.repeat {
                    match key {
                        KeyCode::Escape => self.shutdown(event_loop),
                        KeyCode::KeyP => self.screenshot(),
                        _ => {}
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(surface) = self.surface.as_mut()
                    && let Err(e) = Self::render(surface, &self.pixels)
                {
                    self.error = Some(e);
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame {
            self.step();
            self.next_frame = now + FRAME_INTERVAL;
            if let Some(window) = self.window.as_ref() {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

impl PreviewDisplay {
    fn render(
        surface: &mut Surface<Rc<Window>, Rc<Window>>,
        pixels: &[Rgba],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut buffer = surface.buffer_mut()?;
        for (dst, src) in buffer.iter_mut().zip(pixels) {
            *dst = src.to_xrgb();
        }
        buffer.present()?;
        Ok(())
    }
}

pub fn run(overlay: SimOverlay, width: u32, height: u32) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    let mut app = PreviewDisplay::new(overlay, width, height);
    event_loop.run_app(&mut app)?;
    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_pad_buttons() {
        assert_eq!(button_for_key(KeyCode::Backspace), Some(buttons::SELECT));
        assert_eq!(button_for_key(KeyCode::ArrowUp), Some(buttons::UP));
        assert_eq!(button_for_key(KeyCode::KeyX), Some(buttons::CROSS));
        assert_eq!(button_for_key(KeyCode::KeyQ), Some(buttons::LTRIGGER));
        assert_eq!(button_for_key(KeyCode::KeyP), None);
    }

    #[test]
    fn scene_is_opaque_and_bar_moves() {
        let mut pixels = vec![Rgba::default(); 200 * 20];
        let mut fb = PixelSurface::new(&mut pixels, 200, 20, 200);

        draw_scene(&mut fb, 0);
        assert!(fb.row(10).unwrap().iter().all(|p| p.a == 255));
        let bar = Rgba::new(220, 120, 40, 255);
        assert_eq!(fb.get(0, 5), Some(bar));
        assert_ne!(fb.get(100, 5), Some(bar));

        draw_scene(&mut fb, 25);
        assert_eq!(fb.get(100, 5), Some(bar));
    }
}
