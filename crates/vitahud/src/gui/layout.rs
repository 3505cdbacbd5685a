//! Canvas geometry and text anchors.
//!
//! Everything is laid out on a 960x544 screen with the 12x24 font, then
//! rescaled to the live framebuffer by [`Scaler`]. Anchors take an offset in
//! pixels from a canvas edge plus a count of reference glyphs (`len`) or text
//! lines (`lines`).

use vitahud_hw::specs::display::{REFERENCE_HEIGHT, REFERENCE_WIDTH};

/// Logical canvas width
pub const GUI_WIDTH: i32 = 300;

/// Logical canvas height in Full mode
pub const GUI_HEIGHT: i32 = 376;

/// Logical height of the panel shown in OSD mode
pub const GUI_OSD_HEIGHT: i32 = 64;

/// Distance of the OSD from the top-left screen corner, also the margin of
/// text drawn directly onto the framebuffer
pub const OSD_OFFSET: i32 = 10;

/// Battery icon size, without the terminal nub
pub const BATT_W: i32 = 28;
pub const BATT_H: i32 = 16;

const FONT_W: i32 = 12;
const FONT_H: i32 = 24;

/// Logical to physical coordinate conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    pub w_ratio: f32,
    pub h_ratio: f32,
}

impl Scaler {
    pub fn for_framebuffer(width: u32, height: u32) -> Self {
        Self {
            w_ratio: width as f32 / REFERENCE_WIDTH as f32,
            h_ratio: height as f32 / REFERENCE_HEIGHT as f32,
        }
    }

    pub fn x(&self, x: i32) -> i32 {
        (x as f32 * self.w_ratio) as i32
    }

    pub fn y(&self, y: i32) -> i32 {
        (y as f32 * self.h_ratio) as i32
    }
}

impl Default for Scaler {
    fn default() -> Self {
        Self {
            w_ratio: 1.0,
            h_ratio: 1.0,
        }
    }
}

pub fn lx(off: i32, len: i32) -> i32 {
    off + len * FONT_W
}

pub fn rx(off: i32, len: i32) -> i32 {
    GUI_WIDTH - off - len * FONT_W
}

/// [`rx`] for glyphs drawn at `scale`.
pub fn rx2(off: i32, len: i32, scale: f32) -> i32 {
    GUI_WIDTH - off - (len as f32 * FONT_W as f32 * scale) as i32
}

pub fn ty(off: i32, lines: i32) -> i32 {
    off + lines * FONT_H
}

pub fn by(off: i32, lines: i32) -> i32 {
    GUI_HEIGHT - off - lines * FONT_H
}

/// Left edge of `len` glyphs centered horizontally.
pub fn cx(len: i32) -> i32 {
    GUI_WIDTH / 2 - len * FONT_W / 2
}

/// [`cx`] for glyphs drawn at `scale`.
pub fn cx2(len: i32, scale: f32) -> i32 {
    GUI_WIDTH / 2 - (len as f32 * FONT_W as f32 * scale) as i32 / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(lx(10, 2), 34);
        assert_eq!(rx(10, 1), 278);
        assert_eq!(rx2(10, 10, 0.5), 230);
        assert_eq!(ty(44, 1), 68);
        assert_eq!(by(10, 1), 342);
        assert_eq!(cx(15), 60);
        assert_eq!(cx2(18, 0.5), 96);
    }

    #[test]
    fn menu_fits_below_memory_panel() {
        let memory_bottom = ty(56, 5) + FONT_H;
        assert!(memory_bottom <= by(10, 6));
        assert!(cx(19) + lx(0, 18) + FONT_W <= GUI_WIDTH);
    }

    #[test]
    fn rescale_to_small_output() {
        let scaler = Scaler::for_framebuffer(640, 368);
        assert_eq!(scaler.x(GUI_WIDTH), 200);
        assert_eq!(scaler.y(GUI_HEIGHT), 254);
        assert_eq!(Scaler::for_framebuffer(960, 544), Scaler::default());
    }
}
