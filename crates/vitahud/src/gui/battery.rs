//! Battery icon.
//!
//! The outline is part of the templates; the fill and the charging mark are
//! redrawn with the readings. Both take a logical top-left corner.

use super::layout::{BATT_H, BATT_W};
use super::text::Painter;
use crate::color::Rgba;

/// Draw the white outline with the terminal nub on the right.
pub(crate) fn draw_template(p: &mut Painter<'_>, x: i32, y: i32) {
    let x = p.scaler.x(x);
    let y = p.scaler.y(y);
    let w = p.scaler.x(BATT_W);
    let h = p.scaler.y(BATT_H);
    let s = &mut p.surface;

    for xx in 0..w {
        // top
        s.put(x + xx, y, Rgba::WHITE);
        s.put(x + xx, y + 1, Rgba::WHITE);
        // bottom
        s.put(x + xx, y + h, Rgba::WHITE);
        s.put(x + xx, y + h - 1, Rgba::WHITE);
    }

    for yy in 0..h {
        // left
        s.put(x, y + yy, Rgba::WHITE);
        s.put(x + 1, y + yy, Rgba::WHITE);
        // right, pushed out around the nub
        let right = if yy < h / 3 || yy > h - h / 3 {
            x + w - 1
        } else {
            x + w - 1 + h / 5
        };
        s.put(right, y + yy, Rgba::WHITE);
        s.put(right - 1, y + yy, Rgba::WHITE);
    }

    // nub
    for xx in 0..h / 5 + 2 {
        let nx = x + w - 2 + xx;
        s.put(nx, y + h / 3 - 1, Rgba::WHITE);
        s.put(nx, y + h / 3, Rgba::WHITE);
        s.put(nx, y + h - h / 3, Rgba::WHITE);
        s.put(nx, y + h - h / 3 + 1, Rgba::WHITE);
    }
}

/// Fill the outline up to `percent` in `color`.
pub(crate) fn draw_level(
    p: &mut Painter<'_>,
    x: i32,
    y: i32,
    percent: i32,
    charging: bool,
    color: Rgba,
) {
    let x = p.scaler.x(x);
    let y = p.scaler.y(y);
    let w = p.scaler.x(BATT_W);
    let h = p.scaler.y(BATT_H);
    let s = &mut p.surface;

    let full = percent > 95;
    let level_x = if full { w } else { percent * (w - 4) / 95 + 1 };

    for xx in 2..w - 2 {
        let fill = if xx <= level_x { color } else { Rgba::BLACK };
        for yy in 2..h - 1 {
            s.put(x + xx, y + yy, fill);
        }
    }

    // The nub only lights up when full
    let nub = if full { color } else { Rgba::BLACK };
    for xx in 0..h / 5 {
        for yy in 2..h / 3 + 2 {
            s.put(x + w + xx - 2, y + h / 3 - 1 + yy, nub);
        }
    }

    if charging {
        for xx in 0..h / 3 {
            s.put(x + w / 5 + xx, y + h / 2, Rgba::WHITE);
        }
        for yy in 0..h / 3 {
            s.put(x + w / 5 + h / 6, y + h / 3 + yy + 1, Rgba::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Font;
    use crate::gui::layout::Scaler;
    use crate::surface::Surface;

    const W: usize = 40;
    const H: usize = 24;

    fn with_painter(f: impl FnOnce(&mut Painter<'_>)) -> Vec<Rgba> {
        let mut pixels = vec![Rgba::new(7, 7, 7, 7); W * H];
        let surface = Surface::new(&mut pixels, W, H, W);
        let mut painter = Painter::new(surface, Font::LARGE, Scaler::default());
        f(&mut painter);
        pixels
    }

    fn at(pixels: &[Rgba], x: usize, y: usize) -> Rgba {
        pixels[y * W + x]
    }

    #[test]
    fn outline_corners() {
        let px = with_painter(|p| draw_template(p, 2, 2));
        assert_eq!(at(&px, 2, 2), Rgba::WHITE);
        assert_eq!(at(&px, 2 + 27, 2), Rgba::WHITE);
        assert_eq!(at(&px, 2, 2 + 16), Rgba::WHITE);
        // Interior is left alone
        assert_eq!(at(&px, 10, 10), Rgba::new(7, 7, 7, 7));
        // Middle rows of the right edge move out to the nub
        assert_eq!(at(&px, 2 + 27 + 3, 2 + 8), Rgba::WHITE);
    }

    #[test]
    fn level_fills_proportionally() {
        let green = Rgba::GREEN;
        let px = with_painter(|p| draw_level(p, 0, 0, 50, false, green));
        // 50 * 24 / 95 + 1 = 13
        assert_eq!(at(&px, 13, 5), green);
        assert_eq!(at(&px, 14, 5), Rgba::BLACK);
        assert_eq!(at(&px, 28, 8), Rgba::BLACK);
    }

    #[test]
    fn full_battery_lights_nub() {
        let green = Rgba::GREEN;
        let px = with_painter(|p| draw_level(p, 0, 0, 100, false, green));
        assert_eq!(at(&px, 25, 5), green);
        assert_eq!(at(&px, 28, 8), green);
    }

    #[test]
    fn charging_mark_is_white() {
        let px = with_painter(|p| draw_level(p, 0, 0, 0, true, Rgba::GREEN));
        // Horizontal bar at mid height, vertical bar through it
        assert_eq!(at(&px, 28 / 5, 8), Rgba::WHITE);
        assert_eq!(at(&px, 28 / 5 + 2, 6), Rgba::WHITE);
    }
}
