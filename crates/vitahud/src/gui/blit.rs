//! Canvas to framebuffer copy with rounded corners.

use super::layout::Scaler;
use crate::surface::Surface;
use vitahud_hw::specs::display::REFERENCE_HEIGHT;

/// Pixels skipped on each side of the first (and, mirrored, last) canvas
/// rows. Applied in logical canvas rows.
pub(crate) const CORNERS: [i32; 9] = [9, 7, 5, 4, 3, 2, 2, 1, 1];

const RADIUS: i32 = CORNERS.len() as i32;

/// Where and how much of the canvas goes onto the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlitRegion {
    /// Top-left corner on the framebuffer
    pub x: i32,
    pub y: i32,
    /// Physical size copied
    pub w: i32,
    pub h: i32,
    /// Logical height of the canvas area, for the bottom corners
    pub height: i32,
}

/// Corner inset of physical row `line`.
fn inset(line: i32, region: &BlitRegion, fb_height: u32, scaler: &Scaler) -> i32 {
    let mut logical = line;
    if fb_height < REFERENCE_HEIGHT {
        logical = (line as f32 * (REFERENCE_HEIGHT as f32 / fb_height as f32)) as i32;
    }

    if logical < RADIUS {
        scaler.x(CORNERS[logical as usize])
    } else if logical >= region.height - RADIUS {
        let from_bottom = (region.height - logical - 1).clamp(0, RADIUS - 1);
        scaler.x(CORNERS[from_bottom as usize])
    } else {
        0
    }
}

/// Copy `region` of `canvas` onto `fb` row by row. Anything that would land
/// outside either surface is dropped.
///
/// `fb_height` is the height reported by the display driver; corner rows are
/// compressed when it is below the reference height.
pub(crate) fn copy(
    canvas: &Surface<'_>,
    fb: &mut Surface<'_>,
    fb_height: u32,
    region: &BlitRegion,
    scaler: &Scaler,
) {
    for line in 0..region.h {
        let xd = inset(line, region, fb_height, scaler);
        let len = region.w - 2 * xd;
        if len <= 0 {
            continue;
        }

        let Some(src) = canvas.row(line as usize) else {
            break;
        };
        let dst_y = line + region.y;
        if dst_y < 0 {
            continue;
        }
        let Some(dst) = fb.row_mut(dst_y as usize) else {
            break;
        };

        let src_x = xd as usize;
        let dst_x = region.x + xd;
        if dst_x < 0 || src_x >= src.len() || dst_x as usize >= dst.len() {
            continue;
        }
        let dst_x = dst_x as usize;
        let n = (len as usize)
            .min(src.len() - src_x)
            .min(dst.len() - dst_x);
        dst[dst_x..dst_x + n].copy_from_slice(&src[src_x..src_x + n]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    const MARK: Rgba = Rgba::new(1, 1, 1, 1);

    fn region(w: i32, h: i32) -> BlitRegion {
        BlitRegion {
            x: 0,
            y: 0,
            w,
            h,
            height: h,
        }
    }

    #[test]
    fn corners_are_skipped() {
        let mut src = vec![Rgba::WHITE; 30 * 30];
        let mut dst = vec![MARK; 30 * 30];
        let canvas = Surface::new(&mut src, 30, 30, 30);
        let mut fb = Surface::new(&mut dst, 30, 30, 30);

        copy(&canvas, &mut fb, 544, &region(30, 30), &Scaler::default());

        for (line, &xd) in CORNERS.iter().enumerate() {
            let xd = xd as usize;
            for &y in &[line, 29 - line] {
                assert_eq!(fb.get(xd - 1, y), Some(MARK), "row {y}");
                assert_eq!(fb.get(xd, y), Some(Rgba::WHITE), "row {y}");
                assert_eq!(fb.get(29 - xd, y), Some(Rgba::WHITE), "row {y}");
                assert_eq!(fb.get(30 - xd, y), Some(MARK), "row {y}");
            }
        }
        assert!(fb.row(15).unwrap().iter().all(|&p| p == Rgba::WHITE));
    }

    #[test]
    fn short_framebuffer_compresses_corner_rows() {
        // 272 lines is half the reference height, so physical row 2 is
        // logical row 4
        let scaler = Scaler::for_framebuffer(480, 272);
        let fb_rows = 272;
        let mut src = vec![Rgba::WHITE; 20 * 20];
        let mut dst = vec![MARK; 20 * fb_rows];
        let canvas = Surface::new(&mut src, 20, 20, 20);
        let mut fb = Surface::new(&mut dst, 20, fb_rows, 20);

        let r = BlitRegion {
            x: 0,
            y: 0,
            w: 20,
            h: 10,
            height: 20,
        };
        assert_eq!(inset(2, &r, 272, &scaler), scaler.x(CORNERS[4]));
        assert_eq!(inset(9, &r, 272, &scaler), scaler.x(CORNERS[1]));

        copy(&canvas, &mut fb, 272, &r, &scaler);
        assert_eq!(fb.get(0, 5), Some(Rgba::WHITE));
        assert!(fb.row(10).unwrap().iter().all(|&p| p == MARK));
    }

    #[test]
    fn clipped_at_framebuffer_edge() {
        let mut src = vec![Rgba::WHITE; 30 * 30];
        let mut dst = vec![MARK; 20 * 20];
        let canvas = Surface::new(&mut src, 30, 30, 30);
        let mut fb = Surface::new(&mut dst, 20, 20, 20);

        let r = BlitRegion {
            x: 5,
            y: 5,
            w: 30,
            h: 30,
            height: 30,
        };
        copy(&canvas, &mut fb, 544, &r, &Scaler::default());
        assert_eq!(fb.get(19, 19), Some(Rgba::WHITE));
        assert_eq!(fb.get(4, 19), Some(MARK));
        assert_eq!(fb.get(19, 4), Some(MARK));
    }
}
