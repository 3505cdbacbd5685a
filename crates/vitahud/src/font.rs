//! Fixed-width 1-bpp bitmap fonts and the glyph rasterizer.
//!
//! Glyph tables are stored row-major: each glyph is `height` rows of
//! `bytes_per_row` bytes, most significant bit leftmost. Three faces are
//! built in and the one in use follows the framebuffer width, so text keeps
//! roughly the same physical size on every video output.

mod glyphs_10x18;
mod glyphs_12x24;
mod glyphs_8x14;

use crate::color::Rgba;
use crate::surface::Surface;
use vitahud_hw::specs::display::{MEDIUM_FONT_MAX_WIDTH, SMALL_FONT_MAX_WIDTH};

/// Glyph codes with a bitmap. Everything above renders blank.
const GLYPH_COUNT: usize = 128;

/// One bitmap face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    glyphs: &'static [u8],
    width: u32,
    height: u32,
}

impl Font {
    /// 8x14, for 640x368 output
    pub const SMALL: Font = Font {
        glyphs: &glyphs_8x14::GLYPHS_8X14,
        width: 8,
        height: 14,
    };

    /// 10x18 bitmap advanced by 9 pixels: dropping the last (always empty)
    /// column scales better at 720x408.
    pub const MEDIUM: Font = Font {
        glyphs: &glyphs_10x18::GLYPHS_10X18,
        width: 9,
        height: 18,
    };

    /// 12x24, for 960x544 and larger
    pub const LARGE: Font = Font {
        glyphs: &glyphs_12x24::GLYPHS_12X24,
        width: 12,
        height: 24,
    };

    /// Pick the face for a framebuffer `width` pixels wide.
    pub fn for_width(width: u32) -> Font {
        if width <= SMALL_FONT_MAX_WIDTH {
            Font::SMALL
        } else if width <= MEDIUM_FONT_MAX_WIDTH {
            Font::MEDIUM
        } else {
            Font::LARGE
        }
    }

    /// Horizontal advance in pixels at scale 1
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn bytes_per_row(&self) -> usize {
        (self.width as usize - 1) / 8 + 1
    }

    /// Whether pixel (`col`, `row`) of glyph `code` is set.
    pub fn is_set(&self, code: u8, col: usize, row: usize) -> bool {
        if code as usize >= GLYPH_COUNT || col >= self.width as usize || row >= self.height as usize
        {
            return false;
        }
        let bpr = self.bytes_per_row();
        let glyph = code as usize * self.height as usize * bpr;
        let byte = self.glyphs[glyph + row * bpr + col / 8];
        (byte >> (7 - (col % 8))) & 1 == 1
    }

    /// Horizontal distance between `index` glyphs at `scale`.
    pub fn advance(&self, index: usize, scale: f32) -> i32 {
        (index as f32 * self.width as f32 * scale) as i32
    }

    /// Rasterize glyph `code` with its top-left corner at (`x`, `y`).
    ///
    /// Each destination pixel samples the source bitmap at
    /// `coord / scale`, so upscaling is blocky and downscaling drops
    /// rows/columns. Set bits become `fg`; clear bits become `bg`, or are
    /// left untouched when `bg` is `None`.
    ///
    /// The first scanline or column that falls outside `surface` ends the
    /// whole glyph.
    pub fn draw_glyph(
        &self,
        surface: &mut Surface<'_>,
        x: i32,
        y: i32,
        code: u8,
        fg: Rgba,
        bg: Option<Rgba>,
        scale: f32,
    ) {
        let out_w = (self.width as f32 * scale).ceil() as i32;
        let out_h = (self.height as f32 * scale).ceil() as i32;

        // Spaces are a solid background block
        if code == b' ' {
            let Some(bg) = bg else {
                return;
            };
            for yy in 0..out_h {
                let Some(row) = scanline(surface, y + yy) else {
                    return;
                };
                for xx in 0..out_w {
                    let Some(px) = pixel(row, x + xx) else {
                        return;
                    };
                    *px = bg;
                }
            }
            return;
        }

        for yy in 0..out_h {
            let row_font = ((yy as f32 / scale) as usize).min(self.height as usize - 1);
            let Some(row) = scanline(surface, y + yy) else {
                return;
            };

            for xx in 0..out_w {
                let Some(px) = pixel(row, x + xx) else {
                    return;
                };
                let col_font = ((xx as f32 / scale) as usize).min(self.width as usize - 1);
                if self.is_set(code, col_font, row_font) {
                    *px = fg;
                } else if let Some(bg) = bg {
                    *px = bg;
                }
            }
        }
    }
}

fn scanline<'s>(surface: &'s mut Surface<'_>, y: i32) -> Option<&'s mut [Rgba]> {
    if y < 0 {
        return None;
    }
    surface.row_mut(y as usize)
}

fn pixel(row: &mut [Rgba], x: i32) -> Option<&mut Rgba> {
    if x < 0 {
        return None;
    }
    row.get_mut(x as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba = Rgba::BLACK;
    const FG: Rgba = Rgba::WHITE;

    fn canvas(w: usize, h: usize) -> Vec<Rgba> {
        vec![Rgba::new(1, 2, 3, 4); w * h]
    }

    #[test]
    fn font_follows_width() {
        assert_eq!(Font::for_width(480), Font::SMALL);
        assert_eq!(Font::for_width(640), Font::SMALL);
        assert_eq!(Font::for_width(720), Font::MEDIUM);
        assert_eq!(Font::for_width(960), Font::LARGE);
        assert_eq!(Font::for_width(1920), Font::LARGE);
    }

    #[test]
    fn medium_font_trims_a_column() {
        assert_eq!(Font::MEDIUM.width(), 9);
        assert_eq!(Font::MEDIUM.bytes_per_row(), 2);
        assert_eq!(
            Font::MEDIUM.glyphs.len(),
            GLYPH_COUNT * Font::MEDIUM.height() as usize * 2
        );
    }

    #[test]
    fn glyph_writes_both_colors() {
        let font = Font::LARGE;
        let mut pixels = canvas(12, 24);
        let mut surface = Surface::new(&mut pixels, 12, 24, 12);
        font.draw_glyph(&mut surface, 0, 0, b'A', FG, Some(BG), 1.0);

        for row in 0..24 {
            for col in 0..12 {
                let expected = if font.is_set(b'A', col, row) { FG } else { BG };
                assert_eq!(surface.get(col, row), Some(expected), "({col}, {row})");
            }
        }
        assert!(pixels.contains(&FG));
    }

    #[test]
    fn transparent_background_leaves_pixels() {
        let font = Font::SMALL;
        let mut pixels = canvas(8, 14);
        let mut surface = Surface::new(&mut pixels, 8, 14, 8);
        font.draw_glyph(&mut surface, 0, 0, b'1', FG, None, 1.0);
        assert!(!pixels.contains(&BG));
        assert!(pixels.contains(&FG));
        assert!(pixels.contains(&Rgba::new(1, 2, 3, 4)));
    }

    #[test]
    fn upscaling_is_nearest_neighbour() {
        let font = Font::SMALL;
        let mut pixels = canvas(16, 28);
        let mut surface = Surface::new(&mut pixels, 16, 28, 16);
        font.draw_glyph(&mut surface, 0, 0, b'#', FG, Some(BG), 2.0);

        for row in 0..28 {
            for col in 0..16 {
                let expected = if font.is_set(b'#', col / 2, row / 2) { FG } else { BG };
                assert_eq!(surface.get(col, row), Some(expected));
            }
        }
    }

    #[test]
    fn half_scale_samples_every_other_pixel() {
        let font = Font::LARGE;
        let mut pixels = canvas(6, 12);
        let mut surface = Surface::new(&mut pixels, 6, 12, 6);
        font.draw_glyph(&mut surface, 0, 0, b'M', FG, Some(BG), 0.5);

        for row in 0..12 {
            for col in 0..6 {
                let expected = if font.is_set(b'M', col * 2, row * 2) { FG } else { BG };
                assert_eq!(surface.get(col, row), Some(expected));
            }
        }
    }

    #[test]
    fn space_is_a_solid_block() {
        let font = Font::SMALL;
        let mut pixels = canvas(10, 16);
        let mut surface = Surface::new(&mut pixels, 10, 16, 10);
        font.draw_glyph(&mut surface, 1, 1, b' ', FG, Some(BG), 1.0);
        for row in 0..16 {
            for col in 0..10 {
                let inside = (1..9).contains(&col) && (1..15).contains(&row);
                let expected = if inside { BG } else { Rgba::new(1, 2, 3, 4) };
                assert_eq!(surface.get(col, row), Some(expected));
            }
        }
    }

    #[test]
    fn column_overflow_stops_the_glyph() {
        // 'H' has set pixels in its first column, so the first scanline that
        // reaches the edge must be the last one touched.
        let font = Font::LARGE;
        let mut pixels = canvas(10, 24);
        let mut surface = Surface::new(&mut pixels, 10, 24, 10);
        font.draw_glyph(&mut surface, 0, 0, b'H', FG, Some(BG), 1.0);

        let untouched = Rgba::new(1, 2, 3, 4);
        // Row 0 was partly drawn, rows below never started
        assert_ne!(surface.get(0, 0), Some(untouched));
        for row in 1..24 {
            for col in 0..10 {
                assert_eq!(surface.get(col, row), Some(untouched));
            }
        }
    }

    #[test]
    fn row_overflow_stops_the_glyph() {
        let font = Font::SMALL;
        let mut pixels = canvas(8, 6);
        let mut surface = Surface::new(&mut pixels, 8, 6, 8);
        font.draw_glyph(&mut surface, 0, 0, b'8', FG, Some(BG), 1.0);
        for row in 0..6 {
            for col in 0..8 {
                let expected = if font.is_set(b'8', col, row) { FG } else { BG };
                assert_eq!(surface.get(col, row), Some(expected));
            }
        }
    }

    #[test]
    fn negative_origin_draws_nothing() {
        let font = Font::SMALL;
        let mut pixels = canvas(8, 14);
        let mut surface = Surface::new(&mut pixels, 8, 14, 8);
        font.draw_glyph(&mut surface, 0, -1, b'X', FG, Some(BG), 1.0);
        font.draw_glyph(&mut surface, -1, 0, b'X', FG, Some(BG), 1.0);
        assert!(pixels.iter().all(|&p| p == Rgba::new(1, 2, 3, 4)));
    }

    #[test]
    fn codes_without_bitmap_are_blank() {
        assert!((0..8).all(|col| (0..14).all(|row| !Font::SMALL.is_set(200, col, row))));
    }
}
