//! Text output into the canvas.

use super::layout::Scaler;
use crate::color::Rgba;
use crate::font::Font;
use crate::surface::Surface;
use std::fmt;

/// Longest formatted line, in bytes. Longer output is cut off.
const LINE_CAPACITY: usize = 256;

/// Fixed-capacity formatting target.
pub(crate) struct LineBuf {
    bytes: [u8; LINE_CAPACITY],
    len: usize,
}

impl LineBuf {
    pub(crate) fn new() -> Self {
        Self {
            bytes: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl fmt::Write for LineBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = LINE_CAPACITY - self.len;
        let n = s.len().min(room);
        self.bytes[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        Ok(())
    }
}

/// Canvas plus the current text state.
///
/// Coordinates passed to `print` are logical and get rescaled to the live
/// framebuffer before drawing.
pub(crate) struct Painter<'a> {
    pub(crate) surface: Surface<'a>,
    pub(crate) font: Font,
    pub(crate) scaler: Scaler,
    /// Glyph scale on top of the framebuffer ratio
    pub(crate) scale: f32,
    pub(crate) fg: Rgba,
    pub(crate) bg: Rgba,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(surface: Surface<'a>, font: Font, scaler: Scaler) -> Self {
        Self {
            surface,
            font,
            scaler,
            scale: 1.0,
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.surface.fill(self.bg);
    }

    pub(crate) fn print(&mut self, x: i32, y: i32, text: &str) {
        self.print_bytes(x, y, text.as_bytes());
    }

    pub(crate) fn print_fmt(&mut self, x: i32, y: i32, args: fmt::Arguments<'_>) {
        let mut line = LineBuf::new();
        // LineBuf never reports an error, it truncates
        let _ = fmt::write(&mut line, args);
        self.print_bytes(x, y, line.as_bytes());
    }

    fn print_bytes(&mut self, x: i32, y: i32, text: &[u8]) {
        let x = self.scaler.x(x);
        let y = self.scaler.y(y);
        for (i, &code) in text.iter().enumerate() {
            let gx = x + self.font.advance(i, self.scale);
            self.font
                .draw_glyph(&mut self.surface, gx, y, code, self.fg, Some(self.bg), self.scale);
        }
    }

    /// Run `f` with the foreground set to `color`, then go back to white.
    pub(crate) fn colored(&mut self, color: Rgba, f: impl FnOnce(&mut Self)) {
        self.fg = color;
        f(self);
        self.fg = Rgba::WHITE;
    }

    /// Run `f` with glyphs scaled by `scale`, then go back to 1.
    pub(crate) fn scaled(&mut self, scale: f32, f: impl FnOnce(&mut Self)) {
        self.scale = scale;
        f(self);
        self.scale = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn line_buf_truncates() {
        let mut line = LineBuf::new();
        for _ in 0..40 {
            write!(line, "{:>10}", 12345).unwrap();
        }
        assert_eq!(line.as_bytes().len(), LINE_CAPACITY);
        assert!(line.as_bytes().ends_with(b"     1"));
    }

    #[test]
    fn printf_style_formats() {
        let mut line = LineBuf::new();
        write!(line, "{:<9}|{:3}|{:2} |{:02}", "ABCD", 7, 5, 3).unwrap();
        assert_eq!(line.as_bytes(), b"ABCD     |  7| 5 |03");
    }

    #[test]
    fn print_advances_by_font_width() {
        let mut pixels = vec![Rgba::new(9, 9, 9, 9); 40 * 20];
        let surface = Surface::new(&mut pixels, 40, 20, 40);
        let mut painter = Painter::new(surface, Font::SMALL, Scaler::default());
        painter.print(0, 0, "  ");
        // Two spaces cover exactly two 8x14 cells
        for y in 0..20 {
            for x in 0..40 {
                let inside = x < 16 && y < 14;
                let expected = if inside { Rgba::BLACK } else { Rgba::new(9, 9, 9, 9) };
                assert_eq!(painter.surface.get(x, y), Some(expected));
            }
        }
    }
}
