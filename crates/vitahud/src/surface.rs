//! Pixel surfaces: the host framebuffer descriptor and a bounds-checked view
//! over any block of [`Rgba`] pixels.

use crate::color::Rgba;
use vitahud_hw::specs::display::{self, pixel_format};

/// Pixel format of a display framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PixelFormat {
    /// 32-bit, R in the lowest byte
    A8B8G8R8 = pixel_format::A8B8G8R8,
    /// Anything the overlay cannot draw into
    Unknown = 0xFFFF_FFFF,
}

impl From<u32> for PixelFormat {
    fn from(value: u32) -> Self {
        match value {
            pixel_format::A8B8G8R8 => PixelFormat::A8B8G8R8,
            _ => PixelFormat::Unknown,
        }
    }
}

/// The display driver's description of the framebuffer about to be shown.
///
/// `base` belongs to the host. `pitch` is counted in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameBuf {
    pub base: *mut Rgba,
    pub width: u32,
    pub height: u32,
    pub pitch: u32,
    pub pixel_format: PixelFormat,
}

impl FrameBuf {
    /// A descriptor with geometry only, used before the host reports one.
    pub const fn detached(width: u32, height: u32) -> Self {
        Self {
            base: std::ptr::null_mut(),
            width,
            height,
            pitch: width,
            pixel_format: PixelFormat::A8B8G8R8,
        }
    }

    /// Describe a caller-owned block of pixels.
    pub fn from_pixels(pixels: &mut [Rgba], width: u32, height: u32, pitch: u32) -> Self {
        debug_assert!(pixels.len() >= (pitch as usize) * (height as usize));
        Self {
            base: pixels.as_mut_ptr(),
            width,
            height,
            pitch,
            pixel_format: PixelFormat::A8B8G8R8,
        }
    }

    pub fn is_attached(&self) -> bool {
        !self.base.is_null()
    }

    /// View the framebuffer as a surface.
    ///
    /// Returns `None` when there is nothing to draw into, either because no
    /// base is installed or because the format is not 32-bit RGBA.
    ///
    /// # Safety
    ///
    /// `base` must be valid for `pitch * height` pixels for the lifetime `'a`
    /// and must not be aliased elsewhere during it.
    pub unsafe fn surface<'a>(&self) -> Option<Surface<'a>> {
        if !self.is_attached() || self.pixel_format != PixelFormat::A8B8G8R8 {
            return None;
        }
        let len = self.pitch as usize * self.height as usize;
        // SAFETY: upheld by the caller, see above.
        let pixels = unsafe { std::slice::from_raw_parts_mut(self.base, len) };
        Some(Surface::new(
            pixels,
            self.width as usize,
            self.height as usize,
            self.pitch as usize,
        ))
    }
}

impl Default for FrameBuf {
    fn default() -> Self {
        Self::detached(display::REFERENCE_WIDTH, display::REFERENCE_HEIGHT)
    }
}

/// A 2D pixel grid with row stride, every access bounds-checked.
pub struct Surface<'a> {
    pixels: &'a mut [Rgba],
    width: usize,
    height: usize,
    pitch: usize,
}

impl<'a> Surface<'a> {
    /// Wrap `pixels`. Dimensions that do not fit the slice are cut down.
    pub fn new(pixels: &'a mut [Rgba], width: usize, height: usize, pitch: usize) -> Self {
        let pitch = pitch.max(1);
        let height = height.min(pixels.len() / pitch);
        let width = width.min(pitch);
        Self {
            pixels,
            width,
            height,
            pitch,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Visible pixels of row `y`.
    pub fn row(&self, y: usize) -> Option<&[Rgba]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.pitch;
        Some(&self.pixels[start..start + self.width])
    }

    /// Visible pixels of row `y`, mutably.
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [Rgba]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.pitch;
        Some(&mut self.pixels[start..start + self.width])
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        self.row(y)?.get(x).copied()
    }

    /// Write one pixel. Coordinates outside the surface are ignored.
    pub fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(px) = self
            .row_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *px = color;
        }
    }

    pub fn fill(&mut self, color: Rgba) {
        for y in 0..self.height {
            if let Some(row) = self.row_mut(y) {
                row.fill(color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_respect_pitch() {
        let mut pixels = vec![Rgba::BLACK; 8 * 3];
        let mut surface = Surface::new(&mut pixels, 6, 3, 8);
        surface.put(5, 1, Rgba::WHITE);
        assert_eq!(surface.row(1).map(|r| r.len()), Some(6));
        assert_eq!(surface.get(5, 1), Some(Rgba::WHITE));
        assert_eq!(pixels[8 + 5], Rgba::WHITE);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut pixels = vec![Rgba::BLACK; 4 * 4];
        let mut surface = Surface::new(&mut pixels, 4, 4, 4);
        surface.put(-1, 0, Rgba::WHITE);
        surface.put(4, 0, Rgba::WHITE);
        surface.put(0, 4, Rgba::WHITE);
        assert!(surface.row(4).is_none());
        assert!(surface.get(4, 0).is_none());
        assert!(pixels.iter().all(|&p| p == Rgba::BLACK));
    }

    #[test]
    fn height_is_cut_to_slice() {
        let mut pixels = vec![Rgba::BLACK; 10];
        let surface = Surface::new(&mut pixels, 4, 100, 4);
        assert_eq!(surface.height(), 2);
    }

    #[test]
    fn detached_framebuffer_has_no_surface() {
        let fb = FrameBuf::default();
        assert!(!fb.is_attached());
        assert!(unsafe { fb.surface() }.is_none());
    }

    #[test]
    fn unknown_format_has_no_surface() {
        let mut pixels = vec![Rgba::BLACK; 16];
        let mut fb = FrameBuf::from_pixels(&mut pixels, 4, 4, 4);
        fb.pixel_format = PixelFormat::from(0x6000_0000);
        assert_eq!(fb.pixel_format, PixelFormat::Unknown);
        assert!(unsafe { fb.surface() }.is_none());
    }
}
