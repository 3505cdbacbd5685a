//! Colors and value formatting shared by every overlay panel.

/// One framebuffer pixel, laid out in memory order (R, G, B, A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const GREEN: Rgba = Rgba::new(0, 255, 0, 255);
    /// Selection markers and manual-mode frequencies
    pub const HIGHLIGHT: Rgba = Rgba::new(0, 200, 255, 255);
    /// Text drawn straight onto the game's framebuffer
    pub const FPS: Rgba = Rgba::GREEN;

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Scale the color channels, keeping alpha.
    pub fn dimmed(self, factor: f32) -> Self {
        Self {
            r: (self.r as f32 * factor) as u8,
            g: (self.g as f32 * factor) as u8,
            b: (self.b as f32 * factor) as u8,
            a: self.a,
        }
    }

    /// Pack as `0x00RRGGBB` for desktop presentation.
    pub fn to_xrgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Map `value` within `[min, max]` onto a green -> yellow -> red heatmap.
///
/// The range is normalized to 0-255. The lower half ramps red up from 0 to
/// 254 at full green; the upper half fades green from 255 down to 1 at full
/// red. Out-of-range values are clamped first.
pub fn scale_color(value: i64, min: i64, max: i64) -> Rgba {
    let mut value = value;
    if value < min {
        value = min;
    }
    if value > max {
        value = max;
    }

    let v = ((value - min) as f32 / (max - min) as f32 * 255.0) as i32;

    Rgba {
        r: if v <= 127 { (v * 2) as u8 } else { 255 },
        g: if v > 127 { (255 - (v - 128) * 2) as u8 } else { 255 },
        b: 0,
        a: 255,
    }
}

const KIB: u32 = 1024;
const MIB: u32 = 1024 * 1024;

/// Largest display unit that `bytes` fills at least once.
pub fn units_from_size(bytes: u32) -> &'static str {
    if bytes >= MIB {
        "MB"
    } else if bytes >= KIB {
        "kB"
    } else {
        "B"
    }
}

/// `bytes` expressed in the unit chosen by [`units_from_size`], truncated.
pub fn value_from_size(bytes: u32) -> u32 {
    if bytes >= MIB {
        bytes / MIB
    } else if bytes >= KIB {
        bytes / KIB
    } else {
        bytes
    }
}

/// Unit and value together.
pub fn display_size(bytes: u32) -> (&'static str, u32) {
    (units_from_size(bytes), value_from_size(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of the normalization in `scale_color` for a 0..255 range.
    fn at(v: i64) -> Rgba {
        scale_color(v, 0, 255)
    }

    #[test]
    fn min_is_full_green() {
        assert_eq!(scale_color(0, 0, 100), Rgba::new(0, 255, 0, 255));
    }

    #[test]
    fn max_is_red() {
        assert_eq!(scale_color(100, 0, 100), Rgba::new(255, 1, 0, 255));
    }

    #[test]
    fn breakpoint_is_asymmetric() {
        assert_eq!(at(127), Rgba::new(254, 255, 0, 255));
        assert_eq!(at(128), Rgba::new(255, 255, 0, 255));
        assert_eq!(at(129), Rgba::new(255, 253, 0, 255));
    }

    #[test]
    fn values_are_clamped() {
        assert_eq!(scale_color(-50, 0, 100), scale_color(0, 0, 100));
        assert_eq!(scale_color(500, 0, 100), scale_color(100, 0, 100));
        assert_eq!(scale_color(10, 30, 60), scale_color(30, 30, 60));
    }

    #[test]
    fn blue_and_alpha_are_fixed() {
        for v in (-20..=120).step_by(7) {
            let c = scale_color(v, 0, 100);
            assert_eq!(c.b, 0);
            assert_eq!(c.a, 255);
        }
    }

    #[test]
    fn empty_range_does_not_panic() {
        assert_eq!(scale_color(5, 5, 5), Rgba::new(0, 255, 0, 255));
    }

    #[test]
    fn size_units() {
        assert_eq!(display_size(0), ("B", 0));
        assert_eq!(display_size(1023), ("B", 1023));
        assert_eq!(display_size(1024), ("kB", 1));
        assert_eq!(display_size(1024 * 1024 - 1), ("kB", 1023));
        assert_eq!(display_size(1024 * 1024), ("MB", 1));
        assert_eq!(display_size(512 * 1024 * 1024), ("MB", 512));
    }

    #[test]
    fn dimmed_keeps_alpha() {
        let c = Rgba::new(200, 100, 0, 255).dimmed(0.75);
        assert_eq!(c, Rgba::new(150, 75, 0, 255));
    }

    #[test]
    fn xrgb_packing() {
        assert_eq!(Rgba::new(0x12, 0x34, 0x56, 0xFF).to_xrgb(), 0x123456);
    }
}
