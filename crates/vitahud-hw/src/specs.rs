/// CPU specifications
pub mod cpu {
    /// Number of application cores reporting idle clocks
    pub const CORES: usize = 4;
}

/// Display specifications
pub mod display {
    /// Native LCD width in pixels. Every overlay coordinate is laid out
    /// against this width and rescaled to the live framebuffer.
    pub const REFERENCE_WIDTH: u32 = 960;

    /// Native LCD height in pixels
    pub const REFERENCE_HEIGHT: u32 = 544;

    /// Widest framebuffer that still uses the 8x14 face (640x368 output)
    pub const SMALL_FONT_MAX_WIDTH: u32 = 640;

    /// Widest framebuffer that still uses the 10x18 face (720x408 output)
    pub const MEDIUM_FONT_MAX_WIDTH: u32 = 720;

    /// Framebuffer bytes per pixel for A8B8G8R8
    pub const BYTES_PER_PIXEL_RGBA8: usize = 4;

    /// Display pixel format identifiers as reported by the display driver
    pub mod pixel_format {
        /// 32-bit, R in the lowest byte
        pub const A8B8G8R8: u32 = 0x0000_0000;
    }
}

/// Power controller readings
pub mod battery {
    /// Highest valid charge percentage
    pub const MAX_PERCENT: i32 = 100;

    /// Highest battery temperature shown, in whole degrees Celsius
    pub const MAX_TEMP_C: i32 = 99;

    /// The controller reports temperature in hundredths of a degree
    pub const TEMP_DIVISOR: i32 = 100;

    /// Lifetime estimates at or above this many minutes are bogus
    pub const MAX_LIFETIME_MINUTES: i32 = 100 * 60;
}

/// Timer specifications
pub mod timer {
    /// The low-resolution process timer counts microseconds
    pub const TICKS_PER_SECOND: u32 = 1_000_000;
}
