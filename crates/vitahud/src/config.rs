//! Overlay configuration.

use vitahud_hw::buttons;

/// Button masks the input state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    /// Held together with Up/Down to change the display mode
    pub modifier: u32,
    /// Any of these bits confirms the selected menu row
    pub confirm: u32,
    /// Held while confirming the profile row to target the global profile
    pub global: u32,
    pub up: u32,
    pub down: u32,
    pub left: u32,
    pub right: u32,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            modifier: buttons::SELECT,
            confirm: buttons::CROSS | buttons::CIRCLE,
            global: buttons::LTRIGGER,
            up: buttons::UP,
            down: buttons::DOWN,
            left: buttons::LEFT,
            right: buttons::RIGHT,
        }
    }
}

/// How the compact OSD mode is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OsdStyle {
    /// FPS and battery percent drawn straight onto the game's framebuffer
    #[default]
    Direct,
    /// Loads, peak, FPS and battery in a small panel blitted in a corner
    Panel,
}

#[derive(Debug, Clone, Default)]
pub struct OverlayConfig {
    pub bindings: Bindings,
    pub osd_style: OsdStyle,
}
