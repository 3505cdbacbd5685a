//! Button pad handling: display mode switching and the clock menu.
//!
//! Only buttons that went down since the previous poll trigger anything, so
//! holding a button never repeats. The modifier is the exception: it only
//! needs to be held while Up or Down is newly pressed.

use crate::config::Bindings;
use crate::host::{Device, OcMode, Overclock, Profiles};
use tracing::debug;

/// How much of the overlay is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Hidden,
    /// Compact on-screen display
    Osd,
    /// Full panel with the clock menu
    Full,
}

impl DisplayMode {
    fn next(self) -> Option<Self> {
        match self {
            DisplayMode::Hidden => Some(DisplayMode::Osd),
            DisplayMode::Osd => Some(DisplayMode::Full),
            DisplayMode::Full => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            DisplayMode::Hidden => None,
            DisplayMode::Osd => Some(DisplayMode::Hidden),
            DisplayMode::Full => Some(DisplayMode::Osd),
        }
    }
}

/// Selectable rows of the Full menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum MenuControl {
    #[default]
    Cpu,
    GpuEs4,
    Bus,
    GpuXbar,
    Venezia,
    /// Save/delete the clock profile
    Profile,
}

impl MenuControl {
    pub const ALL: [MenuControl; 6] = [
        MenuControl::Cpu,
        MenuControl::GpuEs4,
        MenuControl::Bus,
        MenuControl::GpuXbar,
        MenuControl::Venezia,
        MenuControl::Profile,
    ];

    /// Clock domain adjusted by this row, `None` for the profile row.
    pub fn device(self) -> Option<Device> {
        match self {
            MenuControl::Cpu => Some(Device::Cpu),
            MenuControl::GpuEs4 => Some(Device::GpuEs4),
            MenuControl::Bus => Some(Device::Bus),
            MenuControl::GpuXbar => Some(Device::GpuXbar),
            MenuControl::Venezia => Some(Device::Venezia),
            MenuControl::Profile => None,
        }
    }

    fn next(self) -> Self {
        Self::ALL
            .get(self as usize + 1)
            .copied()
            .unwrap_or(self)
    }

    fn prev(self) -> Self {
        match (self as usize).checked_sub(1) {
            Some(index) => Self::ALL[index],
            None => self,
        }
    }
}

/// Input state machine.
#[derive(Debug, Clone)]
pub struct Input {
    bindings: Bindings,
    buttons: u32,
    mode: DisplayMode,
    mode_changed: bool,
    menu: MenuControl,
}

impl Input {
    pub fn new(bindings: Bindings) -> Self {
        Self {
            bindings,
            buttons: 0,
            mode: DisplayMode::default(),
            mode_changed: false,
            menu: MenuControl::default(),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn menu(&self) -> MenuControl {
        self.menu
    }

    /// Button mask seen by the last [`Input::check`].
    pub fn buttons(&self) -> u32 {
        self.buttons
    }

    /// Whether the global-profile modifier was held at the last poll.
    pub fn global_held(&self) -> bool {
        self.buttons & self.bindings.global != 0
    }

    /// Report a pending mode change once and clear it.
    pub fn take_mode_changed(&mut self) -> bool {
        std::mem::take(&mut self.mode_changed)
    }

    /// Process one poll of the button pad.
    pub fn check<O, P>(&mut self, buttons: u32, oc: &mut O, profiles: &mut P)
    where
        O: Overclock + ?Sized,
        P: Profiles + ?Sized,
    {
        let b = self.bindings;
        let pressed = buttons & !self.buttons;

        if buttons & b.modifier != 0 {
            let target = if pressed & b.up != 0 {
                self.mode.next()
            } else if pressed & b.down != 0 {
                self.mode.prev()
            } else {
                None
            };
            if let Some(mode) = target {
                debug!(from = ?self.mode, to = ?mode, "display mode");
                self.mode = mode;
                self.mode_changed = true;
            }
        } else if self.mode == DisplayMode::Full {
            if pressed & b.down != 0 {
                self.menu = self.menu.next();
            } else if pressed & b.up != 0 {
                self.menu = self.menu.prev();
            }

            match self.menu.device() {
                None => {
                    if pressed & b.confirm != 0 {
                        let global = buttons & b.global != 0;
                        if (!global && oc.has_changed()) || !profiles.exists(global) {
                            debug!(global, "saving profile");
                            profiles.save(global);
                        } else {
                            debug!(global, "deleting profile");
                            profiles.delete(global);
                        }
                    }
                }
                Some(device) => match oc.mode(device) {
                    OcMode::Manual => {
                        if pressed & b.right != 0 {
                            oc.change_manual(device, true);
                        } else if pressed & b.left != 0 {
                            oc.change_manual(device, false);
                        } else if pressed & b.confirm != 0 {
                            oc.set_mode(device, OcMode::Default);
                        }
                    }
                    OcMode::Default => {
                        if pressed & b.confirm != 0 {
                            oc.reset_manual(device);
                            oc.set_mode(device, OcMode::Manual);
                        }
                    }
                },
            }
        }

        self.buttons = buttons;
    }
}
