//! Button masks as reported by the controller driver's `buttons` field.

pub const SELECT: u32 = 0x0000_0001;
pub const L3: u32 = 0x0000_0002;
pub const R3: u32 = 0x0000_0004;
pub const START: u32 = 0x0000_0008;
pub const UP: u32 = 0x0000_0010;
pub const RIGHT: u32 = 0x0000_0020;
pub const DOWN: u32 = 0x0000_0040;
pub const LEFT: u32 = 0x0000_0080;
pub const L2: u32 = 0x0000_0100;
pub const R2: u32 = 0x0000_0200;
pub const L1: u32 = 0x0000_0400;
pub const R1: u32 = 0x0000_0800;
pub const TRIANGLE: u32 = 0x0000_1000;
pub const CIRCLE: u32 = 0x0000_2000;
pub const CROSS: u32 = 0x0000_4000;
pub const SQUARE: u32 = 0x0000_8000;

/// Shoulder buttons on the handheld map to L1/R1
pub const LTRIGGER: u32 = L1;
pub const RTRIGGER: u32 = R1;
