//! Hardware facts about the handheld that the overlay targets.
//!
//! Everything in here is plain data: register-like masks, display geometry,
//! clock steps and memory pool sizes. No behavior lives in this crate.

pub mod buttons;
pub mod clocks;
pub mod memory_map;
pub mod specs;
