pub mod args;
pub mod capture;
pub mod color;
pub mod config;
pub mod display;
pub mod font;
pub mod gui;
pub mod host;
pub mod input;
pub mod overlay;
pub mod perf;
pub mod sim;
pub mod surface;

// Re-export commonly used types
pub use args::Args;
pub use color::Rgba;
pub use config::{Bindings, OsdStyle, OverlayConfig};
pub use host::{Device, Kernel, KernelError, MemoryPool, OcMode, Overclock, PoolInfo, Profiles};
pub use input::{DisplayMode, MenuControl};
pub use overlay::Overlay;
pub use perf::{BatteryState, MemoryUsage, Perf};
pub use surface::{FrameBuf, PixelFormat, Surface};
