//! The off-screen canvas, backed by a kernel memory block.

use super::layout::{GUI_HEIGHT, GUI_WIDTH};
use crate::color::Rgba;
use crate::host::{Kernel, KernelError, MemBlock};
use crate::surface::Surface;
use tracing::{debug, info};
use vitahud_hw::memory_map::PAGE_SIZE;
use vitahud_hw::specs::display::BYTES_PER_PIXEL_RGBA8;

/// Name of the kernel memory block holding the canvas
const BLOCK_NAME: &str = "vitahud_gui";

const PIXELS: usize = (GUI_WIDTH * GUI_HEIGHT) as usize;

pub(crate) struct Canvas {
    block: MemBlock,
}

impl Canvas {
    /// Block size: the pixel data rounded up to whole pages.
    pub(crate) const fn byte_size() -> usize {
        (PIXELS * BYTES_PER_PIXEL_RGBA8 + PAGE_SIZE - 1) & !(PAGE_SIZE - 1)
    }

    pub(crate) fn alloc<K: Kernel + ?Sized>(kernel: &mut K) -> Result<Self, KernelError> {
        let block = kernel.alloc_mem_block(BLOCK_NAME, Self::byte_size())?;
        info!(uid = block.uid(), size = block.size(), "canvas allocated");
        Ok(Self { block })
    }

    pub(crate) fn free<K: Kernel + ?Sized>(self, kernel: &mut K) {
        debug!(uid = self.block.uid(), "canvas freed");
        kernel.free_mem_block(self.block);
    }

    pub(crate) fn surface(&mut self) -> Surface<'_> {
        let len = PIXELS.min(self.block.size() / BYTES_PER_PIXEL_RGBA8);
        let base = self.block.base().as_ptr().cast::<Rgba>();
        // SAFETY: the block is valid for `size` bytes while we own it, Rgba is
        // four bytes with alignment 1, and `&mut self` keeps the view unique.
        let pixels = unsafe { std::slice::from_raw_parts_mut(base, len) };
        Surface::new(
            pixels,
            GUI_WIDTH as usize,
            GUI_HEIGHT as usize,
            GUI_WIDTH as usize,
        )
    }
}
