//! PNG screenshots of a framebuffer.

use crate::surface::Surface;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Encode the visible area of `surface` as an 8-bit RGB PNG. Alpha is
/// dropped; the display never blends it.
pub fn encode<W: Write>(surface: &Surface<'_>, out: W) -> Result<(), png::EncodingError> {
    let width = surface.width();
    let height = surface.height();

    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        if let Some(row) = surface.row(y) {
            for px in &row[..width.min(row.len())] {
                data.extend_from_slice(&[px.r, px.g, px.b]);
            }
        }
    }

    let mut encoder = png::Encoder::new(out, width as u32, height as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    Ok(())
}

pub fn write_png(path: &Path, surface: &Surface<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    encode(surface, BufWriter::new(file))?;
    info!(
        "Wrote {}x{} screenshot to {:?}",
        surface.width(),
        surface.height(),
        path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use std::io::Cursor;

    #[test]
    fn encodes_visible_pixels_only() {
        // Pitch wider than the visible width; the padding must not leak
        let mut pixels = vec![Rgba::new(9, 9, 9, 0); 6 * 2];
        pixels[0] = Rgba::new(10, 20, 30, 255);
        pixels[6 + 3] = Rgba::WHITE;
        let surface = Surface::new(&mut pixels, 4, 2, 6);

        let mut bytes = Vec::new();
        encode(&surface, &mut bytes).unwrap();

        let decoder = png::Decoder::new(Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf).unwrap();
        assert_eq!((frame.width, frame.height), (4, 2));
        assert_eq!(frame.color_type, png::ColorType::Rgb);
        assert_eq!(&buf[0..3], &[10, 20, 30]);
        assert_eq!(&buf[3..6], &[9, 9, 9]);
        // second row, fourth pixel
        assert_eq!(&buf[(4 + 3) * 3..(4 + 3) * 3 + 3], &[255, 255, 255]);
    }
}
