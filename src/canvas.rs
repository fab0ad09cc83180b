use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ColorType, ImageEncoder, ImageError, Rgba, RgbaImage,
};

use crate::{
    error::{BakeError, Result},
    text::{Glyph, Offset},
};

pub fn blank(width: u32, height: u32, background: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, background)
}

/// Paints the glyph's ink with its drawing origin at `origin`. Pixels outside
/// the canvas are dropped.
pub fn draw_glyph(canvas: &mut RgbaImage, glyph: &Glyph, origin: Offset, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    for (x, y) in glyph.ink_pixels() {
        let px = origin.dx + x;
        let py = origin.dy + y;
        if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
            canvas.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// PNG bytes at maximum compression. Same pixels always give the same bytes.
pub fn encode_png(image: &RgbaImage) -> std::result::Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    write_png(image, &mut bytes)?;
    Ok(bytes)
}

fn write_png<W: Write>(image: &RgbaImage, writer: W) -> std::result::Result<(), ImageError> {
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|err| BakeError::output_write(path, err))?;
    let mut writer = BufWriter::new(file);
    write_png(image, &mut writer).map_err(|err| BakeError::output_write(path, err))?;
    writer
        .flush()
        .map_err(|err| BakeError::output_write(path, err))
}
