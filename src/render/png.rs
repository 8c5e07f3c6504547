//! PNG output for rendered skins.
//!
//! PNG is lossless, so the alpha channel round-trips exactly; viewers treat
//! transparency as a "no texture" signal and re-compression would break that.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{Result, SkinError};

use super::Canvas;

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The rendered skin to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling), nearest-neighbour
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1

    let size = canvas.size() * scale;
    let mut img: RgbaImage = ImageBuffer::new(size, size);

    for (y, row) in canvas.pixels().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgba = Rgba(colour.to_rgba());

            // Fill scaled pixels
            for sy in 0..scale {
                for sx in 0..scale {
                    let px = x as u32 * scale + sx;
                    let py = y as u32 * scale + sy;
                    img.put_pixel(px, py, rgba);
                }
            }
        }
    }

    img.save(path).map_err(|e| SkinError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
