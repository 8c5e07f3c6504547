//! The 64x64 pixel canvas that render passes paint into.

use crate::layout::{Rect, SKIN_SIZE};
use crate::types::Colour;

/// A square RGBA pixel grid (row-major: pixels[y][x]).
///
/// One canvas is created per generation call, painted in place, and handed
/// to the caller; it is never shared between renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<Vec<Colour>>,
    size: u32,
}

impl Canvas {
    /// Create a transparent canvas at the standard skin size.
    pub fn new() -> Self {
        Self::with_size(SKIN_SIZE)
    }

    /// Create a transparent square canvas of the given edge length.
    pub fn with_size(size: u32) -> Self {
        Self {
            pixels: vec![vec![Colour::TRANSPARENT; size as usize]; size as usize],
            size,
        }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Get a pixel, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Set a single pixel. Out-of-bounds writes are ignored.
    pub fn put(&mut self, x: u32, y: u32, colour: Colour) {
        if let Some(row) = self.pixels.get_mut(y as usize) {
            if let Some(pixel) = row.get_mut(x as usize) {
                *pixel = colour;
            }
        }
    }

    /// Fill a rectangle (exclusive right/bottom edges).
    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        for y in rect.top..rect.bottom {
            for x in rect.left..rect.right {
                self.put(x, y, colour);
            }
        }
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity((self.size * self.size * 4) as usize);
        for row in &self.pixels {
            for colour in row {
                buffer.extend_from_slice(&colour.to_rgba());
            }
        }
        buffer
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
