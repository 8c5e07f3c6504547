//! Core value types: colours and palettes.

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::{builtin_palettes, load_palette_file, SkinPalette};
