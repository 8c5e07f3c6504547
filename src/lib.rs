//! skinforge - procedural skin texture generator
//!
//! A library for synthesizing 64x64 player skin textures from a five-colour
//! palette, optionally derived from a photo along with an 8x8 face tile.

pub mod cli;
pub mod error;
pub mod layout;
pub mod output;
pub mod photo;
pub mod render;
pub mod types;

pub use error::{Result, SkinError};
pub use layout::{BodyPart, Face, FaceMap, Rect, SkinLayout, SKIN_SIZE};
pub use photo::{derive_palette, face_tile, quantize, DEFAULT_COLOUR_COUNT, DEFAULT_FACE_SIZE};
pub use render::{apply_face_tile, write_png, Canvas, SkinRenderer};
pub use types::{builtin_palettes, load_palette_file, Colour, SkinPalette};
