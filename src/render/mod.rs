//! Rendering module for skinforge.
//!
//! Turns a palette into a painted 64x64 canvas and writes it out as PNG.

mod canvas;
mod compose;
mod png;
mod skin;

pub use canvas::Canvas;
pub use compose::apply_face_tile;
pub use png::write_png;
pub use skin::SkinRenderer;
