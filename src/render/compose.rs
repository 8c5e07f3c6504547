//! Face-tile compositing onto a rendered skin.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::layout::SkinLayout;
use crate::types::Colour;

use super::Canvas;

/// Overlay a face tile onto the head-front rectangle of a rendered skin.
///
/// The tile is resized to the rectangle's exact dimensions and source-over
/// composited; every pixel outside the rectangle is untouched. Returns a
/// new canvas, the base is never mutated.
pub fn apply_face_tile(base: &Canvas, tile: &RgbaImage, layout: &SkinLayout) -> Canvas {
    let target = layout.head_front();
    let resized = imageops::resize(tile, target.width(), target.height(), FilterType::Lanczos3);

    let mut result = base.clone();
    for (dx, dy, pixel) in resized.enumerate_pixels() {
        let x = target.left + dx;
        let y = target.top + dy;
        let src = Colour::new(pixel.0[0], pixel.0[1], pixel.0[2], pixel.0[3]);
        if let Some(dst) = result.get(x, y) {
            result.put(x, y, blend_over(src, dst));
        }
    }
    result
}

/// Source-over alpha blending of two straight-alpha colours.
fn blend_over(src: Colour, dst: Colour) -> Colour {
    if src.a == 255 {
        return src;
    }
    if src.is_transparent() {
        return dst;
    }

    let sa = src.a as f32 / 255.0;
    let da = dst.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a == 0.0 {
        return Colour::TRANSPARENT;
    }

    let channel = |s: u8, d: u8| {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };

    Colour::new(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        (out_a * 255.0).round() as u8,
    )
}
