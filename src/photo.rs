//! Photo analysis: dominant-colour extraction and face-tile sampling.
//!
//! A photo drives generation two ways: its dominant colours become a
//! [`SkinPalette`] (ranked by brightness), and its centre crop becomes the
//! small face tile composited onto the head.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::types::{Colour, SkinPalette};

/// Working resolution for quantization.
const QUANT_SIZE: u32 = 96;

/// Number of dominant colours extracted by default.
pub const DEFAULT_COLOUR_COUNT: usize = 6;

/// Face tile edge length by default.
pub const DEFAULT_FACE_SIZE: u32 = 8;

/// Fraction of the shorter photo dimension covered by the face crop.
const FACE_CROP_RATIO: f32 = 0.5;

/// Extract up to `k` dominant colours, most populous first.
///
/// The photo is reduced to a small working resolution and split with a
/// median-cut quantizer; each box contributes its average colour. Duplicate
/// values are collapsed, so the result may be shorter than `k`.
pub fn quantize(photo: &DynamicImage, k: usize) -> Vec<Colour> {
    let reduced = photo
        .resize_exact(QUANT_SIZE, QUANT_SIZE, FilterType::Triangle)
        .to_rgb8();
    let pixels: Vec<[u8; 3]> = reduced.pixels().map(|p| p.0).collect();

    let mut boxes = vec![pixels];
    while boxes.len() < k {
        // Split the box with the widest channel range
        let candidate = boxes
            .iter()
            .enumerate()
            .filter_map(|(i, b)| widest_channel(b).map(|(ch, range)| (i, ch, range)))
            .max_by_key(|&(_, _, range)| range);

        let Some((index, channel, _)) = candidate else {
            break; // every box is uniform
        };

        let mut pixels = boxes.swap_remove(index);
        pixels.sort_by_key(|p| p[channel]);
        let upper = pixels.split_off(pixels.len() / 2);
        boxes.push(pixels);
        boxes.push(upper);
    }

    let mut ranked: Vec<(Colour, usize)> = boxes
        .iter()
        .filter(|b| !b.is_empty())
        .map(|b| (average_colour(b), b.len()))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut colours = Vec::with_capacity(ranked.len());
    for (colour, _) in ranked {
        if !colours.contains(&colour) {
            colours.push(colour);
        }
    }
    colours
}

/// The channel with the largest value range in a box, with that range.
/// Returns `None` when the box cannot be split further.
fn widest_channel(pixels: &[[u8; 3]]) -> Option<(usize, u8)> {
    if pixels.len() < 2 {
        return None;
    }
    let mut min = [255u8; 3];
    let mut max = [0u8; 3];
    for p in pixels {
        for c in 0..3 {
            min[c] = min[c].min(p[c]);
            max[c] = max[c].max(p[c]);
        }
    }
    let (channel, range) = (0..3)
        .map(|c| (c, max[c] - min[c]))
        .max_by_key(|&(_, range)| range)?;
    if range == 0 {
        None
    } else {
        Some((channel, range))
    }
}

fn average_colour(pixels: &[[u8; 3]]) -> Colour {
    let n = pixels.len() as u64;
    let mut sum = [0u64; 3];
    for p in pixels {
        for c in 0..3 {
            sum[c] += p[c] as u64;
        }
    }
    Colour::rgb(
        (sum[0] / n) as u8,
        (sum[1] / n) as u8,
        (sum[2] / n) as u8,
    )
}

/// Derive a skin palette from a photo.
///
/// Dominant colours are ranked by luma: the darkest becomes hair, the
/// brightest accent, the middle one skin. Pants and shirt come from what is
/// left over, or are synthesised from the skin tone when the photo is too
/// uniform. Fewer than three distinct colours falls back to the classic
/// preset; this never fails.
pub fn derive_palette(photo: &DynamicImage) -> SkinPalette {
    let candidates = quantize(photo, DEFAULT_COLOUR_COUNT);
    if candidates.len() < 3 {
        return SkinPalette::builtin("classic").expect("classic preset exists");
    }
    assign_by_brightness(candidates)
}

/// Map at least three candidate colours onto the five palette slots.
fn assign_by_brightness(mut candidates: Vec<Colour>) -> SkinPalette {
    candidates.sort_by(|a, b| a.luma().total_cmp(&b.luma()));
    let hair = candidates[0];
    let accent = candidates[candidates.len() - 1];
    let skin = candidates[candidates.len() / 2];

    let remaining: Vec<Colour> = candidates
        .iter()
        .copied()
        .filter(|c| *c != hair && *c != accent && *c != skin)
        .collect();

    let (pants, shirt) = match remaining.as_slice() {
        [] => (skin.adjust(-18), skin.adjust(18)),
        [only] => (*only, skin.adjust(18)),
        [first, .., last] => (*first, *last),
    };

    SkinPalette {
        skin,
        hair,
        shirt,
        pants,
        accent,
    }
}

/// Centre-crop a photo and downscale it to a `size`x`size` face tile.
///
/// The crop covers half the shorter dimension (never below one pixel), so
/// non-square and tiny photos work; the result is always exactly square.
pub fn face_tile(photo: &DynamicImage, size: u32) -> RgbaImage {
    let ratio = FACE_CROP_RATIO.clamp(0.05, 1.0);
    let (width, height) = photo.dimensions();
    let side = ((width.min(height) as f32 * ratio) as u32).max(1);
    let left = (width - side) / 2;
    let top = (height - side) / 2;

    photo
        .crop_imm(left, top, side, side)
        .resize_exact(size, size, FilterType::Lanczos3)
        .to_rgba8()
}
