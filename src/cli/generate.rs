//! Generate command implementation.
//!
//! Renders a skin from a preset or photo-derived palette and writes the PNG.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use image::DynamicImage;

use crate::error::{Result, SkinError};
use crate::output::{display_path, Printer};
use crate::photo::{derive_palette, face_tile, DEFAULT_FACE_SIZE};
use crate::render::{apply_face_tile, write_png, SkinRenderer};
use crate::types::{builtin_palettes, load_palette_file, SkinPalette};

/// Generate a 64x64 skin texture
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Palette preset name, or 'auto' to derive one from the photo.
    /// Defaults to 'classic', or 'auto' when a photo is given.
    #[arg(long)]
    pub palette: Option<String>,

    /// RNG seed for reproducible accent placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Photo to derive a palette and face tile from
    #[arg(long)]
    pub photo: Option<PathBuf>,

    /// Skip overlaying the sampled face tile when a photo is provided
    #[arg(long)]
    pub skip_face: bool,

    /// Extra palette presets (YAML file)
    #[arg(long)]
    pub palettes: Option<PathBuf>,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Output PNG path. Parent directories are created if needed
    #[arg(long, short, required = true)]
    pub out: PathBuf,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let printer = Printer::new();
    let presets = collect_presets(args.palettes.as_deref())?;

    let photo = match &args.photo {
        Some(path) => Some(load_photo(path)?),
        None => None,
    };

    let palette = resolve_palette(&args, photo.as_ref(), &presets, &printer)?;

    let mut renderer = SkinRenderer::new(palette);
    if let Some(seed) = args.seed {
        renderer = renderer.with_seed(seed);
    }

    printer.status("Rendering", &format!("64x64 skin -> {}", display_path(&args.out)));
    let mut canvas = renderer.render();

    if let Some(photo) = &photo {
        if !args.skip_face {
            let tile = face_tile(photo, DEFAULT_FACE_SIZE);
            canvas = apply_face_tile(&canvas, &tile, renderer.layout());
        }
    }

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| SkinError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    write_png(&canvas, &args.out, args.scale)?;
    printer.status("Saved", &display_path(&args.out));

    Ok(())
}

/// Builtin presets with any user palette file layered on top.
fn collect_presets(
    palette_file: Option<&std::path::Path>,
) -> Result<BTreeMap<String, SkinPalette>> {
    let mut presets = builtin_palettes();
    if let Some(path) = palette_file {
        presets.extend(load_palette_file(path)?);
    }
    Ok(presets)
}

fn load_photo(path: &PathBuf) -> Result<DynamicImage> {
    image::open(path).map_err(|e| SkinError::Io {
        path: path.clone(),
        message: format!("Failed to read photo: {}", e),
    })
}

/// Pick the palette per the CLI contract: explicit name wins, a photo
/// without one implies 'auto', and 'auto' without a photo falls back to
/// classic.
fn resolve_palette(
    args: &GenerateArgs,
    photo: Option<&DynamicImage>,
    presets: &BTreeMap<String, SkinPalette>,
    printer: &Printer,
) -> Result<SkinPalette> {
    let requested = match (&args.palette, photo) {
        (Some(name), _) => name.as_str(),
        (None, Some(_)) => "auto",
        (None, None) => "classic",
    };

    if requested == "auto" {
        if let Some(photo) = photo {
            if let Some(path) = &args.photo {
                printer.status("Deriving", &format!("palette from {}", display_path(path)));
            }
            return Ok(derive_palette(photo));
        }
        // 'auto' without a photo has nothing to sample
        return Ok(presets["classic"]);
    }

    presets
        .get(requested)
        .copied()
        .ok_or_else(|| SkinError::Palette {
            name: requested.to_string(),
            help: Some(format!(
                "Known palettes: auto, {}",
                presets.keys().cloned().collect::<Vec<_>>().join(", ")
            )),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn generate_args(out: PathBuf) -> GenerateArgs {
        GenerateArgs {
            palette: None,
            seed: None,
            photo: None,
            skip_face: false,
            palettes: None,
            scale: 1,
            out,
        }
    }

    #[test]
    fn test_generate_classic_seeded_is_reproducible() {
        let dir = tempdir().unwrap();
        let out_a = dir.path().join("a.png");
        let out_b = dir.path().join("b.png");

        for out in [&out_a, &out_b] {
            let mut args = generate_args(out.clone());
            args.palette = Some("classic".to_string());
            args.seed = Some(42);
            run(args).unwrap();
        }

        let a = fs::read(&out_a).unwrap();
        let b = fs::read(&out_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_unseeded_differs_only_in_scatter() {
        let dir = tempdir().unwrap();
        let out_a = dir.path().join("a.png");
        let out_b = dir.path().join("b.png");

        for out in [&out_a, &out_b] {
            let mut args = generate_args(out.clone());
            args.palette = Some("classic".to_string());
            run(args).unwrap();
        }

        let a = image::open(&out_a).unwrap().to_rgba8();
        let b = image::open(&out_b).unwrap().to_rgba8();

        let palette = SkinPalette::builtin("classic").unwrap();
        let regions = SkinRenderer::new(palette).scatter_regions();
        for y in 0..64 {
            for x in 0..64 {
                if regions.iter().any(|r| r.contains(x, y)) {
                    continue;
                }
                assert_eq!(
                    a.get_pixel(x, y),
                    b.get_pixel(x, y),
                    "pixel ({}, {}) outside scatter regions changed",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_generate_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/deep/skin.png");

        let mut args = generate_args(out.clone());
        args.seed = Some(1);
        run(args).unwrap();

        assert!(out.exists());
        let img = image::open(&out).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (64, 64));
    }

    #[test]
    fn test_generate_unknown_palette_fails() {
        let dir = tempdir().unwrap();
        let mut args = generate_args(dir.path().join("skin.png"));
        args.palette = Some("neon".to_string());

        let err = run(args).unwrap_err();
        assert!(matches!(err, SkinError::Palette { .. }));
        assert!(!dir.path().join("skin.png").exists());
    }

    #[test]
    fn test_generate_missing_photo_fails() {
        let dir = tempdir().unwrap();
        let mut args = generate_args(dir.path().join("skin.png"));
        args.photo = Some(PathBuf::from("/nonexistent/photo.jpg"));

        let err = run(args).unwrap_err();
        assert!(matches!(err, SkinError::Io { .. }));
    }

    #[test]
    fn test_generate_auto_without_photo_falls_back() {
        let dir = tempdir().unwrap();
        let out_auto = dir.path().join("auto.png");
        let out_classic = dir.path().join("classic.png");

        let mut args = generate_args(out_auto.clone());
        args.palette = Some("auto".to_string());
        args.seed = Some(5);
        run(args).unwrap();

        let mut args = generate_args(out_classic.clone());
        args.palette = Some("classic".to_string());
        args.seed = Some(5);
        run(args).unwrap();

        assert_eq!(fs::read(&out_auto).unwrap(), fs::read(&out_classic).unwrap());
    }

    #[test]
    fn test_generate_from_photo_composites_face() {
        let dir = tempdir().unwrap();
        let photo_path = dir.path().join("photo.png");

        // A flat grey photo: palette falls back to classic, but the face
        // tile (solid grey) still lands on the head front
        let photo = image::RgbaImage::from_pixel(32, 32, image::Rgba([128, 128, 128, 255]));
        photo.save(&photo_path).unwrap();

        let out_face = dir.path().join("face.png");
        let mut args = generate_args(out_face.clone());
        args.photo = Some(photo_path.clone());
        args.seed = Some(3);
        run(args).unwrap();

        let out_plain = dir.path().join("plain.png");
        let mut args = generate_args(out_plain.clone());
        args.photo = Some(photo_path);
        args.skip_face = true;
        args.seed = Some(3);
        run(args).unwrap();

        let with_face = image::open(&out_face).unwrap().to_rgba8();
        let plain = image::open(&out_plain).unwrap().to_rgba8();

        // Head front is (8,8)-(16,16): grey where the plain render has skin
        assert_eq!(with_face.get_pixel(12, 12).0, [128, 128, 128, 255]);
        assert_ne!(plain.get_pixel(12, 12).0, [128, 128, 128, 255]);
        // Outside the head front the two renders agree
        assert_eq!(with_face.get_pixel(40, 0), plain.get_pixel(40, 0));
    }

    #[test]
    fn test_generate_with_palette_file() {
        let dir = tempdir().unwrap();
        let palette_path = dir.path().join("extra.yaml");
        fs::write(
            &palette_path,
            "mono:\n  skin: \"#808080\"\n  hair: \"#202020\"\n  shirt: \"#606060\"\n  pants: \"#404040\"\n  accent: \"#e0e0e0\"\n",
        )
        .unwrap();

        let out = dir.path().join("mono.png");
        let mut args = generate_args(out.clone());
        args.palette = Some("mono".to_string());
        args.palettes = Some(palette_path);
        args.seed = Some(11);
        run(args).unwrap();

        let img = image::open(&out).unwrap().to_rgba8();
        // Head front base colour is the custom skin grey
        assert_eq!(img.get_pixel(12, 12).0, [0x80, 0x80, 0x80, 255]);
    }

    #[test]
    fn test_generate_scaled_output() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("big.png");
        let mut args = generate_args(out.clone());
        args.seed = Some(2);
        args.scale = 4;
        run(args).unwrap();

        let img = image::open(&out).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (256, 256));
    }
}
