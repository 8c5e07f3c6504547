//! The five-colour skin palette, builtin presets, and palette-file loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SkinError};

use super::Colour;

/// The five base colours that drive all procedural painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinPalette {
    pub skin: Colour,
    pub hair: Colour,
    pub shirt: Colour,
    pub pants: Colour,
    pub accent: Colour,
}

impl SkinPalette {
    /// Lightened variant used for sunlit faces (tops, right sides).
    ///
    /// The per-field deltas are part of the visual contract; shifting them
    /// changes every generated skin.
    pub fn lighter(&self) -> Self {
        Self {
            skin: self.skin.adjust(16),
            hair: self.hair.adjust(8),
            shirt: self.shirt.adjust(12),
            pants: self.pants.adjust(12),
            accent: self.accent.adjust(12),
        }
    }

    /// Darkened variant used for shaded faces (bottoms, left sides, backs).
    pub fn darker(&self) -> Self {
        Self {
            skin: self.skin.adjust(-12),
            hair: self.hair.adjust(-15),
            shirt: self.shirt.adjust(-16),
            pants: self.pants.adjust(-16),
            accent: self.accent.adjust(-18),
        }
    }

    /// Look up a builtin preset by name.
    pub fn builtin(name: &str) -> Option<Self> {
        builtin_palettes().remove(name)
    }
}

/// The builtin preset table.
///
/// Returns a fresh map on every call so callers can layer user palettes on
/// top without touching shared state.
pub fn builtin_palettes() -> BTreeMap<String, SkinPalette> {
    let mut palettes = BTreeMap::new();
    palettes.insert(
        "classic".to_string(),
        SkinPalette {
            skin: Colour::rgb(216, 181, 154),
            hair: Colour::rgb(84, 57, 45),
            shirt: Colour::rgb(52, 126, 197),
            pants: Colour::rgb(57, 82, 111),
            accent: Colour::rgb(236, 190, 91),
        },
    );
    palettes.insert(
        "forest".to_string(),
        SkinPalette {
            skin: Colour::rgb(196, 170, 140),
            hair: Colour::rgb(66, 51, 40),
            shirt: Colour::rgb(58, 112, 80),
            pants: Colour::rgb(66, 81, 71),
            accent: Colour::rgb(198, 223, 170),
        },
    );
    palettes.insert(
        "tech".to_string(),
        SkinPalette {
            skin: Colour::rgb(202, 206, 214),
            hair: Colour::rgb(70, 92, 118),
            shirt: Colour::rgb(74, 90, 140),
            pants: Colour::rgb(54, 67, 94),
            accent: Colour::rgb(108, 221, 255),
        },
    );
    palettes
}

/// One palette entry in a user palette file (hex colour strings).
#[derive(Debug, Deserialize)]
struct PaletteDef {
    skin: String,
    hair: String,
    shirt: String,
    pants: String,
    accent: String,
}

impl PaletteDef {
    fn resolve(&self, name: &str) -> Result<SkinPalette> {
        let parse = |field: &str, value: &str| {
            Colour::from_hex(value).map_err(|_| SkinError::Parse {
                message: format!("Palette '{}': invalid {} colour '{}'", name, field, value),
                help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
            })
        };
        Ok(SkinPalette {
            skin: parse("skin", &self.skin)?,
            hair: parse("hair", &self.hair)?,
            shirt: parse("shirt", &self.shirt)?,
            pants: parse("pants", &self.pants)?,
            accent: parse("accent", &self.accent)?,
        })
    }
}

/// Load named palettes from a YAML file.
///
/// The file is a mapping of palette name to the five colour fields:
///
/// ```yaml
/// dusk:
///   skin: "#c9a188"
///   hair: "#2e2226"
///   shirt: "#7a4f9e"
///   pants: "#3c3550"
///   accent: "#f2c14e"
/// ```
pub fn load_palette_file(path: &Path) -> Result<BTreeMap<String, SkinPalette>> {
    let source = fs::read_to_string(path).map_err(|e| SkinError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read palette file: {}", e),
    })?;

    let defs: BTreeMap<String, PaletteDef> =
        serde_yaml::from_str(&source).map_err(|e| SkinError::Parse {
            message: format!("Invalid palette file {}: {}", path.display(), e),
            help: Some("Expected a mapping of name -> {skin, hair, shirt, pants, accent}".to_string()),
        })?;

    let mut palettes = BTreeMap::new();
    for (name, def) in defs {
        let palette = def.resolve(&name)?;
        palettes.insert(name, palette);
    }
    Ok(palettes)
}
