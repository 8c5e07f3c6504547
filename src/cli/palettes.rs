//! List available palette presets.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::{builtin_palettes, load_palette_file};

/// List palette presets and their colours
#[derive(Args, Debug)]
pub struct PalettesArgs {
    /// Extra palette presets (YAML file)
    #[arg(long)]
    pub palettes: Option<PathBuf>,
}

pub fn run(args: PalettesArgs) -> Result<()> {
    let printer = Printer::new();

    let mut presets = builtin_palettes();
    if let Some(path) = &args.palettes {
        presets.extend(load_palette_file(path)?);
    }

    printer.info("Palettes", &format!("{} available (plus 'auto')", presets.len()));

    // Machine-readable listing on stdout
    for (name, palette) in &presets {
        println!(
            "{}: skin={} hair={} shirt={} pants={} accent={}",
            name, palette.skin, palette.hair, palette.shirt, palette.pants, palette.accent
        );
    }

    Ok(())
}
