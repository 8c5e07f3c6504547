pub mod completions;
pub mod generate;
pub mod palettes;

use clap::{Parser, Subcommand};

/// skinforge - 64x64 skin texture generator
#[derive(Parser, Debug)]
#[command(name = "skinforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a skin from a palette preset or a photo
    Generate(generate::GenerateArgs),

    /// List palette presets and their colours
    Palettes(palettes::PalettesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
