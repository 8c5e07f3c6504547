use clap::Parser;
use miette::Result;
use skinforge::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => skinforge::cli::generate::run(args)?,
        Commands::Palettes(args) => skinforge::cli::palettes::run(args)?,
        Commands::Completions(args) => skinforge::cli::completions::run(args)?,
    }

    Ok(())
}
