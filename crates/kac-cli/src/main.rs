//! Kac CLI - render physically modelled drum hits
//!
//! This binary renders JSON drum recipes to WAV files and prints the nodal
//! patterns of membrane modes.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kac_cli::commands;
use kac_physics::ModeIndex;
use tracing_subscriber::EnvFilter;

/// Kac - struck-membrane synthesis
#[derive(Parser)]
#[command(name = "kac")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a recipe to a WAV file
    Render {
        /// Path to the recipe file (JSON)
        #[arg(short, long)]
        recipe: String,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        /// Number of variants with seeded random strike points (variant 0 is the recipe itself)
        #[arg(long, default_value_t = 1)]
        variants: u32,

        /// Base seed for variant strike points
        #[arg(long, default_value_t = 0)]
        seed: u32,
    },

    /// Print the nodal-line pattern of one mode of the recipe's shape
    Chladni {
        /// Path to the recipe file (JSON)
        #[arg(short, long)]
        recipe: String,

        /// Zero-based mode index as I,J
        #[arg(short, long, value_parser = commands::chladni::parse_mode)]
        mode: ModeIndex,

        /// Cells across the longest extent of the shape
        #[arg(long, default_value_t = 48)]
        resolution: usize,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            recipe,
            output,
            variants,
            seed,
        } => commands::render::run(&recipe, &output, variants, seed),
        Commands::Chladni {
            recipe,
            mode,
            resolution,
        } => commands::chladni::run(&recipe, mode, resolution),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "kac",
            "render",
            "--recipe",
            "snare.json",
            "--output",
            "snare.wav",
            "--variants",
            "8",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                recipe,
                output,
                variants,
                seed,
            } => {
                assert_eq!(recipe, "snare.json");
                assert_eq!(output, "snare.wav");
                assert_eq!(variants, 8);
                assert_eq!(seed, 0);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_chladni() {
        let cli = Cli::try_parse_from(["kac", "chladni", "-r", "tom.json", "-m", "2,1"]).unwrap();
        match cli.command {
            Commands::Chladni {
                recipe,
                mode,
                resolution,
            } => {
                assert_eq!(recipe, "tom.json");
                assert_eq!(mode, ModeIndex::new(2, 1));
                assert_eq!(resolution, 48);
            }
            _ => panic!("expected chladni command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_mode() {
        assert!(Cli::try_parse_from(["kac", "chladni", "-r", "tom.json", "-m", "2"]).is_err());
    }
}
