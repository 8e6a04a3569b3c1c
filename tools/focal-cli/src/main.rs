//! Focal CLI — Command-line interface for focal point estimation.
//!
//! Usage:
//!   focal estimate <IMAGE>            Print the estimated focal point
//!   focal overlay <IMAGE> -o <PNG>    Render the block overlay used for debugging
//!   focal config                      Show (or save) the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use focal_common::AppConfig;

mod commands;
mod decode;
mod overlay;

#[derive(Parser)]
#[command(
    name = "focal",
    about = "Estimate the most visually interesting point of an image",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to $XDG_CONFIG_HOME/focal/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the focal point of an image
    Estimate {
        /// Path to the image (PNG, JPEG, ...)
        image: PathBuf,

        /// Block size in pixels (overrides config)
        #[arg(short, long)]
        block_size: Option<u32>,

        /// Edge kernel preset: laplacian|laplacian4|identity (overrides config)
        #[arg(short, long)]
        kernel: Option<String>,

        /// Print the full report (point, winner, all blocks) as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render edge map and original side by side with block overlays
    Overlay {
        /// Path to the image (PNG, JPEG, ...)
        image: PathBuf,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Block size in pixels (overrides config)
        #[arg(short, long)]
        block_size: Option<u32>,

        /// Edge kernel preset: laplacian|laplacian4|identity (overrides config)
        #[arg(short, long)]
        kernel: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    focal_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Estimate {
            image,
            block_size,
            kernel,
            json,
        } => commands::estimate::run(&config, image, block_size, kernel, json),
        Commands::Overlay {
            image,
            output,
            block_size,
            kernel,
        } => commands::overlay::run(&config, image, output, block_size, kernel),
        Commands::Config { save } => commands::config::run(&config, cli.config, save),
    }
}
