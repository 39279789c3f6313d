//! Glyphsmith CLI
//!
//! Generates React components, an index and a metadata table from a
//! directory of SVG icons.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Glyphsmith - SVG icons to React components
#[derive(Parser)]
#[command(name = "glyphsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file or project directory
    #[arg(short, long, default_value = "glyphsmith.yaml", env = "GLYPHSMITH_CONFIG")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default glyphsmith.yaml and the SVG input directory
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Generate components, index and metadata
    Build {
        /// Override the SVG input directory
        #[arg(short, long)]
        input: Option<String>,

        /// Override the component output directory
        #[arg(short, long)]
        output: Option<String>,

        /// Skip assets that fail to transform instead of aborting
        #[arg(long)]
        skip_invalid: bool,
    },

    /// List discovered assets with their component names and keys
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fail if generated files are out of date
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Init { path } => {
            commands::init::run(&path).await?;
        }
        Commands::Build {
            input,
            output,
            skip_invalid,
        } => {
            commands::build::run(
                &cli.config,
                input.as_deref(),
                output.as_deref(),
                skip_invalid,
            )
            .await?;
        }
        Commands::List { json } => {
            commands::list::run(&cli.config, json).await?;
        }
        Commands::Check => {
            commands::check::run(&cli.config).await?;
        }
    }

    Ok(())
}
