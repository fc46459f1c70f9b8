//! # palette CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use palette_cli::contrast::{run_contrast, ContrastArgs};
use palette_cli::palettes::{
    run_create, run_delete, run_list, run_show, run_update, CreateArgs, DeleteArgs, ListArgs,
    ShowArgs, UpdateArgs,
};
use palette_client::{PaletteCatalog, PaletteClient, PaletteClientConfig};

/// Palette catalog CLI
///
/// Browse, tag, edit and delete color palettes stored by the palette API.
#[derive(Parser, Debug)]
#[command(name = "palette", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Palette API root. Overrides `PALETTE_API_URL`.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List palettes, optionally filtered by tag.
    List(ListArgs),

    /// Show one palette.
    Show(ShowArgs),

    /// Create a palette.
    Create(CreateArgs),

    /// Update a palette.
    Update(UpdateArgs),

    /// Delete a palette.
    Delete(DeleteArgs),

    /// Resolve the text color for a background.
    Contrast(ContrastArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<u8> {
    match &cli.command {
        Commands::List(args) => run_list(&mut catalog(&cli)?, args).await,
        Commands::Show(args) => run_show(&catalog(&cli)?, args).await,
        Commands::Create(args) => run_create(&mut catalog(&cli)?, args).await,
        Commands::Update(args) => run_update(&mut catalog(&cli)?, args).await,
        Commands::Delete(args) => run_delete(&mut catalog(&cli)?, args).await,
        Commands::Contrast(args) => run_contrast(args),
    }
}

/// Build the catalog from the environment and `--api-url`.
fn catalog(cli: &Cli) -> Result<PaletteCatalog> {
    let mut config = PaletteClientConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url)?;
    }
    tracing::debug!(base_url = %config.base_url, "palette API");
    Ok(PaletteCatalog::new(PaletteClient::new(config)?))
}
