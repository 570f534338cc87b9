//! # cdshelf CLI entry point
//!
//! Parses command-line arguments and dispatches to the API client.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cdshelf_cli::client::ApiClient;
use cdshelf_cli::render;
use cdshelf_core::CdDraft;

/// cdshelf — terminal client for the CD catalog API.
#[derive(Parser, Debug)]
#[command(name = "cdshelf", version, about, long_about = None)]
struct Cli {
    /// Base URL of the cdshelf API.
    #[arg(long, global = true, default_value = "http://localhost:3000")]
    url: String,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all records.
    List,

    /// Add a record.
    Add {
        title: String,
        artist: String,
        year: i32,
    },

    /// Remove a record by id.
    Rm { id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = ApiClient::new(&cli.url);

    match cli.command {
        Commands::List => {
            println!("{}", render::catalog(&client.list().await?));
        }
        Commands::Add {
            title,
            artist,
            year,
        } => {
            let created = client.add(&CdDraft::new(title, artist, year)).await?;
            tracing::info!(id = created.id, "record created");
            // Re-fetch rather than patching local state; the list is the view.
            println!("{}", render::catalog(&client.list().await?));
        }
        Commands::Rm { id } => {
            client.remove(&id).await?;
            tracing::info!(%id, "record deleted");
            println!("{}", render::catalog(&client.list().await?));
        }
    }

    Ok(())
}
