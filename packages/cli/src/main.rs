#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the incident-report extraction tool.

use std::path::PathBuf;

use blotter_cli::{extract_documents, fetch_documents, write_table};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blotter", about = "Incident report extraction tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract incident records from local report PDFs into one CSV
    Extract {
        /// Report PDFs to process, in order
        files: Vec<PathBuf>,
        /// Path of the combined CSV output
        #[arg(long, default_value = "incidents.csv")]
        output: PathBuf,
    },
    /// Fetch report PDFs from URLs and extract their records into one CSV
    Fetch {
        /// Report URLs to process, in order
        urls: Vec<String>,
        /// Directory the downloaded documents are saved into
        #[arg(long, default_value = "resources")]
        resource_dir: PathBuf,
        /// Path of the combined CSV output
        #[arg(long, default_value = "incidents.csv")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { files, output } => {
            if files.is_empty() {
                return Err("no files given. Provide at least one report PDF.".into());
            }
            let table = extract_documents(&files)?;
            write_table(&table, &output)?;
        }
        Commands::Fetch {
            urls,
            resource_dir,
            output,
        } => {
            if urls.is_empty() {
                return Err("no URLs given. Provide at least one report URL.".into());
            }
            std::fs::create_dir_all(&resource_dir)?;
            let table = fetch_documents(&urls, &resource_dir).await?;
            write_table(&table, &output)?;
        }
    }

    Ok(())
}
