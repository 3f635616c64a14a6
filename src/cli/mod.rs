//! Command-line interface for pathoscan.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **scan**: Scan a local FASTA file for mutations against a pathogen reference
//! - **references**: List, show, or export the pathogen reference catalog
//! - **serve**: Start the HTTP API
//!
//! ## Usage
//!
//! ```text
//! # Scan samples against the default reference (SARS-CoV-2)
//! pathoscan scan samples.fasta
//!
//! # Pick a pathogen and emit JSON
//! pathoscan scan samples.fa.gz --pathogen Influenza --format json
//!
//! # Use a custom catalog
//! pathoscan references list --references pathogens.fa
//!
//! # Start the API server
//! pathoscan serve --port 8080
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::store::ReferenceCatalog;

pub mod references;
pub mod scan;

#[derive(Parser)]
#[command(name = "pathoscan")]
#[command(version)]
#[command(about = "Scan FASTA sequences for mutations against pathogen references")]
#[command(
    long_about = "pathoscan compares uploaded FASTA sequences position by position against a reference sequence for the selected pathogen.\n\nEach difference is reported as an SNP; a length difference is reported once as a trailing insertion or deletion."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a FASTA file for mutations
    Scan(scan::ScanArgs),

    /// Inspect the pathogen reference catalog
    References(references::ReferencesArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    /// Custom reference catalog (JSON, or FASTA with one record per pathogen)
    #[arg(long)]
    pub references: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Maximum request body size in megabytes
    #[arg(long, default_value = "20")]
    pub max_body_mb: usize,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a custom catalog if a path is given, else the embedded one
pub(crate) fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<ReferenceCatalog> {
    let catalog = match path {
        Some(path) => ReferenceCatalog::load_from_file(path)?,
        None => ReferenceCatalog::load_embedded()?,
    };
    Ok(catalog)
}
