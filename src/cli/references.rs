use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::catalog::store::ReferenceCatalog;
use crate::cli::{load_catalog, OutputFormat};

/// Sequence preview width in `references show`
const PREVIEW_WIDTH: usize = 60;

#[derive(Args)]
pub struct ReferencesArgs {
    #[command(subcommand)]
    pub command: ReferencesCommands,
}

#[derive(Subcommand)]
pub enum ReferencesCommands {
    /// List all references in the catalog
    List {
        /// Path to custom catalog file (JSON or FASTA)
        #[arg(long)]
        references: Option<PathBuf>,
    },

    /// Show details of a specific reference
    Show {
        /// Pathogen name
        #[arg(required = true)]
        name: String,

        /// Path to custom catalog file (JSON or FASTA)
        #[arg(long)]
        references: Option<PathBuf>,
    },

    /// Export the catalog to a JSON file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        references: Option<PathBuf>,
    },
}

pub fn run(args: ReferencesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        ReferencesCommands::List { references } => {
            let catalog = load_catalog(references.as_ref())?;
            if verbose {
                eprintln!("Loaded catalog with {} references", catalog.len());
            }
            run_list(&catalog, format)
        }
        ReferencesCommands::Show { name, references } => {
            let catalog = load_catalog(references.as_ref())?;
            run_show(&catalog, &name, format)
        }
        ReferencesCommands::Export { output, references } => {
            let catalog = load_catalog(references.as_ref())?;
            run_export(&catalog, &output)
        }
    }
}

fn run_list(catalog: &ReferenceCatalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let name_width = catalog
                .iter()
                .map(|r| r.name.len())
                .max()
                .unwrap_or(4)
                .max(4);

            println!("Pathogen References ({} references)\n", catalog.len());
            println!(
                "{:<name_w$} {:>8}  MD5",
                "Name",
                "Length",
                name_w = name_width
            );
            println!("{}", "-".repeat(name_width + 8 + 2 + 32 + 1));

            for r in catalog.iter() {
                println!(
                    "{:<name_w$} {:>8}  {}",
                    r.name,
                    r.length(),
                    r.md5(),
                    name_w = name_width
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = catalog
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "name": r.name,
                        "length": r.length(),
                        "md5": r.md5(),
                        "description": r.description,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tlength\tmd5\tdescription");
            for r in catalog.iter() {
                println!(
                    "{}\t{}\t{}\t{}",
                    r.name,
                    r.length(),
                    r.md5(),
                    r.description.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}

fn run_show(catalog: &ReferenceCatalog, name: &str, format: OutputFormat) -> anyhow::Result<()> {
    let reference = catalog
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Reference '{}' not found in catalog", name))?;

    match format {
        OutputFormat::Text => {
            println!("Reference: {}\n", reference.name);
            println!("Length: {}", reference.length());
            println!("MD5:    {}", reference.md5());
            if let Some(desc) = &reference.description {
                println!("\nDescription: {desc}");
            }

            println!("\nSequence:");
            let bases: Vec<char> = reference.sequence.chars().collect();
            for chunk in bases.chunks(PREVIEW_WIDTH) {
                println!("  {}", chunk.iter().collect::<String>());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(reference)?);
        }
        OutputFormat::Tsv => {
            println!("name\tlength\tmd5\tsequence");
            println!(
                "{}\t{}\t{}\t{}",
                reference.name,
                reference.length(),
                reference.md5(),
                reference.sequence
            );
        }
    }

    Ok(())
}

fn run_export(catalog: &ReferenceCatalog, output: &Path) -> anyhow::Result<()> {
    let json = catalog.to_json()?;
    std::fs::write(output, json)?;

    println!(
        "Exported {} references to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}
