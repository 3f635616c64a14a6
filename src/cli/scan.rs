use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_catalog, OutputFormat};
use crate::parsing::fasta::read_fasta_file;
use crate::scanning::engine::ScanEngine;
use crate::scanning::report::ScanReport;

#[derive(Args)]
pub struct ScanArgs {
    /// FASTA file to scan (plain, .gz or .bgz)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Pathogen reference to compare against (defaults to SARS-CoV-2)
    #[arg(short, long)]
    pub pathogen: Option<String>,

    /// Custom reference catalog (JSON, or FASTA with one record per pathogen)
    #[arg(long)]
    pub references: Option<PathBuf>,
}

pub fn run(args: ScanArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.references.as_ref())?;
    let records = read_fasta_file(&args.input)?;

    if verbose {
        eprintln!(
            "Read {} sequences from {}",
            records.len(),
            args.input.display()
        );
    }

    let filename = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().to_string());

    let engine = ScanEngine::new(&catalog);
    let report = engine
        .scan_records(&records, args.pathogen.as_deref())
        .with_filename(filename);

    if report.used_fallback() {
        eprintln!(
            "Warning: pathogen '{}' not in catalog, using '{}'",
            report.pathogen, report.reference
        );
    }

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &ScanReport) {
    println!("Scan Results");
    println!("{}", "=".repeat(60));

    if let Some(filename) = &report.filename {
        println!("\nFile:      {filename}");
    }
    println!("Pathogen:  {}", report.pathogen);
    println!("Reference: {}", report.reference);
    println!(
        "\n{} sequences, {} mutations",
        report.summary.sequences, report.summary.total_mutations
    );

    for (summary, entry) in report.sequences.iter().zip(&report.mutations) {
        println!(
            "\n{} ({} bp): {} mutations",
            summary.id,
            summary.length,
            entry.mutations.len()
        );
        for m in &entry.mutations {
            println!(
                "  {:>8}  {:<4} {} -> {}",
                m.position, m.kind, m.reference_base, m.alternate_base
            );
        }
    }
}

fn print_tsv_report(report: &ScanReport) {
    println!("id\tpos\tref\talt\ttype");
    for (id, m) in report.iter_mutations() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            id, m.position, m.reference_base, m.alternate_base, m.kind
        );
    }
}
