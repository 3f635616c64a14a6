//! FASTA parsing.
//!
//! Two entry points with different contracts:
//!
//! - [`parse_fasta_text`] is the lenient splitter used for uploads. It never fails;
//!   anything it cannot turn into a record is dropped.
//! - [`read_reference_fasta`] reads a reference FASTA file with noodles and is
//!   strict: malformed input is an error.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::core::record::{normalize_sequence, Record};
use crate::core::reference::PathogenReference;
use crate::parsing::ParseError;

/// Record delimiter in FASTA text
pub const RECORD_DELIMITER: char = '>';

/// Split FASTA text into records.
///
/// Each `>`-delimited segment is trimmed; empty segments are skipped. The first
/// whitespace-delimited token of the segment's first line is the identifier and
/// the remaining lines, with whitespace removed and upper-cased, form the sequence.
/// Segments with an empty identifier or empty sequence are dropped silently.
///
/// # Examples
///
/// ```
/// use pathoscan::parsing::fasta::parse_fasta_text;
///
/// let records = parse_fasta_text(">s1 first\nacgt\nAC\n>s2\nGG\n");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].id, "s1");
/// assert_eq!(records[0].sequence, "ACGTAC");
/// ```
#[must_use]
pub fn parse_fasta_text(text: &str) -> Vec<Record> {
    text.split(RECORD_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(parse_segment)
        .collect()
}

fn parse_segment(segment: &str) -> Option<Record> {
    let mut lines = segment.lines();
    let id = lines.next()?.split_whitespace().next()?;

    let sequence: String = lines.map(normalize_sequence).collect();
    if sequence.is_empty() {
        tracing::debug!("Dropping FASTA record '{}' with empty sequence", id);
        return None;
    }

    Some(Record::new(id, sequence))
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if [".fa", ".fasta", ".fna"].iter().any(|ext| {
        path_str.ends_with(&format!("{ext}.gz")) || path_str.ends_with(&format!("{ext}.bgz"))
    }) {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a file for buffered reading, transparently decompressing gzip/bgzip
fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read a FASTA file from disk and split it into records.
///
/// Invalid UTF-8 is replaced rather than rejected, matching the leniency of
/// [`parse_fasta_text`].
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or decompressed.
pub fn read_fasta_file(path: &Path) -> Result<Vec<Record>, ParseError> {
    let mut bytes = Vec::new();
    open_reader(path)?.read_to_end(&mut bytes)?;

    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_fasta_text(&text))
}

/// Read a reference FASTA file where each record name is a pathogen key.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, or `ParseError::InvalidFormat` if no sequences are found.
pub fn read_reference_fasta(path: &Path) -> Result<Vec<PathogenReference>, ParseError> {
    let mut reader = fasta::io::Reader::new(open_reader(path)?);
    read_references(&mut reader)
}

/// Parse from a noodles FASTA reader
fn read_references<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<PathogenReference>, ParseError> {
    let mut references = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = String::from_utf8_lossy(record.sequence().as_ref());

        let mut reference = PathogenReference::new(name, &sequence);
        if let Some(description) = record.description() {
            reference = reference.with_description(String::from_utf8_lossy(description));
        }
        references.push(reference);
    }

    if references.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(references)
}
