//! Parsers for sequence input.
//!
//! - **Uploaded FASTA text**: lenient `>`-delimited splitting into records
//! - **FASTA files**: plain or gzip/bgzip compressed, for the CLI
//! - **Reference FASTA files**: strict parsing with noodles for custom reference catalogs
//!
//! ## Example
//!
//! ```rust
//! use pathoscan::parsing::fasta::parse_fasta_text;
//!
//! let records = parse_fasta_text(">sample1\nACGT\n>sample2\nACTT\n");
//! assert_eq!(records.len(), 2);
//! ```

use thiserror::Error;

pub mod fasta;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}
