//! # pathoscan
//!
//! A library and server for scanning pathogen sequences for mutations.
//!
//! Sequences uploaded as FASTA text are compared against a reference sequence
//! selected by pathogen name (e.g. `SARS-CoV-2`, `Influenza`, `MRSA`). Each
//! differing position is reported as an SNP, and a length difference is
//! reported once as a trailing insertion or deletion.
//!
//! ## Features
//!
//! - **Lenient FASTA parsing**: Malformed records are dropped rather than rejected
//! - **Positional comparison**: Fast, allocation-light per-base diff
//! - **Embedded reference catalog**: Custom catalogs loadable from JSON or FASTA
//! - **HTTP API**: `POST /api/upload-fasta` for browser uploads
//!
//! ## Example
//!
//! ```rust
//! use pathoscan::{ReferenceCatalog, ScanEngine};
//!
//! // Load the embedded catalog of pathogen references
//! let catalog = ReferenceCatalog::load_embedded().unwrap();
//!
//! // Scan two samples against SARS-CoV-2
//! let engine = ScanEngine::new(&catalog);
//! let report = engine.scan_text(">s1\nATTAAAGGTT\n>s2\nATTTAAGG\n", Some("SARS-CoV-2"));
//!
//! for entry in &report.mutations {
//!     println!("{}: {} mutations", entry.id, entry.mutations.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Pathogen reference catalog
//! - [`core`]: Core data types for records, mutations, and references
//! - [`parsing`]: FASTA parsers
//! - [`scanning`]: Sequence comparison and scan reports
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: HTTP API

pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod scanning;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::store::{ReferenceCatalog, DEFAULT_PATHOGEN};
pub use core::mutation::{Mutation, MutationKind};
pub use core::record::Record;
pub use core::reference::PathogenReference;
pub use scanning::engine::ScanEngine;
pub use scanning::report::ScanReport;
