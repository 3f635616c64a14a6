//! Mutation scanning against a pathogen reference.
//!
//! - [`ScanEngine`]: Parses uploads and scans each record against the catalog
//! - [`compare_sequences`]: Positional diff of one sample against one reference
//! - [`ScanReport`]: Per-sequence lengths, mutations, and totals
//!
//! ## Comparison
//!
//! The comparison is positional, not an alignment. Position `i` of the sample
//! is compared with position `i` of the reference up to the shorter length, and
//! any length difference becomes a single trailing INS or DEL.
//!
//! ## Example
//!
//! ```rust
//! use pathoscan::{ReferenceCatalog, ScanEngine};
//!
//! let catalog = ReferenceCatalog::load_embedded().unwrap();
//! let engine = ScanEngine::new(&catalog);
//!
//! let report = engine.scan_text(">sample1\nATTAAAGGTT\n", Some("SARS-CoV-2"));
//! println!("{} mutations", report.summary.total_mutations);
//! ```

pub mod compare;
pub mod engine;
pub mod report;

pub use compare::compare_sequences;
pub use engine::ScanEngine;
pub use report::{ScanReport, ScanSummary, SequenceMutations, SequenceSummary};
