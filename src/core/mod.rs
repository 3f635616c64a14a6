//! Core data types for sequence scanning.
//!
//! - [`Record`]: An (identifier, sequence) pair parsed from uploaded FASTA text
//! - [`Mutation`], [`MutationKind`]: A single difference against a reference
//! - [`PathogenReference`]: A named reference sequence from the catalog
//!
//! All sequences are stored upper-cased with whitespace removed, so comparisons
//! are case-insensitive with respect to the original input.

pub mod mutation;
pub mod record;
pub mod reference;

pub use mutation::{Mutation, MutationKind};
pub use record::Record;
pub use reference::PathogenReference;
