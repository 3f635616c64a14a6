use serde::{Deserialize, Serialize};

use crate::core::mutation::Mutation;

/// Identifier and length of one scanned sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceSummary {
    pub id: String,
    pub length: usize,
}

/// Mutations found in one scanned sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceMutations {
    pub id: String,
    pub mutations: Vec<Mutation>,
}

/// Totals across all scanned sequences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub sequences: usize,
    pub total_mutations: usize,
}

/// Result of scanning a set of records against one reference.
///
/// This is the response body of `POST /api/upload-fasta` and the JSON output of
/// `pathoscan scan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Upload filename, echoed back; `null` when not given
    pub filename: Option<String>,

    /// Pathogen key as requested (or the default)
    pub pathogen: String,

    /// Name of the catalog reference actually compared against
    pub reference: String,

    pub sequences: Vec<SequenceSummary>,

    pub mutations: Vec<SequenceMutations>,

    pub summary: ScanSummary,
}

impl ScanReport {
    #[must_use]
    pub fn with_filename(mut self, filename: Option<String>) -> Self {
        self.filename = filename;
        self
    }

    /// True if the requested pathogen was not in the catalog
    pub fn used_fallback(&self) -> bool {
        self.pathogen != self.reference
    }

    /// Iterate (sequence id, mutation) pairs in report order
    pub fn iter_mutations(&self) -> impl Iterator<Item = (&str, &Mutation)> {
        self.mutations
            .iter()
            .flat_map(|entry| entry.mutations.iter().map(move |m| (entry.id.as_str(), m)))
    }
}
