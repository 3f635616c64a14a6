use serde::{Deserialize, Serialize};

use crate::core::record::normalize_sequence;

/// A pathogen reference sequence in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathogenReference {
    /// Pathogen key used to select this reference (e.g. "SARS-CoV-2")
    pub name: String,

    /// Reference bases, upper-cased with whitespace removed on load
    pub sequence: String,

    /// Description/notes about this reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PathogenReference {
    /// Create a reference, normalizing the sequence
    pub fn new(name: impl Into<String>, sequence: &str) -> Self {
        Self {
            name: name.into(),
            sequence: normalize_sequence(sequence),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Re-normalize the sequence after deserialization
    pub fn normalize(&mut self) {
        self.sequence = normalize_sequence(&self.sequence);
    }

    /// Sequence length in characters
    #[must_use]
    pub fn length(&self) -> usize {
        self.sequence.chars().count()
    }

    /// MD5 of the upper-cased sequence (standard convention for sequence checksums)
    #[must_use]
    pub fn md5(&self) -> String {
        format!("{:x}", md5::compute(self.sequence.as_bytes()))
    }
}
