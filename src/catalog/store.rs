use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::reference::PathogenReference;
use crate::parsing::fasta::{is_fasta_file, read_reference_fasta};
use crate::parsing::ParseError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to read reference FASTA: {0}")]
    FastaError(#[from] ParseError),

    #[error("Reference catalog is empty")]
    Empty,

    #[error("Reference '{0}' has an empty sequence")]
    EmptySequence(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Pathogen requested when an upload does not name one
pub const DEFAULT_PATHOGEN: &str = "SARS-CoV-2";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub references: Vec<PathogenReference>,
}

/// The pathogen reference table.
///
/// Read-only once loaded and never empty, so it can always resolve a reference:
/// unknown pathogen keys fall back to the first entry.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    /// All references, in load order
    references: Vec<PathogenReference>,

    /// Index: pathogen name -> index in references vec
    name_to_index: HashMap<String, usize>,
}

impl ReferenceCatalog {
    /// Build a catalog from references, keeping the first entry for duplicate names.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if no references are given, or
    /// `CatalogError::EmptySequence` if any reference has no bases.
    pub fn from_references(
        references: impl IntoIterator<Item = PathogenReference>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            references: Vec::new(),
            name_to_index: HashMap::new(),
        };

        for reference in references {
            if reference.sequence.is_empty() {
                return Err(CatalogError::EmptySequence(reference.name));
            }
            catalog.add_reference(reference);
        }

        if catalog.references.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(catalog)
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is invalid (checked by build.rs).
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time via build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../references/pathogens.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file, or from a FASTA file whose record names are
    /// pathogen keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or yields no references.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        if is_fasta_file(path) {
            let references = read_reference_fasta(path)?;
            tracing::debug!(
                "Loaded {} references from FASTA {}",
                references.len(),
                path.display()
            );
            return Self::from_references(references);
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or contains no usable references.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        Self::from_references(data.references.into_iter().map(|mut reference| {
            reference.normalize();
            reference
        }))
    }

    /// Add a reference; returns false if the name is already taken
    fn add_reference(&mut self, reference: PathogenReference) -> bool {
        if self.name_to_index.contains_key(&reference.name) {
            tracing::warn!(
                "Duplicate reference '{}' ignored; keeping the first entry",
                reference.name
            );
            return false;
        }

        self.name_to_index
            .insert(reference.name.clone(), self.references.len());
        self.references.push(reference);
        true
    }

    /// Get a reference by pathogen name
    pub fn get(&self, name: &str) -> Option<&PathogenReference> {
        self.name_to_index.get(name).map(|&idx| &self.references[idx])
    }

    /// The first reference in load order, used as the fallback
    pub fn first(&self) -> &PathogenReference {
        // Non-empty is enforced by from_references
        &self.references[0]
    }

    /// Resolve a pathogen name to a reference, falling back to the first entry
    pub fn resolve(&self, name: &str) -> &PathogenReference {
        self.get(name).unwrap_or_else(|| {
            tracing::debug!(
                "Unknown pathogen '{}', falling back to '{}'",
                name,
                self.first().name
            );
            self.first()
        })
    }

    /// Iterate references in load order
    pub fn iter(&self) -> impl Iterator<Item = &PathogenReference> {
        self.references.iter()
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            references: self.references.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of references in catalog
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Always false once constructed; provided alongside `len`
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}
