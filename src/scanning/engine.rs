use crate::catalog::store::{ReferenceCatalog, DEFAULT_PATHOGEN};
use crate::core::record::Record;
use crate::parsing::fasta::parse_fasta_text;
use crate::scanning::compare::compare_sequences;
use crate::scanning::report::{ScanReport, ScanSummary, SequenceMutations, SequenceSummary};

/// Scans records against references from a catalog
pub struct ScanEngine<'a> {
    catalog: &'a ReferenceCatalog,
}

impl<'a> ScanEngine<'a> {
    pub fn new(catalog: &'a ReferenceCatalog) -> Self {
        Self { catalog }
    }

    /// Parse FASTA text and scan every record.
    ///
    /// `pathogen` defaults to [`DEFAULT_PATHOGEN`]; unknown names fall back to the
    /// catalog's first reference.
    pub fn scan_text(&self, text: &str, pathogen: Option<&str>) -> ScanReport {
        let records = parse_fasta_text(text);
        self.scan_records(&records, pathogen)
    }

    /// Scan already-parsed records
    pub fn scan_records(&self, records: &[Record], pathogen: Option<&str>) -> ScanReport {
        let requested = pathogen.unwrap_or(DEFAULT_PATHOGEN);
        let reference = self.catalog.resolve(requested);

        let sequences = records
            .iter()
            .map(|record| SequenceSummary {
                id: record.id.clone(),
                length: record.len(),
            })
            .collect();

        let mutations: Vec<SequenceMutations> = records
            .iter()
            .map(|record| SequenceMutations {
                id: record.id.clone(),
                mutations: compare_sequences(&reference.sequence, &record.sequence),
            })
            .collect();

        let summary = ScanSummary {
            sequences: records.len(),
            total_mutations: mutations.iter().map(|m| m.mutations.len()).sum(),
        };

        tracing::debug!(
            "Scanned {} sequences against {}: {} mutations",
            summary.sequences,
            reference.name,
            summary.total_mutations
        );

        ScanReport {
            filename: None,
            pathogen: requested.to_string(),
            reference: reference.name.clone(),
            sequences,
            mutations,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mutation::{Mutation, MutationKind};
    use crate::core::reference::PathogenReference;

    fn test_catalog() -> ReferenceCatalog {
        ReferenceCatalog::from_references(vec![
            PathogenReference::new("SARS-CoV-2", "ACGT"),
            PathogenReference::new("Influenza", "GGGGGG"),
        ])
        .unwrap()
    }

    #[test]
    fn test_scan_text() {
        let catalog = test_catalog();
        let engine = ScanEngine::new(&catalog);

        let report = engine.scan_text(">same\nacgt\n>snp\nACTT\n>ins\nACGTAA\n", None);

        assert_eq!(report.pathogen, "SARS-CoV-2");
        assert_eq!(report.reference, "SARS-CoV-2");
        assert_eq!(report.summary.sequences, 3);
        assert_eq!(report.summary.total_mutations, 2);
        assert_eq!(report.sequences[2].length, 6);

        assert!(report.mutations[0].mutations.is_empty());
        assert_eq!(report.mutations[1].mutations, vec![Mutation::snp(3, 'G', 'T')]);
        assert_eq!(report.mutations[2].mutations[0].kind, MutationKind::Insertion);
    }

    #[test]
    fn test_scan_selects_requested_reference() {
        let catalog = test_catalog();
        let engine = ScanEngine::new(&catalog);

        let report = engine.scan_text(">s\nGGGGGG\n", Some("Influenza"));
        assert_eq!(report.reference, "Influenza");
        assert_eq!(report.summary.total_mutations, 0);
        assert!(!report.used_fallback());
    }

    #[test]
    fn test_scan_unknown_pathogen_falls_back() {
        let catalog = test_catalog();
        let engine = ScanEngine::new(&catalog);

        let report = engine.scan_text(">s\nACGT\n", Some("Ebola"));
        assert_eq!(report.pathogen, "Ebola");
        assert_eq!(report.reference, "SARS-CoV-2");
        assert!(report.used_fallback());
        assert_eq!(report.summary.total_mutations, 0);
    }

    #[test]
    fn test_scan_empty_input() {
        let catalog = test_catalog();
        let engine = ScanEngine::new(&catalog);

        let report = engine.scan_text("", None);
        assert!(report.sequences.is_empty());
        assert!(report.mutations.is_empty());
        assert_eq!(report.summary, ScanSummary::default());
    }

    #[test]
    fn test_iter_mutations() {
        let catalog = test_catalog();
        let engine = ScanEngine::new(&catalog);

        let report = engine.scan_text(">a\nTCGT\n>b\nACG\n", None);
        let pairs: Vec<(&str, usize)> = report
            .iter_mutations()
            .map(|(id, m)| (id, m.position))
            .collect();
        assert_eq!(pairs, vec![("a", 1), ("b", 4)]);
    }
}
