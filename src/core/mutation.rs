use serde::{Deserialize, Serialize};

/// Placeholder base used on the empty side of an insertion or deletion
pub const GAP: &str = "-";

/// Kind of difference between a sample and its reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationKind {
    /// Single base substitution
    #[serde(rename = "SNP")]
    Snp,
    /// Trailing bases present in the sample but not in the reference
    #[serde(rename = "INS")]
    Insertion,
    /// Trailing bases present in the reference but not in the sample
    #[serde(rename = "DEL")]
    Deletion,
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Snp => "SNP",
            Self::Insertion => "INS",
            Self::Deletion => "DEL",
        })
    }
}

/// A single difference against the reference.
///
/// Serializes with the short field names used on the wire:
/// `{"pos": 3, "ref": "G", "alt": "T", "type": "SNP"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutation {
    /// 1-based position in the reference
    #[serde(rename = "pos")]
    pub position: usize,

    #[serde(rename = "ref")]
    pub reference_base: String,

    #[serde(rename = "alt")]
    pub alternate_base: String,

    #[serde(rename = "type")]
    pub kind: MutationKind,
}

impl Mutation {
    pub fn snp(position: usize, reference_base: char, alternate_base: char) -> Self {
        Self {
            position,
            reference_base: reference_base.to_string(),
            alternate_base: alternate_base.to_string(),
            kind: MutationKind::Snp,
        }
    }

    pub fn insertion(position: usize, inserted: impl Into<String>) -> Self {
        Self {
            position,
            reference_base: GAP.to_string(),
            alternate_base: inserted.into(),
            kind: MutationKind::Insertion,
        }
    }

    pub fn deletion(position: usize, deleted: impl Into<String>) -> Self {
        Self {
            position,
            reference_base: deleted.into(),
            alternate_base: GAP.to_string(),
            kind: MutationKind::Deletion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_wire_format() {
        let json = serde_json::to_value(Mutation::snp(3, 'G', 'T')).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"pos": 3, "ref": "G", "alt": "T", "type": "SNP"})
        );

        let json = serde_json::to_value(Mutation::insertion(5, "AA")).unwrap();
        assert_eq!(json["ref"], "-");
        assert_eq!(json["type"], "INS");

        let json = serde_json::to_value(Mutation::deletion(5, "AA")).unwrap();
        assert_eq!(json["alt"], "-");
        assert_eq!(json["type"], "DEL");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(MutationKind::Snp.to_string(), "SNP");
        assert_eq!(MutationKind::Insertion.to_string(), "INS");
        assert_eq!(MutationKind::Deletion.to_string(), "DEL");
        assert_eq!(format!("{:<5}|", MutationKind::Snp), "SNP  |");
    }
}
