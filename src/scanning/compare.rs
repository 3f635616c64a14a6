use crate::core::mutation::Mutation;

/// Compare a sample against a reference position by position.
///
/// Every differing position within the shared length is reported as an SNP.
/// A length difference is reported once, after the shared prefix: a longer sample
/// yields an insertion at `reference_length + 1` carrying the whole sample suffix,
/// a longer reference yields a deletion at `sample_length + 1` carrying the whole
/// reference suffix. No alignment is attempted, so an indel in the middle of a
/// sequence shows up as a run of SNPs followed by a trailing indel.
///
/// Positions are 1-based and count characters, not bytes.
///
/// # Examples
///
/// ```
/// use pathoscan::scanning::compare::compare_sequences;
/// use pathoscan::MutationKind;
///
/// let mutations = compare_sequences("ACGT", "ACTT");
/// assert_eq!(mutations.len(), 1);
/// assert_eq!(mutations[0].position, 3);
/// assert_eq!(mutations[0].kind, MutationKind::Snp);
/// ```
#[must_use]
pub fn compare_sequences(reference: &str, sample: &str) -> Vec<Mutation> {
    let mut mutations = Vec::new();
    let mut reference_bases = reference.char_indices();
    let mut sample_bases = sample.char_indices();
    let mut position = 1;

    loop {
        match (reference_bases.next(), sample_bases.next()) {
            (Some((_, expected)), Some((_, observed))) => {
                if expected != observed {
                    mutations.push(Mutation::snp(position, expected, observed));
                }
                position += 1;
            }
            (None, Some((offset, _))) => {
                mutations.push(Mutation::insertion(position, &sample[offset..]));
                break;
            }
            (Some((offset, _)), None) => {
                mutations.push(Mutation::deletion(position, &reference[offset..]));
                break;
            }
            (None, None) => break,
        }
    }

    mutations
}
