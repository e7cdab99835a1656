use fxhash::{FxHashMap, FxHashSet};
use log::trace;

use famcount_core::models::{FamilyId, TokenClass, TokenClassifier};

use crate::blocks::SpeciesBlock;
use crate::consts::{FAMILY_FIELD, MIN_RECORD_FIELDS, PROTEIN_FIELD};
use crate::modes::CountingPolicy;

///
/// Per-family counts of a single species block.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesCounts {
    counts: FxHashMap<FamilyId, u32>,
}

impl SpeciesCounts {
    ///
    /// Count for a family, 0 when the species never produced it.
    ///
    pub fn get(&self, family: &FamilyId) -> u32 {
        self.counts.get(family).copied().unwrap_or(0)
    }

    pub fn families(&self) -> impl Iterator<Item = &FamilyId> {
        self.counts.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FamilyId, u32)> {
        self.counts.iter().map(|(family, count)| (family, *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(FamilyId, u32)> for SpeciesCounts {
    fn from_iter<I: IntoIterator<Item = (FamilyId, u32)>>(iter: I) -> Self {
        SpeciesCounts {
            counts: iter.into_iter().collect(),
        }
    }
}

///
/// Result of aggregating one species block.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesAggregation {
    pub counts: SpeciesCounts,
    /// one entry per occurrence of an unrecognised token, in encounter order
    pub unknown_tokens: Vec<String>,
    /// record lines with fewer than three fields
    pub skipped_lines: usize,
}

///
/// Count family hits over the record lines of one species.
///
/// Each line is split on whitespace. The 2nd field is the protein id and the 3rd is
/// the family list; lines with fewer than three fields are skipped. Under
/// [CountingPolicy::UniqueProteins] a family's count is the number of distinct
/// proteins carrying it, under [CountingPolicy::Occurrences] it is the number of
/// matching tokens.
///
/// # Arguments
/// - lines: record lines of the block
/// - classifier: token classifier for the run
/// - policy: counting policy for the run
pub fn aggregate_species_lines<S: AsRef<str>>(
    lines: &[S],
    classifier: &TokenClassifier,
    policy: CountingPolicy,
) -> SpeciesAggregation {
    let mut family_to_proteins: FxHashMap<FamilyId, FxHashSet<&str>> = FxHashMap::default();
    let mut family_counts: FxHashMap<FamilyId, u32> = FxHashMap::default();
    let mut unknown_tokens: Vec<String> = Vec::new();
    let mut skipped_lines = 0_usize;

    for line in lines {
        let line = line.as_ref();
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() < MIN_RECORD_FIELDS {
            trace!("Skipping short record line: {:?}", line);
            skipped_lines += 1;
            continue;
        }

        let protein = fields[PROTEIN_FIELD];

        for class in classifier.classify_field(fields[FAMILY_FIELD]) {
            match class {
                TokenClass::Known(family) => match policy {
                    CountingPolicy::UniqueProteins => {
                        family_to_proteins.entry(family).or_default().insert(protein);
                    }
                    CountingPolicy::Occurrences => {
                        *family_counts.entry(family).or_insert(0) += 1;
                    }
                },
                TokenClass::Unknown(token) => unknown_tokens.push(token),
                TokenClass::Ignored => {}
            }
        }
    }

    if policy == CountingPolicy::UniqueProteins {
        family_counts = family_to_proteins
            .into_iter()
            .map(|(family, proteins)| (family, proteins.len() as u32))
            .collect();
    }

    SpeciesAggregation {
        counts: SpeciesCounts {
            counts: family_counts,
        },
        unknown_tokens,
        skipped_lines,
    }
}

///
/// Convenience wrapper around [aggregate_species_lines] for a whole block.
///
pub fn aggregate_block(
    block: &SpeciesBlock,
    classifier: &TokenClassifier,
    policy: CountingPolicy,
) -> SpeciesAggregation {
    aggregate_species_lines(&block.lines, classifier, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn fam(id: &str) -> FamilyId {
        FamilyId::from_str(id).unwrap()
    }

    #[fixture]
    fn duplicated_protein_lines() -> Vec<&'static str> {
        vec!["g1 P PF00001", "g2 P PF00001", "g3 Q PF00001"]
    }

    #[rstest]
    #[case(CountingPolicy::UniqueProteins, 2)]
    #[case(CountingPolicy::Occurrences, 3)]
    fn test_counting_policies(
        duplicated_protein_lines: Vec<&'static str>,
        #[case] policy: CountingPolicy,
        #[case] expected: u32,
    ) {
        let result =
            aggregate_species_lines(&duplicated_protein_lines, &TokenClassifier::new(false), policy);
        assert_eq!(result.counts.get(&fam("PF00001")), expected);
        assert_eq!(result.counts.len(), 1);
    }

    #[rstest]
    fn test_same_token_twice_on_one_line() {
        let lines = vec!["g1 P PF00001;PF00001.2"];
        let classifier = TokenClassifier::new(false);

        let unique = aggregate_species_lines(&lines, &classifier, CountingPolicy::UniqueProteins);
        assert_eq!(unique.counts.get(&fam("PF00001")), 1);

        let raw = aggregate_species_lines(&lines, &classifier, CountingPolicy::Occurrences);
        assert_eq!(raw.counts.get(&fam("PF00001")), 2);
    }

    #[rstest]
    fn test_keep_version_splits_families() {
        let lines = vec!["g1 P PF00001.1", "g2 Q PF00001.2"];
        let result = aggregate_species_lines(
            &lines,
            &TokenClassifier::new(true),
            CountingPolicy::UniqueProteins,
        );

        assert_eq!(result.counts.get(&fam("PF00001.1")), 1);
        assert_eq!(result.counts.get(&fam("PF00001.2")), 1);
        assert_eq!(result.counts.get(&fam("PF00001")), 0);
    }

    #[rstest]
    fn test_unknown_and_ignored_tokens() {
        let lines = vec!["g1 p1 PF00069,ERROR|junk", "g2 p2 junk;CLAN_ERROR;;other"];
        let result = aggregate_species_lines(
            &lines,
            &TokenClassifier::new(false),
            CountingPolicy::UniqueProteins,
        );

        assert_eq!(result.counts.len(), 1);
        assert_eq!(result.counts.get(&fam("PF00069")), 1);
        assert_eq!(result.unknown_tokens, vec!["junk", "junk", "other"]);
    }

    #[rstest]
    fn test_short_lines_are_skipped_and_extra_fields_ignored() {
        let lines = vec!["g1 p1", "lonely", "g2 p2 PF00002 PF00003 trailing"];
        let result = aggregate_species_lines(
            &lines,
            &TokenClassifier::new(false),
            CountingPolicy::Occurrences,
        );

        assert_eq!(result.skipped_lines, 2);
        assert_eq!(result.counts.get(&fam("PF00002")), 1);
        assert_eq!(result.counts.get(&fam("PF00003")), 0);
        assert!(result.unknown_tokens.is_empty());
    }

    #[rstest]
    fn test_empty_block() {
        let block = SpeciesBlock::new("Empty".to_string());
        let result = aggregate_block(
            &block,
            &TokenClassifier::new(false),
            CountingPolicy::UniqueProteins,
        );
        assert!(result.counts.is_empty());
        assert_eq!(result, SpeciesAggregation::default());
    }
}
