use crate::modes::{CountingPolicy, SpeciesOrder};

pub const DEFAULT_OUT: &str = "species_pfam_matrix.csv";
pub const DEFAULT_AUDIT_OUT: &str = "unknown_family_tokens.tsv";
pub const DEFAULT_DELIMITER: u8 = b',';
pub const DEFAULT_COUNTING_POLICY: CountingPolicy = CountingPolicy::UniqueProteins;
pub const DEFAULT_SPECIES_ORDER: SpeciesOrder = SpeciesOrder::Alpha;

/// Label of the first column of the matrix header.
pub const SPECIES_COLUMN: &str = "species";
pub const AUDIT_HEADER: &str = "# token\tcount";

/// Minimum number of whitespace separated fields in a record line.
pub const MIN_RECORD_FIELDS: usize = 3;
pub const PROTEIN_FIELD: usize = 1;
pub const FAMILY_FIELD: usize = 2;
