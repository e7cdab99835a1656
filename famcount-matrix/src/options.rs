use std::path::PathBuf;

use crate::consts::*;
use crate::errors::{MatrixError, MatrixResult};
use crate::modes::{CountingPolicy, SpeciesOrder};

///
/// Parse a user supplied column delimiter into the single byte the table writer needs.
///
/// `\t` (the two characters) and `tab` are accepted as aliases for a TAB.
///
pub fn parse_delimiter(s: &str) -> MatrixResult<u8> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(MatrixError::InvalidDelimiter(s.to_string())),
    }
}

///
/// Run-wide settings for turning annotation blocks into a count matrix.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixOptions {
    pub keep_version: bool,
    pub counting_policy: CountingPolicy,
    pub species_order: SpeciesOrder,
    pub delimiter: u8,
    pub show_progress: bool,
}

impl Default for MatrixOptions {
    fn default() -> Self {
        MatrixOptions {
            keep_version: false,
            counting_policy: DEFAULT_COUNTING_POLICY,
            species_order: DEFAULT_SPECIES_ORDER,
            delimiter: DEFAULT_DELIMITER,
            show_progress: false,
        }
    }
}

impl MatrixOptions {
    pub fn with_keep_version(mut self, keep_version: bool) -> Self {
        self.keep_version = keep_version;
        self
    }

    pub fn with_counting_policy(mut self, counting_policy: CountingPolicy) -> Self {
        self.counting_policy = counting_policy;
        self
    }

    pub fn with_species_order(mut self, species_order: SpeciesOrder) -> Self {
        self.species_order = species_order;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

///
/// Where the matrix and the unknown-token audit are written.
///
/// An audit path of `None` disables the audit file.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    pub output: PathBuf,
    pub audit: Option<PathBuf>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            output: PathBuf::from(DEFAULT_OUT),
            audit: Some(PathBuf::from(DEFAULT_AUDIT_OUT)),
        }
    }
}

impl OutputOptions {
    ///
    /// Build output options, treating an empty audit path as "no audit".
    ///
    pub fn new<P: Into<PathBuf>>(output: P, audit: &str) -> Self {
        let audit = match audit.trim() {
            "" => None,
            path => Some(PathBuf::from(path)),
        };

        OutputOptions {
            output: output.into(),
            audit,
        }
    }
}
