use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::MatrixError;
use crate::modes::{CountingPolicy, SpeciesOrder};
use crate::options::{MatrixOptions, OutputOptions, parse_delimiter};

///
/// Settings read from a famcount TOML file. Every key is optional:
///
/// ```toml
/// output = "matrix.tsv.gz"
/// delimiter = "\t"
/// keep_version = true
/// counting = "occurrences"
/// species_order = "input"
/// audit_unknown = ""
/// ```
///
#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FamcountConfig {
    pub output: Option<PathBuf>,
    pub delimiter: Option<String>,
    pub keep_version: Option<bool>,
    pub counting: Option<CountingPolicy>,
    pub species_order: Option<SpeciesOrder>,
    /// an empty string disables the audit file
    pub audit_unknown: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value in config file: {0}")]
    InvalidValue(#[from] MatrixError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl FamcountConfig {
    ///
    /// Overlay the values of this file onto existing options.
    ///
    pub fn apply(
        &self,
        mut options: MatrixOptions,
        mut outputs: OutputOptions,
    ) -> ConfigResult<(MatrixOptions, OutputOptions)> {
        if let Some(delimiter) = &self.delimiter {
            options.delimiter = parse_delimiter(delimiter)?;
        }
        if let Some(keep_version) = self.keep_version {
            options.keep_version = keep_version;
        }
        if let Some(counting) = self.counting {
            options.counting_policy = counting;
        }
        if let Some(species_order) = self.species_order {
            options.species_order = species_order;
        }
        if let Some(output) = &self.output {
            outputs.output = output.clone();
        }
        if let Some(audit) = &self.audit_unknown {
            outputs = OutputOptions::new(outputs.output, audit);
        }

        Ok((options, outputs))
    }
}

impl TryFrom<&Path> for FamcountConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
