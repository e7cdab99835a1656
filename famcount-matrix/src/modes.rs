use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MatrixError;

///
/// How family hits are tallied within a species block.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountingPolicy {
    /// Count each protein at most once per family.
    #[default]
    UniqueProteins,
    /// Count every (line, family token) occurrence.
    Occurrences,
}

impl FromStr for CountingPolicy {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unique-proteins" | "unique" => Ok(CountingPolicy::UniqueProteins),
            "occurrences" => Ok(CountingPolicy::Occurrences),
            _ => Err(MatrixError::UnknownCountingPolicy(s.to_string())),
        }
    }
}

impl Display for CountingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountingPolicy::UniqueProteins => write!(f, "unique-proteins"),
            CountingPolicy::Occurrences => write!(f, "occurrences"),
        }
    }
}

///
/// Order of the species rows in the output matrix.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeciesOrder {
    /// Sort species labels lexicographically.
    #[default]
    Alpha,
    /// Keep the order in which species were first seen in the input.
    Input,
}

impl FromStr for SpeciesOrder {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alpha" => Ok(SpeciesOrder::Alpha),
            "input" => Ok(SpeciesOrder::Input),
            _ => Err(MatrixError::UnknownSpeciesOrder(s.to_string())),
        }
    }
}

impl Display for SpeciesOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesOrder::Alpha => write!(f, "alpha"),
            SpeciesOrder::Input => write!(f, "input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("unique-proteins", CountingPolicy::UniqueProteins)]
    #[case("Unique", CountingPolicy::UniqueProteins)]
    #[case("OCCURRENCES", CountingPolicy::Occurrences)]
    fn test_counting_policy_from_str(#[case] input: &str, #[case] expected: CountingPolicy) {
        assert_eq!(CountingPolicy::from_str(input).unwrap(), expected);
    }

    #[rstest]
    #[case("alpha", SpeciesOrder::Alpha)]
    #[case("Input", SpeciesOrder::Input)]
    fn test_species_order_from_str(#[case] input: &str, #[case] expected: SpeciesOrder) {
        assert_eq!(SpeciesOrder::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_unknown_modes_are_rejected() {
        assert!(matches!(
            CountingPolicy::from_str("lines"),
            Err(MatrixError::UnknownCountingPolicy(_))
        ));
        assert!(matches!(
            SpeciesOrder::from_str("random"),
            Err(MatrixError::UnknownSpeciesOrder(_))
        ));
    }
}
