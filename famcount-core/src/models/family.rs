use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::FamcountError;
use crate::models::token::{TokenClass, classify_token};

///
/// The database a family identifier belongs to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyKind {
    /// `PF` followed by five digits
    Pfam,
    /// `CL` followed by four digits
    Clan,
}

///
/// Canonical identifier of a protein domain family, e.g. `PF00069` or `PF00069.26`.
///
/// Ordering is the lexicographic order of the canonical string, which is the
/// column order used by the count matrix.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, PartialOrd, Ord)]
pub struct FamilyId(String);

impl FamilyId {
    pub(crate) fn from_parts(code: &str, version: Option<&str>) -> Self {
        match version {
            Some(version) => FamilyId(format!("{code}.{version}")),
            None => FamilyId(code.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    ///
    /// The family code without any version suffix.
    ///
    pub fn code(&self) -> &str {
        match self.0.split_once('.') {
            Some((code, _)) => code,
            None => &self.0,
        }
    }

    ///
    /// The version suffix, only present when versions were kept during classification.
    ///
    pub fn version(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, version)| version)
    }

    pub fn kind(&self) -> FamilyKind {
        if self.0.starts_with("CL") {
            FamilyKind::Clan
        } else {
            FamilyKind::Pfam
        }
    }
}

impl Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FamilyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for FamilyId {
    type Err = FamcountError;

    /// Parses a single identifier, keeping its version if it has one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match classify_token(s, true) {
            TokenClass::Known(id) => Ok(id),
            _ => Err(FamcountError::InvalidFamilyId(s.to_string())),
        }
    }
}
