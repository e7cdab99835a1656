use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FamcountError {
    #[error("Not a valid Pfam family or clan identifier: {0:?}")]
    InvalidFamilyId(String),
}
