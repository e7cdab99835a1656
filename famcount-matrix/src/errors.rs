use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Unknown counting policy: {0}. Expected `unique-proteins` or `occurrences`")]
    UnknownCountingPolicy(String),

    #[error("Unknown species order: {0}. Expected `alpha` or `input`")]
    UnknownSpeciesOrder(String),

    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type MatrixResult<T> = std::result::Result<T, MatrixError>;
