use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type InventoryResult<T> = Result<T, InventoryError>;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("no inventory file to load at `{}`: {source}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write inventory to `{}`: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{0}` is not an integer")]
    InvalidInteger(String),
}

/// Parse a user supplied ID, ignoring surrounding whitespace.
pub fn parse_integer(text: &str) -> InventoryResult<i64> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| InventoryError::InvalidInteger(trimmed.to_string()))
}
