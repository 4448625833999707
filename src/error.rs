// src/error.rs
use thiserror::Error;

/// The one failure that reaches the user: the page could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unable to reach {url}: {cause}")]
pub struct NetworkFailure {
    pub url: String,
    pub cause: String,
}

impl NetworkFailure {
    pub fn new(url: &str, cause: impl ToString) -> Self {
        Self { url: s!(url), cause: cause.to_string() }
    }
}

/// Anything that went wrong inside the contact store.
/// The pipeline logs these and carries on.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("store path: {0}")]
    Io(#[from] std::io::Error),
}
