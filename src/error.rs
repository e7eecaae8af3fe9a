//! Error types.
//!
//! Every failure the crate can report is a precondition violation detected
//! before the evolutionary loop starts. Once a [`Catalog`](crate::timetable::Catalog)
//! and a [`GaConfig`](crate::ga::GaConfig) have been validated, a run cannot fail.

use thiserror::Error;

/// Errors raised while building a catalog or validating a configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input that would produce a degenerate search (empty catalog lists,
    /// zero timeslots, zero population, mis-sized subject sets, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
