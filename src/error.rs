//! Fatal errors of a resolution run
//!
//! Per-lookup failures never reach this type: they are logged and the
//! affected branch contributes nothing.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("catalog {0:?} does not exist")]
    CatalogNotFound(PathBuf),

    #[error("cannot access catalog {path:?}")]
    CatalogAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open catalog {path:?}")]
    CatalogOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to look up library sections")]
    LibraryLookup(#[source] rusqlite::Error),

    #[error("no matching libraries found for: {}", .0.join(", "))]
    UnknownLibraries(Vec<String>),

    #[error("failed to query media parts")]
    AllPartsQuery(#[source] rusqlite::Error),

    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("cannot write output to {path:?}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LocatorError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            LocatorError::Output { .. } => 2,
            LocatorError::AllPartsQuery(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocatorError>;
