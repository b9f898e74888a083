//! Error types for the registry layer.

use std::fmt;

use crate::db::DbError;

/// Errors produced by the registry layer, wrapping upstream API errors
/// and adding storage, consistency, and input validation failures.
#[derive(Debug)]
pub enum RegistryError {
    /// An error from the underlying OpenDART client.
    Api(opendart_api::Error),
    /// A storage operation failed. Never converted to an empty result.
    Db(DbError),
    /// The store row count disagrees with the fetched corpus size after
    /// a sync. The store must not serve resolution traffic in this state.
    CorpusMismatch { expected: usize, actual: i64 },
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Db(e) => write!(f, "Storage error: {}", e),
            Self::CorpusMismatch { expected, actual } => write!(
                f,
                "Corpus mismatch after sync: store holds {} corps, source delivered {}",
                actual, expected
            ),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Db(e) => Some(e),
            _ => None,
        }
    }
}

impl From<opendart_api::Error> for RegistryError {
    fn from(e: opendart_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<DbError> for RegistryError {
    fn from(e: DbError) -> Self {
        Self::Db(e)
    }
}
