use database::cassandra::CassandraError;
use thiserror::Error;

/// Result type for playlist operations
pub type PlaylistResult<T> = Result<T, PlaylistError>;

/// Errors that can occur in the playlists domain
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Row expected but not present
    #[error("Not found: {0}")]
    NotFound(String),

    /// Keyspace names are interpolated into CQL text and must look like
    /// identifiers
    #[error("Invalid keyspace name: {0}")]
    InvalidKeyspace(String),

    /// Session/statement error from the database layer
    #[error("Database error: {0}")]
    Database(#[from] CassandraError),
}
