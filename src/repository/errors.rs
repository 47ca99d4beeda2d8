use diesel::r2d2;
use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures surfaced by the diesel-backed repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matched the requested key.
    #[error("record not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::PoolError),
}
