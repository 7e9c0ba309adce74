use thiserror::Error;

/// Failures raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A query failed inside the database.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// Schema migrations could not be applied.
    #[error("migration error: {0}")]
    Migration(String),
    /// A stored row violated a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
