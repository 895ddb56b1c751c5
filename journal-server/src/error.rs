//! Error types for journal-server
//!
//! Two kinds only. `ConnectionError` when the provider cannot hand out a
//! connection, `ServiceError` when an operation fails for any reason.
//! Both render as the underlying cause's text.

use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure to obtain a database connection.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// The connection string could not be parsed
    #[error("invalid database url: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    /// Network, authentication or TLS negotiation failure
    #[error(transparent)]
    Connect(sqlx::Error),
}

/// Failure of an append or list operation.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Query(#[from] sqlx::Error),
}
