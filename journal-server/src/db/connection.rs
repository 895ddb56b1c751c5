//! Connection provider
//!
//! Opens one PostgreSQL connection per call. No pooling, no retry: a single
//! attempt, and the caller owns closing what it gets back.

use std::fmt;

use sqlx::postgres::{PgConnectOptions, PgConnection, PgSslMode};
use sqlx::Connection;

use crate::error::ConnectionError;

/// Hands out fresh, authenticated connections.
#[derive(Clone)]
pub struct ConnectionProvider {
    options: PgConnectOptions,
}

impl ConnectionProvider {
    /// Build a provider from a connection string.
    ///
    /// `ssl_mode` overrides whatever the URL says; production runs with
    /// [`PgSslMode::Require`].
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::InvalidUrl`] if the string cannot be parsed.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let provider = ConnectionProvider::new("postgres://localhost/journal", PgSslMode::Require)?;
    /// let conn = provider.connect().await?;
    /// ```
    pub fn new(database_url: &str, ssl_mode: PgSslMode) -> Result<Self, ConnectionError> {
        let options = database_url
            .parse::<PgConnectOptions>()
            .map_err(ConnectionError::InvalidUrl)?
            .ssl_mode(ssl_mode);

        tracing::info!(
            host = %options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or_default(),
            ?ssl_mode,
            "database configured"
        );

        Ok(Self { options })
    }

    /// Open a new connection.
    pub async fn connect(&self) -> Result<PgConnection, ConnectionError> {
        tracing::debug!(host = %self.options.get_host(), "opening database connection");
        PgConnection::connect_with(&self.options)
            .await
            .map_err(ConnectionError::Connect)
    }
}

// Options carry the password; show the target only.
impl fmt::Debug for ConnectionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionProvider")
            .field("host", &self.options.get_host())
            .field("port", &self.options.get_port())
            .field("database", &self.options.get_database())
            .finish()
    }
}

/// Close a connection, logging rather than surfacing failures.
///
/// The operation result has already been decided when this runs.
pub async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!("failed to close database connection: {}", e);
    } else {
        tracing::debug!("database connection closed");
    }
}
