//! HTTP server command for the journal API

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use journal_server::config::{PgSslMode, StoreBackend};
use journal_server::http::run_server;
use journal_server::JournalConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', env = "JOURNAL_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Database URL (PostgreSQL connection string)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// TLS mode for database connections (disable, allow, prefer, require, verify-ca, verify-full)
    #[arg(long, env = "JOURNAL_SSL_MODE", default_value = "require", value_parser = parse_ssl_mode)]
    pub ssl_mode: PgSslMode,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep entries in process memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

fn parse_ssl_mode(value: &str) -> Result<PgSslMode, String> {
    value.parse::<PgSslMode>().map_err(|e| e.to_string())
}

/// Turn parsed arguments into server configuration.
pub fn build_config(args: ServeArgs) -> Result<JournalConfig> {
    let store = if args.in_memory {
        StoreBackend::Memory
    } else {
        let database_url = args
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;
        StoreBackend::Postgres {
            database_url,
            ssl_mode: args.ssl_mode,
        }
    };

    Ok(JournalConfig {
        bind_addr: args.bind,
        store,
        cors_permissive: args.cors_permissive,
    })
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = build_config(args)?;

    tracing::info!("Starting journal server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(config).await.context("Server error")?;

    Ok(())
}
