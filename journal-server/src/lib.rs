//! journal-server: HTTP journaling API
//!
//! Accepts text entries, stamps them with a UTC timestamp, persists them to
//! PostgreSQL and lists them newest first.
//!
//! Modules:
//! - `config`: explicit server configuration built once at startup
//! - `db`: connection provider and entry stores
//! - `service`: append/list operations
//! - `http`: Axum router, handlers and server loop

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod service;

pub use config::JournalConfig;
pub use error::{ConnectionError, ServiceError, ServiceResult};
pub use service::EntryService;
