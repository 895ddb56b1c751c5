//! Entry repository implementations
//!
//! - `entries`: PostgreSQL, one connection per call
//! - `memory`: process-local, for tests and `--in-memory` runs

pub mod entries;
pub mod memory;

pub use entries::PgEntryRepo;
pub use memory::MemoryEntryRepo;
