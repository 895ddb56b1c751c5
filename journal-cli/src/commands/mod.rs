//! Command implementations for the journal CLI

pub mod serve;

pub use serve::run_serve;
