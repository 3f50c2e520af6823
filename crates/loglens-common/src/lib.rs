//! loglens-common — Shared error type used across all Loglens crates.

pub mod error;

pub use error::{LoglensError, Result};
