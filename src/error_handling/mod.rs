//! Error handling and query statistics.
//!
//! This module provides:
//! - Error type definitions
//! - Categorization of resolver errors into tolerated and fatal outcomes
//! - Per-batch counts of tolerated empty results
//!
//! Resolver outcomes are categorized into:
//! - **Tolerated**: no answer, non-existent domain, no nameservers. These become
//!   empty record lists.
//! - **Fatal**: everything else. The batch aborts and no output is written.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_resolve_error, categorize_response_code};
pub use stats::QueryStats;
pub use types::{BatchError, ExportError, InitializationError, QueryError};
