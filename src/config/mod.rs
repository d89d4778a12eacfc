//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (nameserver, timeouts, file naming)
//! - CLI option types and parsing
//! - The resolved [`Config`] consumed by the batch run

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{default_output_path, Config, LogFormat, LogLevel, Opt, ResolverSettings};
