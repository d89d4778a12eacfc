//! DNS record querying.
//!
//! This module provides the per-query operations of the batch:
//! - The fixed, ordered set of record types (A, AAAA, CNAME)
//! - A typed outcome for every (domain, record type) query
//! - The [`RecordLookup`] seam, implemented for the `trust-dns-resolver`
//!   async resolver
//!
//! Queries go to the single nameserver the resolver was built with.

mod lookup;
mod types;

// Re-export public API
pub use lookup::{query_name, records_from_lookup, RecordLookup};
pub use types::{EmptyReason, QueryOutcome, RecordKind};
