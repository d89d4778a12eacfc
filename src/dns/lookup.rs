//! The query seam and its resolver-backed implementation.

use trust_dns_resolver::lookup::Lookup;
use trust_dns_resolver::proto::rr::{Name, RecordType};
use trust_dns_resolver::TokioAsyncResolver;

use super::types::{EmptyReason, QueryOutcome, RecordKind};
use crate::error_handling::categorize_resolve_error;

/// Issues one query and reports its typed outcome.
///
/// Implemented by [`TokioAsyncResolver`]; tests substitute scripted answers.
#[allow(async_fn_in_trait)]
pub trait RecordLookup {
    /// Queries `kind` records for `domain`. The domain is passed through as-is.
    async fn query(&self, domain: &str, kind: RecordKind) -> QueryOutcome;
}

impl RecordLookup for TokioAsyncResolver {
    async fn query(&self, domain: &str, kind: RecordKind) -> QueryOutcome {
        let Some(name) = query_name(domain) else {
            log::debug!("{domain:?} is not a valid DNS name, treating it as non-existent");
            return QueryOutcome::Empty(EmptyReason::NonExistentDomain);
        };

        let record_type = kind.record_type();
        match self.lookup(name, record_type).await {
            Ok(lookup) => QueryOutcome::from_records(records_from_lookup(&lookup, record_type)),
            Err(e) => match categorize_resolve_error(&e) {
                Ok(reason) => QueryOutcome::Empty(reason),
                Err(failure) => {
                    log::warn!("{kind} lookup failed for {domain}: {e}");
                    QueryOutcome::Failed(failure)
                }
            },
        }
    }
}

/// Builds the wire name for an input line.
///
/// Regular and internationalized names go through IDNA. Anything IDNA
/// rejects (stray whitespace, a trailing `\r`) is sent as raw label bytes,
/// so the nameserver gets to answer for it. Returns `None` only when no
/// wire name can be formed at all (empty or over-long labels).
pub fn query_name(domain: &str) -> Option<Name> {
    if let Ok(name) = Name::from_utf8(domain) {
        return Some(name);
    }

    let labels = domain.strip_suffix('.').unwrap_or(domain);
    if labels.split('.').any(str::is_empty) {
        return None;
    }
    Name::from_labels(labels.split('.').map(str::as_bytes)).ok()
}

/// Flattens a lookup into the text of each record of `record_type`, in
/// answer order.
///
/// Records of other types (the CNAME chain in front of an A answer) are
/// skipped. Duplicates are kept.
pub fn records_from_lookup(lookup: &Lookup, record_type: RecordType) -> Vec<String> {
    lookup
        .record_iter()
        .filter(|record| record.record_type() == record_type)
        .filter_map(|record| record.data())
        .map(|rdata| rdata.to_string())
        .collect()
}
