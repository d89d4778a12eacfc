//! Sequential batch resolution.
//!
//! Reads domains from the input file and resolves A, AAAA and CNAME records
//! for each one, one query at a time, in input order.

use std::path::Path;

use log::{debug, info};

use crate::dns::{QueryOutcome, RecordKind, RecordLookup};
use crate::error_handling::{BatchError, QueryStats};
use crate::models::DomainRecord;

/// Reads the domains to resolve, one per line.
///
/// # Errors
///
/// Returns `BatchError::InputRead` if the file cannot be read or is not UTF-8.
pub async fn read_domains(path: &Path) -> Result<Vec<String>, BatchError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BatchError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(split_lines(&content))
}

/// Splits input text into lines, removing only the `\n` terminator.
///
/// Whitespace (including a `\r` before the newline) stays part of the domain.
/// Blank lines are kept. A missing newline at end of file still ends a line.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_terminator('\n').map(str::to_string).collect()
}

/// Queries every record type for one domain.
///
/// Tolerated empty outcomes leave the corresponding list empty.
///
/// # Errors
///
/// Returns `BatchError::Query` on the first failed query; the remaining
/// record types are not queried.
pub async fn query_domain<L: RecordLookup>(
    lookup: &L,
    domain: &str,
    stats: &mut QueryStats,
) -> Result<DomainRecord, BatchError> {
    let mut record = DomainRecord::new(domain);
    for kind in RecordKind::ALL {
        debug!("querying {domain} {kind} record");
        stats.record_query();
        let values = match lookup.query(domain, kind).await {
            QueryOutcome::Records(values) => values,
            QueryOutcome::Empty(reason) => {
                debug!("{domain} has no {kind} record ({reason})");
                stats.record_empty(reason);
                Vec::new()
            }
            QueryOutcome::Failed(source) => {
                return Err(BatchError::Query {
                    domain: domain.to_string(),
                    kind,
                    source,
                })
            }
        };
        record.set_values(kind, values);
    }
    Ok(record)
}

/// Resolves all domains in order, producing one record per domain.
///
/// # Errors
///
/// Stops at the first failed query and returns its error; records resolved
/// so far are dropped.
pub async fn resolve_domains<L: RecordLookup>(
    lookup: &L,
    domains: &[String],
    stats: &mut QueryStats,
) -> Result<Vec<DomainRecord>, BatchError> {
    let mut records = Vec::with_capacity(domains.len());
    for domain in domains {
        let record = query_domain(lookup, domain, stats).await?;
        info!(
            "query {domain} with result: {}",
            serde_json::to_string(&record).unwrap_or_default()
        );
        records.push(record);
    }
    Ok(records)
}
