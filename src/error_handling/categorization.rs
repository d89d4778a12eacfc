//! Resolver error categorization.
//!
//! Splits resolver failures into the tolerated "no data" conditions, which
//! become empty results, and everything else, which aborts the batch.

use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::proto::error::ProtoErrorKind;
use trust_dns_resolver::proto::op::ResponseCode;

use super::types::QueryError;
use crate::dns::EmptyReason;

/// Categorizes a `ResolveError`.
///
/// Returns `Ok(reason)` for the three tolerated conditions and `Err` for every
/// other failure.
///
/// # Arguments
///
/// * `error` - The resolver error to categorize
pub fn categorize_resolve_error(error: &ResolveError) -> Result<EmptyReason, QueryError> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            Ok(categorize_response_code(*response_code))
        }
        ResolveErrorKind::NoConnections => Ok(EmptyReason::NoNameservers),
        ResolveErrorKind::Timeout => Err(QueryError::Timeout),
        ResolveErrorKind::Io(e) => Err(QueryError::Network(e.to_string())),
        ResolveErrorKind::Proto(e) => match e.kind() {
            ProtoErrorKind::Timeout => Err(QueryError::Timeout),
            ProtoErrorKind::Io(io) => Err(QueryError::Network(io.to_string())),
            _ => Err(QueryError::Protocol(e.to_string())),
        },
        _ => Err(QueryError::Other(error.to_string())),
    }
}

/// Maps the response code of an answer without records to a tolerated reason.
///
/// With a single nameserver configured, any error rcode other than NXDOMAIN
/// (SERVFAIL, REFUSED, NOTIMP, ...) means no nameserver could answer.
pub fn categorize_response_code(code: ResponseCode) -> EmptyReason {
    match code {
        ResponseCode::NoError => EmptyReason::NoAnswer,
        ResponseCode::NXDomain => EmptyReason::NonExistentDomain,
        _ => EmptyReason::NoNameservers,
    }
}
