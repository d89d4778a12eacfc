//! Record types and query outcomes.

use strum_macros::{AsRefStr, Display, EnumIter as EnumIterMacro};
use trust_dns_resolver::proto::rr::RecordType;

use crate::error_handling::QueryError;

/// Record types queried for every domain.
///
/// The declaration order is the query order and the output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIterMacro)]
#[allow(clippy::upper_case_acronyms)] // Named after the record types
pub enum RecordKind {
    /// IPv4 address
    #[strum(serialize = "A")]
    A,
    /// IPv6 address
    #[strum(serialize = "AAAA")]
    AAAA,
    /// Canonical name
    #[strum(serialize = "CNAME")]
    CNAME,
}

impl RecordKind {
    /// All record types in query and column order.
    pub const ALL: [RecordKind; 3] = [RecordKind::A, RecordKind::AAAA, RecordKind::CNAME];

    /// The wire record type.
    pub fn record_type(self) -> RecordType {
        match self {
            RecordKind::A => RecordType::A,
            RecordKind::AAAA => RecordType::AAAA,
            RecordKind::CNAME => RecordType::CNAME,
        }
    }
}

/// Why a query produced no records without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIterMacro)]
pub enum EmptyReason {
    /// The domain exists but has no records of the queried type.
    #[strum(serialize = "no answer")]
    NoAnswer,
    /// The domain does not exist (NXDOMAIN).
    #[strum(serialize = "non-existent domain")]
    NonExistentDomain,
    /// No nameserver was able to answer.
    #[strum(serialize = "no nameservers")]
    NoNameservers,
}

/// Result of one (domain, record type) query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Textual record values in resolver order. Never empty.
    Records(Vec<String>),
    /// A tolerated "no data" condition.
    Empty(EmptyReason),
    /// A failure that aborts the batch.
    Failed(QueryError),
}

impl QueryOutcome {
    /// Builds an outcome from record values, mapping an empty answer to
    /// [`EmptyReason::NoAnswer`].
    pub fn from_records(records: Vec<String>) -> Self {
        if records.is_empty() {
            QueryOutcome::Empty(EmptyReason::NoAnswer)
        } else {
            QueryOutcome::Records(records)
        }
    }
}
