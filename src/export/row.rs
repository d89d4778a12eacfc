//! Row layout shared by the header and the data rows.

use crate::config::DOMAIN_COLUMN;
use crate::dns::RecordKind;
use crate::models::DomainRecord;

/// Column titles: the domain column followed by one column per record type.
pub fn header_row() -> Vec<String> {
    std::iter::once(DOMAIN_COLUMN.to_string())
        .chain(RecordKind::ALL.iter().map(|kind| kind.to_string()))
        .collect()
}

/// Cell values for one record, in [`header_row`] order.
///
/// Multiple values of one record type are joined with `separator`; a type
/// with no values yields an empty cell.
pub fn record_row(record: &DomainRecord, separator: &str) -> Vec<String> {
    std::iter::once(record.domain.clone())
        .chain(
            RecordKind::ALL
                .iter()
                .map(|kind| record.values(*kind).join(separator)),
        )
        .collect()
}
