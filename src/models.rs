use serde::Serialize;

use crate::dns::RecordKind;

/// Resolution results for one input line.
///
/// Every record type field is always present; lookups that found nothing
/// leave an empty list. Values keep resolver order, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRecord {
    /// The domain exactly as read from the input line
    pub domain: String,
    /// A record values
    #[serde(rename = "A")]
    pub a: Vec<String>,
    /// AAAA record values
    #[serde(rename = "AAAA")]
    pub aaaa: Vec<String>,
    /// CNAME record values
    #[serde(rename = "CNAME")]
    pub cname: Vec<String>,
}

impl DomainRecord {
    /// Creates a record for `domain` with all record lists empty.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            a: Vec::new(),
            aaaa: Vec::new(),
            cname: Vec::new(),
        }
    }

    /// Record values of `kind`.
    pub fn values(&self, kind: RecordKind) -> &[String] {
        match kind {
            RecordKind::A => &self.a,
            RecordKind::AAAA => &self.aaaa,
            RecordKind::CNAME => &self.cname,
        }
    }

    pub(crate) fn set_values(&mut self, kind: RecordKind, values: Vec<String>) {
        match kind {
            RecordKind::A => self.a = values,
            RecordKind::AAAA => self.aaaa = values,
            RecordKind::CNAME => self.cname = values,
        }
    }

    /// Whether any record type returned at least one value.
    pub fn has_records(&self) -> bool {
        RecordKind::ALL
            .iter()
            .any(|kind| !self.values(*kind).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_all_fields_empty() {
        let record = DomainRecord::new("example.com");
        for kind in RecordKind::ALL {
            assert!(record.values(kind).is_empty());
        }
        assert!(!record.has_records());
    }

    #[test]
    fn test_serializes_with_record_type_keys() {
        let mut record = DomainRecord::new("example.com");
        record.set_values(RecordKind::A, vec!["93.184.216.34".to_string()]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"domain":"example.com","A":["93.184.216.34"],"AAAA":[],"CNAME":[]}"#
        );
    }
}
