//! Per-batch statistics on tolerated empty results.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use crate::dns::EmptyReason;

/// Counts of tolerated "no data" outcomes seen during one batch run.
///
/// The batch loop is sequential, so plain counters suffice.
#[derive(Debug, Clone)]
pub struct QueryStats {
    queries: usize,
    empty: HashMap<EmptyReason, usize>,
}

impl QueryStats {
    /// Creates statistics with every reason initialized to zero.
    pub fn new() -> Self {
        let mut empty = HashMap::new();
        for reason in EmptyReason::iter() {
            empty.insert(reason, 0);
        }
        QueryStats { queries: 0, empty }
    }

    /// Records that a query was issued.
    pub fn record_query(&mut self) {
        self.queries += 1;
    }

    /// Records a tolerated empty result.
    pub fn record_empty(&mut self, reason: EmptyReason) {
        *self.empty.entry(reason).or_insert(0) += 1;
    }

    /// Number of queries issued.
    pub fn total_queries(&self) -> usize {
        self.queries
    }

    /// Number of empty results for `reason`.
    pub fn empty_count(&self, reason: EmptyReason) -> usize {
        self.empty.get(&reason).copied().unwrap_or(0)
    }

    /// Number of empty results across all reasons.
    pub fn total_empty(&self) -> usize {
        self.empty.values().sum()
    }
}

impl Default for QueryStats {
    fn default() -> Self {
        Self::new()
    }
}
