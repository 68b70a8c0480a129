//! Derived counters over the full record collection

use crate::core::record::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named counter grouping one or more status values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBucket {
    /// Counter name shown by the renderer (e.g., "pending")
    pub name: String,

    /// Status values (case-insensitive) counted in this bucket
    pub statuses: Vec<String>,
}

impl StatusBucket {
    pub fn new(name: impl Into<String>, statuses: &[&str]) -> Self {
        Self {
            name: name.into(),
            statuses: statuses.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Bucket counting a single status under its own name
    pub fn single(status: &str) -> Self {
        Self::new(status, &[status])
    }

    fn includes(&self, status: &str) -> bool {
        self.statuses.iter().any(|s| s.eq_ignore_ascii_case(status))
    }
}

/// Total count plus one count per configured bucket, in bucket order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Counters {
    pub total: usize,
    pub by_bucket: IndexMap<String, usize>,
}

impl Counters {
    /// Count for a bucket; unknown bucket names read as zero
    pub fn get(&self, bucket: &str) -> usize {
        self.by_bucket.get(bucket).copied().unwrap_or(0)
    }
}

/// Recompute every counter from scratch.
///
/// A record whose status matches no bucket only counts toward `total`.
/// A status listed in several buckets counts in each of them.
pub fn summarize<R: Record>(records: &[R], buckets: &[StatusBucket]) -> Counters {
    let mut by_bucket: IndexMap<String, usize> = buckets
        .iter()
        .map(|bucket| (bucket.name.clone(), 0))
        .collect();

    for record in records {
        let Some(status) = record.status() else {
            continue;
        };
        for bucket in buckets.iter().filter(|bucket| bucket.includes(status)) {
            if let Some(count) = by_bucket.get_mut(&bucket.name) {
                *count += 1;
            }
        }
    }

    Counters {
        total: records.len(),
        by_bucket,
    }
}
