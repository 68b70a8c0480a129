//! Sort engine: one comparator per [`SortKey`], always stable

use crate::core::query::{ApplicationStatus, SortKey};
use crate::core::record::Record;
use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::{Ordering, Reverse};

thread_local! {
    static LABEL_COLLATOR: Option<Collator> = label_collator();
}

/// Return a newly ordered copy of `records`; the input is untouched.
///
/// `slice::sort_by` is stable, so equal keys keep their input order.
pub fn sort<R: Record>(records: &[R], key: SortKey) -> Vec<R> {
    let mut sorted = records.to_vec();
    sorted.sort_by(comparator::<R>(key));
    sorted
}

/// Comparator selected by the sort key
pub fn comparator<R: Record>(key: SortKey) -> fn(&R, &R) -> Ordering {
    match key {
        // `None < Some(_)`, so a missing timestamp is the oldest
        SortKey::Newest => |a, b| Reverse(a.timestamp()).cmp(&Reverse(b.timestamp())),
        SortKey::Oldest => |a, b| a.timestamp().cmp(&b.timestamp()),
        SortKey::Company => |a, b| compare_labels(a.sort_label(), b.sort_label()),
        SortKey::SalaryHigh => |a, b| b.salary().unwrap_or(0).cmp(&a.salary().unwrap_or(0)),
        SortKey::SalaryLow => |a, b| a.salary().unwrap_or(0).cmp(&b.salary().unwrap_or(0)),
        SortKey::Status => |a, b| {
            ApplicationStatus::rank_of(a.status()).cmp(&ApplicationStatus::rank_of(b.status()))
        },
        SortKey::Applicants => |a, b| {
            b.application_count()
                .unwrap_or(0)
                .cmp(&a.application_count().unwrap_or(0))
        },
    }
}

/// Root-locale collator at secondary strength: accents count, case does not
fn label_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!(?err, "root collation unavailable, comparing lowercased labels");
            None
        }
    }
}

fn compare_labels(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or_default();
    let b = b.unwrap_or_default();
    LABEL_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    })
}
