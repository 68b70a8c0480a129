//! Filter engine: AND-composition of the criteria over a record slice

use crate::core::query::FilterCriteria;
use crate::core::record::{Record, fields};

/// Keep the records matching every set criterion, preserving input order
pub fn filter<R: Record>(records: &[R], criteria: &FilterCriteria) -> Vec<R> {
    if criteria.is_empty() {
        return records.to_vec();
    }

    let search = criteria
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|q| !q.is_empty());

    records
        .iter()
        .filter(|record| matches(*record, criteria, search.as_deref()))
        .cloned()
        .collect()
}

/// Evaluate all criteria against one record
///
/// `search` is the pre-lowercased query.
fn matches<R: Record>(record: &R, criteria: &FilterCriteria, search: Option<&str>) -> bool {
    if let Some(query) = search {
        let found = R::search_fields()
            .iter()
            .filter_map(|field| record.text_of(field))
            .any(|text| text.contains(query));
        if !found {
            return false;
        }
    }

    if let Some(status) = &criteria.status
        && !equals_ignore_case(record.text_of(fields::STATUS), status)
    {
        return false;
    }

    if let Some(location) = &criteria.location
        && !equals_ignore_case(record.text_of(fields::LOCATION), location)
    {
        return false;
    }

    if !criteria.job_types.is_empty() {
        let selected = record
            .text_of(fields::JOB_TYPE)
            .is_some_and(|job_type| criteria.job_types.contains(&job_type));
        if !selected {
            return false;
        }
    }

    if let Some(level) = criteria.experience {
        let matched = record
            .text_of(fields::EXPERIENCE)
            .is_some_and(|experience| level.matches(&experience));
        if !matched {
            return false;
        }
    }

    // Missing salary never satisfies an active bucket
    if let Some(bucket) = criteria.salary
        && !record.salary().is_some_and(|salary| bucket.contains(salary))
    {
        return false;
    }

    true
}

fn equals_ignore_case(value: Option<String>, expected: &str) -> bool {
    value.is_some_and(|value| value == expected.to_lowercase())
}
