//! Record trait defining the abstraction over every fetched list item

use crate::core::field::FieldValue;
use chrono::{DateTime, Utc};

/// Field names shared by the filter engine and the record implementations
pub mod fields {
    pub const STATUS: &str = "status";
    pub const LOCATION: &str = "location";
    pub const JOB_TYPE: &str = "job_type";
    pub const EXPERIENCE: &str = "experience_level";
    pub const SALARY: &str = "salary";
    pub const COMPANY: &str = "company";
    pub const APPLICATION_COUNT: &str = "application_count";
}

/// Base trait for everything shown in a list view.
///
/// A record is one item of a collection fetched wholesale from the
/// backend (a job posting, an application, a user, a company). Records
/// are never patched locally; the whole collection is replaced on refetch.
///
/// Filtering goes through [`Record::field_value`] so that a record which
/// lacks a field simply fails the corresponding active criterion.
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs and logs (e.g., "jobs")
    fn resource_name() -> &'static str;

    /// Backend identifier
    fn id(&self) -> i64;

    /// Fields searched by the free-text criterion
    fn search_fields() -> &'static [&'static str];

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Timestamp used by the newest/oldest orderings
    fn timestamp(&self) -> Option<DateTime<Utc>>;

    /// Status used by the counters and the status ordering
    fn status(&self) -> Option<&str> {
        None
    }

    /// Numeric attribute used by salary filtering and ordering
    fn salary(&self) -> Option<i64> {
        self.field_value(fields::SALARY)
            .and_then(|value| value.as_integer())
    }

    /// Number of applications received, used by the applicants ordering
    fn application_count(&self) -> Option<i64> {
        self.field_value(fields::APPLICATION_COUNT)
            .and_then(|value| value.as_integer())
    }

    /// Secondary label for the lexicographic ordering (company name)
    fn sort_label(&self) -> Option<&str> {
        None
    }

    /// Lowercased text of a field, `None` when absent or not a string
    fn text_of(&self, field: &str) -> Option<String> {
        self.field_value(field)
            .and_then(|value| value.as_string().map(str::to_lowercase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestRecord {
        id: i64,
        title: String,
        salary: Option<i64>,
        created_at: Option<DateTime<Utc>>,
    }

    impl Record for TestRecord {
        fn resource_name() -> &'static str {
            "test_records"
        }

        fn id(&self) -> i64 {
            self.id
        }

        fn search_fields() -> &'static [&'static str] {
            &["title"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "title" => Some(FieldValue::String(self.title.clone())),
                fields::SALARY => Some(FieldValue::from_opt_i64(self.salary)),
                _ => None,
            }
        }

        fn timestamp(&self) -> Option<DateTime<Utc>> {
            self.created_at
        }
    }

    fn record(salary: Option<i64>) -> TestRecord {
        TestRecord {
            id: 1,
            title: "Senior Engineer".to_string(),
            salary,
            created_at: None,
        }
    }

    #[test]
    fn test_default_salary_reads_field() {
        assert_eq!(record(Some(120_000)).salary(), Some(120_000));
        assert_eq!(record(None).salary(), None);
    }

    #[test]
    fn test_text_of_lowercases() {
        let r = record(None);
        assert_eq!(r.text_of("title").as_deref(), Some("senior engineer"));
        assert_eq!(r.text_of("missing"), None);
        assert_eq!(r.text_of(fields::SALARY), None);
    }

    #[test]
    fn test_defaults_without_status_or_label() {
        let r = record(None);
        assert_eq!(r.status(), None);
        assert_eq!(r.sort_label(), None);
        assert_eq!(r.application_count(), None);
        assert_eq!(TestRecord::resource_name(), "test_records");
    }
}
