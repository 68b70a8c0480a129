//! Backend record shapes and request payloads
//!
//! Every list item implements [`Record`](crate::core::Record). The backend
//! omits or nulls many fields depending on the endpoint, so nearly all
//! fields are optional and default when missing.

pub mod application;
pub mod company;
pub mod job;
pub mod user;

pub use application::{ApplicantSummary, Application, JobSummary, NewApplication, StatusUpdate};
pub use company::{Company, CompanyStatistics};
pub use job::{Job, JobStatusUpdate};
pub use user::{AdminStats, LoginRequest, ProfileUpdate, RegisterRequest, TokenResponse, User};

/// Lenient timestamp parsing shared by the record types
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    /// Parse RFC 3339, or a naive ISO timestamp taken as UTC
    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Deserialize an optional timestamp; malformed values become `None`
    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(|value| value.as_str()).and_then(parse))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::TimeZone;

        #[test]
        fn test_parse_accepts_offset_and_naive() {
            let expected = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
            assert_eq!(parse("2024-01-05T10:30:00+00:00"), Some(expected));
            assert_eq!(parse("2024-01-05T10:30:00Z"), Some(expected));
            assert_eq!(parse("2024-01-05T10:30:00"), Some(expected));
            assert_eq!(parse("2024-01-05 10:30:00.000"), Some(expected));
            assert_eq!(parse("yesterday"), None);
        }
    }
}

pub(crate) fn default_true() -> bool {
    true
}
