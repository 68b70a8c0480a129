//! Job postings

use crate::core::field::FieldValue;
use crate::core::record::{Record, fields};
use crate::entities::{default_true, timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A job posting as returned by `/api/jobs/` and `/api/admin/jobs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,

    #[serde(default)]
    pub title: String,

    /// Company name; only the admin listing resolves it
    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub department: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    /// "Full-time", "Part-time", "Contract", "Internship"
    #[serde(default)]
    pub job_type: Option<String>,

    #[serde(default, alias = "experience")]
    pub experience_level: Option<String>,

    #[serde(default)]
    pub salary_min: Option<i64>,

    #[serde(default)]
    pub salary_max: Option<i64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub requirements: Option<String>,

    #[serde(
        default,
        alias = "created_at",
        deserialize_with = "timestamp::deserialize_opt"
    )]
    pub posted_date: Option<DateTime<Utc>>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Number of applications received (admin listing only)
    #[serde(default)]
    pub application_count: Option<u32>,
}

impl Job {
    /// Salary used for filtering and ordering: the minimum, else the maximum
    pub fn salary(&self) -> Option<i64> {
        self.salary_min.or(self.salary_max)
    }

    fn status_str(&self) -> &'static str {
        if self.is_active { "active" } else { "inactive" }
    }
}

impl Record for Job {
    fn resource_name() -> &'static str {
        "jobs"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields() -> &'static [&'static str] {
        &["title", "description"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "title" => FieldValue::String(self.title.clone()),
            "description" => FieldValue::from_opt_str(self.description.as_deref()),
            "department" => FieldValue::from_opt_str(self.department.as_deref()),
            "requirements" => FieldValue::from_opt_str(self.requirements.as_deref()),
            fields::COMPANY => FieldValue::from_opt_str(self.company.as_deref()),
            fields::LOCATION => FieldValue::from_opt_str(self.location.as_deref()),
            fields::JOB_TYPE => FieldValue::from_opt_str(self.job_type.as_deref()),
            fields::EXPERIENCE => FieldValue::from_opt_str(self.experience_level.as_deref()),
            fields::SALARY => FieldValue::from_opt_i64(self.salary()),
            fields::APPLICATION_COUNT => {
                FieldValue::from_opt_i64(self.application_count.map(i64::from))
            }
            fields::STATUS => FieldValue::String(self.status_str().to_string()),
            "posted_date" => self
                .posted_date
                .map(FieldValue::DateTime)
                .unwrap_or(FieldValue::Null),
            _ => return None,
        };
        Some(value)
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.posted_date
    }

    fn status(&self) -> Option<&str> {
        Some(self.status_str())
    }

    fn salary(&self) -> Option<i64> {
        Job::salary(self)
    }

    fn sort_label(&self) -> Option<&str> {
        self.company.as_deref()
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if let Some(company) = &self.company {
            write!(f, " at {}", company)?;
        }
        write!(
            f,
            " | {} | {}",
            self.location.as_deref().unwrap_or("Remote"),
            self.job_type.as_deref().unwrap_or("Full-time")
        )?;
        if let Some(salary) = crate::view::format::format_salary(self.salary_min, self.salary_max) {
            write!(f, " | {}", salary)?;
        }
        Ok(())
    }
}

/// Body of `PATCH /api/admin/jobs/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStatusUpdate {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Job {
        serde_json::from_value(json!({
            "id": 7,
            "title": "Software Engineer",
            "department": "Infrastructure",
            "location": "Menlo Park",
            "job_type": "Full-time",
            "experience_level": "Senior",
            "salary_min": 150000,
            "salary_max": 210000,
            "description": "Build distributed systems",
            "requirements": null,
            "posted_date": "2024-02-01T12:00:00",
            "is_active": true,
            "application_count": 12
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_job_read() {
        let job = sample();
        assert_eq!(job.id, 7);
        assert_eq!(job.company, None);
        assert_eq!(job.salary(), Some(150_000));
        assert!(job.posted_date.is_some());
        assert_eq!(Record::status(&job), Some("active"));
    }

    #[test]
    fn test_minimal_job_defaults() {
        let job: Job = serde_json::from_value(json!({ "id": 1, "salary_max": 80000 })).unwrap();
        assert!(job.is_active);
        assert_eq!(job.title, "");
        assert_eq!(job.salary(), Some(80_000));
        assert_eq!(job.posted_date, None);
    }

    #[test]
    fn test_malformed_timestamp_degrades_to_none() {
        let job: Job =
            serde_json::from_value(json!({ "id": 1, "posted_date": "not a date" })).unwrap();
        assert_eq!(job.timestamp(), None);
    }

    #[test]
    fn test_field_values() {
        let job = sample();
        assert_eq!(job.text_of(fields::LOCATION).as_deref(), Some("menlo park"));
        assert_eq!(
            job.field_value(fields::SALARY),
            Some(FieldValue::Integer(150_000))
        );
        assert_eq!(job.field_value(fields::COMPANY), Some(FieldValue::Null));
        assert_eq!(job.application_count(), Some(12));
        assert_eq!(job.field_value("unknown"), None);
    }

    #[test]
    fn test_display_card() {
        let mut job = sample();
        job.company = Some("Meta".to_string());
        assert_eq!(
            job.to_string(),
            "Software Engineer at Meta | Menlo Park | Full-time | $150K - $210K"
        );
    }
}
