//! Job applications, as seen by the applicant and by admins

use crate::core::field::FieldValue;
use crate::core::record::{Record, fields};
use crate::entities::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Job details embedded in an application listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSummary {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub job_type: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub description: Option<String>,
}

/// Applicant details embedded in the admin application listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicantSummary {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// An application from `/api/applications/me` or `/api/admin/applications`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,

    #[serde(default)]
    pub job_id: Option<i64>,

    #[serde(default)]
    pub user_id: Option<i64>,

    #[serde(default)]
    pub cover_letter: Option<String>,

    #[serde(default)]
    pub additional_info: Option<String>,

    /// Wire status ("submitted", "in_review", ...); kept raw so unknown
    /// values still render and count toward the total
    #[serde(default)]
    pub status: Option<String>,

    #[serde(
        default,
        alias = "created_at",
        deserialize_with = "timestamp::deserialize_opt"
    )]
    pub applied_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub job: Option<JobSummary>,

    #[serde(default)]
    pub user: Option<ApplicantSummary>,
}

impl Application {
    pub fn job_title(&self) -> Option<&str> {
        self.job.as_ref().and_then(|job| job.title.as_deref())
    }

    pub fn company(&self) -> Option<&str> {
        self.job.as_ref().and_then(|job| job.company.as_deref())
    }

    pub fn applicant_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.name.as_deref())
    }

    /// Job referenced by this application, from either representation
    pub fn target_job_id(&self) -> Option<i64> {
        self.job_id
            .or_else(|| self.job.as_ref().and_then(|job| job.id))
    }

    fn job_text(&self, pick: impl Fn(&JobSummary) -> Option<&String>) -> FieldValue {
        FieldValue::from_opt_str(self.job.as_ref().and_then(pick).map(String::as_str))
    }
}

impl Record for Application {
    fn resource_name() -> &'static str {
        "applications"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields() -> &'static [&'static str] {
        &["title", fields::COMPANY, "applicant", "email"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            fields::STATUS => FieldValue::from_opt_str(self.status.as_deref()),
            "title" => self.job_text(|job| job.title.as_ref()),
            fields::COMPANY => self.job_text(|job| job.company.as_ref()),
            fields::LOCATION => self.job_text(|job| job.location.as_ref()),
            fields::JOB_TYPE => self.job_text(|job| job.job_type.as_ref()),
            "department" => self.job_text(|job| job.department.as_ref()),
            fields::SALARY => FieldValue::from_opt_i64(
                self.job
                    .as_ref()
                    .and_then(|job| job.salary_min.or(job.salary_max)),
            ),
            "applicant" => FieldValue::from_opt_str(self.applicant_name()),
            "email" => FieldValue::from_opt_str(
                self.user.as_ref().and_then(|user| user.email.as_deref()),
            ),
            "cover_letter" => FieldValue::from_opt_str(self.cover_letter.as_deref()),
            "applied_at" => self
                .applied_at
                .map(FieldValue::DateTime)
                .unwrap_or(FieldValue::Null),
            _ => return None,
        };
        Some(value)
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.applied_at
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn sort_label(&self) -> Option<&str> {
        self.company()
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::view::format::{format_date, format_status};

        match (self.job_title(), self.target_job_id()) {
            (Some(title), _) => write!(f, "{}", title)?,
            (None, Some(job_id)) => write!(f, "Job #{}", job_id)?,
            (None, None) => write!(f, "Application #{}", self.id)?,
        }
        write!(f, " [{}]", format_status(self.status.as_deref().unwrap_or("submitted")))?;
        if let Some(company) = self.company() {
            write!(f, " | {}", company)?;
        }
        if let Some(name) = self.applicant_name() {
            write!(f, " | {}", name)?;
        }
        if let Some(applied) = self.applied_at {
            write!(f, " | Applied: {}", format_date(&applied))?;
        }
        Ok(())
    }
}

/// Body of `POST /api/applications/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewApplication {
    pub job_id: i64,
    pub cover_letter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl NewApplication {
    /// Build from raw form input; blank optional text is dropped
    pub fn new(job_id: i64, cover_letter: &str, additional_info: &str) -> Self {
        let additional_info = additional_info.trim();
        Self {
            job_id,
            cover_letter: cover_letter.trim().to_string(),
            additional_info: (!additional_info.is_empty()).then(|| additional_info.to_string()),
        }
    }
}

/// Body of `PATCH /api/admin/applications/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_my_application() {
        let app: Application = serde_json::from_value(json!({
            "id": 12,
            "job_id": 3,
            "cover_letter": "Hello",
            "additional_info": null,
            "status": "in_review",
            "applied_at": "2024-03-04T08:00:00+00:00",
            "updated_at": null,
            "job": {
                "id": 3,
                "title": "Data Engineer",
                "company": "Meta",
                "location": "Remote",
                "department": "Data",
                "job_type": "Contract",
                "salary_min": 90000,
                "salary_max": null,
                "description": "Pipelines"
            }
        }))
        .unwrap();

        assert_eq!(app.status(), Some("in_review"));
        assert_eq!(app.sort_label(), Some("Meta"));
        assert_eq!(app.salary(), Some(90_000));
        assert_eq!(app.text_of(fields::JOB_TYPE).as_deref(), Some("contract"));
        assert!(app.applied_at.is_some());
        assert_eq!(app.updated_at, None);
    }

    #[test]
    fn test_deserialize_admin_application() {
        let app: Application = serde_json::from_value(json!({
            "id": 5,
            "status": "interview",
            "applied_at": "2024-03-04T08:00:00",
            "cover_letter": "Hi",
            "user": { "id": 2, "name": "Ada Lovelace", "email": "ada@example.com", "phone": "5551234567" },
            "job": { "id": 9, "title": "Analyst", "company": "N/A", "department": null, "location": "NYC" }
        }))
        .unwrap();

        assert_eq!(app.applicant_name(), Some("Ada Lovelace"));
        assert_eq!(app.target_job_id(), Some(9));
        assert_eq!(app.salary(), None);
        assert_eq!(app.text_of("applicant").as_deref(), Some("ada lovelace"));
    }

    #[test]
    fn test_missing_job_is_tolerated() {
        let app: Application =
            serde_json::from_value(json!({ "id": 1, "job_id": 4, "job": null })).unwrap();
        assert_eq!(app.sort_label(), None);
        assert_eq!(app.field_value("title"), Some(FieldValue::Null));
        assert_eq!(app.to_string(), "Job #4 [Submitted]");
    }

    #[test]
    fn test_new_application_trims_input() {
        let body = NewApplication::new(3, "  I'd love to join  ", "   ");
        assert_eq!(body.cover_letter, "I'd love to join");
        assert_eq!(body.additional_info, None);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "job_id": 3, "cover_letter": "I'd love to join" })
        );
    }
}
