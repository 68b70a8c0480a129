//! Users, authentication payloads and admin statistics

use crate::core::field::FieldValue;
use crate::core::record::{Record, fields};
use crate::entities::{default_true, timestamp};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user from `/api/users/me` or `/api/admin/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// Provided by the admin listing; derived otherwise
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub is_admin: bool,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub application_count: Option<u32>,

    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub latest_application: Option<DateTime<Utc>>,
}

impl User {
    pub fn display_name(&self) -> String {
        match &self.full_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_string(),
        }
    }

    /// Uppercase first letter of the first name, for avatars
    pub fn initial(&self) -> Option<char> {
        self.first_name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
    }

    fn status_str(&self) -> &'static str {
        match (self.is_active, self.is_admin) {
            (false, _) => "inactive",
            (true, true) => "admin",
            (true, false) => "active",
        }
    }
}

impl Record for User {
    fn resource_name() -> &'static str {
        "users"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "email"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "name" => FieldValue::String(self.display_name()),
            "email" => FieldValue::String(self.email.clone()),
            "phone" => FieldValue::from_opt_str(self.phone.as_deref()),
            "status" => FieldValue::String(self.status_str().to_string()),
            "is_admin" => FieldValue::Boolean(self.is_admin),
            fields::APPLICATION_COUNT => {
                FieldValue::from_opt_i64(self.application_count.map(i64::from))
            }
            _ => return None,
        };
        Some(value)
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn status(&self) -> Option<&str> {
        Some(self.status_str())
    }

    fn sort_label(&self) -> Option<&str> {
        Some(self.last_name.as_str()).filter(|name| !name.is_empty())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.display_name(), self.email)?;
        if self.is_admin {
            write!(f, " (admin)")?;
        }
        if let Some(count) = self.application_count {
            write!(f, " | {} applications", count)?;
        }
        Ok(())
    }
}

/// Body of `POST /api/users/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/users/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Body of `POST /api/users/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Body of `PATCH /api/users/me`; unset fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Comma-separated skill list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl ProfileUpdate {
    /// Join skills the way the profile form submits them
    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.skills = (!skills.is_empty()).then(|| skills.join(", "));
        self
    }
}

/// Response of `GET /api/admin/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminStats {
    pub total_applications: usize,
    pub total_jobs: usize,
    pub total_users: usize,
    pub by_status: IndexMap<String, usize>,
}

impl AdminStats {
    pub fn count_for(&self, status: &str) -> usize {
        self.by_status.get(status).copied().unwrap_or(0)
    }
}
