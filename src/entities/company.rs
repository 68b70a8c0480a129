//! Companies (tenants) managed from the admin dashboard

use crate::core::field::FieldValue;
use crate::core::record::{Record, fields};
use crate::entities::{default_true, timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyStatistics {
    pub user_count: u32,
    pub job_count: u32,
    pub active_job_count: u32,
    pub application_count: u32,
}

/// A company from `/api/admin/companies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub domain: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub industry: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub headquarters: Option<String>,

    /// "Small", "Medium", "Large", "Enterprise"
    #[serde(default)]
    pub size: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub statistics: CompanyStatistics,
}

impl Record for Company {
    fn resource_name() -> &'static str {
        "companies"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "domain", "industry"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "name" => FieldValue::String(self.name.clone()),
            "domain" => FieldValue::from_opt_str(self.domain.as_deref()),
            "industry" => FieldValue::from_opt_str(self.industry.as_deref()),
            "size" => FieldValue::from_opt_str(self.size.as_deref()),
            fields::LOCATION => FieldValue::from_opt_str(self.headquarters.as_deref()),
            fields::STATUS => FieldValue::String(self.status_str().to_string()),
            "job_count" => FieldValue::Integer(i64::from(self.statistics.job_count)),
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
        Some(self.name.as_str())
    }
}

impl Company {
    fn status_str(&self) -> &'static str {
        if self.is_active { "active" } else { "inactive" }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(industry) = &self.industry {
            write!(f, " ({})", industry)?;
        }
        write!(
            f,
            " | {} users | {}/{} active jobs | {} applications",
            self.statistics.user_count,
            self.statistics.active_job_count,
            self.statistics.job_count,
            self.statistics.application_count
        )
    }
}
