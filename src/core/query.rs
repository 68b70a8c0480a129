//! Filter criteria, sort keys and the enumerations they are built from

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Application lifecycle status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    InReview,
    Interview,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Submitted,
        ApplicationStatus::InReview,
        ApplicationStatus::Interview,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    /// Parse a wire value or its label ("In Review"); unknown values yield `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "submitted" => Some(Self::Submitted),
            "in_review" => Some(Self::InReview),
            "interview" => Some(Self::Interview),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::InReview => "in_review",
            Self::Interview => "interview",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Position in the status ordering: interview first, rejected last
    pub fn rank(&self) -> u8 {
        match self {
            Self::Interview => 1,
            Self::InReview => 2,
            Self::Submitted => 3,
            Self::Accepted => 4,
            Self::Rejected => 5,
        }
    }

    /// Rank of an arbitrary status string; unknown statuses sort last
    pub fn rank_of(raw: Option<&str>) -> u8 {
        raw.and_then(Self::parse)
            .map(|status| status.rank())
            .unwrap_or(u8::MAX)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive salary ranges offered by the job search sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryBucket {
    #[serde(rename = "0-50k")]
    UpTo50k,
    #[serde(rename = "50k-100k")]
    From50kTo100k,
    #[serde(rename = "100k-150k")]
    From100kTo150k,
    #[serde(rename = "150k+")]
    Over150k,
}

impl SalaryBucket {
    /// Parse a bucket label; unknown labels impose no constraint
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "0-50k" => Some(Self::UpTo50k),
            "50k-100k" => Some(Self::From50kTo100k),
            "100k-150k" => Some(Self::From100kTo150k),
            "150k+" => Some(Self::Over150k),
            _ => None,
        }
    }

    /// Inclusive lower and optional inclusive upper bound
    pub fn bounds(&self) -> (i64, Option<i64>) {
        match self {
            Self::UpTo50k => (0, Some(50_000)),
            Self::From50kTo100k => (50_000, Some(100_000)),
            Self::From100kTo150k => (100_000, Some(150_000)),
            Self::Over150k => (150_000, None),
        }
    }

    pub fn contains(&self, salary: i64) -> bool {
        let (low, high) = self.bounds();
        salary >= low && high.is_none_or(|high| salary <= high)
    }
}

/// Experience filter; each level also matches its year range spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "entry" => Some(Self::Entry),
            "mid" => Some(Self::Mid),
            "senior" => Some(Self::Senior),
            "lead" => Some(Self::Lead),
            _ => None,
        }
    }

    /// Substrings (lowercase) accepted for this level
    pub fn markers(&self) -> [&'static str; 2] {
        match self {
            Self::Entry => ["entry", "0-2"],
            Self::Mid => ["mid", "2-5"],
            Self::Senior => ["senior", "5-10"],
            Self::Lead => ["lead", "10+"],
        }
    }

    pub fn matches(&self, experience: &str) -> bool {
        let experience = experience.to_lowercase();
        self.markers()
            .iter()
            .any(|marker| experience.contains(marker))
    }
}

/// Independently toggleable predicates narrowing a list view
///
/// Every field defaults to "unset", which imposes no constraint.
/// Set criteria combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring searched in the record's text fields
    pub search: Option<String>,

    /// Exact (case-insensitive) status match
    pub status: Option<String>,

    /// Exact (case-insensitive) location match
    pub location: Option<String>,

    /// Selected job types (lowercase); empty means all
    pub job_types: BTreeSet<String>,

    pub experience: Option<ExperienceLevel>,

    pub salary: Option<SalaryBucket>,
}

impl FilterCriteria {
    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set or clear the status criterion; "all" and blank clear it
    pub fn set_status(&mut self, status: Option<&str>) {
        self.status = normalize_choice(status);
    }

    /// Set or clear the location criterion; blank or "all" clears it
    pub fn set_location(&mut self, location: Option<&str>) {
        self.location = normalize_choice(location);
    }

    /// Set or clear the free-text search; blank clears it
    pub fn set_search(&mut self, query: &str) {
        let query = query.trim();
        self.search = (!query.is_empty()).then(|| query.to_string());
    }

    /// Toggle one job type in the multi-select set
    pub fn toggle_job_type(&mut self, job_type: &str) {
        let job_type = job_type.trim().to_lowercase();
        if job_type.is_empty() {
            return;
        }
        if !self.job_types.remove(&job_type) {
            self.job_types.insert(job_type);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn normalize_choice(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
        .map(str::to_string)
}

/// The ordering applied to a list view; exactly one is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Timestamp descending
    #[default]
    Newest,
    /// Timestamp ascending
    Oldest,
    /// Company name ascending, locale-aware and case-insensitive
    Company,
    /// Salary descending, missing as zero
    SalaryHigh,
    /// Salary ascending, missing as zero
    SalaryLow,
    /// Application status priority
    Status,
    /// Applicant count descending, missing as zero
    Applicants,
}

impl SortKey {
    /// Parse a sort option; unknown options fall back to the default
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "newest" | "recent" => Self::Newest,
            "oldest" => Self::Oldest,
            "company" => Self::Company,
            "salary-high" => Self::SalaryHigh,
            "salary-low" => Self::SalaryLow,
            "status" => Self::Status,
            "applicants" => Self::Applicants,
            _ => Self::default(),
        }
    }
}
