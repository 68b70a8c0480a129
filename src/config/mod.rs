//! Configuration loading and management

use crate::core::query::SortKey;
use crate::core::stats::StatusBucket;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Client configuration
///
/// ```yaml
/// api_base_url: http://localhost:8000
/// default_sort: status
/// counter_buckets:
///   - name: pending
///     statuses: [in_review, submitted]
///   - name: interview
///     statuses: [interview]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend root; endpoint paths are appended to it
    #[serde(default = "default_base_url")]
    pub api_base_url: String,

    /// Counters shown above the list, in display order
    #[serde(default = "default_buckets")]
    pub counter_buckets: Vec<StatusBucket>,

    /// Ordering applied before the user picks one
    #[serde(default)]
    pub default_sort: SortKey,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_buckets() -> Vec<StatusBucket> {
    vec![
        StatusBucket::new("pending", &["in_review", "submitted"]),
        StatusBucket::single("interview"),
        StatusBucket::single("accepted"),
        StatusBucket::single("rejected"),
    ]
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration of the applicant dashboard
    pub fn default_config() -> Self {
        Self {
            api_base_url: default_base_url(),
            counter_buckets: default_buckets(),
            default_sort: SortKey::default(),
        }
    }

    /// Find a counter bucket by name
    pub fn bucket(&self, name: &str) -> Option<&StatusBucket> {
        self.counter_buckets.iter().find(|bucket| bucket.name == name)
    }

    fn validate(&self) -> Result<()> {
        let base = self.api_base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            anyhow::bail!("api_base_url must be an http(s) URL, got '{}'", self.api_base_url);
        }
        for (i, bucket) in self.counter_buckets.iter().enumerate() {
            if self.counter_buckets[..i].iter().any(|b| b.name == bucket.name) {
                anyhow::bail!("duplicate counter bucket '{}'", bucket.name);
            }
        }
        Ok(())
    }
}
