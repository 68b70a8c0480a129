//! Integration tests for configuration loading

use jobboard::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
api_base_url: https://jobs.example.com/
default_sort: status
counter_buckets:
  - name: pending
    statuses: [submitted, in_review]
  - name: interview
    statuses: [interview]
"#,
    );

    let config = ClientConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.default_sort, SortKey::Status);
    assert_eq!(config.counter_buckets.len(), 2);

    let client = ApiClient::new(&config).unwrap();
    assert_eq!(client.base_url(), "https://jobs.example.com");
}

#[test]
fn test_missing_file_reports_path() {
    let err = ClientConfig::from_yaml_file("/nonexistent/jobboard.yaml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/jobboard.yaml"));
}

#[test]
fn test_malformed_yaml_is_rejected() {
    let file = write_config("counter_buckets: [unterminated\n");
    assert!(ClientConfig::from_yaml_file(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_unknown_sort_key_in_file_is_rejected() {
    let file = write_config("default_sort: sideways\n");
    assert!(ClientConfig::from_yaml_file(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = write_config("{}\n");
    let config = ClientConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config, ClientConfig::default_config());
}

#[test]
fn test_bucket_grouping_drives_counters() {
    let config = ClientConfig::from_yaml_str(
        r#"
counter_buckets:
  - { name: open, statuses: [submitted, in_review, interview] }
  - { name: closed, statuses: [accepted, rejected] }
"#,
    )
    .unwrap();

    let records: Vec<Application> = ["submitted", "interview", "rejected", "withdrawn"]
        .iter()
        .enumerate()
        .map(|(i, status)| {
            serde_json::from_value(serde_json::json!({ "id": i, "status": status })).unwrap()
        })
        .collect();

    let counters = summarize(&records, &config.counter_buckets);
    assert_eq!(counters.total, 4);
    assert_eq!(counters.get("open"), 2);
    assert_eq!(counters.get("closed"), 1);
}
