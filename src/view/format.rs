//! Display formatting shared by the record cards and the text renderer

use chrono::{DateTime, Utc};

/// Format a salary range in thousands
///
/// ```
/// use jobboard::view::format::format_salary;
///
/// assert_eq!(format_salary(Some(120_000), Some(150_000)).as_deref(), Some("$120K - $150K"));
/// assert_eq!(format_salary(Some(50_000), None).as_deref(), Some("$50K+"));
/// assert_eq!(format_salary(None, Some(80_000)).as_deref(), Some("Up to $80K"));
/// assert_eq!(format_salary(None, None), None);
/// ```
pub fn format_salary(min: Option<i64>, max: Option<i64>) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) => Some(format!("{} - {}", thousands(min), thousands(max))),
        (Some(min), None) => Some(format!("{}+", thousands(min))),
        (None, Some(max)) => Some(format!("Up to {}", thousands(max))),
        (None, None) => None,
    }
}

fn thousands(amount: i64) -> String {
    format!("${}K", amount / 1000)
}

/// Human label for a status value ("in_review" -> "In Review")
pub fn format_status(status: &str) -> String {
    status
        .split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Short date, e.g. "Jan 5, 2024"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
