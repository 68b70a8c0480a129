//! Field value types and format checks

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A polymorphic field value read from a record by name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Build a value from an optional string, mapping `None` to `Null`
    pub fn from_opt_str(value: Option<&str>) -> Self {
        match value {
            Some(s) => FieldValue::String(s.to_string()),
            None => FieldValue::Null,
        }
    }

    /// Build a value from an optional integer, mapping `None` to `Null`
    pub fn from_opt_i64(value: Option<i64>) -> Self {
        value.map(FieldValue::Integer).unwrap_or(FieldValue::Null)
    }

    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    ///
    /// Floats are truncated; strings are not parsed.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            FieldValue::Float(f) if f.is_finite() => Some(*f as i64),
            _ => None,
        }
    }

    /// Get the value as a float if possible
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a timestamp if possible
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Field formats checked by the form validators
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Phone,
    PersonName,
    Custom(Regex),
}

impl FieldFormat {
    /// Check a raw input string against this format
    pub fn matches(&self, input: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(input),
            FieldFormat::Phone => Self::is_valid_phone(input),
            FieldFormat::PersonName => Self::is_valid_name(input),
            FieldFormat::Custom(regex) => regex.is_match(input),
        }
    }

    /// Check a field value; non-string values never match
    pub fn validate(&self, value: &FieldValue) -> bool {
        value.as_string().is_some_and(|s| self.matches(s))
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        EMAIL_REGEX
            .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
            .is_match(email)
    }

    fn is_valid_phone(phone: &str) -> bool {
        // US numbers: 10 digits, or 11 with the country code
        let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
        digits == 10 || digits == 11
    }

    fn is_valid_name(name: &str) -> bool {
        static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = NAME_REGEX
            .get_or_init(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("valid name regex"));
        name.chars().count() >= 2 && regex.is_match(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_string(), Some("test"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_numbers() {
        assert_eq!(FieldValue::Integer(42).as_integer(), Some(42));
        assert_eq!(FieldValue::Integer(42).as_f64(), Some(42.0));
        assert_eq!(FieldValue::Float(99_500.7).as_integer(), Some(99_500));
        assert_eq!(FieldValue::Float(f64::NAN).as_integer(), None);
        assert_eq!(FieldValue::String("42".into()).as_integer(), None);
    }

    #[test]
    fn test_field_value_from_options() {
        assert!(FieldValue::from_opt_str(None).is_null());
        assert_eq!(
            FieldValue::from_opt_str(Some("Remote")).as_string(),
            Some("Remote")
        );
        assert!(FieldValue::from_opt_i64(None).is_null());
        assert_eq!(FieldValue::from_opt_i64(Some(7)).as_integer(), Some(7));
    }

    #[test]
    fn test_field_value_datetime() {
        let now = Utc::now();
        let value = FieldValue::DateTime(now);
        assert_eq!(value.as_datetime(), Some(now));
        assert_eq!(value.as_string(), None);
    }

    #[test]
    fn test_email_format() {
        let format = FieldFormat::Email;
        assert!(format.matches("test@example.com"));
        assert!(format.matches("user.name+tag@example.co.uk"));
        assert!(!format.matches("invalid-email"));
        assert!(!format.matches("has space@example.com"));
        assert!(!format.matches("@example"));
    }

    #[test]
    fn test_phone_format_counts_digits() {
        let format = FieldFormat::Phone;
        assert!(format.matches("(555) 123-4567"));
        assert!(format.matches("+1 555 123 4567"));
        assert!(!format.matches("555-1234"));
        assert!(!format.matches("123456789012"));
    }

    #[test]
    fn test_person_name_format() {
        let format = FieldFormat::PersonName;
        assert!(format.matches("Jo"));
        assert!(format.matches("Mary-Jane O'Neil"));
        assert!(!format.matches("J"));
        assert!(!format.matches("R2D2"));
    }

    #[test]
    fn test_custom_regex_format() {
        let format = FieldFormat::Custom(Regex::new(r"^[A-Z]{3}\d{3}$").unwrap());
        assert!(format.matches("ABC123"));
        assert!(!format.matches("abc123"));
    }

    #[test]
    fn test_validate_rejects_non_string() {
        let format = FieldFormat::Email;
        assert!(format.validate(&FieldValue::String("a@b.io".into())));
        assert!(!format.validate(&FieldValue::Integer(42)));
        assert!(!format.validate(&FieldValue::Null));
    }
}
