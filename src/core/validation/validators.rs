//! Reusable field validators
//!
//! Each validator takes the field name and the raw input and returns the
//! user-facing message on failure.

use crate::core::field::FieldFormat;

/// Validator: input must not be blank
pub fn required() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if value.trim().is_empty() {
            Err(format!("'{}' is required", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: input length (in characters) must be at least `min`
pub fn min_length(min: usize) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        let len = value.chars().count();
        if len < min {
            Err(format!(
                "'{}' must be at least {} characters (currently: {})",
                field, min, len
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: input must match a field format
pub fn format(
    format: FieldFormat,
    message: &'static str,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &str| {
        if format.matches(value) {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }
}

/// Password requirements reported by the strength meter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordRequirements {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

impl PasswordRequirements {
    pub fn check(password: &str) -> Self {
        Self {
            length: password.chars().count() >= 8,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    /// Number of met requirements, 0 to 5
    pub fn score(&self) -> u8 {
        [
            self.length,
            self.uppercase,
            self.lowercase,
            self.number,
            self.special,
        ]
        .iter()
        .filter(|met| **met)
        .count() as u8
    }

    pub fn strength(&self) -> PasswordStrength {
        match self.score() {
            0..=2 => PasswordStrength::Weak,
            3 | 4 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}
