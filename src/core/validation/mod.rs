//! Client-side form validation
//!
//! Forms are checked before any request is sent so that obviously invalid
//! input never reaches the backend. Every failing field is reported, not
//! just the first one.

pub mod validators;

pub use validators::{PasswordRequirements, PasswordStrength};

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::field::FieldFormat;
use crate::entities::{LoginRequest, NewApplication, ProfileUpdate, RegisterRequest};

/// Implemented by request payloads that carry user input
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Collects field errors from a sequence of checks
#[derive(Default)]
struct Checks {
    errors: Vec<FieldValidationError>,
}

impl Checks {
    fn check(
        &mut self,
        field: &str,
        value: &str,
        validator: impl Fn(&str, &str) -> Result<(), String>,
    ) -> &mut Self {
        // one message per field is enough
        if self.errors.iter().any(|e| e.field == field) {
            return self;
        }
        if let Err(message) = validator(field, value) {
            self.errors.push(FieldValidationError::new(field, message));
        }
        self
    }

    fn finish(&mut self) -> Result<(), ValidationError> {
        match ValidationError::from_fields(std::mem::take(&mut self.errors)) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

const EMAIL_MESSAGE: &str = "Please enter a valid email address";
const PHONE_MESSAGE: &str = "Please enter a valid 10-digit phone number";
const NAME_MESSAGE: &str = "Please enter a valid name (min 2 characters)";

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .check("email", &self.email, validators::required())
            .check("email", &self.email, validators::format(FieldFormat::Email, EMAIL_MESSAGE))
            .check("password", &self.password, validators::required())
            .finish()
    }
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .check("first_name", &self.first_name, validators::format(FieldFormat::PersonName, NAME_MESSAGE))
            .check("last_name", &self.last_name, validators::format(FieldFormat::PersonName, NAME_MESSAGE))
            .check("email", &self.email, validators::format(FieldFormat::Email, EMAIL_MESSAGE))
            .check("phone", &self.phone, validators::format(FieldFormat::Phone, PHONE_MESSAGE))
            .check("password", &self.password, validators::min_length(8))
            .finish()
    }
}

impl Validate for NewApplication {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .check("cover_letter", &self.cover_letter, validators::required())
            .finish()
    }
}

impl Validate for ProfileUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::default();
        if let Some(first_name) = &self.first_name {
            checks.check("first_name", first_name, validators::format(FieldFormat::PersonName, NAME_MESSAGE));
        }
        if let Some(last_name) = &self.last_name {
            checks.check("last_name", last_name, validators::format(FieldFormat::PersonName, NAME_MESSAGE));
        }
        if let Some(phone) = &self.phone {
            checks.check("phone", phone, validators::format(FieldFormat::Phone, PHONE_MESSAGE));
        }
        checks.finish()
    }
}
