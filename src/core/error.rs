//! Typed errors for the job-board client
//!
//! - [`ClientError`]: everything a backend call or a view refresh can report
//! - [`ValidationError`]: client-side form validation failures
//!
//! Both are cloneable so the view controller can keep the last failure in
//! its load state and hand it to the render adapter.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.my_applications().await {
//!     Ok(applications) => controller.replace_records(applications),
//!     Err(ClientError::Unauthorized { .. }) => redirect_to_login(),
//!     Err(e) => tracing::warn!(code = e.error_code(), "load failed: {}", e),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// The main error type of the client
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("Network error: {message}")]
    Network { message: String },

    /// The response body did not have the expected shape
    #[error("Failed to decode {resource}: {message}")]
    Decode { resource: String, message: String },

    /// 401: missing or expired session token
    #[error("Not authenticated: {message}")]
    Unauthorized { message: String },

    /// 403: authenticated but not allowed (e.g., admin endpoints)
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// 404
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Any other non-success status
    #[error("Request failed with status {code}: {detail}")]
    Status { code: u16, detail: String },

    /// Rejected before sending
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Bad client configuration (e.g., malformed base URL)
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ClientError {
    /// Stable code for programmatic handling and logs
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Network { .. } => "NETWORK_ERROR",
            ClientError::Decode { .. } => "DECODE_ERROR",
            ClientError::Unauthorized { .. } => "UNAUTHORIZED",
            ClientError::Forbidden { .. } => "FORBIDDEN",
            ClientError::NotFound { .. } => "NOT_FOUND",
            ClientError::Status { .. } => "REQUEST_FAILED",
            ClientError::Validation(_) => "VALIDATION_ERROR",
            ClientError::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Whether retrying the same request can reasonably succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network { .. } => true,
            ClientError::Status { code, .. } => *code >= 500,
            _ => false,
        }
    }

    /// Whether the session must be dropped and the user sent to login
    pub fn requires_login(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }

    /// Map an HTTP status and the backend's `detail` message to an error
    pub fn from_status(code: u16, resource: &str, detail: Option<String>) -> Self {
        let detail = detail.unwrap_or_else(|| format!("{} request failed", resource));
        match code {
            401 => ClientError::Unauthorized { message: detail },
            403 => ClientError::Forbidden { message: detail },
            404 => ClientError::NotFound {
                resource: resource.to_string(),
            },
            _ => ClientError::Status { code, detail },
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode {
                resource: err
                    .url()
                    .map(|url| url.path().to_string())
                    .unwrap_or_else(|| "response".to_string()),
                message: err.to_string(),
            }
        } else if err.is_builder() {
            ClientError::Config {
                message: err.to_string(),
            }
        } else {
            ClientError::Network {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode {
            resource: "response".to_string(),
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors related to form input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Single field validation error
    #[error("Validation error for field '{field}': {message}")]
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),
}

impl ValidationError {
    /// Collapse a list of field errors; one error keeps its own variant
    pub fn from_fields(mut errors: Vec<FieldValidationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => {
                let FieldValidationError { field, message } = errors.remove(0);
                Some(ValidationError::FieldError { field, message })
            }
            _ => Some(ValidationError::FieldErrors(errors)),
        }
    }

    /// Names of the offending fields
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::FieldError { field, .. } => vec![field.as_str()],
            ValidationError::FieldErrors(errors) => {
                errors.iter().map(|e| e.field.as_str()).collect()
            }
        }
    }
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_auth_codes() {
        assert!(matches!(
            ClientError::from_status(401, "applications", None),
            ClientError::Unauthorized { .. }
        ));
        assert!(matches!(
            ClientError::from_status(403, "admin stats", Some("Admin access required".into())),
            ClientError::Forbidden { message } if message == "Admin access required"
        ));
        assert_eq!(
            ClientError::from_status(404, "application", None),
            ClientError::NotFound {
                resource: "application".to_string()
            }
        );
    }

    #[test]
    fn test_from_status_keeps_backend_detail() {
        let err = ClientError::from_status(400, "application", Some("Already applied to this job".into()));
        assert_eq!(err.error_code(), "REQUEST_FAILED");
        assert_eq!(
            err.to_string(),
            "Request failed with status 400: Already applied to this job"
        );
    }

    #[test]
    fn test_retryable() {
        assert!(ClientError::Network { message: "refused".into() }.is_retryable());
        assert!(ClientError::from_status(503, "jobs", None).is_retryable());
        assert!(!ClientError::from_status(400, "jobs", None).is_retryable());
        assert!(!ClientError::from_status(401, "jobs", None).is_retryable());
    }

    #[test]
    fn test_requires_login() {
        assert!(ClientError::from_status(401, "jobs", None).requires_login());
        assert!(!ClientError::from_status(403, "jobs", None).requires_login());
    }

    #[test]
    fn test_validation_from_fields() {
        assert_eq!(ValidationError::from_fields(vec![]), None);

        let single = ValidationError::from_fields(vec![FieldValidationError::new("email", "invalid")])
            .unwrap();
        assert!(matches!(single, ValidationError::FieldError { .. }));
        assert_eq!(single.fields(), vec!["email"]);

        let many = ValidationError::from_fields(vec![
            FieldValidationError::new("email", "invalid"),
            FieldValidationError::new("phone", "too short"),
        ])
        .unwrap();
        assert_eq!(many.fields(), vec!["email", "phone"]);
        assert_eq!(
            many.to_string(),
            "Validation errors: email: invalid, phone: too short"
        );
    }

    #[test]
    fn test_validation_converts_into_client_error() {
        let err: ClientError = ValidationError::FieldError {
            field: "cover_letter".into(),
            message: "required".into(),
        }
        .into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
