//! REST client for the job-board backend

use crate::client::session::Session;
use crate::config::ClientConfig;
use crate::core::error::{ClientError, ValidationError};
use crate::core::query::ApplicationStatus;
use crate::core::validation::Validate;
use crate::entities::{
    AdminStats, Application, Company, Job, JobStatusUpdate, LoginRequest, NewApplication,
    ProfileUpdate, RegisterRequest, StatusUpdate, TokenResponse, User,
};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Confirmation returned by the admin status-toggle endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Acknowledgement {
    pub message: Option<String>,
    pub status: Option<String>,
    pub is_active: Option<bool>,
}

/// FastAPI error body; `detail` is a string or a list of validation issues
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    fn into_detail(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(detail) => Some(detail),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Async client over the backend endpoints used by the UI
///
/// Requests carry the session's bearer token when one is set. A 401
/// response clears the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_session(config, Session::new())
    }

    /// Build a client sharing an existing session
    pub fn with_session(config: &ClientConfig, session: Session) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        resource: &str,
    ) -> Result<T, ClientError> {
        let response = builder.send().await.inspect_err(|e| {
            tracing::warn!(resource, error = %e, "request failed to complete");
        })?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
                resource: resource.to_string(),
                message: e.to_string(),
            });
        }

        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::into_detail);
        let err = ClientError::from_status(status.as_u16(), resource, detail);
        tracing::warn!(
            resource,
            status = status.as_u16(),
            code = err.error_code(),
            "backend rejected request: {}",
            err
        );
        if err.requires_login() {
            self.session.clear();
        }
        Err(err)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, resource: &str) -> Result<T, ClientError> {
        tracing::debug!(path, "GET");
        self.send(self.request(Method::GET, path), resource).await
    }

    // === Account ===

    /// Exchange credentials for a token and store it in the session
    pub async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ClientError> {
        credentials.validate()?;
        let token: TokenResponse = self
            .send(
                self.request(Method::POST, "/api/users/login").json(credentials),
                "session",
            )
            .await?;
        self.session.set_token(token.access_token.clone());
        tracing::info!(email = %credentials.email, "logged in");
        Ok(token)
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    pub async fn register(&self, form: &RegisterRequest) -> Result<User, ClientError> {
        form.validate()?;
        self.send(
            self.request(Method::POST, "/api/users/register").json(form),
            "user",
        )
        .await
    }

    pub async fn me(&self) -> Result<User, ClientError> {
        self.get("/api/users/me", "user").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ClientError> {
        update.validate()?;
        self.send(
            self.request(Method::PATCH, "/api/users/me").json(update),
            "user",
        )
        .await
    }

    // === Applicant ===

    pub async fn jobs(&self) -> Result<Vec<Job>, ClientError> {
        self.get("/api/jobs/", "jobs").await
    }

    /// Submit an application for a job
    pub async fn apply(&self, application: &NewApplication) -> Result<Application, ClientError> {
        application.validate()?;
        self.send(
            self.request(Method::POST, "/api/applications/").json(application),
            "application",
        )
        .await
    }

    pub async fn my_applications(&self) -> Result<Vec<Application>, ClientError> {
        self.get("/api/applications/me", "applications").await
    }

    // === Admin ===

    pub async fn admin_stats(&self) -> Result<AdminStats, ClientError> {
        self.get("/api/admin/stats", "admin stats").await
    }

    /// All applications, optionally narrowed server-side to one status
    pub async fn admin_applications(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<Application>, ClientError> {
        let mut builder = self.request(Method::GET, "/api/admin/applications");
        if let Some(status) = status.filter(|s| !s.is_empty() && *s != "all") {
            builder = builder.query(&[("status", status)]);
        }
        self.send(builder, "applications").await
    }

    pub async fn update_application_status(
        &self,
        application_id: i64,
        status: &str,
    ) -> Result<Acknowledgement, ClientError> {
        let Some(status) = ApplicationStatus::parse(status) else {
            return Err(ValidationError::FieldError {
                field: "status".to_string(),
                message: format!("Unknown application status '{}'", status),
            }
            .into());
        };
        let body = StatusUpdate {
            status: status.as_str().to_string(),
        };
        let path = format!("/api/admin/applications/{}/status", application_id);
        self.send(self.request(Method::PATCH, &path).json(&body), "application")
            .await
    }

    pub async fn admin_jobs(&self) -> Result<Vec<Job>, ClientError> {
        self.get("/api/admin/jobs", "jobs").await
    }

    /// Activate or deactivate a job posting
    pub async fn set_job_active(
        &self,
        job_id: i64,
        is_active: bool,
    ) -> Result<Acknowledgement, ClientError> {
        let path = format!("/api/admin/jobs/{}/status", job_id);
        self.send(
            self.request(Method::PATCH, &path)
                .json(&JobStatusUpdate { is_active }),
            "job",
        )
        .await
    }

    pub async fn admin_users(&self) -> Result<Vec<User>, ClientError> {
        self.get("/api/admin/users", "users").await
    }

    pub async fn admin_companies(&self) -> Result<Vec<Company>, ClientError> {
        self.get("/api/admin/companies", "companies").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body_detail() {
        let body: ErrorBody = serde_json::from_value(json!({ "detail": "Job not found" })).unwrap();
        assert_eq!(body.into_detail().as_deref(), Some("Job not found"));

        let body: ErrorBody = serde_json::from_value(json!({ "detail": [{ "msg": "field required" }] })).unwrap();
        assert_eq!(body.into_detail().as_deref(), Some(r#"[{"msg":"field required"}]"#));

        let body: ErrorBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(body.into_detail(), None);
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let config = ClientConfig {
            api_base_url: "http://localhost:8000/".to_string(),
            ..ClientConfig::default_config()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_invalid_status_is_rejected_before_sending() {
        let client = ApiClient::new(&ClientConfig::default_config()).unwrap();
        let err = client.update_application_status(1, "hired").await.unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_login_validates_credentials_first() {
        let client = ApiClient::new(&ClientConfig::default_config()).unwrap();
        let err = client
            .login(&LoginRequest {
                email: "nope".into(),
                password: "secret".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(!client.session().is_authenticated());
    }
}
