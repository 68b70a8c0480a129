//! Record sources feeding the view controller
//!
//! A [`RecordSource`] yields a whole collection per call. The controller
//! only sees this trait, so tests can feed it canned data and the HTTP
//! client stays out of the filter/sort path.

use crate::client::api::ApiClient;
use crate::core::error::ClientError;
use crate::core::record::Record;
use crate::entities::{Application, Company, Job, User};
use async_trait::async_trait;

/// Fetches the full collection of one record type
#[async_trait]
pub trait RecordSource<R: Record>: Send + Sync {
    async fn fetch(&self) -> Result<Vec<R>, ClientError>;
}

/// Open job postings (`GET /api/jobs/`)
#[derive(Debug, Clone)]
pub struct JobsSource {
    client: ApiClient,
}

impl JobsSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordSource<Job> for JobsSource {
    async fn fetch(&self) -> Result<Vec<Job>, ClientError> {
        self.client.jobs().await
    }
}

/// The logged-in applicant's applications
#[derive(Debug, Clone)]
pub struct MyApplicationsSource {
    client: ApiClient,
}

impl MyApplicationsSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordSource<Application> for MyApplicationsSource {
    async fn fetch(&self) -> Result<Vec<Application>, ClientError> {
        self.client.my_applications().await
    }
}

/// Every application visible to an admin, optionally narrowed server-side
#[derive(Debug, Clone)]
pub struct AdminApplicationsSource {
    client: ApiClient,
    status: Option<String>,
}

impl AdminApplicationsSource {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            status: None,
        }
    }

    /// Ask the backend for a single status only
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

#[async_trait]
impl RecordSource<Application> for AdminApplicationsSource {
    async fn fetch(&self) -> Result<Vec<Application>, ClientError> {
        self.client.admin_applications(self.status.as_deref()).await
    }
}

#[derive(Debug, Clone)]
pub struct AdminJobsSource {
    client: ApiClient,
}

impl AdminJobsSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordSource<Job> for AdminJobsSource {
    async fn fetch(&self) -> Result<Vec<Job>, ClientError> {
        self.client.admin_jobs().await
    }
}

#[derive(Debug, Clone)]
pub struct AdminUsersSource {
    client: ApiClient,
}

impl AdminUsersSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordSource<User> for AdminUsersSource {
    async fn fetch(&self) -> Result<Vec<User>, ClientError> {
        self.client.admin_users().await
    }
}

#[derive(Debug, Clone)]
pub struct AdminCompaniesSource {
    client: ApiClient,
}

impl AdminCompaniesSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordSource<Company> for AdminCompaniesSource {
    async fn fetch(&self) -> Result<Vec<Company>, ClientError> {
        self.client.admin_companies().await
    }
}

/// Canned collection, for tests and offline demos
#[derive(Debug, Clone, Default)]
pub struct StaticSource<R> {
    records: Vec<R>,
}

impl<R: Record> StaticSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl<R: Record> RecordSource<R> for StaticSource<R> {
    async fn fetch(&self) -> Result<Vec<R>, ClientError> {
        Ok(self.records.clone())
    }
}
