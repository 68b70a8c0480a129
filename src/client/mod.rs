//! Backend access: HTTP client, session and record sources

pub mod api;
pub mod session;
pub mod sources;

pub use api::{Acknowledgement, ApiClient};
pub use session::Session;
pub use sources::{
    AdminApplicationsSource, AdminCompaniesSource, AdminJobsSource, AdminUsersSource, JobsSource,
    MyApplicationsSource, RecordSource, StaticSource,
};
