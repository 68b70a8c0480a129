//! # Job Board Client Core
//!
//! Typed records, a REST client and the list view machinery behind a
//! job-board UI (applicant dashboard, job listing, admin dashboard).
//!
//! ## Features
//!
//! - **Record Abstraction**: jobs, applications, users and companies behind one `Record` trait
//! - **Filter Engine**: independent criteria combined with logical AND
//! - **Sort Engine**: stable orderings by date, company, salary or status priority
//! - **Derived Counters**: configurable status buckets over the full collection
//! - **View Controller**: one mutation point, latest-dispatched fetch wins
//! - **REST Client**: async `reqwest` client with an in-memory bearer session
//! - **Form Validation**: registration, login, profile and application forms
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jobboard::prelude::*;
//!
//! let config = ClientConfig::from_yaml_file("jobboard.yaml")?;
//! let client = ApiClient::new(&config)?;
//! client.login(&LoginRequest { email, password }).await?;
//!
//! let mut dashboard = ViewController::<Application, _>::new(&config, TextRenderer::new());
//! dashboard.refresh(&MyApplicationsSource::new(client.clone())).await;
//!
//! dashboard.on_interaction(Interaction::Status(Some("interview".into())));
//! dashboard.on_interaction(Interaction::Sort("status".into()));
//! println!("{}", dashboard.adapter().frame());
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod entities;
pub mod logging;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ClientError, FieldValidationError, ValidationError},
        field::{FieldFormat, FieldValue},
        filter::filter,
        query::{ApplicationStatus, ExperienceLevel, FilterCriteria, SalaryBucket, SortKey},
        record::{Record, fields},
        sort::sort,
        stats::{Counters, StatusBucket, summarize},
        validation::{PasswordRequirements, PasswordStrength, Validate},
    };

    // === Records ===
    pub use crate::entities::{
        AdminStats, Application, Company, Job, LoginRequest, NewApplication, ProfileUpdate,
        RegisterRequest, TokenResponse, User,
    };

    // === Client ===
    pub use crate::client::{
        AdminApplicationsSource, AdminCompaniesSource, AdminJobsSource, AdminUsersSource,
        ApiClient, JobsSource, MyApplicationsSource, RecordSource, Session, StaticSource,
    };

    // === View ===
    pub use crate::view::{
        FetchOutcome, FetchTicket, Interaction, LoadState, RenderAdapter, TextRenderer,
        ViewController,
    };

    // === Config ===
    pub use crate::config::ClientConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
