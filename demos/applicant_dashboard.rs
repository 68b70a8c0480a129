//! Applicant dashboard in the terminal
//!
//! ```sh
//! # against a running backend
//! JOBBOARD_EMAIL=ada@example.com JOBBOARD_PASSWORD=... \
//!     cargo run --example applicant_dashboard -- jobboard.yaml
//!
//! # with canned data
//! cargo run --example applicant_dashboard
//! ```

use jobboard::prelude::*;
use serde_json::json;

fn sample_applications() -> Result<Vec<Application>> {
    let raw = json!([
        { "id": 1, "status": "interview", "applied_at": "2024-03-04T09:00:00",
          "job": { "id": 7, "title": "Software Engineer", "company": "Meta", "salary_min": 150000, "salary_max": 210000 } },
        { "id": 2, "status": "submitted", "applied_at": "2024-03-10T09:00:00",
          "job": { "id": 9, "title": "Data Engineer", "company": "Acme" } },
        { "id": 3, "status": "rejected", "applied_at": "2024-02-01T09:00:00",
          "job": { "id": 4, "title": "Product Designer", "company": "Zeta" } },
        { "id": 4, "status": "in_review", "applied_at": "2024-03-12T09:00:00",
          "job": { "id": 12, "title": "Site Reliability Engineer", "company": "Beta" } }
    ]);
    Ok(serde_json::from_value(raw)?)
}

fn show(title: &str, dashboard: &ViewController<Application, TextRenderer>) {
    println!("== {} ==\n{}\n", title, dashboard.adapter().frame());
}

#[tokio::main]
async fn main() -> Result<()> {
    jobboard::logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ClientConfig::from_yaml_file(&path)?,
        None => ClientConfig::default_config(),
    };
    let mut dashboard = ViewController::<Application, _>::new(&config, TextRenderer::new());

    let credentials = std::env::var("JOBBOARD_EMAIL")
        .ok()
        .zip(std::env::var("JOBBOARD_PASSWORD").ok());

    let outcome = match credentials {
        Some((email, password)) => {
            let client = ApiClient::new(&config)?;
            client.login(&LoginRequest { email, password }).await?;
            dashboard
                .refresh(&MyApplicationsSource::new(client))
                .await
        }
        None => {
            tracing::info!("no credentials set, using sample applications");
            dashboard
                .refresh(&StaticSource::new(sample_applications()?))
                .await
        }
    };
    tracing::info!(?outcome, "dashboard loaded");
    show("All applications", &dashboard);

    dashboard.on_interaction(Interaction::Sort("status".into()));
    show("By status", &dashboard);

    dashboard.on_interaction(Interaction::Search("engineer".into()));
    show("Search: engineer", &dashboard);

    dashboard.on_interaction(Interaction::Status(Some("rejected".into())));
    show("Engineer roles, rejected", &dashboard);

    dashboard.reset();
    show("Reset", &dashboard);

    Ok(())
}
