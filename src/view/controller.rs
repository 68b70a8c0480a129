//! List view controller
//!
//! Owns the fetched collection together with the user's filter criteria
//! and sort key. Every mutation goes through one method, after which the
//! view state is recomputed and handed to the render adapter:
//!
//! ```text
//! view_state = sort(filter(records, criteria), sort_key)
//! ```
//!
//! Fetches are tagged with a [`FetchTicket`]. Only the most recently
//! dispatched fetch may replace the records; responses to older tickets
//! are dropped, whether they succeeded or failed.

use crate::client::sources::RecordSource;
use crate::config::ClientConfig;
use crate::core::error::ClientError;
use crate::core::filter::filter;
use crate::core::query::{ExperienceLevel, FilterCriteria, SalaryBucket, SortKey};
use crate::core::record::Record;
use crate::core::sort::sort;
use crate::core::stats::{Counters, StatusBucket, summarize};
use crate::view::render::RenderAdapter;

/// A user action on the list controls
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Free-text search box; blank clears
    Search(String),
    /// Status dropdown; `None`, blank and "all" clear
    Status(Option<String>),
    /// Location dropdown; `None`, blank and "all" clear
    Location(Option<String>),
    /// Job-type checkbox
    ToggleJobType(String),
    /// Experience dropdown; unknown values clear
    Experience(Option<String>),
    /// Salary dropdown; unknown values clear
    Salary(Option<String>),
    /// Sort dropdown; unknown values select the default ordering
    Sort(String),
    /// "Clear filters" button; the sort key is kept
    ClearFilters,
}

/// Identifies one dispatched fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The records were replaced
    Applied,
    /// The fetch failed; the previous records were kept
    Failed,
    /// A newer fetch was dispatched (or the view was cleared) meanwhile
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// Nothing fetched yet, or cleared
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The latest fetch failed
    Failed(ClientError),
}

pub struct ViewController<R: Record, A: RenderAdapter<R>> {
    records: Vec<R>,
    criteria: FilterCriteria,
    sort_key: SortKey,
    default_sort: SortKey,
    buckets: Vec<StatusBucket>,
    counters: Counters,
    load_state: LoadState,
    last_ticket: u64,
    in_flight: Option<FetchTicket>,
    adapter: A,
}

impl<R: Record, A: RenderAdapter<R>> ViewController<R, A> {
    /// Controller using the configured counters and default ordering
    pub fn new(config: &ClientConfig, adapter: A) -> Self {
        Self::with_buckets(config.counter_buckets.clone(), config.default_sort, adapter)
    }

    pub fn with_buckets(buckets: Vec<StatusBucket>, default_sort: SortKey, adapter: A) -> Self {
        let counters = summarize::<R>(&[], &buckets);
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::default(),
            sort_key: default_sort,
            default_sort,
            buckets,
            counters,
            load_state: LoadState::Idle,
            last_ticket: 0,
            in_flight: None,
            adapter,
        }
    }

    // === State ===

    /// The filtered and sorted records, recomputed on every call
    pub fn view_state(&self) -> Vec<R> {
        sort(&filter(&self.records, &self.criteria), self.sort_key)
    }

    /// Counters over the full collection, independent of the filters
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    // === User interaction ===

    pub fn on_interaction(&mut self, interaction: Interaction) {
        tracing::debug!(resource = R::resource_name(), ?interaction, "interaction");
        match interaction {
            Interaction::Search(query) => self.criteria.set_search(&query),
            Interaction::Status(status) => self.criteria.set_status(status.as_deref()),
            Interaction::Location(location) => self.criteria.set_location(location.as_deref()),
            Interaction::ToggleJobType(job_type) => self.criteria.toggle_job_type(&job_type),
            Interaction::Experience(level) => {
                self.criteria.experience = level.as_deref().and_then(ExperienceLevel::parse);
            }
            Interaction::Salary(bucket) => {
                self.criteria.salary = bucket.as_deref().and_then(SalaryBucket::parse);
            }
            Interaction::Sort(key) => self.sort_key = SortKey::parse(&key),
            Interaction::ClearFilters => self.criteria.clear(),
        }
        self.rerender();
    }

    /// Restore the default criteria and ordering
    pub fn reset(&mut self) {
        self.criteria.clear();
        self.sort_key = self.default_sort;
        self.rerender();
    }

    // === Data ===

    /// Register a new fetch; any fetch still in flight becomes stale
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.last_ticket += 1;
        let ticket = FetchTicket(self.last_ticket);
        if let Some(previous) = self.in_flight.replace(ticket) {
            tracing::debug!(
                resource = R::resource_name(),
                superseded = previous.value(),
                "fetch superseded"
            );
        }
        tracing::debug!(resource = R::resource_name(), ticket = ticket.value(), "fetch dispatched");
        self.load_state = LoadState::Loading;
        self.adapter.render_loading();
        ticket
    }

    /// Deliver the result of a fetch
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<R>, ClientError>,
    ) -> FetchOutcome {
        if self.in_flight != Some(ticket) {
            tracing::info!(
                resource = R::resource_name(),
                ticket = ticket.value(),
                latest = self.last_ticket,
                ok = result.is_ok(),
                "discarding stale fetch response"
            );
            return FetchOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(records) => {
                tracing::debug!(
                    resource = R::resource_name(),
                    ticket = ticket.value(),
                    count = records.len(),
                    "fetch applied"
                );
                self.apply_records(records);
                FetchOutcome::Applied
            }
            Err(error) => {
                tracing::warn!(
                    resource = R::resource_name(),
                    ticket = ticket.value(),
                    code = error.error_code(),
                    "fetch failed: {}",
                    error
                );
                self.adapter.render_error(&error);
                self.load_state = LoadState::Failed(error);
                FetchOutcome::Failed
            }
        }
    }

    /// Fetch from a source and apply the result
    pub async fn refresh<S>(&mut self, source: &S) -> FetchOutcome
    where
        S: RecordSource<R> + ?Sized,
    {
        let ticket = self.begin_fetch();
        let result = source.fetch().await;
        self.complete_fetch(ticket, result)
    }

    /// Replace the records directly, outside the fetch cycle
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.apply_records(records);
    }

    /// Drop the records (logout or navigation); pending fetches become stale
    pub fn clear(&mut self) {
        self.in_flight = None;
        self.records = Vec::new();
        self.counters = summarize(&self.records, &self.buckets);
        self.load_state = LoadState::Idle;
        self.rerender();
    }

    fn apply_records(&mut self, records: Vec<R>) {
        self.counters = summarize(&records, &self.buckets);
        self.records = records;
        self.load_state = LoadState::Loaded;
        self.rerender();
    }

    fn rerender(&mut self) {
        let view = self.view_state();
        self.adapter.render(&view, &self.counters);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use chrono::{DateTime, Utc};

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: i64,
        status: &'static str,
    }

    impl Record for Item {
        fn resource_name() -> &'static str {
            "items"
        }
        fn id(&self) -> i64 {
            self.id
        }
        fn search_fields() -> &'static [&'static str] {
            &["status"]
        }
        fn field_value(&self, field: &str) -> Option<FieldValue> {
            (field == "status").then(|| FieldValue::String(self.status.to_string()))
        }
        fn timestamp(&self) -> Option<DateTime<Utc>> {
            None
        }
        fn status(&self) -> Option<&str> {
            Some(self.status)
        }
    }

    /// Records every call so the tests can assert on render traffic
    #[derive(Default)]
    struct Recorder {
        renders: Vec<Vec<i64>>,
        loading: usize,
        errors: Vec<String>,
    }

    impl RenderAdapter<Item> for Recorder {
        fn render(&mut self, view: &[Item], _counters: &Counters) {
            self.renders.push(view.iter().map(|item| item.id).collect());
        }
        fn render_loading(&mut self) {
            self.loading += 1;
        }
        fn render_error(&mut self, error: &ClientError) {
            self.errors.push(error.error_code().to_string());
        }
    }

    fn controller() -> ViewController<Item, Recorder> {
        ViewController::with_buckets(
            vec![StatusBucket::single("open")],
            SortKey::Newest,
            Recorder::default(),
        )
    }

    fn items(ids: &[i64]) -> Vec<Item> {
        ids.iter().map(|&id| Item { id, status: "open" }).collect()
    }

    #[test]
    fn test_interaction_rerenders() {
        let mut ctl = controller();
        ctl.replace_records(vec![
            Item { id: 1, status: "open" },
            Item { id: 2, status: "closed" },
        ]);
        ctl.on_interaction(Interaction::Status(Some("closed".into())));
        assert_eq!(ctl.adapter().renders.last(), Some(&vec![2]));
        assert_eq!(ctl.counters().total, 2);
        assert_eq!(ctl.counters().get("open"), 1);

        ctl.on_interaction(Interaction::ClearFilters);
        assert_eq!(ctl.adapter().renders.last(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let mut ctl = controller();
        ctl.on_interaction(Interaction::Sort("sideways".into()));
        assert_eq!(ctl.sort_key(), SortKey::Newest);
        ctl.on_interaction(Interaction::Salary(Some("lots".into())));
        assert_eq!(ctl.criteria().salary, None);
        ctl.on_interaction(Interaction::Experience(Some("senior".into())));
        assert_eq!(ctl.criteria().experience, Some(ExperienceLevel::Senior));
    }

    #[test]
    fn test_latest_ticket_wins() {
        let mut ctl = controller();
        let first = ctl.begin_fetch();
        let second = ctl.begin_fetch();
        assert!(second > first);

        assert_eq!(ctl.complete_fetch(second, Ok(items(&[2]))), FetchOutcome::Applied);
        assert_eq!(ctl.complete_fetch(first, Ok(items(&[1]))), FetchOutcome::Stale);
        assert_eq!(ctl.records(), items(&[2]).as_slice());
        assert_eq!(ctl.adapter().loading, 2);
    }

    #[test]
    fn test_failure_keeps_previous_records() {
        let mut ctl = controller();
        let ticket = ctl.begin_fetch();
        ctl.complete_fetch(ticket, Ok(items(&[1, 2])));

        let ticket = ctl.begin_fetch();
        let outcome = ctl.complete_fetch(
            ticket,
            Err(ClientError::Network {
                message: "refused".into(),
            }),
        );
        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(matches!(ctl.load_state(), LoadState::Failed(_)));
        assert_eq!(ctl.records().len(), 2);
        assert_eq!(ctl.adapter().errors, vec!["NETWORK_ERROR".to_string()]);
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut ctl = controller();
        let old = ctl.begin_fetch();
        let new = ctl.begin_fetch();
        let outcome = ctl.complete_fetch(old, Err(ClientError::from_status(500, "items", None)));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(ctl.load_state(), &LoadState::Loading);
        assert_eq!(ctl.complete_fetch(new, Ok(items(&[3]))), FetchOutcome::Applied);
        assert!(ctl.adapter().errors.is_empty());
    }

    #[test]
    fn test_clear_invalidates_in_flight_fetch() {
        let mut ctl = controller();
        let ticket = ctl.begin_fetch();
        ctl.clear();
        assert_eq!(ctl.complete_fetch(ticket, Ok(items(&[1]))), FetchOutcome::Stale);
        assert!(ctl.records().is_empty());
        assert_eq!(ctl.load_state(), &LoadState::Idle);
        assert_eq!(ctl.counters().get("open"), 0);
    }

    #[test]
    fn test_ticket_completes_once() {
        let mut ctl = controller();
        let ticket = ctl.begin_fetch();
        assert_eq!(ctl.complete_fetch(ticket, Ok(items(&[1]))), FetchOutcome::Applied);
        assert_eq!(ctl.complete_fetch(ticket, Ok(items(&[9]))), FetchOutcome::Stale);
        assert_eq!(ctl.records(), items(&[1]).as_slice());
    }

    #[test]
    fn test_adapter_mut_reaches_the_renderer() {
        let mut ctl = controller();
        ctl.replace_records(items(&[1, 2]));
        assert_eq!(ctl.adapter().renders.len(), 1);

        ctl.adapter_mut().renders.clear();
        ctl.on_interaction(Interaction::Sort("oldest".into()));
        assert_eq!(ctl.adapter().renders, vec![vec![1, 2]]);
    }
}
