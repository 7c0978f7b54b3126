//! Dashboard Controller
//!
//! Owns the loaded data, coordinates fetches and re-renders dependent views.
//!
//! ## Staleness
//!
//! Every operation that replaces the transaction list takes a ticket from
//! `list_generation` before it starts fetching. When the response arrives
//! the ticket is compared, under the state lock, against the latest issued
//! one; older responses are dropped. Detail lookups use their own counter.
//! The state lock is never held across an API call.

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

use super::error::{DashboardError, DashboardResult};
use super::events::{Outcome, UiEvent};
use super::view::DashboardView;
use crate::api::{ApiError, DashboardApi};
use crate::config::DisplayConfig;
use crate::model::{FilterCriteria, StatisticsSnapshot, Transaction};
use crate::view::{
    monthly_trend_chart, stat_cards, transaction_rows, type_distribution_chart,
    type_filter_options, ChartBackend, ChartHandle, ChartName, ChartRegistry, DetailView,
    ModalState,
};

/// State mutated only during the synchronous render pass
struct Inner<V, C> {
    view: V,
    charts: C,
    registry: ChartRegistry,
    transactions: Vec<Transaction>,
    statistics: StatisticsSnapshot,
    modal: ModalState,
    /// Operations currently showing the loading indicator
    loading: usize,
    wired: bool,
}

impl<V: DashboardView, C: ChartBackend> Inner<V, C> {
    fn refresh_all(&mut self, display: &DisplayConfig) {
        self.view
            .render_stat_cards(&stat_cards(&self.statistics, display));
        self.render_charts();
        self.render_table(display);
        self.view
            .render_type_filter(&type_filter_options(&self.transactions));
    }

    fn render_charts(&mut self) {
        let specs = [
            type_distribution_chart(&self.statistics),
            monthly_trend_chart(&self.statistics),
        ];
        for spec in &specs {
            self.registry.render(&mut self.charts, spec);
        }
    }

    fn render_table(&mut self, display: &DisplayConfig) {
        self.view
            .render_table(&transaction_rows(&self.transactions, display));
    }

    fn report(&mut self, err: DashboardError) -> DashboardError {
        let message = err.user_message();
        tracing::error!(error = %err, "{}", message);
        self.view.show_error(&message);
        err
    }
}

/// The dashboard's single stateful component
pub struct DashboardController<A, V, C> {
    api: A,
    display: DisplayConfig,
    inner: Mutex<Inner<V, C>>,
    list_generation: AtomicU64,
    detail_generation: AtomicU64,
}

impl<A, V, C> DashboardController<A, V, C>
where
    A: DashboardApi,
    V: DashboardView,
    C: ChartBackend,
{
    /// Create a controller rendering into `view` and `charts`
    pub fn new(api: A, view: V, charts: C, display: DisplayConfig) -> Self {
        Self {
            api,
            display,
            inner: Mutex::new(Inner {
                view,
                charts,
                registry: ChartRegistry::new(),
                transactions: Vec::new(),
                statistics: StatisticsSnapshot::default(),
                modal: ModalState::default(),
                loading: 0,
                wired: false,
            }),
            list_generation: AtomicU64::new(0),
            detail_generation: AtomicU64::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Load everything, then start accepting UI events
    ///
    /// A failed load is reported to the user; the loading indicator is
    /// cleared either way.
    pub async fn initialize(&self) -> DashboardResult<Outcome> {
        self.begin_loading().await;
        let result = self.load_all().await;
        self.inner.lock().await.wired = true;
        self.end_loading().await;

        tracing::info!("Dashboard initialized");
        result
    }

    /// Fetch statistics and the full transaction list together
    ///
    /// Nothing is applied unless both succeed.
    pub async fn load_all(&self) -> DashboardResult<Outcome> {
        let ticket = self.issue(&self.list_generation);
        let unfiltered = FilterCriteria::default();

        let fetched = tokio::try_join!(
            self.api.statistics(),
            self.api.transactions(&unfiltered)
        );

        let mut inner = self.inner.lock().await;
        if !self.is_current(&self.list_generation, ticket) {
            tracing::debug!(ticket, "Discarding superseded dashboard load");
            return Ok(Outcome::Superseded);
        }

        match fetched {
            Ok((statistics, transactions)) => {
                tracing::info!(
                    transactions = transactions.len(),
                    types = statistics.by_type.len(),
                    months = statistics.by_month.len(),
                    "Loaded dashboard data"
                );
                inner.statistics = statistics;
                inner.transactions = transactions;
                inner.refresh_all(&self.display);
                Ok(Outcome::Applied)
            }
            Err(e) => Err(inner.report(DashboardError::DataLoad(e))),
        }
    }

    /// Re-render every view from the current in-memory state
    pub async fn refresh_all(&self) {
        self.inner.lock().await.refresh_all(&self.display);
    }

    /// Search using the current search input; only the table changes
    pub async fn search_transactions(&self) -> DashboardResult<Outcome> {
        let term = self.inner.lock().await.view.search_term();
        let term = term.trim();

        if term.is_empty() {
            return self.reload_table(&FilterCriteria::default()).await;
        }

        self.begin_loading().await;
        let ticket = self.issue(&self.list_generation);
        tracing::debug!(term = %term, ticket, "Searching transactions");
        let result = self
            .api
            .search(term)
            .await
            .map_err(DashboardError::Search);
        let outcome = self.settle_table(ticket, result).await;
        self.end_loading().await;

        outcome
    }

    /// Reload the table with the current filter inputs
    pub async fn apply_filters(&self) -> DashboardResult<Outcome> {
        let criteria = {
            let mut inner = self.inner.lock().await;
            match inner.view.filter_inputs().to_criteria() {
                Ok(criteria) => criteria,
                Err(e) => return Err(inner.report(e.into())),
            }
        };

        self.begin_loading().await;
        let outcome = self.reload_table(&criteria).await;
        self.end_loading().await;

        outcome
    }

    /// Empty all inputs and show the unfiltered list
    pub async fn clear_filters(&self) -> DashboardResult<Outcome> {
        self.inner.lock().await.view.reset_inputs();
        self.reload_table(&FilterCriteria::default()).await
    }

    /// Fetch one transaction and open the detail modal
    pub async fn show_transaction_detail(&self, id: i64) -> DashboardResult<Outcome> {
        let ticket = self.issue(&self.detail_generation);
        let result = self.api.transaction(id).await;

        let mut inner = self.inner.lock().await;
        if !self.is_current(&self.detail_generation, ticket) {
            tracing::debug!(id, ticket, "Discarding superseded detail");
            return Ok(Outcome::Superseded);
        }

        match result {
            Ok(transaction) => {
                let detail = DetailView::from_transaction(&transaction, &self.display);
                inner.view.show_detail(&detail);
                inner.modal.open(detail);
                Ok(Outcome::Applied)
            }
            Err(ApiError::NotFound(_)) => Err(inner.report(DashboardError::NotFound(id))),
            Err(e) => Err(inner.report(DashboardError::Detail(e))),
        }
    }

    /// Hide the detail modal, keeping its contents
    pub async fn close_detail(&self) -> Outcome {
        let mut inner = self.inner.lock().await;
        inner.modal.close();
        inner.view.hide_detail();
        Outcome::Applied
    }

    /// Route a UI event to its operation
    ///
    /// Events that arrive before [`initialize`](Self::initialize) are ignored.
    pub async fn dispatch(&self, event: UiEvent) -> DashboardResult<Outcome> {
        if !self.inner.lock().await.wired {
            tracing::warn!(?event, "Event before initialization, ignoring");
            return Ok(Outcome::Ignored);
        }

        match event {
            UiEvent::Search => self.search_transactions().await,
            UiEvent::ApplyFilters => self.apply_filters().await,
            UiEvent::ClearFilters => self.clear_filters().await,
            UiEvent::ShowDetail(id) => self.show_transaction_detail(id).await,
            UiEvent::CloseDetail | UiEvent::BackdropClick => Ok(self.close_detail().await),
            UiEvent::Reload => {
                self.begin_loading().await;
                let outcome = self.load_all().await;
                self.end_loading().await;
                outcome
            }
        }
    }

    /// Destroy all live charts
    pub async fn shutdown(&self) {
        let mut inner = self.inner.lock().await;
        let Inner {
            registry, charts, ..
        } = &mut *inner;
        registry.clear(charts);
    }

    // ============ Accessors ============

    pub async fn transactions(&self) -> Vec<Transaction> {
        self.inner.lock().await.transactions.clone()
    }

    pub async fn statistics(&self) -> StatisticsSnapshot {
        self.inner.lock().await.statistics.clone()
    }

    pub async fn modal(&self) -> ModalState {
        self.inner.lock().await.modal.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.lock().await.loading > 0
    }

    pub async fn live_chart(&self, name: ChartName) -> Option<ChartHandle> {
        self.inner.lock().await.registry.get(name)
    }

    /// Run `f` against the view, e.g. to edit inputs
    pub async fn with_view<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut self.inner.lock().await.view)
    }

    pub async fn with_charts<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.inner.lock().await.charts)
    }

    // ============ Internals ============

    async fn reload_table(&self, criteria: &FilterCriteria) -> DashboardResult<Outcome> {
        let ticket = self.issue(&self.list_generation);
        tracing::debug!(query = %criteria.query_string(), ticket, "Loading transactions");
        let result = self
            .api
            .transactions(criteria)
            .await
            .map_err(DashboardError::DataLoad);
        self.settle_table(ticket, result).await
    }

    async fn settle_table(
        &self,
        ticket: u64,
        result: DashboardResult<Vec<Transaction>>,
    ) -> DashboardResult<Outcome> {
        let mut inner = self.inner.lock().await;
        if !self.is_current(&self.list_generation, ticket) {
            tracing::debug!(ticket, "Discarding superseded transaction list");
            return Ok(Outcome::Superseded);
        }

        match result {
            Ok(transactions) => {
                tracing::debug!(count = transactions.len(), "Transaction list replaced");
                inner.transactions = transactions;
                inner.render_table(&self.display);
                Ok(Outcome::Applied)
            }
            Err(e) => Err(inner.report(e)),
        }
    }

    fn issue(&self, generation: &AtomicU64) -> u64 {
        generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: &AtomicU64, ticket: u64) -> bool {
        generation.load(Ordering::SeqCst) == ticket
    }

    async fn begin_loading(&self) {
        let mut inner = self.inner.lock().await;
        inner.loading += 1;
        if inner.loading == 1 {
            inner.view.set_loading(true);
        }
    }

    async fn end_loading(&self) {
        let mut inner = self.inner.lock().await;
        inner.loading = inner.loading.saturating_sub(1);
        if inner.loading == 0 {
            inner.view.set_loading(false);
        }
    }
}
