use crate::application::store::{LoadState, RecordStore};
use crate::domain::payment::PaymentRecord;
use crate::domain::ports::PaymentSourceBox;
use crate::domain::query::{self, QueryState, SortConfig, SortKey, StatusFilter};
use crate::domain::summary::{self, SummaryTotals};
use crate::error::{PaymentError, Result};
use crate::interfaces::details::PaymentDetails;
use crate::interfaces::export::{DocumentExporterBox, ExportArtifact};

/// State behind the payments page.
///
/// `PaymentsDashboard` receives the view's intents (search, filter, sort,
/// select, export) and derives the summary and the visible list from the
/// record store on every call. Nothing derived is cached.
pub struct PaymentsDashboard {
    source: PaymentSourceBox,
    exporter: DocumentExporterBox,
    store: RecordStore,
    sort: SortConfig,
    query: QueryState,
    selected: Option<String>,
}

impl PaymentsDashboard {
    /// Creates a new `PaymentsDashboard` instance.
    ///
    /// # Arguments
    ///
    /// * `source` - Provider of the payment list.
    /// * `exporter` - Renderer used by `export_record`.
    pub fn new(source: PaymentSourceBox, exporter: DocumentExporterBox) -> Self {
        Self {
            source,
            exporter,
            store: RecordStore::new(),
            sort: SortConfig::default(),
            query: QueryState::default(),
            selected: None,
        }
    }

    /// Handle to the underlying store, e.g. to watch the loading state from
    /// another task.
    pub fn store(&self) -> RecordStore {
        self.store.clone()
    }

    /// Runs the one-shot load. See `RecordStore::load`.
    pub async fn load(&self) -> LoadState {
        self.store.load(self.source.as_ref()).await
    }

    pub async fn is_loading(&self) -> bool {
        self.store.is_loading().await
    }

    pub async fn records(&self) -> Vec<PaymentRecord> {
        self.store.records().await
    }

    /// Totals over every loaded record, independent of search and filter.
    pub async fn summary(&self) -> SummaryTotals {
        summary::summarize(&self.store.records().await)
    }

    /// The filtered and sorted list the view should render.
    pub async fn visible(&self) -> Vec<PaymentRecord> {
        query::apply(&self.store.records().await, &self.sort, &self.query)
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.query.status_filter = filter;
    }

    /// Column header click. Returns the new sort config.
    pub fn sort_by(&mut self, key: SortKey) -> SortConfig {
        self.sort = self.sort.toggled(key);
        self.sort
    }

    /// Opens the detail view for `id`.
    pub async fn select_record(&mut self, id: &str) -> Result<PaymentDetails> {
        let details = self.details(id).await?;
        self.selected = Some(details.id.clone());
        Ok(details)
    }

    /// Details of the currently selected record, if it is still loaded.
    pub async fn selected(&self) -> Option<PaymentDetails> {
        let id = self.selected.as_deref()?;
        self.details(id).await.ok()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Renders the record `id` with the configured exporter.
    pub async fn export_record(&self, id: &str) -> Result<ExportArtifact> {
        let details = self.details(id).await?;
        let artifact = self.exporter.export(&details)?;
        log::info!("exported {} ({} bytes)", artifact.file_name, artifact.bytes.len());
        Ok(artifact)
    }

    async fn details(&self, id: &str) -> Result<PaymentDetails> {
        self.store
            .records()
            .await
            .iter()
            .find(|record| record.id == id)
            .map(PaymentDetails::from)
            .ok_or_else(|| PaymentError::RecordNotFound(id.to_string()))
    }
}
