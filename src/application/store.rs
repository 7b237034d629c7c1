use crate::domain::payment::PaymentRecord;
use crate::domain::ports::PaymentSource;
use crate::error::{PaymentError, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Lifecycle of the one-shot record load.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    /// The fetch failed; the store is ready and holds no records.
    FailedEmpty,
}

impl LoadState {
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready | Self::FailedEmpty)
    }
}

#[derive(Debug, Default)]
struct StoreState {
    load_state: LoadState,
    records: Vec<PaymentRecord>,
}

/// Holds the loaded payment records.
///
/// Uses `Arc<RwLock<..>>` so a cloned handle can observe `Loading` while
/// another task is awaiting the source.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    state: Arc<RwLock<StoreState>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load_state(&self) -> LoadState {
        self.state.read().await.load_state
    }

    pub async fn is_loading(&self) -> bool {
        self.load_state().await == LoadState::Loading
    }

    /// Snapshot of the current records. Empty until the load has settled.
    pub async fn records(&self) -> Vec<PaymentRecord> {
        self.state.read().await.records.clone()
    }

    /// Fetches the records from `source` exactly once.
    ///
    /// Any failure is logged and settles the store as `FailedEmpty`; the
    /// store never stays in `Loading`. Calls after the first are ignored.
    pub async fn load(&self, source: &dyn PaymentSource) -> LoadState {
        {
            let mut state = self.state.write().await;
            if state.load_state != LoadState::Idle {
                log::warn!("payment load already attempted (state: {:?}), ignoring", state.load_state);
                return state.load_state;
            }
            state.load_state = LoadState::Loading;
        }
        let mut guard = SettleOnDrop {
            state: Some(Arc::clone(&self.state)),
        };
        log::debug!("loading payments");

        let fetched = source.fetch().await.and_then(|records| {
            ensure_unique_ids(&records)?;
            Ok(records)
        });

        let mut state = self.state.write().await;
        match fetched {
            Ok(records) => {
                log::info!("loaded {} payments", records.len());
                state.records = records;
                state.load_state = LoadState::Ready;
            }
            Err(e) => {
                log::error!("Error fetching payments: {e}");
                state.records.clear();
                state.load_state = LoadState::FailedEmpty;
            }
        }
        guard.disarm();
        state.load_state
    }
}

/// Settles a load whose future was dropped before it finished (timeout,
/// aborted task, torn-down view) as `FailedEmpty`.
struct SettleOnDrop {
    state: Option<Arc<RwLock<StoreState>>>,
}

impl SettleOnDrop {
    fn disarm(&mut self) {
        self.state = None;
    }
}

impl Drop for SettleOnDrop {
    fn drop(&mut self) {
        let Some(state) = self.state.take() else {
            return;
        };
        log::error!("payment load cancelled before it completed");
        match state.try_write() {
            Ok(mut locked) => settle_cancelled(&mut locked),
            Err(_) => {
                // A reader holds the lock right now; settle once it is released.
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    let state = Arc::clone(&state);
                    handle.spawn(async move {
                        settle_cancelled(&mut *state.write().await);
                    });
                }
            }
        };
    }
}

fn settle_cancelled(state: &mut StoreState) {
    if state.load_state == LoadState::Loading {
        state.records.clear();
        state.load_state = LoadState::FailedEmpty;
    }
}

fn ensure_unique_ids(records: &[PaymentRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(PaymentError::DuplicateRecord(record.id.clone()));
        }
    }
    Ok(())
}
