//! Drill-down navigation: which block is shown, whether the transaction
//! modal is open, and the fetches that move between them.
//!
//! [`NavigationController`] is the only writer of [`NavigationState`]. Each
//! drill-down spawns a fetch into a [`JoinSet`] owned by the controller; the
//! host loop later calls [`NavigationController::poll_completed`] and the
//! controller applies finished fetches one at a time, in the order they
//! resolved.
//!
//! # Overlapping fetches
//!
//! Nothing stops a second drill-down while the first is still loading. By
//! default both fetches run to completion and the one that resolves **last**
//! determines what is on screen, even if it was issued first. Setting
//! [`NavigationConfig::cancel_superseded`] aborts the older fetch of the same
//! kind instead, so the most recent request wins.
//!
//! ```text
//!  open_uncle("a") ──spawn──┐
//!  open_uncle("b") ──spawn──┼──▶ JoinSet ──poll_completed()──▶ NavEvent
//!                           │        (resolution order)
//!  fetch bounded by timeout ┘
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::{self, AbortHandle, JoinError, JoinSet};

use crate::client::DataService;
use crate::constants::DEFAULT_FETCH_TIMEOUT;
use crate::domain::{Block, EntityKind, ExplorerError, FetchFailed, Transaction};

// ============================================================================
// Navigation State
// ============================================================================

/// What the host view renders. Read-only outside this module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    current_block: Option<Block>,
    is_loading: bool,
    is_detail_modal_open: bool,
    current_transaction: Option<Transaction>,
}

impl NavigationState {
    /// The block currently displayed, if one has loaded.
    #[must_use]
    pub fn current_block(&self) -> Option<&Block> {
        self.current_block.as_ref()
    }

    /// `true` while any fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// `true` while the transaction modal is shown over the block.
    #[must_use]
    pub const fn is_detail_modal_open(&self) -> bool {
        self.is_detail_modal_open
    }

    /// The last transaction fetched successfully. Survives closing the modal.
    #[must_use]
    pub fn current_transaction(&self) -> Option<&Transaction> {
        self.current_transaction.as_ref()
    }
}

// ============================================================================
// Configuration & Events
// ============================================================================

/// Tuning for the controller's fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationConfig {
    /// Upper bound on a single fetch; exceeding it is a fetch failure.
    pub fetch_timeout: Duration,
    /// Abort a pending fetch when a newer one of the same kind starts.
    pub cancel_superseded: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            cancel_superseded: false,
        }
    }
}

/// Outcome of applying one resolved fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// A block replaced the current block view.
    BlockShown { block_hash: String },
    /// A transaction was stored and the modal opened.
    TransactionShown { txn_hash: String },
    /// A fetch failed; the state was left consistent and not loading.
    Failed(FetchFailed),
}

/// Result carried back from a fetch task.
#[derive(Debug)]
enum Fetched {
    Block(Result<Block, FetchFailed>),
    Transaction(Result<Transaction, FetchFailed>),
}

#[derive(Debug)]
struct InFlight {
    kind: EntityKind,
    id: String,
    abort: AbortHandle,
}

// ============================================================================
// Navigation Controller
// ============================================================================

/// Owns [`NavigationState`] and every fetch that can change it.
#[derive(Debug)]
pub struct NavigationController<S: DataService> {
    state: NavigationState,
    service: Arc<S>,
    config: NavigationConfig,
    tasks: JoinSet<Fetched>,
    in_flight: HashMap<task::Id, InFlight>,
    latest_block: Option<task::Id>,
    latest_transaction: Option<task::Id>,
}

impl<S: DataService> NavigationController<S> {
    #[must_use]
    pub fn new(service: Arc<S>, config: NavigationConfig) -> Self {
        Self {
            state: NavigationState::default(),
            service,
            config,
            tasks: JoinSet::new(),
            in_flight: HashMap::new(),
            latest_block: None,
            latest_transaction: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Number of fetches spawned and not yet applied.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Initial load of the host view. Same transitions as [`Self::open_uncle`].
    pub fn load_block(&mut self, block_id: &str) -> task::Id {
        self.open_uncle(block_id)
    }

    /// Replace the current block with another one, closing the modal.
    ///
    /// `current_block` is only touched once the fetch succeeds.
    pub fn open_uncle(&mut self, block_id: &str) -> task::Id {
        self.state.is_detail_modal_open = false;
        self.spawn_fetch(EntityKind::Block, block_id)
    }

    /// Fetch a transaction and open it in the modal. Never alters `current_block`.
    ///
    /// Always refetches, even when `current_transaction` already holds `txn_id`.
    pub fn open_transaction(&mut self, txn_id: &str) -> task::Id {
        self.spawn_fetch(EntityKind::Transaction, txn_id)
    }

    /// Hide the modal. `current_transaction` is kept.
    pub fn close_transaction_modal(&mut self) {
        self.state.is_detail_modal_open = false;
    }

    /// Show the last fetched transaction again without a fetch.
    ///
    /// Returns `false` when nothing has been fetched yet.
    pub fn reopen_transaction_modal(&mut self) -> bool {
        if self.state.current_transaction.is_some() {
            self.state.is_detail_modal_open = true;
            true
        } else {
            false
        }
    }

    /// Abort one fetch by the id returned when it was issued.
    ///
    /// Returns `false` if the fetch was already applied.
    pub fn cancel(&mut self, task_id: task::Id) -> bool {
        match self.in_flight.get(&task_id) {
            Some(fetch) => {
                tracing::debug!("Cancelling {} fetch {}", fetch.kind.as_str(), fetch.id);
                fetch.abort.abort();
                true
            }
            None => false,
        }
    }

    /// Abort every fetch and reset to the empty state.
    pub fn teardown(&mut self) {
        self.tasks.abort_all();
        self.tasks = JoinSet::new();
        self.in_flight.clear();
        self.latest_block = None;
        self.latest_transaction = None;
        self.state = NavigationState::default();
    }

    // ========================================================================
    // Applying Results
    // ========================================================================

    /// Apply every fetch that has already resolved, without waiting.
    pub fn poll_completed(&mut self) -> Vec<NavEvent> {
        let mut events = Vec::new();
        while let Some(joined) = self.tasks.try_join_next_with_id() {
            events.extend(self.resolve(joined));
        }
        events
    }

    /// Wait for every in-flight fetch and apply each as it resolves.
    #[cfg(test)]
    pub async fn settle(&mut self) -> Vec<NavEvent> {
        let mut events = Vec::new();
        while let Some(joined) = self.tasks.join_next_with_id().await {
            events.extend(self.resolve(joined));
        }
        events
    }

    fn resolve(&mut self, joined: Result<(task::Id, Fetched), JoinError>) -> Option<NavEvent> {
        let event = match joined {
            Ok((task_id, fetched)) => {
                self.forget(task_id);
                Some(self.apply(fetched))
            }
            Err(err) => {
                let fetch = self.forget(err.id());
                if err.is_cancelled() {
                    None
                } else {
                    tracing::error!("Fetch task failed: {err}");
                    fetch.map(|fetch| {
                        NavEvent::Failed(FetchFailed {
                            kind: fetch.kind,
                            id: fetch.id,
                            reason: "fetch task panicked".to_string(),
                        })
                    })
                }
            }
        };

        self.state.is_loading = !self.in_flight.is_empty();
        event
    }

    fn apply(&mut self, fetched: Fetched) -> NavEvent {
        match fetched {
            Fetched::Block(Ok(block)) => {
                let block_hash = block.block_hash.clone();
                self.state.current_block = Some(block);
                NavEvent::BlockShown { block_hash }
            }
            Fetched::Transaction(Ok(txn)) => {
                let txn_hash = txn.txn_hash.clone();
                self.state.current_transaction = Some(txn);
                self.state.is_detail_modal_open = true;
                NavEvent::TransactionShown { txn_hash }
            }
            Fetched::Block(Err(failed)) | Fetched::Transaction(Err(failed)) => {
                tracing::warn!("{failed}");
                NavEvent::Failed(failed)
            }
        }
    }

    // ========================================================================
    // Task Bookkeeping
    // ========================================================================

    fn spawn_fetch(&mut self, kind: EntityKind, id: &str) -> task::Id {
        if self.config.cancel_superseded
            && let Some(previous) = self.latest_slot(kind).take()
        {
            self.cancel(previous);
        }

        let service = Arc::clone(&self.service);
        let owned_id = id.to_string();
        let limit = self.config.fetch_timeout;

        let abort = match kind {
            EntityKind::Block => self.tasks.spawn(async move {
                let fetch = service.fetch_block(&owned_id);
                Fetched::Block(bounded(limit, kind, &owned_id, fetch).await)
            }),
            EntityKind::Transaction => self.tasks.spawn(async move {
                let fetch = service.fetch_transaction(&owned_id);
                Fetched::Transaction(bounded(limit, kind, &owned_id, fetch).await)
            }),
        };

        let task_id = abort.id();
        tracing::debug!("Fetching {} {id}", kind.as_str());
        self.in_flight.insert(
            task_id,
            InFlight {
                kind,
                id: id.to_string(),
                abort,
            },
        );
        *self.latest_slot(kind) = Some(task_id);
        self.state.is_loading = true;
        task_id
    }

    fn latest_slot(&mut self, kind: EntityKind) -> &mut Option<task::Id> {
        match kind {
            EntityKind::Block => &mut self.latest_block,
            EntityKind::Transaction => &mut self.latest_transaction,
        }
    }

    fn forget(&mut self, task_id: task::Id) -> Option<InFlight> {
        let fetch = self.in_flight.remove(&task_id)?;
        let slot = self.latest_slot(fetch.kind);
        if *slot == Some(task_id) {
            *slot = None;
        }
        Some(fetch)
    }
}

/// Run `fetch` under `limit`, classifying every error as [`FetchFailed`].
async fn bounded<T>(
    limit: Duration,
    kind: EntityKind,
    id: &str,
    fetch: impl Future<Output = Result<T, ExplorerError>>,
) -> Result<T, FetchFailed> {
    let result = match tokio::time::timeout(limit, fetch).await {
        Ok(result) => result,
        Err(_) => Err(ExplorerError::Timeout {
            seconds: limit.as_secs(),
        }),
    };
    result.map_err(|err| FetchFailed::from_error(kind, id, &err))
}
