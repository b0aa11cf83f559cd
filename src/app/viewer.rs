//! Viewer controller for the DDL pane of a single navigator node.
//!
//! `initialize` arms a one-shot trigger that fires as soon as the metadata
//! provider holds DDL text for the node; the load sequence then publishes the
//! text, resolves the connection's SQL dialect, and flips `is_loading` off
//! exactly once. Failures anywhere in the sequence are reported to the
//! notification sink and never propagate to the view layer.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use color_eyre::eyre::{Report, eyre};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::app::ports::{DdlMetadataProvider, NodeHierarchy, NotificationSink, SqlDialectLoader};
use crate::domain::{NodeId, SqlDialectInfo};

const LOAD_FAILURE_LABEL: &str = "Failed to load DDL";

/// Snapshot of the viewer pane state, published through a watch channel.
///
/// "Loading finished with no dialect" is a valid state: it covers both nodes
/// with no owning connection and dialect lookups that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdlViewerState {
    pub is_loading: bool,
    pub metadata: Option<String>,
    pub dialect: Option<SqlDialectInfo>,
}

impl DdlViewerState {
    fn initial() -> Self {
        Self {
            is_loading: true,
            metadata: None,
            dialect: None,
        }
    }
}

pub struct DdlViewerController {
    provider: Arc<dyn DdlMetadataProvider>,
    hierarchy: Arc<dyn NodeHierarchy>,
    dialects: Arc<dyn SqlDialectLoader>,
    notifications: Arc<dyn NotificationSink>,
    state_tx: watch::Sender<DdlViewerState>,
    node_id: Mutex<Option<NodeId>>,
    cancel: CancellationToken,
    evicted: AtomicBool,
}

impl DdlViewerController {
    pub fn new(
        provider: Arc<dyn DdlMetadataProvider>,
        hierarchy: Arc<dyn NodeHierarchy>,
        dialects: Arc<dyn SqlDialectLoader>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        let (state_tx, _) = watch::channel(DdlViewerState::initial());
        Self {
            provider,
            hierarchy,
            dialects,
            notifications,
            state_tx,
            node_id: Mutex::new(None),
            cancel: CancellationToken::new(),
            evicted: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> DdlViewerState {
        self.state_tx.borrow().clone()
    }

    /// Subscribes the view layer to state changes.
    pub fn subscribe(&self) -> watch::Receiver<DdlViewerState> {
        self.state_tx.subscribe()
    }

    /// Stores the node id and arms the one-shot load trigger.
    ///
    /// Returns immediately; the load sequence runs on a spawned task, so this
    /// must be called from within a Tokio runtime. Meant to be called once
    /// per instance; a second call is not guarded against.
    pub fn initialize(&self, node_id: NodeId) {
        *self.node_id.lock().expect("node id mutex poisoned") = Some(node_id.clone());

        let task = LoadTask {
            provider: Arc::clone(&self.provider),
            hierarchy: Arc::clone(&self.hierarchy),
            dialects: Arc::clone(&self.dialects),
            notifications: Arc::clone(&self.notifications),
            state_tx: self.state_tx.clone(),
            node_id,
        };
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {}
                () = task.run() => {}
            }
        });
    }

    /// Cancels any pending load and evicts the provider's cache entry for the
    /// stored node id.
    ///
    /// Safe to call whether or not the load ever started or finished; the
    /// eviction happens at most once across repeated calls and `Drop`.
    pub fn dispose(&self) {
        self.cancel.cancel();
        if self.evicted.swap(true, Ordering::SeqCst) {
            return;
        }
        let node_id = self.node_id.lock().expect("node id mutex poisoned").clone();
        if let Some(node_id) = node_id {
            self.provider.reset_metadata(&node_id);
        }
    }
}

impl Drop for DdlViewerController {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Owned capture of everything the spawned load sequence needs, so the
/// controller itself can be dropped while a load is still in flight.
struct LoadTask {
    provider: Arc<dyn DdlMetadataProvider>,
    hierarchy: Arc<dyn NodeHierarchy>,
    dialects: Arc<dyn SqlDialectLoader>,
    notifications: Arc<dyn NotificationSink>,
    state_tx: watch::Sender<DdlViewerState>,
    node_id: NodeId,
}

impl LoadTask {
    async fn run(self) {
        self.provider.metadata_ready(&self.node_id).await;
        if let Err(report) = self.show_metadata().await {
            self.notifications.log_exception(&report, LOAD_FAILURE_LABEL);
        }
        self.state_tx.send_modify(|state| state.is_loading = false);
    }

    async fn show_metadata(&self) -> Result<(), Report> {
        // The trigger already confirmed availability, but the entry can be
        // evicted between wakeup and read; surface that as a load failure.
        let ddl = self
            .provider
            .metadata(&self.node_id)
            .ok_or_else(|| eyre!("DDL for {} disappeared before it could be read", self.node_id))?;
        self.state_tx.send_modify(|state| state.metadata = Some(ddl));
        self.load_dialect().await
    }

    async fn load_dialect(&self) -> Result<(), Report> {
        let scope = self.hierarchy.connection_catalog_schema(&self.node_id);
        let Some(connection_node) = scope.connection else {
            return Ok(());
        };
        let Some(connection) = connection_node.connection_id() else {
            return Ok(());
        };
        let dialect = self.dialects.load_sql_dialect_info(&connection).await?;
        self.state_tx.send_modify(|state| state.dialect = Some(dialect));
        Ok(())
    }
}
