use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::app::ports::{DdlMetadataProvider, MetadataError};
use crate::domain::NodeId;

/// In-memory DDL cache with per-node wakeups.
///
/// The host application fetches DDL text from the server and `publish`es it
/// here; viewers park on `metadata_ready` until their node's slot fills.
/// Eviction clears the stored text but keeps the slot, so a later publish
/// still wakes anyone waiting on the same node.
pub struct DdlStore {
    slots: Mutex<HashMap<NodeId, watch::Sender<Option<String>>>>,
}

impl DdlStore {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Publishes fetched DDL text for a node, waking pending viewers.
    pub fn publish(&self, node_id: &NodeId, ddl: impl Into<String>) -> Result<(), MetadataError> {
        let ddl = ddl.into();
        if ddl.is_empty() {
            return Err(MetadataError::EmptyDdl(node_id.clone()));
        }
        self.slot(node_id).send_replace(Some(ddl));
        Ok(())
    }

    fn slot(&self, node_id: &NodeId) -> watch::Sender<Option<String>> {
        let mut slots = self.slots.lock().expect("ddl store mutex poisoned");
        slots
            .entry(node_id.clone())
            .or_insert_with(|| watch::channel(None).0)
            .clone()
    }
}

impl Default for DdlStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DdlMetadataProvider for DdlStore {
    fn metadata(&self, node_id: &NodeId) -> Option<String> {
        let slots = self.slots.lock().expect("ddl store mutex poisoned");
        slots.get(node_id).and_then(|slot| slot.borrow().clone())
    }

    async fn metadata_ready(&self, node_id: &NodeId) {
        let mut rx = self.slot(node_id).subscribe();
        // Slot senders live as long as the store itself; an Err here means
        // the store is gone and the caller's re-read will come back empty.
        let _ = rx
            .wait_for(|ddl| ddl.as_deref().is_some_and(|text| !text.is_empty()))
            .await;
    }

    fn reset_metadata(&self, node_id: &NodeId) {
        let slots = self.slots.lock().expect("ddl store mutex poisoned");
        if let Some(slot) = slots.get(node_id) {
            slot.send_replace(None);
        }
    }
}
