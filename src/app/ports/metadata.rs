use async_trait::async_trait;
use thiserror::Error;

use crate::domain::NodeId;

/// Cache of DDL text keyed by navigator node, filled by the host application.
#[async_trait]
pub trait DdlMetadataProvider: Send + Sync {
    /// Current DDL text for the node, if any has been published.
    fn metadata(&self, node_id: &NodeId) -> Option<String>;

    /// Resolves the first time the provider holds non-empty DDL for the node.
    ///
    /// Never resolves if no text ever arrives; callers that must not wait
    /// forever are expected to race this against their own cancellation.
    async fn metadata_ready(&self, node_id: &NodeId);

    /// Evicts the cached DDL text for the node.
    fn reset_metadata(&self, node_id: &NodeId);
}

#[derive(Debug, Clone, Error)]
pub enum MetadataError {
    #[error("refusing to publish empty DDL for node {0}")]
    EmptyDdl(NodeId),
}
