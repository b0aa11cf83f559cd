use crate::domain::NodeId;

/// Nearest connection, catalog, and schema ancestors of a navigator node.
///
/// Any of the three may be absent: a free-standing node resolves to an empty
/// scope, and a connection node resolves to itself with no catalog or schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeScope {
    pub connection: Option<NodeId>,
    pub catalog: Option<NodeId>,
    pub schema: Option<NodeId>,
}

/// Read-only queries against the navigator tree.
pub trait NodeHierarchy: Send + Sync {
    fn connection_catalog_schema(&self, node_id: &NodeId) -> NodeScope;
}
