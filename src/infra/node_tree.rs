use std::collections::HashMap;
use std::sync::Mutex;

use crate::app::ports::{NodeHierarchy, NodeScope};
use crate::domain::NodeId;

/// What a navigator node represents, as far as scope resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Connection,
    Catalog,
    Schema,
    Object,
}

struct NodeEntry {
    kind: NodeKind,
    parent: Option<NodeId>,
}

/// Navigator tree with parent links, answering ancestor-scope queries.
///
/// Mirrors the object navigator of the host application: nodes are inserted
/// as they are discovered, and `connection_catalog_schema` walks from a node
/// up to the root collecting the nearest node of each scope kind.
pub struct NodeTree {
    nodes: Mutex<HashMap<NodeId, NodeEntry>>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self {
            nodes: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, node_id: NodeId, kind: NodeKind, parent: Option<&NodeId>) {
        let mut nodes = self.nodes.lock().expect("node tree mutex poisoned");
        nodes.insert(
            node_id,
            NodeEntry {
                kind,
                parent: parent.cloned(),
            },
        );
    }
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeHierarchy for NodeTree {
    fn connection_catalog_schema(&self, node_id: &NodeId) -> NodeScope {
        let nodes = self.nodes.lock().expect("node tree mutex poisoned");
        let mut scope = NodeScope::default();
        let mut current = Some(node_id.clone());
        let mut hops = 0;

        while let Some(id) = current {
            // Malformed parent links could cycle; never walk longer than the tree.
            hops += 1;
            if hops > nodes.len() {
                break;
            }
            let Some(entry) = nodes.get(&id) else {
                break;
            };
            match entry.kind {
                NodeKind::Connection if scope.connection.is_none() => {
                    scope.connection = Some(id.clone());
                }
                NodeKind::Catalog if scope.catalog.is_none() => {
                    scope.catalog = Some(id.clone());
                }
                NodeKind::Schema if scope.schema.is_none() => {
                    scope.schema = Some(id.clone());
                }
                _ => {}
            }
            current = entry.parent.clone();
        }

        scope
    }
}
