use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::connection::ConnectionId;

const CONNECTION_NODE_PREFIX: &str = "database://";

/// Opaque identifier for an entry in the database-object navigator tree.
///
/// Connection nodes carry the `database://<connection-id>` scheme; all other
/// node kinds are free-form strings assigned by the navigator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Builds the navigator node id for a connection.
    pub fn for_connection(id: &ConnectionId) -> Self {
        Self(format!("{}{}", CONNECTION_NODE_PREFIX, id.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_connection_node(&self) -> bool {
        self.0.starts_with(CONNECTION_NODE_PREFIX)
    }

    /// Translates a connection node id into the bare connection id.
    ///
    /// Returns `None` for every other node kind.
    pub fn connection_id(&self) -> Option<ConnectionId> {
        self.0
            .strip_prefix(CONNECTION_NODE_PREFIX)
            .map(ConnectionId::from_string)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
