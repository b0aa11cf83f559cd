pub mod ddl_store;
pub mod dialect_catalog;
pub mod message_log;
pub mod node_tree;

pub use ddl_store::DdlStore;
pub use dialect_catalog::DialectCatalog;
pub use message_log::{LoggedFailure, MessageLog};
pub use node_tree::{NodeKind, NodeTree};
