pub mod dialect;
pub mod hierarchy;
pub mod metadata;
pub mod notification;

pub use dialect::{DialectError, SqlDialectLoader};
pub use hierarchy::{NodeHierarchy, NodeScope};
pub use metadata::{DdlMetadataProvider, MetadataError};
pub use notification::NotificationSink;
