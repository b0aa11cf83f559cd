use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ConnectionId, SqlDialectInfo};

#[async_trait]
pub trait SqlDialectLoader: Send + Sync {
    async fn load_sql_dialect_info(
        &self,
        connection: &ConnectionId,
    ) -> Result<SqlDialectInfo, DialectError>;
}

#[derive(Debug, Clone, Error)]
pub enum DialectError {
    #[error("no dialect registered for connection {0}")]
    UnknownConnection(ConnectionId),
    #[error("unknown dialect preset: {0}")]
    UnknownDialect(String),
    #[error("dialect catalog is not valid TOML: {0}")]
    InvalidCatalog(String),
    #[error("dialect catalog version mismatch: found v{found}, expected v{expected}")]
    VersionMismatch { found: u32, expected: u32 },
}
