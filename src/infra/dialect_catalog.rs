use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Deserialize;

use crate::app::ports::{DialectError, SqlDialectLoader};
use crate::domain::{ConnectionId, SqlDialectInfo};

pub const CATALOG_VERSION: u32 = 1;

const BUILTIN_PRESETS: &str = include_str!("dialect_presets.toml");

#[derive(Debug, Deserialize)]
struct DialectCatalogFile {
    version: u32,
    #[serde(rename = "dialect")]
    dialects: Vec<SqlDialectInfo>,
}

/// Per-connection dialect registry backed by named presets.
///
/// Presets come from a versioned TOML document; connections are bound to a
/// preset by name as they are established. The full product resolves this
/// from the server per connection, so an unbound connection is an error
/// rather than a silent default.
pub struct DialectCatalog {
    presets: HashMap<String, SqlDialectInfo>,
    bindings: Mutex<HashMap<ConnectionId, String>>,
}

impl DialectCatalog {
    /// Catalog seeded with the built-in presets.
    pub fn builtin() -> Result<Self, DialectError> {
        Self::from_toml(BUILTIN_PRESETS)
    }

    pub fn from_toml(doc: &str) -> Result<Self, DialectError> {
        let file: DialectCatalogFile =
            toml::from_str(doc).map_err(|e| DialectError::InvalidCatalog(e.to_string()))?;

        if file.version != CATALOG_VERSION {
            return Err(DialectError::VersionMismatch {
                found: file.version,
                expected: CATALOG_VERSION,
            });
        }

        Ok(Self {
            presets: file
                .dialects
                .into_iter()
                .map(|dialect| (dialect.name.clone(), dialect))
                .collect(),
            bindings: Mutex::new(HashMap::new()),
        })
    }

    /// Binds a connection to a named dialect preset.
    pub fn register(
        &self,
        connection: ConnectionId,
        dialect_name: &str,
    ) -> Result<(), DialectError> {
        if !self.presets.contains_key(dialect_name) {
            return Err(DialectError::UnknownDialect(dialect_name.to_string()));
        }
        self.bindings
            .lock()
            .expect("dialect bindings mutex poisoned")
            .insert(connection, dialect_name.to_string());
        Ok(())
    }

    pub fn preset(&self, name: &str) -> Option<&SqlDialectInfo> {
        self.presets.get(name)
    }
}

#[async_trait]
impl SqlDialectLoader for DialectCatalog {
    async fn load_sql_dialect_info(
        &self,
        connection: &ConnectionId,
    ) -> Result<SqlDialectInfo, DialectError> {
        let name = self
            .bindings
            .lock()
            .expect("dialect bindings mutex poisoned")
            .get(connection)
            .cloned()
            .ok_or_else(|| DialectError::UnknownConnection(connection.clone()))?;

        self.presets
            .get(&name)
            .cloned()
            .ok_or(DialectError::UnknownDialect(name))
    }
}
