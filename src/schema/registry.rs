//! # Schema Registry
//!
//! The registry maps record names to their single shared `RecordSchema`
//! instance. Registration happens once per record type, typically at process
//! start; lookups are concurrent and lock-read-only thereafter.

use hashbrown::HashMap;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::schema::record::RecordSchema;

#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: RwLock<HashMap<String, Arc<RecordSchema>>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under its record name. Each name may be
    /// registered exactly once.
    pub fn register(&self, schema: Arc<RecordSchema>) -> Result<()> {
        let mut schemas = self.schemas.write();
        if schemas.contains_key(schema.name()) {
            return Err(Error::SchemaExists {
                name: schema.name().to_string(),
            });
        }
        schemas.insert(schema.name().to_string(), schema);
        Ok(())
    }

    /// Looks up the shared schema for a record name.
    pub fn describe(&self, name: &str) -> Result<Arc<RecordSchema>> {
        self.schemas
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::SchemaNotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.read().contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.schemas.read().keys().cloned().collect()
    }
}
