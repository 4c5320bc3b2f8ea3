//! # TypedRecord - Immutable Record Values
//!
//! A `TypedRecord` holds one instance's field values, parallel to its
//! schema's field order. Every slot is filled — an explicit value or the
//! schema default — by the time a record exists, and nothing can mutate it
//! afterward. Records are created only by `RecordBuilder::build` and
//! `codec::decode_record`.
//!
//! ## Thread Safety
//!
//! Records own their data and are immutable, so they are freely shareable
//! across threads.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::schema::RecordSchema;
use crate::types::Value;

#[derive(Debug, Clone)]
pub struct TypedRecord {
    schema: Arc<RecordSchema>,
    values: Vec<Value>,
}

impl TypedRecord {
    /// Values must be parallel to the schema's fields and already
    /// validated; only the builder and the codec construct records.
    pub(crate) fn from_parts(schema: Arc<RecordSchema>, values: Vec<Value>) -> Self {
        debug_assert_eq!(schema.field_count(), values.len());
        Self { schema, values }
    }

    pub fn schema(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    pub fn field_count(&self) -> usize {
        self.values.len()
    }

    /// All field values in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Field value by declaration-order index.
    pub fn get(&self, idx: usize) -> Result<&Value> {
        self.values.get(idx).ok_or_else(|| Error::UnknownField {
            field: idx.to_string(),
        })
    }

    /// Field value by name.
    pub fn get_named(&self, name: &str) -> Result<&Value> {
        let idx = self
            .schema
            .field_index(name)
            .ok_or_else(|| Error::UnknownField {
                field: name.to_string(),
            })?;
        Ok(&self.values[idx])
    }
}

/// Structural equality: same record type, every field value deeply equal.
impl PartialEq for TypedRecord {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name() == other.schema.name() && self.values == other.values
    }
}

impl Eq for TypedRecord {}

impl fmt::Display for TypedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.schema.name())?;
        for (idx, (field, value)) in self.schema.fields().iter().zip(&self.values).enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}: {}", field.name(), value)?;
        }
        write!(f, " }}")
    }
}
