//! # RecordBuilder - Incremental Record Construction
//!
//! The builder accumulates partial field assignments against a shared
//! schema, validating each assignment as it lands, and produces a
//! `TypedRecord` on `build()` with schema defaults substituted for unset
//! fields.
//!
//! Each field slot is an explicit `Option<Value>`: `Some` if and only if
//! the field was explicitly assigned. This keeps "set to null" distinct
//! from "never set", which matters for union fields whose declared
//! alternatives legitimately include null.
//!
//! ## Usage
//!
//! ```ignore
//! let mut builder = RecordBuilder::new(schema);
//! builder.set_named("nproc", Value::Int(8))?
//!        .set_named("task_type", Value::from("standard"))?;
//! let record = builder.build()?;
//!
//! // The builder survives build(); reuse it for the next record.
//! builder.set_named("nproc", Value::Int(16))?;
//! let next = builder.build()?;
//! ```
//!
//! ## Thread Safety
//!
//! A builder is exclusively owned by one logical caller; all mutation goes
//! through `&mut self`, so the type system enforces the single-writer model.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::record::typed::TypedRecord;
use crate::schema::RecordSchema;
use crate::types::Value;

#[derive(Debug, Clone)]
pub struct RecordBuilder {
    schema: Arc<RecordSchema>,
    slots: Vec<Option<Value>>,
}

impl RecordBuilder {
    /// A fresh builder with every field unset.
    pub fn new(schema: Arc<RecordSchema>) -> Self {
        let slots = vec![None; schema.field_count()];
        Self { schema, slots }
    }

    /// A builder seeded from an existing record: every field set, values
    /// deep-copied so the builder never aliases the record's data.
    pub fn for_record(record: &TypedRecord) -> Self {
        Self {
            schema: Arc::clone(record.schema()),
            slots: record.values().iter().cloned().map(Some).collect(),
        }
    }

    pub fn schema(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    /// Assigns a field by declaration-order index, validating the value
    /// against the declared type. Chainable.
    pub fn set(&mut self, idx: usize, value: impl Into<Value>) -> Result<&mut Self> {
        let value = value.into();
        let field = self.schema.field(idx).ok_or_else(|| Error::UnknownField {
            field: idx.to_string(),
        })?;
        if !field.field_type().accepts(&value) {
            return Err(Error::InvalidFieldValue {
                field: field.name().to_string(),
                expected: field.field_type().to_string(),
                actual: value.type_name().to_string(),
            });
        }
        self.slots[idx] = Some(value);
        Ok(self)
    }

    /// Assigns a field by name.
    pub fn set_named(&mut self, name: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let idx = self.field_index(name)?;
        self.set(idx, value)
    }

    /// The pending value for a field, independent of schema defaults.
    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.slots.get(idx).and_then(|slot| slot.as_ref())
    }

    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.schema
            .field_index(name)
            .and_then(|idx| self.get(idx))
    }

    /// True if the field was explicitly assigned.
    pub fn has(&self, idx: usize) -> bool {
        self.get(idx).is_some()
    }

    pub fn has_named(&self, name: &str) -> bool {
        self.get_named(name).is_some()
    }

    /// Removes a pending value, returning the field to unset.
    pub fn clear(&mut self, idx: usize) -> Result<&mut Self> {
        if idx >= self.slots.len() {
            return Err(Error::UnknownField {
                field: idx.to_string(),
            });
        }
        self.slots[idx] = None;
        Ok(self)
    }

    pub fn clear_named(&mut self, name: &str) -> Result<&mut Self> {
        let idx = self.field_index(name)?;
        self.clear(idx)
    }

    /// Returns every field to unset for builder reuse.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Copies every set field of `other` whose name exists here and whose
    /// value matches this schema's declared type; everything else is left
    /// untouched. Values are deep-copied, never aliased.
    pub fn copy_from(&mut self, other: &RecordBuilder) -> &mut Self {
        for (idx, field) in other.schema.fields().iter().enumerate() {
            if let Some(value) = other.get(idx) {
                self.adopt(field.name(), value);
            }
        }
        self
    }

    /// Copies every field of `record` whose name exists here and whose
    /// value matches this schema's declared type.
    pub fn copy_from_record(&mut self, record: &TypedRecord) -> &mut Self {
        for (field, value) in record.schema().fields().iter().zip(record.values()) {
            self.adopt(field.name(), value);
        }
        self
    }

    fn adopt(&mut self, name: &str, value: &Value) {
        if let Some(idx) = self.schema.field_index(name) {
            let field = &self.schema.fields()[idx];
            if field.field_type().accepts(value) {
                self.slots[idx] = Some(value.clone());
            }
        }
    }

    /// Finalizes a record: set fields contribute their pending value, unset
    /// fields resolve through the schema default. Fields are processed in
    /// declaration order, so the first field that can neither be resolved
    /// nor defaulted is the one a `BuildFailed` names. The builder is not
    /// consumed and may be reused or rebuilt.
    pub fn build(&self) -> Result<TypedRecord> {
        let mut values = Vec::with_capacity(self.schema.field_count());
        for (idx, field) in self.schema.fields().iter().enumerate() {
            let value = match &self.slots[idx] {
                Some(pending) => pending.clone(),
                None => {
                    self.schema
                        .field_default(idx)
                        .map_err(|cause| Error::BuildFailed {
                            record: self.schema.name().to_string(),
                            field: field.name().to_string(),
                            source: Box::new(cause),
                        })?
                }
            };
            values.push(value);
        }
        Ok(TypedRecord::from_parts(Arc::clone(&self.schema), values))
    }

    fn field_index(&self, name: &str) -> Result<usize> {
        self.schema
            .field_index(name)
            .ok_or_else(|| Error::UnknownField {
                field: name.to_string(),
            })
    }
}
