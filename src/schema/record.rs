//! # Record Schema Definition
//!
//! `RecordSchema` is the ordered, immutable description of one record type:
//! field names, declared types, required flags, and defaults. Field order is
//! declaration order and is semantically significant — the codec writes
//! fields in exactly this order, so two schemas differing only in field
//! order produce different byte images.
//!
//! Exactly one instance exists per record type, shared read-only behind an
//! `Arc` by every builder, record, and codec call of that type. All
//! structural validation (unique field names, well-formed unions, defaults
//! matching their declared types) happens once here, at construction.

use hashbrown::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::schema::field::FieldDescriptor;
use crate::types::Value;

#[derive(Debug)]
pub struct RecordSchema {
    name: String,
    fields: Vec<FieldDescriptor>,
    by_name: HashMap<String, usize>,
}

impl RecordSchema {
    /// Validates and builds the shared schema instance.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Result<Arc<Self>> {
        let name = name.into();

        let mut by_name = HashMap::with_capacity(fields.len());
        for (idx, field) in fields.iter().enumerate() {
            if by_name.insert(field.name().to_string(), idx).is_some() {
                return Err(Error::InvalidSchema {
                    reason: format!(
                        "record '{name}' declares duplicate field '{}'",
                        field.name()
                    ),
                });
            }

            field.field_type().validate()?;

            if let Some(default) = field.default() {
                if !field.field_type().accepts(default) {
                    return Err(Error::InvalidSchema {
                        reason: format!(
                            "default for field '{}' of record '{name}' does not match \
                             declared type {}: got {}",
                            field.name(),
                            field.field_type(),
                            default.type_name()
                        ),
                    });
                }
            } else if !field.is_required() && !field.field_type().admits_null() {
                return Err(Error::InvalidSchema {
                    reason: format!(
                        "optional field '{}' of record '{name}' has no default and its \
                         type {} cannot hold null",
                        field.name(),
                        field.field_type()
                    ),
                });
            }
        }

        Ok(Arc::new(Self {
            name,
            fields,
            by_name,
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, idx: usize) -> Option<&FieldDescriptor> {
        self.fields.get(idx)
    }

    /// Declaration-order index of a field name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Resolves the value an unset field takes at build time: the declared
    /// default if present, null for an optional field without one. A
    /// required field without a default has no resolution and fails with
    /// `NoDefaultDeclared`.
    pub fn field_default(&self, idx: usize) -> Result<Value> {
        let field = self.field(idx).ok_or_else(|| Error::UnknownField {
            field: idx.to_string(),
        })?;

        if let Some(default) = field.default() {
            return Ok(default.clone());
        }
        if field.is_required() {
            return Err(Error::NoDefaultDeclared {
                field: field.name().to_string(),
            });
        }
        Ok(Value::Null)
    }
}
