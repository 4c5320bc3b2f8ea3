//! Field descriptors: one declared field of a record schema.

use crate::types::{FieldType, Value};

/// Declared name, type, default, and presence requirement for one field.
/// Immutable once the owning `RecordSchema` is constructed.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    field_type: FieldType,
    default: Option<Value>,
    required: bool,
}

impl FieldDescriptor {
    /// A field that must be set explicitly unless it declares a default.
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            default: None,
            required: true,
        }
    }

    /// A field that may be left unset; without a declared default it
    /// resolves to null at build time, so its type must admit null.
    pub fn optional(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            default: None,
            required: false,
        }
    }

    /// Attaches a schema-declared default, validated against the declared
    /// type when the owning schema is built.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}
