//! # Declared Field Types
//!
//! This module provides `FieldType`, the canonical declared-type tag used
//! across schema definitions, builder validation, and the codec.
//!
//! ## Type Categories
//!
//! | Category | Types | Wire form |
//! |----------|-------|-----------|
//! | **Primitive** | null, int, boolean, text | fixed-width or length-prefixed |
//! | **Named** | record, enum | nested fields / canonical string |
//! | **Composite** | array, map, union | count-prefixed / discriminated |
//!
//! Composite types nest: `array<union[null, int]>` is a valid declared type.
//! Structural constraints (no union directly inside a union, at most 255
//! alternatives, no two alternatives of the same kind) are enforced when the
//! owning schema is constructed, so a `FieldType` reachable from a built
//! `RecordSchema` is always well-formed.

use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::schema::{EnumTable, RecordSchema};
use crate::types::Value;

/// Union alternative list. Unions here are near-universally 2-4 branches,
/// so the alternatives live inline.
pub type UnionAlternatives = SmallVec<[FieldType; 4]>;

/// Declared type of a record field.
#[derive(Debug, Clone)]
pub enum FieldType {
    /// The unit type: exactly one value, zero bytes on the wire. Appears
    /// mostly as a union alternative for optional nullable fields.
    Null,
    /// 64-bit two's-complement integer.
    Int,
    Boolean,
    /// UTF-8 text.
    Text,
    /// A nested record described by its own shared schema.
    Record(Arc<RecordSchema>),
    /// Homogeneous sequence of the element type.
    Array(Box<FieldType>),
    /// Text-keyed entries of the value type, insertion-ordered.
    Map(Box<FieldType>),
    /// A value from a closed enum table.
    Enum(Arc<EnumTable>),
    /// One of several declared alternatives, resolved by runtime type match.
    Union(Box<UnionAlternatives>),
}

impl FieldType {
    pub fn array(element: FieldType) -> Self {
        FieldType::Array(Box::new(element))
    }

    pub fn map(value: FieldType) -> Self {
        FieldType::Map(Box::new(value))
    }

    pub fn union(alternatives: impl IntoIterator<Item = FieldType>) -> Self {
        FieldType::Union(Box::new(alternatives.into_iter().collect()))
    }

    /// Returns true if `value`'s runtime type matches this declared type,
    /// recursing through composite values.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (FieldType::Null, Value::Null) => true,
            (FieldType::Int, Value::Int(_)) => true,
            (FieldType::Boolean, Value::Boolean(_)) => true,
            (FieldType::Text, Value::Text(_)) => true,
            (FieldType::Record(schema), Value::Record(record)) => {
                Arc::ptr_eq(schema, record.schema()) || schema.name() == record.schema().name()
            }
            (FieldType::Array(element), Value::Array(items)) => {
                items.iter().all(|item| element.accepts(item))
            }
            (FieldType::Map(value_type), Value::Map(entries)) => {
                entries.iter().all(|(_, entry)| value_type.accepts(entry))
            }
            (FieldType::Enum(table), Value::Enum(symbol)) => symbol.is_of(table),
            (FieldType::Union(alternatives), other) => {
                alternatives.iter().any(|alt| alt.accepts(other))
            }
            _ => false,
        }
    }

    /// Index of the first declared union alternative matching `value`, or
    /// None when this is not a union / nothing matches.
    pub(crate) fn resolve_union(&self, value: &Value) -> Option<usize> {
        match self {
            FieldType::Union(alternatives) => {
                alternatives.iter().position(|alt| alt.accepts(value))
            }
            _ => None,
        }
    }

    /// True if an unset optional field of this type can resolve to null.
    pub(crate) fn admits_null(&self) -> bool {
        match self {
            FieldType::Null => true,
            FieldType::Union(alternatives) => {
                alternatives.iter().any(|alt| matches!(alt, FieldType::Null))
            }
            _ => false,
        }
    }

    /// Structural validation, run once when the owning schema is built.
    pub(crate) fn validate(&self) -> Result<()> {
        self.validate_inner(false)
    }

    fn validate_inner(&self, inside_union: bool) -> Result<()> {
        match self {
            FieldType::Array(element) | FieldType::Map(element) => element.validate_inner(false),
            FieldType::Union(alternatives) => {
                if inside_union {
                    return Err(Error::InvalidSchema {
                        reason: "union may not directly contain another union".into(),
                    });
                }
                if alternatives.is_empty() {
                    return Err(Error::InvalidSchema {
                        reason: "union must declare at least one alternative".into(),
                    });
                }
                if alternatives.len() > 255 {
                    return Err(Error::InvalidSchema {
                        reason: format!(
                            "union declares {} alternatives, limit is 255",
                            alternatives.len()
                        ),
                    });
                }
                for (idx, alt) in alternatives.iter().enumerate() {
                    alt.validate_inner(true)?;
                    if alternatives[..idx].iter().any(|prior| prior.same_kind(alt)) {
                        return Err(Error::InvalidSchema {
                            reason: format!("union declares duplicate alternative {alt}"),
                        });
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Two alternatives of the same kind are indistinguishable at runtime
    /// match time, which would make first-match resolution ambiguous. Named
    /// types (records, enums) are distinguishable by name.
    fn same_kind(&self, other: &FieldType) -> bool {
        match (self, other) {
            (FieldType::Null, FieldType::Null)
            | (FieldType::Int, FieldType::Int)
            | (FieldType::Boolean, FieldType::Boolean)
            | (FieldType::Text, FieldType::Text)
            | (FieldType::Array(_), FieldType::Array(_))
            | (FieldType::Map(_), FieldType::Map(_)) => true,
            (FieldType::Record(a), FieldType::Record(b)) => a.name() == b.name(),
            (FieldType::Enum(a), FieldType::Enum(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Null => write!(f, "null"),
            FieldType::Int => write!(f, "int"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Text => write!(f, "text"),
            FieldType::Record(schema) => write!(f, "record<{}>", schema.name()),
            FieldType::Array(element) => write!(f, "array<{element}>"),
            FieldType::Map(value) => write!(f, "map<{value}>"),
            FieldType::Enum(table) => write!(f, "enum<{}>", table.name()),
            FieldType::Union(alternatives) => {
                write!(f, "union[")?;
                for (idx, alt) in alternatives.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{alt}")?;
                }
                write!(f, "]")
            }
        }
    }
}
