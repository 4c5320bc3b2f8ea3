//! # Runtime Value Representation
//!
//! This module provides `Value`, the owned runtime representation for record
//! field values. Values own all of their data, so `Clone` is a deep copy and
//! two clones never alias mutable sub-structure; shared handles inside
//! composite values (`Arc<RecordSchema>`, `Arc<EnumTable>`) point only at
//! immutable metadata.
//!
//! ## Value Variants
//!
//! | Variant | Rust type | Notes |
//! |---------|-----------|-------|
//! | Null | - | the unit value |
//! | Int | i64 | 64-bit two's-complement |
//! | Boolean | bool | |
//! | Text | String | UTF-8 |
//! | Record | TypedRecord | nested record instance |
//! | Array | Vec\<Value\> | homogeneous per schema |
//! | Map | Vec\<(String, Value)\> | insertion-ordered, never re-sorted |
//! | Enum | EnumValue | symbol from a closed table |
//!
//! Maps are kept as an ordered pair list rather than a hash map: the wire
//! contract requires encode/decode to preserve insertion order exactly.

use std::fmt;

use crate::record::TypedRecord;
use crate::schema::EnumValue;

/// Owned runtime value for one record field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Boolean(bool),
    Text(String),
    Record(TypedRecord),
    Array(Vec<Value>),
    Map(Vec<(String, Value)>),
    Enum(EnumValue),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Runtime type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "int",
            Value::Boolean(_) => "boolean",
            Value::Text(_) => "text",
            Value::Record(_) => "record",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Enum(_) => "enum",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&TypedRecord> {
        match self {
            Value::Record(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Map(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumValue> {
        match self {
            Value::Enum(v) => Some(v),
            _ => None,
        }
    }
}

// No float variants, so equality is total.
impl Eq for Value {}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<EnumValue> for Value {
    fn from(v: EnumValue) -> Self {
        Value::Enum(v)
    }
}

impl From<TypedRecord> for Value {
    fn from(v: TypedRecord) -> Self {
        Value::Record(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v:?}"),
            Value::Record(v) => write!(f, "{v}"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Enum(v) => write!(f, "{}", v.canonical()),
        }
    }
}
