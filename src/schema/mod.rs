//! # Schema Metadata
//!
//! Immutable, shared descriptions of record types and enum tables, plus the
//! process-wide registry that hands out the single instance per type.
//!
//! - `field`: `FieldDescriptor` — one declared field
//! - `record`: `RecordSchema` — ordered field sequence for one record type
//! - `registry`: `SchemaRegistry` — name → shared schema lookup
//! - `enums`: `EnumTable`/`EnumValue` — closed symbol/canonical-string maps

pub mod enums;
pub mod field;
pub mod record;
pub mod registry;

pub use enums::{EnumSymbol, EnumTable, EnumValue};
pub use field::FieldDescriptor;
pub use record::RecordSchema;
pub use registry::SchemaRegistry;
