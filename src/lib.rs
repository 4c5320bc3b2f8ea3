//! # recodec - Schema-Driven Typed Record Codec
//!
//! recodec is a generic engine for typed records described by runtime
//! schemas: one shared `RecordSchema` per record type drives validation,
//! default resolution, builder-based construction, and a compact binary
//! encoding. Field names, defaults, and enum strings are configuration
//! data, not generated code.
//!
//! ## Quick Start
//!
//! ```ignore
//! use recodec::{FieldDescriptor, FieldType, RecordBuilder, RecordSchema, SchemaRegistry};
//! use recodec::codec::{decode_record, encode_record};
//!
//! let schema = RecordSchema::new("Task", vec![
//!     FieldDescriptor::required("tool_id", FieldType::Text),
//!     FieldDescriptor::required("nproc", FieldType::Int).with_default(1),
//! ])?;
//!
//! let registry = SchemaRegistry::new();
//! registry.register(schema.clone())?;
//!
//! let mut builder = RecordBuilder::new(schema);
//! builder.set_named("tool_id", "pbalign")?;
//! let record = builder.build()?; // nproc filled from its default
//!
//! let bytes = encode_record(&record)?;
//! assert_eq!(decode_record(&bytes, record.schema())?, record);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Codec (encode/decode byte image)   │
//! ├─────────────────────────────────────┤
//! │  RecordBuilder  │    TypedRecord     │
//! ├─────────────────────────────────────┤
//! │  RecordSchema / EnumTable / Registry │
//! ├─────────────────────────────────────┤
//! │     Type System (FieldType, Value)   │
//! └─────────────────────────────────────┘
//! ```
//!
//! Schemas and enum tables are built once, shared read-only (`Arc`), and
//! never mutated; records are immutable after build; builders are
//! exclusively owned and reusable across builds. All failures surface as
//! typed [`Error`] variants — nothing is silently defaulted.
//!
//! ## Module Overview
//!
//! - [`types`]: declared type tags and owned runtime values
//! - [`schema`]: field descriptors, record schemas, enum tables, registry
//! - [`record`]: the builder/record construction protocol
//! - [`codec`]: binary encoding in schema declaration order

pub mod codec;
pub mod error;
pub mod record;
pub mod schema;
pub mod types;

pub use codec::{decode_record, encode_record};
pub use error::Error;
pub use record::{RecordBuilder, TypedRecord};
pub use schema::{EnumSymbol, EnumTable, EnumValue, FieldDescriptor, RecordSchema, SchemaRegistry};
pub use types::{FieldType, Value};
