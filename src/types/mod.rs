//! # Type System
//!
//! The declared-type tags and runtime value representation shared by schema
//! definitions, builder validation, and the codec.
//!
//! - `field_type`: `FieldType`, the recursive declared-type tag
//! - `value`: `Value`, the owned runtime value

pub mod field_type;
pub mod value;

pub use field_type::{FieldType, UnionAlternatives};
pub use value::Value;
