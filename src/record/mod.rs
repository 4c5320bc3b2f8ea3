//! # Typed Records and Builders
//!
//! The construction protocol for immutable record values:
//!
//! - `typed`: `TypedRecord`, the immutable-after-build value object
//! - `builder`: `RecordBuilder`, the mutable staging object with per-field
//!   (value, set-flag) slots and default substitution at build time
//!
//! A caller obtains a builder (fresh, or seeded by copying a record or
//! another builder), sets zero or more fields, and calls `build()`; the
//! builder survives the call and may be reused.

pub mod builder;
pub mod typed;

#[cfg(test)]
mod tests;

pub use builder::RecordBuilder;
pub use typed::TypedRecord;
