//! # Error Types
//!
//! Every failure in this crate is reported synchronously to the caller as a
//! typed [`Error`] variant. Nothing is silently defaulted and nothing is
//! logged-and-swallowed; callers that want retries or fallbacks match on the
//! variant and decide for themselves.
//!
//! `BuildFailed` wraps its root cause (`NoDefaultDeclared` or
//! `InvalidFieldValue`) so downstream matchers see both the phase that failed
//! and why.

/// Failure kinds for schema construction, record building, and codec work.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The registry has no schema under the requested name.
    #[error("schema '{name}' not found in registry")]
    SchemaNotFound { name: String },

    /// A schema with this name is already registered.
    #[error("schema '{name}' is already registered")]
    SchemaExists { name: String },

    /// The schema definition itself is unusable (duplicate field names,
    /// malformed union, default that does not match its declared type).
    #[error("invalid schema: {reason}")]
    InvalidSchema { reason: String },

    /// A field index or name that is not part of the schema.
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    /// A value whose runtime type does not match the field's declared type.
    #[error("invalid value for field '{field}': expected {expected}, got {actual}")]
    InvalidFieldValue {
        field: String,
        expected: String,
        actual: String,
    },

    /// A required field with neither an explicit value nor a declared default.
    #[error("field '{field}' has no declared default")]
    NoDefaultDeclared { field: String },

    /// Record finalization failed; `source` carries the root cause and
    /// `field` names the first offending field in declaration order.
    #[error("failed to build record '{record}' at field '{field}'")]
    BuildFailed {
        record: String,
        field: String,
        #[source]
        source: Box<Error>,
    },

    /// The byte stream is truncated, overruns a length prefix, or carries a
    /// discriminator outside the declared alternatives.
    #[error("malformed encoding: {detail}")]
    MalformedEncoding { detail: String },

    /// A string that matches none of an enum table's canonical strings.
    #[error("unrecognized value '{value}' for enum '{table}'")]
    UnrecognizedEnumValue { table: String, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
