//! # Binary Record Codec
//!
//! Serialization between a `TypedRecord` and its byte image. Both sides
//! already know the schema — there is no header, magic number, or embedded
//! schema fingerprint — so the image is nothing but the field values in
//! schema declaration order.
//!
//! ## Wire Format
//!
//! | Type | Encoding |
//! |---------|------------------------------------------------|
//! | null | nothing (zero bytes) |
//! | int | i64, two's-complement, 8 bytes little-endian |
//! | boolean | 1 byte, `0x00` false / `0x01` true |
//! | text | u32-LE byte length, then UTF-8 bytes |
//! | enum | canonical string, text-encoded |
//! | record | nested fields in the nested schema's order |
//! | array | u32-LE element count, then elements |
//! | map | u32-LE entry count, then (text key, value) pairs |
//! | union | 1 discriminator byte (alternative index), then the value |
//!
//! Map entries are written in insertion order and decoded back in the same
//! order — never re-sorted. Union values resolve to the *first* declared
//! alternative matching the value's runtime type.
//!
//! ## Failure Semantics
//!
//! Decoding is all-or-nothing: truncated input, a length prefix overrunning
//! the buffer, an out-of-range union discriminator, invalid UTF-8, a bad
//! boolean byte, or trailing bytes after the final field all fail with
//! `MalformedEncoding` and yield no partial record. A well-formed stream
//! carrying an enum string outside the closed table fails with
//! `UnrecognizedEnumValue` instead — the bytes are fine, the content is not.
//!
//! Round-trip contract: `decode_record(&encode_record(r)?, r.schema())? == r`
//! for every record `r` built against a registered schema.

pub mod decode;
pub mod encode;

pub use decode::decode_record;
pub use encode::encode_record;
