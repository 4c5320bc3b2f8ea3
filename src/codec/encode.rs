//! Record encoding: typed values to their byte image.

use crate::error::{Error, Result};
use crate::record::TypedRecord;
use crate::types::{FieldType, Value};

/// Serializes a record into its byte image, fields in schema declaration
/// order. The only failure mode is a text, array, or map whose length
/// exceeds the u32 prefix range.
pub fn encode_record(record: &TypedRecord) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_record(&mut buf, record)?;
    Ok(buf)
}

fn write_record(buf: &mut Vec<u8>, record: &TypedRecord) -> Result<()> {
    for (field, value) in record.schema().fields().iter().zip(record.values()) {
        write_value(buf, field.field_type(), value)?;
    }
    Ok(())
}

fn write_value(buf: &mut Vec<u8>, ty: &FieldType, value: &Value) -> Result<()> {
    match (ty, value) {
        (FieldType::Null, Value::Null) => Ok(()),
        (FieldType::Int, Value::Int(v)) => {
            buf.extend(v.to_le_bytes());
            Ok(())
        }
        (FieldType::Boolean, Value::Boolean(v)) => {
            buf.push(u8::from(*v));
            Ok(())
        }
        (FieldType::Text, Value::Text(s)) => write_bytes(buf, s.as_bytes()),
        (FieldType::Enum(_), Value::Enum(symbol)) => write_bytes(buf, symbol.canonical().as_bytes()),
        (FieldType::Record(_), Value::Record(nested)) => write_record(buf, nested),
        (FieldType::Array(element), Value::Array(items)) => {
            write_len(buf, items.len())?;
            for item in items {
                write_value(buf, element, item)?;
            }
            Ok(())
        }
        (FieldType::Map(value_type), Value::Map(entries)) => {
            write_len(buf, entries.len())?;
            for (key, entry) in entries {
                write_bytes(buf, key.as_bytes())?;
                write_value(buf, value_type, entry)?;
            }
            Ok(())
        }
        (FieldType::Union(alternatives), v) => {
            // A TypedRecord is validated at construction, so a union value
            // always resolves; the error arm guards the invariant anyway.
            let idx = ty.resolve_union(v).ok_or_else(|| Error::MalformedEncoding {
                detail: format!("no union alternative in {ty} matches {}", v.type_name()),
            })?;
            buf.push(idx as u8);
            write_value(buf, &alternatives[idx], v)
        }
        (ty, v) => Err(Error::MalformedEncoding {
            detail: format!("value of type {} under declared type {ty}", v.type_name()),
        }),
    }
}

fn write_len(buf: &mut Vec<u8>, len: usize) -> Result<()> {
    let len = u32::try_from(len).map_err(|_| Error::MalformedEncoding {
        detail: format!("length {len} exceeds u32 prefix range"),
    })?;
    buf.extend(len.to_le_bytes());
    Ok(())
}

fn write_bytes(buf: &mut Vec<u8>, bytes: &[u8]) -> Result<()> {
    write_len(buf, bytes.len())?;
    buf.extend_from_slice(bytes);
    Ok(())
}
