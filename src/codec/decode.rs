//! Record decoding: byte image back to typed values, bounds-checked at
//! every read.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::record::TypedRecord;
use crate::schema::RecordSchema;
use crate::types::{FieldType, Value};

/// Deserializes a byte image produced by `encode_record` against the same
/// schema. All-or-nothing: any failure yields no partial record.
pub fn decode_record(data: &[u8], schema: &Arc<RecordSchema>) -> Result<TypedRecord> {
    let mut reader = Reader::new(data);
    let record = read_record(&mut reader, schema)?;
    if reader.remaining() != 0 {
        return Err(Error::MalformedEncoding {
            detail: format!("{} trailing bytes after final field", reader.remaining()),
        });
    }
    Ok(record)
}

fn read_record(reader: &mut Reader<'_>, schema: &Arc<RecordSchema>) -> Result<TypedRecord> {
    let mut values = Vec::with_capacity(schema.field_count());
    for field in schema.fields() {
        values.push(read_value(reader, field.field_type())?);
    }
    Ok(TypedRecord::from_parts(Arc::clone(schema), values))
}

fn read_value(reader: &mut Reader<'_>, ty: &FieldType) -> Result<Value> {
    match ty {
        FieldType::Null => Ok(Value::Null),
        FieldType::Int => Ok(Value::Int(reader.i64_le()?)),
        FieldType::Boolean => match reader.u8()? {
            0 => Ok(Value::Boolean(false)),
            1 => Ok(Value::Boolean(true)),
            other => Err(Error::MalformedEncoding {
                detail: format!("invalid boolean byte {other:#04x}"),
            }),
        },
        FieldType::Text => Ok(Value::Text(reader.text()?)),
        FieldType::Enum(table) => {
            let canonical = reader.text()?;
            Ok(Value::Enum(table.from_canonical(&canonical)?))
        }
        FieldType::Record(nested) => Ok(Value::Record(read_record(reader, nested)?)),
        FieldType::Array(element) => {
            let count = reader.u32_le()? as usize;
            let mut items = Vec::new();
            for _ in 0..count {
                items.push(read_value(reader, element)?);
            }
            Ok(Value::Array(items))
        }
        FieldType::Map(value_type) => {
            let count = reader.u32_le()? as usize;
            let mut entries = Vec::new();
            for _ in 0..count {
                let key = reader.text()?;
                let entry = read_value(reader, value_type)?;
                entries.push((key, entry));
            }
            Ok(Value::Map(entries))
        }
        FieldType::Union(alternatives) => {
            let discriminator = reader.u8()? as usize;
            let alternative =
                alternatives
                    .get(discriminator)
                    .ok_or_else(|| Error::MalformedEncoding {
                        detail: format!(
                            "union discriminator {discriminator} out of range for {ty}"
                        ),
                    })?;
            read_value(reader, alternative)
        }
    }
}

/// Cursor over the input buffer; every read is bounds-checked so truncated
/// input fails instead of panicking.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(Error::MalformedEncoding {
                detail: format!(
                    "need {len} bytes at offset {}, only {} remain",
                    self.pos,
                    self.remaining()
                ),
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u32_le(&mut self) -> Result<u32> {
        let bytes: [u8; 4] = self.take(4)?.try_into().unwrap(); // INVARIANT: length validated by take
        Ok(u32::from_le_bytes(bytes))
    }

    fn i64_le(&mut self) -> Result<i64> {
        let bytes: [u8; 8] = self.take(8)?.try_into().unwrap(); // INVARIANT: length validated by take
        Ok(i64::from_le_bytes(bytes))
    }

    fn text(&mut self) -> Result<String> {
        let len = self.u32_le()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|e| Error::MalformedEncoding {
            detail: format!("invalid UTF-8 in text value: {e}"),
        })
    }
}
