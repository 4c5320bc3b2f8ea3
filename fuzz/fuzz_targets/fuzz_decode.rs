//! Fuzz testing for the record decoder.
//!
//! This fuzz target feeds arbitrary byte sequences to `decode_record`
//! against arbitrarily shaped schemas to ensure malformed input is always
//! rejected with a typed error, never a panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use recodec::{decode_record, EnumTable, FieldDescriptor, FieldType, RecordSchema};

#[derive(Debug, Arbitrary)]
struct DecodeInput {
    field_types: Vec<FuzzFieldType>,
    data: Vec<u8>,
}

#[derive(Debug, Arbitrary, Clone, Copy)]
enum FuzzFieldType {
    Null,
    Int,
    Boolean,
    Text,
    ArrayOfInt,
    ArrayOfText,
    MapOfInt,
    MapOfUnion,
    Enum,
    UnionNullInt,
    UnionIntBooleanText,
}

impl From<FuzzFieldType> for FieldType {
    fn from(fft: FuzzFieldType) -> Self {
        match fft {
            FuzzFieldType::Null => FieldType::Null,
            FuzzFieldType::Int => FieldType::Int,
            FuzzFieldType::Boolean => FieldType::Boolean,
            FuzzFieldType::Text => FieldType::Text,
            FuzzFieldType::ArrayOfInt => FieldType::array(FieldType::Int),
            FuzzFieldType::ArrayOfText => FieldType::array(FieldType::Text),
            FuzzFieldType::MapOfInt => FieldType::map(FieldType::Int),
            FuzzFieldType::MapOfUnion => FieldType::map(FieldType::union([
                FieldType::Int,
                FieldType::Boolean,
                FieldType::Text,
            ])),
            FuzzFieldType::Enum => {
                let table = EnumTable::new(
                    "ReagentKey",
                    [("BASE", "Base"), ("DIL_BUFFER", "DilBuffer")],
                )
                .unwrap();
                FieldType::Enum(table)
            }
            FuzzFieldType::UnionNullInt => {
                FieldType::union([FieldType::Null, FieldType::Int])
            }
            FuzzFieldType::UnionIntBooleanText => FieldType::union([
                FieldType::Int,
                FieldType::Boolean,
                FieldType::Text,
            ]),
        }
    }
}

fuzz_target!(|input: DecodeInput| {
    if input.field_types.is_empty() || input.field_types.len() > 64 {
        return;
    }

    let fields = input
        .field_types
        .into_iter()
        .enumerate()
        .map(|(idx, fft)| FieldDescriptor::required(format!("f{idx}"), fft.into()))
        .collect();

    let schema = RecordSchema::new("Fuzzed", fields).unwrap();
    let _ = decode_record(&input.data, &schema);
});
