// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parquet page exports.
//!
//! The published dataset is a Parquet file with one row per page: `id`,
//! `title`, `created` and a `lines` list of `{id, text, created, updated,
//! userId}` structs. Rows are read through the record API and mapped onto the
//! JSON shape the serde types already accept, so both formats share one set
//! of field rules. Null fields are dropped and fall back to serde defaults.
//!
//! Timestamps may be plain integers (Unix seconds) or Parquet timestamp
//! logical types, which are converted to seconds.

#[cfg(feature = "parquet")]
use bytes::Bytes;
#[cfg(feature = "parquet")]
use parquet::file::reader::{FileReader, SerializedFileReader};
#[cfg(feature = "parquet")]
use parquet::record::{Field, Row};
#[cfg(feature = "parquet")]
use serde_json::{Map, Value};

#[cfg(feature = "parquet")]
use crate::error::{Error, Result};
#[cfg(feature = "parquet")]
use crate::types::Page;

/// Leading and trailing magic of every Parquet file.
pub(crate) const MAGIC: &[u8; 4] = b"PAR1";

/// True when `bytes` look like a Parquet file.
pub(crate) fn is_parquet(bytes: &[u8]) -> bool {
    bytes.len() >= 2 * MAGIC.len() && bytes.starts_with(MAGIC) && bytes.ends_with(MAGIC)
}

/// Decode every row of a Parquet export into a page.
#[cfg(feature = "parquet")]
pub(crate) fn read_pages(location: &str, bytes: &[u8]) -> Result<Vec<Page>> {
    let reader = SerializedFileReader::new(Bytes::copy_from_slice(bytes))
        .map_err(|e| Error::parse(location, e))?;
    let num_rows = reader.metadata().file_metadata().num_rows();
    let rows = reader
        .get_row_iter(None)
        .map_err(|e| Error::parse(location, e))?;

    let mut pages = Vec::with_capacity(usize::try_from(num_rows).unwrap_or(0));
    for (index, row) in rows.enumerate() {
        let row = row.map_err(|e| Error::parse(location, e))?;
        let page = serde_json::from_value(row_to_json(&row))
            .map_err(|e| Error::parse(location, format!("row {}: {}", index, e)))?;
        pages.push(page);
    }
    Ok(pages)
}

#[cfg(feature = "parquet")]
fn row_to_json(row: &Row) -> Value {
    let fields: Map<String, Value> = row
        .get_column_iter()
        .filter_map(|(name, field)| field_to_json(field).map(|value| (name.clone(), value)))
        .collect();
    Value::Object(fields)
}

/// `None` for nulls and for types no page field uses.
#[cfg(feature = "parquet")]
fn field_to_json(field: &Field) -> Option<Value> {
    let value = match field {
        Field::Str(s) => Value::String(s.clone()),
        Field::Bool(b) => Value::Bool(*b),
        Field::Short(v) => Value::from(*v),
        Field::Int(v) => Value::from(*v),
        Field::Long(v) => Value::from(*v),
        Field::UInt(v) => Value::from(*v),
        Field::TimestampMillis(ms) => Value::from(ms.div_euclid(1_000)),
        Field::TimestampMicros(us) => Value::from(us.div_euclid(1_000_000)),
        Field::Group(row) => row_to_json(row),
        Field::ListInternal(list) => {
            Value::Array(list.elements().iter().filter_map(field_to_json).collect())
        }
        _ => return None,
    };
    Some(value)
}
