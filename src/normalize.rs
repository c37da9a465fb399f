//! Per-column scalar normalization.

use crate::error::{Error, Result};
use crate::record::{RawRecord, Value};
use crate::schema::Schema;

/// Applies the schema's per-column scalar transforms to one record:
/// identifier removal, `Male`/`Female` and `Yes`/`No` mapping, numeric
/// coercion with a `0.0` fallback. Always produces a fresh record; the input
/// is never mutated.
///
/// Blank or otherwise unparseable numeric fields become `0.0` by design: the
/// source data leaves `TotalCharges` empty for customers with no billing
/// history yet.
#[derive(Debug, Clone)]
pub struct FieldNormalizer<'a> {
    schema: &'a Schema,
}

impl<'a> FieldNormalizer<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Normalizes every present field according to its declared role. Columns
    /// outside the schema pass through untouched; the identifier is dropped.
    pub fn normalize(&self, record: &RawRecord) -> Result<RawRecord> {
        let mut out = RawRecord::with_capacity(record.len());
        for (column, value) in record {
            if column == self.schema.identifier() {
                continue;
            }
            let normalized = if column == self.schema.gender_column() {
                Value::Float(map_gender(column, value)?)
            } else if self.schema.is_binary(column) || column == self.schema.target() {
                Value::Float(map_binary(column, value)?)
            } else if self.schema.is_numeric(column) {
                Value::Float(value.as_f64().unwrap_or(0.0))
            } else {
                value.clone()
            };
            out.insert(column.clone(), normalized);
        }
        Ok(out)
    }
}

fn map_gender(column: &str, value: &Value) -> Result<f64> {
    match value.as_str() {
        Some("Male") => Ok(1.0),
        Some("Female") => Ok(0.0),
        _ => Err(Error::SchemaViolation {
            column: column.to_string(),
            value: value.to_string(),
        }),
    }
}

/// `Yes`/`No` map to `1`/`0`. Integer `1`/`0` are accepted as the
/// already-encoded form the source data sometimes carries for
/// `SeniorCitizen`; anything else is a schema violation.
fn map_binary(column: &str, value: &Value) -> Result<f64> {
    match value {
        Value::Str(s) if s == "Yes" => Ok(1.0),
        Value::Str(s) if s == "No" => Ok(0.0),
        Value::Int(1) => Ok(1.0),
        Value::Int(0) => Ok(0.0),
        _ => Err(Error::SchemaViolation {
            column: column.to_string(),
            value: value.to_string(),
        }),
    }
}
