//! Conversion of Data API fields into [`Value`]s, keyed by declared column type.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};
use once_cell::sync::Lazy;

use crate::error::{RdsError, Result};
use crate::types::{Field, Value};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

// chrono accepts single-digit fields, so widths are checked up front.
const DATE_LAYOUT: &str = "YYYY-MM-DD";
const TIMESTAMP_LAYOUT: &str = "YYYY-MM-DD HH:MM:SS";

/// Rule turning one field into a [`Value`].
///
/// `Field::Null` converts to `Value::Null` under every known rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldConverter {
    /// `longValue` as a 64-bit integer.
    Integer,
    /// `booleanValue` as a boolean.
    Boolean,
    /// `stringValue` kept verbatim.
    Text,
    /// `stringValue` parsed as a 64-bit float.
    Numeric,
    /// `doubleValue` as a 64-bit float.
    Float,
    /// `stringValue` in `YYYY-MM-DD`, reformatted as RFC 3339.
    Date,
    /// `stringValue` in `YYYY-MM-DD HH:MM:SS`, reformatted as RFC 3339.
    Timestamp,
    /// Unregistered column type; conversion always fails.
    Unknown(String),
}

static COLUMN_TYPES: Lazy<HashMap<&'static str, FieldConverter>> = Lazy::new(|| {
    HashMap::from([
        ("serial", FieldConverter::Integer),
        ("int2", FieldConverter::Integer),
        ("int4", FieldConverter::Integer),
        ("int8", FieldConverter::Integer),
        ("bool", FieldConverter::Boolean),
        ("bpchar", FieldConverter::Text),
        ("varchar", FieldConverter::Text),
        ("text", FieldConverter::Text),
        ("time", FieldConverter::Text),
        ("numeric", FieldConverter::Numeric),
        ("float4", FieldConverter::Float),
        ("date", FieldConverter::Date),
        ("timestamp", FieldConverter::Timestamp),
    ])
});

/// Looks up the converter for a declared column type, ignoring case.
/// Unregistered types get [`FieldConverter::Unknown`].
pub fn lookup(column_type: &str) -> FieldConverter {
    COLUMN_TYPES
        .get(column_type.to_ascii_lowercase().as_str())
        .cloned()
        .unwrap_or_else(|| FieldConverter::Unknown(column_type.to_string()))
}

impl FieldConverter {
    /// Column type family this rule handles, for error messages.
    fn type_name(&self) -> &'static str {
        match self {
            FieldConverter::Integer => "integer",
            FieldConverter::Boolean => "bool",
            FieldConverter::Text => "text",
            FieldConverter::Numeric => "numeric",
            FieldConverter::Float => "float4",
            FieldConverter::Date => "date",
            FieldConverter::Timestamp => "timestamp",
            FieldConverter::Unknown(_) => "unknown",
        }
    }

    pub fn convert(&self, field: &Field) -> Result<Value> {
        if let FieldConverter::Unknown(type_name) = self {
            return Err(RdsError::UnknownColumnType(type_name.clone()));
        }
        if field.is_null() {
            return Ok(Value::Null);
        }

        match (self, field) {
            (FieldConverter::Integer, Field::Long(v)) => Ok(Value::Int64(*v)),
            (FieldConverter::Boolean, Field::Boolean(v)) => Ok(Value::Bool(*v)),
            (FieldConverter::Text, Field::String(s)) => Ok(Value::Text(s.clone())),
            (FieldConverter::Numeric, Field::String(s)) => s
                .parse::<f64>()
                .map(Value::Float64)
                .map_err(|source| RdsError::InvalidNumeric {
                    value: s.clone(),
                    source,
                }),
            (FieldConverter::Float, Field::Double(v)) => Ok(Value::Float64(*v)),
            (FieldConverter::Date, Field::String(s)) => {
                if s.len() != DATE_LAYOUT.len() || !matches_layout(s, DATE_LAYOUT) {
                    return Err(self.temporal_error(s, DATE_LAYOUT, None));
                }
                let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
                    .map_err(|source| self.temporal_error(s, DATE_LAYOUT, Some(source)))?;
                Ok(Value::Text(to_rfc3339(date.and_time(NaiveTime::MIN))))
            }
            (FieldConverter::Timestamp, Field::String(s)) => {
                if !matches_layout(s, TIMESTAMP_LAYOUT) {
                    return Err(self.temporal_error(s, TIMESTAMP_LAYOUT, None));
                }
                let ts = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
                    .map_err(|source| self.temporal_error(s, TIMESTAMP_LAYOUT, Some(source)))?;
                Ok(Value::Text(to_rfc3339(ts)))
            }
            (rule, field) => Err(RdsError::FieldMismatch {
                type_name: rule.type_name(),
                expected: rule.expected_kind(),
                actual: field.kind(),
            }),
        }
    }

    fn expected_kind(&self) -> &'static str {
        match self {
            FieldConverter::Integer => "longValue",
            FieldConverter::Boolean => "booleanValue",
            FieldConverter::Float => "doubleValue",
            FieldConverter::Text
            | FieldConverter::Numeric
            | FieldConverter::Date
            | FieldConverter::Timestamp
            | FieldConverter::Unknown(_) => "stringValue",
        }
    }

    fn temporal_error(
        &self,
        value: &str,
        layout: &'static str,
        source: Option<chrono::ParseError>,
    ) -> RdsError {
        RdsError::InvalidTemporal {
            type_name: self.type_name(),
            value: value.to_string(),
            layout,
            source,
        }
    }
}

/// Whether `value` starts with `layout`, where each letter of the layout
/// stands for exactly one ASCII digit.
fn matches_layout(value: &str, layout: &str) -> bool {
    value.len() >= layout.len()
        && value
            .bytes()
            .zip(layout.bytes())
            .all(|(v, l)| match l {
                b'-' | b' ' | b':' => v == l,
                _ => v.is_ascii_digit(),
            })
}

fn to_rfc3339(ts: NaiveDateTime) -> String {
    ts.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true)
}
