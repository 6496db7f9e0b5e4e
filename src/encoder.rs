//! Encoding of bound parameters into Data API wire parameters.

use crate::error::{RdsError, Result};
use crate::types::{BoundParameter, Field, SqlParameter, SqlValue, TypeHint};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Encodes every parameter, keeping their order.
/// Fails on the first value the Data API cannot represent.
pub fn encode_parameters(params: &[BoundParameter]) -> Result<Vec<SqlParameter>> {
    params.iter().map(encode_parameter).collect()
}

fn encode_parameter(param: &BoundParameter) -> Result<SqlParameter> {
    let name = param.name.clone().unwrap_or_default();
    let encoded = match &param.value {
        SqlValue::Null => SqlParameter::new(name, Field::Null),
        SqlValue::Text(s) => SqlParameter::new(name, Field::String(s.clone())),
        SqlValue::Int32(i) => SqlParameter::new(name, Field::Long(i64::from(*i))),
        SqlValue::Int64(i) => SqlParameter::new(name, Field::Long(*i)),
        SqlValue::Float64(f) => SqlParameter::new(name, Field::Double(*f)),
        SqlValue::Bool(b) => SqlParameter::new(name, Field::Boolean(*b)),
        SqlValue::Bytes(b) => SqlParameter::new(name, Field::Blob(b.clone())),
        SqlValue::Date(d) => {
            SqlParameter::new(name, Field::String(d.format(DATE_FORMAT).to_string()))
                .with_type_hint(TypeHint::Date)
        }
        SqlValue::Timestamp(ts) => {
            SqlParameter::new(name, Field::String(ts.format(TIMESTAMP_FORMAT).to_string()))
                .with_type_hint(TypeHint::Timestamp)
        }
        // Array parameters are rejected by the Data API.
        other @ SqlValue::Array(_) => {
            return Err(RdsError::UnsupportedParameter {
                name,
                kind: other.kind(),
            })
        }
    };
    Ok(encoded)
}
