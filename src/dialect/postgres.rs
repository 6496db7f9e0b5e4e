use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::encoder::encode_parameters;
use crate::error::{RdsError, Result};
use crate::types::{BoundParameter, ExecuteStatementRequest, IsolationLevel};

use super::{converter, Dialect, FieldConverter};

/// Matches `$N` positional placeholders anywhere in the statement text,
/// including inside string literals and comments.
static POSITIONAL_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([0-9]+)").expect("placeholder pattern is valid"));

const SUPPORTED_ISOLATION_LEVELS: [IsolationLevel; 5] = [
    IsolationLevel::Default,
    IsolationLevel::RepeatableRead,
    IsolationLevel::ReadCommitted,
    IsolationLevel::ReadUncommitted,
    IsolationLevel::Serializable,
];

/// PostgreSQL 10 as offered by Aurora Serverless.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn migrate_query(
        &self,
        query: &str,
        params: &[BoundParameter],
    ) -> Result<ExecuteStatementRequest> {
        let named = params.iter().any(BoundParameter::is_named);
        let ordinal = params.iter().any(BoundParameter::is_ordinal);
        if named && ordinal {
            return Err(RdsError::MixedParameters);
        }

        if !ordinal {
            debug!(params = params.len(), "passing named parameters through");
            return Ok(ExecuteStatementRequest::new(
                query,
                encode_parameters(params)?,
            ));
        }

        let renamed: Vec<BoundParameter> = params
            .iter()
            .map(|p| BoundParameter {
                name: Some(p.ordinal.to_string()),
                ordinal: 0,
                value: p.value.clone(),
            })
            .collect();
        let sql = POSITIONAL_PLACEHOLDER.replace_all(query, ":$1");
        debug!(params = renamed.len(), sql = %sql, "rewrote positional parameters");

        Ok(ExecuteStatementRequest::new(
            sql,
            encode_parameters(&renamed)?,
        ))
    }

    fn field_converter(&self, column_type: &str) -> FieldConverter {
        converter::lookup(column_type)
    }

    fn is_isolation_level_supported(&self, level: IsolationLevel) -> bool {
        SUPPORTED_ISOLATION_LEVELS.contains(&level)
    }
}
