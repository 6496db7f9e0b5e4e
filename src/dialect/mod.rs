//! SQL dialects understood by the Data API adapter.
//!
//! A [`Dialect`] reconciles ordinary parameterized SQL with the Data API's
//! calling convention: it rewrites statements to named parameters,
//! picks a converter for each declared column type, and reports which
//! isolation levels it can honor. Dialects are stateless singletons
//! resolved by name through [`lookup`].

mod converter;
mod postgres;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{RdsError, Result};
use crate::types::{BoundParameter, ExecuteStatementRequest, IsolationLevel};

pub use converter::FieldConverter;
pub use postgres::PostgresDialect;

/// Capability set of one SQL engine behind the Data API.
pub trait Dialect: Send + Sync {
    /// Returns the registry name of this dialect.
    fn name(&self) -> &'static str;

    /// Rewrites `query` and encodes `params` for the Data API.
    fn migrate_query(&self, query: &str, params: &[BoundParameter])
        -> Result<ExecuteStatementRequest>;

    /// Returns the converter for a declared column type.
    /// Never fails; an unrecognized type yields a converter that does.
    fn field_converter(&self, column_type: &str) -> FieldConverter;

    /// Whether a transaction may be started at `level`.
    fn is_isolation_level_supported(&self, level: IsolationLevel) -> bool;
}

static POSTGRES: PostgresDialect = PostgresDialect;

static DIALECTS: Lazy<HashMap<&'static str, &'static dyn Dialect>> = Lazy::new(|| {
    HashMap::from([
        ("postgres", &POSTGRES as &'static dyn Dialect),
        ("postgresql", &POSTGRES as &'static dyn Dialect),
    ])
});

/// Resolves a dialect by name, ignoring case.
pub fn lookup(name: &str) -> Result<&'static dyn Dialect> {
    DIALECTS
        .get(name.to_ascii_lowercase().as_str())
        .copied()
        .ok_or_else(|| RdsError::UnknownDialect(name.to_string()))
}

/// Returns the registered dialect names, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = DIALECTS.keys().copied().collect();
    names.sort_unstable();
    names
}
