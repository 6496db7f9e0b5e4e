//! rdsql - Postgres dialect adapter for the Amazon RDS Data API
//!
//! The Data API only accepts named parameters and returns typed field
//! unions instead of rows. rdsql rewrites ordinary `$1`-style statements
//! into the Data API's `:name` form and converts returned fields back into
//! plain values according to each column's declared type.
//!
//! # Example
//! ```ignore
//! use rdsql::{BoundParameter, DriverConfig, RdsClient};
//!
//! let client = RdsClient::new(DriverConfig::from_env()?, transport)?;
//!
//! let row = client
//!     .query(
//!         "SELECT id, name FROM users WHERE name = $1",
//!         &BoundParameter::positional(["John"]),
//!     )
//!     .await?
//!     .single_row()?;
//!
//! let id = row.get("id")?.as_i64();
//! let name = row.get("name")?.as_str();
//! ```

pub mod config;
pub mod dialect;
pub mod encoder;
pub mod error;
pub mod traits;
pub mod transports;
pub mod types;

mod client;

// Re-export main types for convenient access
pub use client::RdsClient;
pub use config::DriverConfig;
pub use dialect::{Dialect, FieldConverter, PostgresDialect};
pub use error::{RdsError, Result};
pub use traits::DataApiTransport;
pub use types::{
    BoundParameter, ExecuteStatementRequest, Field, IsolationLevel, QueryResult, RawQueryResult,
    Row, SqlParameter, SqlValue, Value,
};
