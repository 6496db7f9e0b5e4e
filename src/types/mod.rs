mod field;
mod isolation;
mod parameter;
mod request;
mod row;
mod sql_value;
mod value;

pub use field::{Field, SqlParameter, TypeHint};
pub use isolation::IsolationLevel;
pub use parameter::BoundParameter;
pub use request::{BeginTransactionRequest, ExecuteStatementRequest, RollbackTransactionRequest};
pub use row::{ColumnMetadata, QueryResult, RawQueryResult, Row};
pub use sql_value::SqlValue;
pub use value::Value;
