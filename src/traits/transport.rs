use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    BeginTransactionRequest, ExecuteStatementRequest, RawQueryResult, RollbackTransactionRequest,
};

/// Trait for Data API transport implementations.
/// Transports are responsible for:
/// - Signing and sending requests to the Data API
/// - Returning column metadata and unconverted fields
///
/// Statements arrive already rewritten to named parameters (`:name`).
#[async_trait]
pub trait DataApiTransport: Send + Sync {
    /// Execute one statement and return its raw result.
    async fn execute_statement(&self, request: ExecuteStatementRequest) -> Result<RawQueryResult>;

    /// Open a transaction and return its identifier.
    async fn begin_transaction(&self, request: BeginTransactionRequest) -> Result<String>;

    /// Roll back and close an open transaction.
    async fn rollback_transaction(&self, request: RollbackTransactionRequest) -> Result<()>;
}
