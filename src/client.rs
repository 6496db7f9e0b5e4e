use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::DriverConfig;
use crate::dialect::{self, Dialect};
use crate::error::{RdsError, Result};
use crate::traits::DataApiTransport;
use crate::types::{
    BeginTransactionRequest, BoundParameter, ExecuteStatementRequest, IsolationLevel, QueryResult,
    RollbackTransactionRequest,
};

/// Main entry point for rdsql.
/// Sends parameterized SQL through the Data API in the configured dialect.
pub struct RdsClient {
    transport: Arc<dyn DataApiTransport>,
    dialect: &'static dyn Dialect,
    config: DriverConfig,
}

impl RdsClient {
    /// Create a client for `config`, sending requests through `transport`.
    ///
    /// # Example
    /// ```ignore
    /// let config = DriverConfig::from_env()?;
    /// let client = RdsClient::new(config, Arc::new(my_transport))?;
    /// let rows = client
    ///     .query("SELECT id FROM users WHERE name = $1", &BoundParameter::positional(["John"]))
    ///     .await?;
    /// ```
    pub fn new(config: DriverConfig, transport: Arc<dyn DataApiTransport>) -> Result<Self> {
        config.validate()?;
        let dialect = dialect::lookup(&config.dialect)?;
        Ok(Self {
            transport,
            dialect,
            config,
        })
    }

    pub fn dialect(&self) -> &'static dyn Dialect {
        self.dialect
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Execute a statement and convert its rows.
    pub async fn query(&self, sql: &str, params: &[BoundParameter]) -> Result<QueryResult> {
        self.query_in(None, sql, params).await
    }

    /// Execute a statement inside the transaction `transaction_id`.
    pub async fn query_in_transaction(
        &self,
        transaction_id: &str,
        sql: &str,
        params: &[BoundParameter],
    ) -> Result<QueryResult> {
        self.query_in(Some(transaction_id), sql, params).await
    }

    async fn query_in(
        &self,
        transaction_id: Option<&str>,
        sql: &str,
        params: &[BoundParameter],
    ) -> Result<QueryResult> {
        let request = self.dialect.migrate_query(sql, params)?;
        let request = self.target(request, transaction_id);
        debug!(
            dialect = self.dialect.name(),
            sql = %request.sql,
            params = request.parameters.len(),
            "executing statement"
        );

        let raw = self.transport.execute_statement(request).await?;
        QueryResult::from_raw(raw, self.dialect)
    }

    /// Open a transaction at `level`.
    ///
    /// Levels the dialect does not support are rejected before anything
    /// is sent to the Data API. If the isolation level cannot be applied,
    /// the new transaction is rolled back before the error is returned.
    pub async fn begin_transaction(&self, level: IsolationLevel) -> Result<String> {
        if !self.dialect.is_isolation_level_supported(level) {
            warn!(dialect = self.dialect.name(), %level, "isolation level not supported");
            return Err(RdsError::UnsupportedIsolationLevel {
                level,
                dialect: self.dialect.name(),
            });
        }

        let transaction_id = self
            .transport
            .begin_transaction(BeginTransactionRequest {
                resource_arn: self.config.resource_arn.clone(),
                secret_arn: self.config.secret_arn.clone(),
                database: self.config.database.clone(),
                schema: self.config.schema.clone(),
            })
            .await?;

        if let Some(clause) = level.as_sql() {
            let set_level = ExecuteStatementRequest::new(
                format!("SET TRANSACTION ISOLATION LEVEL {}", clause),
                Vec::new(),
            );
            let set_level = self.target(set_level, Some(&transaction_id));
            if let Err(err) = self.transport.execute_statement(set_level).await {
                if let Err(rollback_err) = self.rollback_transaction(&transaction_id).await {
                    warn!(%transaction_id, error = %rollback_err, "rollback after failed begin");
                }
                return Err(err);
            }
        }

        debug!(%transaction_id, %level, "transaction started");
        Ok(transaction_id)
    }

    /// Roll back the transaction `transaction_id`.
    pub async fn rollback_transaction(&self, transaction_id: &str) -> Result<()> {
        self.transport
            .rollback_transaction(RollbackTransactionRequest {
                resource_arn: self.config.resource_arn.clone(),
                secret_arn: self.config.secret_arn.clone(),
                transaction_id: transaction_id.to_string(),
            })
            .await?;
        debug!(%transaction_id, "transaction rolled back");
        Ok(())
    }

    fn target(
        &self,
        mut request: ExecuteStatementRequest,
        transaction_id: Option<&str>,
    ) -> ExecuteStatementRequest {
        request.resource_arn = self.config.resource_arn.clone();
        request.secret_arn = self.config.secret_arn.clone();
        request.database = self.config.database.clone();
        request.schema = self.config.schema.clone();
        request.transaction_id = transaction_id.map(str::to_string);
        request
    }
}
