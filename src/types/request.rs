use super::SqlParameter;

/// A statement ready to be submitted to the Data API.
///
/// Dialects fill in `sql` and `parameters`; the client adds the target
/// cluster, credentials and transaction before sending it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecuteStatementRequest {
    pub sql: String,
    pub parameters: Vec<SqlParameter>,
    pub resource_arn: String,
    pub secret_arn: String,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub transaction_id: Option<String>,
}

impl ExecuteStatementRequest {
    pub fn new(sql: impl Into<String>, parameters: Vec<SqlParameter>) -> Self {
        Self {
            sql: sql.into(),
            parameters,
            ..Default::default()
        }
    }

    /// Returns the parameter bound to `name`, if any.
    pub fn parameter(&self, name: &str) -> Option<&SqlParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// Request to open a transaction on the Data API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeginTransactionRequest {
    pub resource_arn: String,
    pub secret_arn: String,
    pub database: Option<String>,
    pub schema: Option<String>,
}

/// Request to roll back an open transaction on the Data API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RollbackTransactionRequest {
    pub resource_arn: String,
    pub secret_arn: String,
    pub transaction_id: String,
}
