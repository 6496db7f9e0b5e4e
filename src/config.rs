//! Driver configuration: which cluster to talk to and in which dialect.

use std::path::Path;

use serde::Deserialize;

use crate::error::{RdsError, Result};

fn default_dialect() -> String {
    "postgres".to_string()
}

/// Target of every statement sent through the Data API.
///
/// # Example
/// ```
/// use rdsql::DriverConfig;
///
/// let config = DriverConfig::from_toml_str(r#"
///     resource_arn = "arn:aws:rds:us-east-1:123456789012:cluster:demo"
///     secret_arn = "arn:aws:secretsmanager:us-east-1:123456789012:secret:demo"
///     database = "app"
/// "#).unwrap();
/// assert_eq!(config.dialect, "postgres");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DriverConfig {
    /// ARN of the Aurora Serverless cluster
    pub resource_arn: String,
    /// ARN of the Secrets Manager secret holding the credentials
    pub secret_arn: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default = "default_dialect")]
    pub dialect: String,
}

impl DriverConfig {
    pub fn new(resource_arn: impl Into<String>, secret_arn: impl Into<String>) -> Self {
        Self {
            resource_arn: resource_arn.into(),
            secret_arn: secret_arn.into(),
            database: None,
            schema: None,
            dialect: default_dialect(),
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = dialect.into();
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| RdsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RdsError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Reads `RDS_RESOURCE_ARN`, `RDS_SECRET_ARN`, and the optional
    /// `RDS_DATABASE`, `RDS_SCHEMA` and `RDS_DIALECT`.
    pub fn from_env() -> Result<Self> {
        let required = |key: &str| {
            std::env::var(key).map_err(|_| RdsError::Config(format!("{} is not set", key)))
        };
        let optional = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());

        let config = Self {
            resource_arn: required("RDS_RESOURCE_ARN")?,
            secret_arn: required("RDS_SECRET_ARN")?,
            database: optional("RDS_DATABASE"),
            schema: optional("RDS_SCHEMA"),
            dialect: optional("RDS_DIALECT").unwrap_or_else(default_dialect),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.resource_arn.trim().is_empty() {
            return Err(RdsError::Config("resource_arn must not be empty".into()));
        }
        if self.secret_arn.trim().is_empty() {
            return Err(RdsError::Config("secret_arn must not be empty".into()));
        }
        if self.dialect.trim().is_empty() {
            return Err(RdsError::Config("dialect must not be empty".into()));
        }
        Ok(())
    }
}
