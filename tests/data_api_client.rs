use std::sync::Arc;

use rdsql::error::RdsError;
use rdsql::traits::DataApiTransport;
use rdsql::transports::{InMemoryTestResponseBuilder, InMemoryTestTransport};
use rdsql::types::{Field, IsolationLevel, SqlParameter, SqlValue, Value};
use rdsql::{BoundParameter, DriverConfig, RdsClient};

const CLUSTER: &str = "arn:aws:rds:us-east-1:123456789012:cluster:test";
const SECRET: &str = "arn:aws:secretsmanager:us-east-1:123456789012:secret:test";

fn client_with(transport: &Arc<InMemoryTestTransport>) -> RdsClient {
    let transport: Arc<dyn DataApiTransport> =
        Arc::clone(transport) as Arc<dyn DataApiTransport>;
    RdsClient::new(
        DriverConfig::new(CLUSTER, SECRET).with_database("app"),
        transport,
    )
    .unwrap()
}

#[tokio::test]
async fn test_positional_query_is_rewritten_and_converted() {
    let transport = Arc::new(
        InMemoryTestTransport::new().with_response(
            InMemoryTestResponseBuilder::new()
                .column("id", "int4")
                .column("name", "varchar")
                .column("created", "timestamp")
                .row(vec![
                    Field::Long(1),
                    Field::String("John".to_string()),
                    Field::String("2024-01-02 03:04:05".to_string()),
                ])
                .build(),
        ),
    );
    let client = client_with(&transport);

    let result = client
        .query(
            "SELECT id, name, created FROM users WHERE name = $1 AND active = $2",
            &BoundParameter::positional([SqlValue::from("John"), SqlValue::from(true)]),
        )
        .await
        .unwrap();

    transport.assert_last_request(
        "SELECT id, name, created FROM users WHERE name = :1 AND active = :2",
        &[
            SqlParameter::new("1", Field::String("John".to_string())),
            SqlParameter::new("2", Field::Boolean(true)),
        ],
    );
    transport.assert_request_count(1);

    let request = transport.last_request().unwrap();
    assert_eq!(request.resource_arn, CLUSTER);
    assert_eq!(request.secret_arn, SECRET);
    assert_eq!(request.database.as_deref(), Some("app"));
    assert_eq!(request.transaction_id, None);

    let row = result.single_row().unwrap();
    assert_eq!(row.get("id").unwrap(), &Value::Int64(1));
    assert_eq!(row.get("name").unwrap().as_str(), Some("John"));
    assert_eq!(
        row.get("created").unwrap().as_str(),
        Some("2024-01-02T03:04:05Z")
    );
}

#[tokio::test]
async fn test_named_query_passes_through() {
    let transport = Arc::new(InMemoryTestTransport::new());
    let client = client_with(&transport);

    let result = client
        .query(
            "DELETE FROM users WHERE id = :id",
            &[BoundParameter::named("id", 7i64)],
        )
        .await
        .unwrap();

    transport.assert_last_request(
        "DELETE FROM users WHERE id = :id",
        &[SqlParameter::new("id", Field::Long(7))],
    );
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_mixed_parameters_never_reach_transport() {
    let transport = Arc::new(InMemoryTestTransport::new());
    let client = client_with(&transport);

    let err = client
        .query(
            "SELECT * FROM users WHERE id = $1 AND name = :name",
            &[
                BoundParameter::ordinal(1, 1),
                BoundParameter::named("name", "John"),
            ],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, RdsError::MixedParameters));
    transport.assert_request_count(0);
}

#[tokio::test]
async fn test_null_fields_convert_to_null() {
    let transport = Arc::new(
        InMemoryTestTransport::new().with_response(
            InMemoryTestResponseBuilder::new()
                .column("id", "INT8")
                .column("nickname", "text")
                .row(vec![Field::Long(2), Field::Null])
                .build(),
        ),
    );
    let client = client_with(&transport);

    let rows = client
        .query("SELECT id, nickname FROM users", &[])
        .await
        .unwrap()
        .rows();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("id").unwrap().as_i64(), Some(2));
    assert!(rows[0].get("nickname").unwrap().is_null());
}

#[tokio::test]
async fn test_unknown_column_type_fails_read() {
    let transport = Arc::new(
        InMemoryTestTransport::new().with_response(
            InMemoryTestResponseBuilder::new()
                .column("payload", "jsonb")
                .row(vec![Field::String("{}".to_string())])
                .build(),
        ),
    );
    let client = client_with(&transport);

    let err = client
        .query("SELECT payload FROM events", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, RdsError::UnknownColumnType(ref t) if t == "jsonb"));
    assert!(err.to_string().contains("jsonb"));
}

#[tokio::test]
async fn test_begin_transaction_sets_isolation_level() {
    let transport = Arc::new(InMemoryTestTransport::new());
    let client = client_with(&transport);

    let transaction_id = client
        .begin_transaction(IsolationLevel::Serializable)
        .await
        .unwrap();

    assert_eq!(transaction_id, "tx-1");
    assert_eq!(transport.begin_count(), 1);
    transport.assert_last_request("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE", &[]);
    assert_eq!(
        transport.last_request().unwrap().transaction_id.as_deref(),
        Some("tx-1")
    );

    client
        .query_in_transaction(&transaction_id, "SELECT $1", &BoundParameter::positional([1]))
        .await
        .unwrap();
    let request = transport.last_request().unwrap();
    assert_eq!(request.sql, "SELECT :1");
    assert_eq!(request.transaction_id.as_deref(), Some("tx-1"));
}

#[tokio::test]
async fn test_begin_transaction_default_level_sends_no_statement() {
    let transport = Arc::new(InMemoryTestTransport::new());
    let client = client_with(&transport);

    client
        .begin_transaction(IsolationLevel::Default)
        .await
        .unwrap();

    assert_eq!(transport.begin_count(), 1);
    transport.assert_request_count(0);
}

#[tokio::test]
async fn test_unsupported_isolation_level_is_rejected_locally() {
    let transport = Arc::new(InMemoryTestTransport::new());
    let client = client_with(&transport);

    let err = client
        .begin_transaction(IsolationLevel::Snapshot)
        .await
        .unwrap_err();

    match err {
        RdsError::UnsupportedIsolationLevel { level, dialect } => {
            assert_eq!(level, IsolationLevel::Snapshot);
            assert_eq!(dialect, "postgres");
        }
        other => panic!("Expected UnsupportedIsolationLevel, got {other:?}"),
    }
    assert_eq!(transport.begin_count(), 0);
    transport.assert_request_count(0);
}

#[test]
fn test_unknown_dialect_is_rejected() {
    let transport: Arc<dyn DataApiTransport> = Arc::new(InMemoryTestTransport::new());
    let config = DriverConfig::new(CLUSTER, SECRET).with_dialect("mysql");

    match RdsClient::new(config, transport) {
        Err(RdsError::UnknownDialect(name)) => assert_eq!(name, "mysql"),
        Err(other) => panic!("Expected UnknownDialect, got {other:?}"),
        Ok(_) => panic!("Expected UnknownDialect"),
    }
}

#[tokio::test]
async fn test_transport_error_reaches_caller_unchanged() {
    let transport = Arc::new(
        InMemoryTestTransport::new().with_error(RdsError::QueryFailed("throttled".to_string())),
    );
    let client = client_with(&transport);

    let err = client
        .query("SELECT $1", &BoundParameter::positional([1]))
        .await
        .unwrap_err();

    match err {
        RdsError::QueryFailed(message) => assert_eq!(message, "throttled"),
        other => panic!("Expected QueryFailed, got {other:?}"),
    }
    transport.assert_request_count(1);
}

#[tokio::test]
async fn test_failed_isolation_level_rolls_back_transaction() {
    let transport = Arc::new(
        InMemoryTestTransport::new().with_error(RdsError::QueryFailed("boom".to_string())),
    );
    let client = client_with(&transport);

    let err = client
        .begin_transaction(IsolationLevel::Serializable)
        .await
        .unwrap_err();

    assert!(matches!(err, RdsError::QueryFailed(ref m) if m == "boom"));
    assert_eq!(transport.begin_count(), 1);
    transport.assert_last_request("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE", &[]);
    assert_eq!(transport.rolled_back_transactions(), vec!["tx-1".to_string()]);
}

#[tokio::test]
async fn test_rollback_transaction() {
    let transport = Arc::new(InMemoryTestTransport::new());
    let client = client_with(&transport);

    let transaction_id = client
        .begin_transaction(IsolationLevel::Default)
        .await
        .unwrap();
    client.rollback_transaction(&transaction_id).await.unwrap();

    assert_eq!(transport.rolled_back_transactions(), vec![transaction_id]);

    transport.clear_recorded();
    assert_eq!(transport.begin_count(), 0);
    assert!(transport.rolled_back_transactions().is_empty());
}

#[tokio::test]
async fn test_queued_responses_then_default() {
    let count = |n: i64| {
        InMemoryTestResponseBuilder::new()
            .column("count", "int8")
            .row(vec![Field::Long(n)])
            .build()
    };
    let transport = Arc::new(
        InMemoryTestTransport::new()
            .with_responses([count(1), count(2)])
            .with_default_response(count(0)),
    );
    let client = client_with(&transport);

    let mut seen = Vec::new();
    for _ in 0..3 {
        let result = client.query("SELECT count(*) FROM users", &[]).await.unwrap();
        seen.push(result.rows_ref()[0].get("count").unwrap().as_i64());
    }

    assert_eq!(seen, vec![Some(1), Some(2), Some(0)]);
    assert_eq!(transport.recorded_requests().len(), 3);
    assert_eq!(client.config().database.as_deref(), Some("app"));
    assert_eq!(client.dialect().name(), "postgres");
}
