mod common;

use bytes::Bytes;
use common::MockConnection;
use serde_json::json;
use spinel_json::{JsonClient, JsonClientError, RespValue};

#[tokio::test]
async fn test_json_mget_tokens_are_keys_then_path() {
    let conn = MockConnection::new().reply_with(RespValue::Array(vec![]));
    let mut client = JsonClient::new(conn);

    client.mget(&["bar", "baz"], ".").await.unwrap();

    let conn = client.into_inner();
    assert_eq!(conn.sent_tokens(0), vec!["JSON.MGET", "bar", "baz", "."]);
}

#[tokio::test]
async fn test_json_mget_fetches_all_values() {
    let conn = MockConnection::new().reply_with(RespValue::Array(vec![
        RespValue::BulkString(Bytes::from_static(b"{\"name\":\"John Doe\"}")),
        RespValue::BulkString(Bytes::from_static(b"{\"name\":\"Pavan\",\"lastSeen\":1800}")),
    ]));
    let mut client = JsonClient::new(conn);

    let values = client.mget(&["bar", "baz"], ".").await.unwrap();
    assert_eq!(
        values,
        vec![
            Some(json!({"name": "John Doe"})),
            Some(json!({"name": "Pavan", "lastSeen": 1800})),
        ]
    );
}

#[tokio::test]
async fn test_json_mget_skips_missing_values_in_order() {
    let conn = MockConnection::new().reply_with(RespValue::Array(vec![
        RespValue::BulkString(Bytes::from_static(b"{\"name\":\"John Doe\"}")),
        RespValue::Null,
    ]));
    let mut client = JsonClient::new(conn);

    let values = client.mget(&["bar", "missing"], ".").await.unwrap();
    assert_eq!(values, vec![Some(json!({"name": "John Doe"})), None]);
}

#[tokio::test]
async fn test_json_mget_dollar_path_keeps_wrapped_elements() {
    let conn = MockConnection::new().reply_with(RespValue::Array(vec![
        RespValue::BulkString(Bytes::from_static(b"[{\"name\":\"John Doe\"}]")),
        RespValue::Null,
    ]));
    let mut client = JsonClient::new(conn);

    let values = client.mget(&["bar", "missing"], "$").await.unwrap();
    assert_eq!(values, vec![Some(json!([{"name": "John Doe"}])), None]);
}

#[tokio::test]
async fn test_json_mget_without_keys_fails_before_any_call() {
    let conn = MockConnection::new();
    let mut client = JsonClient::new(conn);

    let err = client.mget(&[], "$").await.unwrap_err();
    assert!(matches!(err, JsonClientError::InvalidArgument(_)));

    let conn = client.into_inner();
    assert!(conn.sent.is_empty());
}
