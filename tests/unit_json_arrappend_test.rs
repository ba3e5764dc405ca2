mod common;

use common::MockConnection;
use serde_json::json;
use spinel_json::{DialectReply, JsonClient, JsonClientError, RespValue};

#[tokio::test]
async fn test_json_arrappend_encodes_each_value() {
    let conn = MockConnection::new().reply_with(RespValue::Integer(7));
    let mut client = JsonClient::new(conn);

    let reply = client
        .arr_append("append", ".arr", &[json!(42), json!("sub")])
        .await
        .unwrap();
    assert_eq!(reply, DialectReply::Single(7));

    let conn = client.into_inner();
    assert_eq!(
        conn.sent_tokens(0),
        vec!["JSON.ARRAPPEND", "append", ".arr", "42", "\"sub\""]
    );
}

#[tokio::test]
async fn test_json_arrappend_dollar_returns_lengths_list() {
    let conn = MockConnection::new().reply_with(RespValue::Array(vec![RespValue::Integer(7)]));
    let mut client = JsonClient::new(conn);

    let reply = client
        .arr_append("append", "$.arr", &[json!(42)])
        .await
        .unwrap();
    assert_eq!(reply, DialectReply::Many(vec![7]));
}

#[tokio::test]
async fn test_json_arrappend_without_values_fails_before_any_call() {
    let conn = MockConnection::new();
    let mut client = JsonClient::new(conn);

    let err = client
        .arr_append::<serde_json::Value>("append", ".arr", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, JsonClientError::InvalidArgument(_)));

    let conn = client.into_inner();
    assert!(conn.sent.is_empty());
}
