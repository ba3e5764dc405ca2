mod common;

use bytes::Bytes;
use common::MockConnection;
use spinel_json::{DialectReply, JsonClient, RespValue};

#[tokio::test]
async fn test_json_type_legacy_returns_scalar() {
    let conn = MockConnection::new().reply_with(RespValue::BulkString(Bytes::from_static(b"array")));
    let mut client = JsonClient::new(conn);

    let reply = client.type_of("foo", ".").await.unwrap();
    assert_eq!(reply, Some(DialectReply::Single("array".to_string())));

    let conn = client.into_inner();
    assert_eq!(conn.sent_tokens(0), vec!["JSON.TYPE", "foo", "."]);
}

#[tokio::test]
async fn test_json_type_dollar_returns_list_even_for_one_match() {
    let conn = MockConnection::new().reply_with(RespValue::Array(vec![RespValue::BulkString(
        Bytes::from_static(b"string"),
    )]));
    let mut client = JsonClient::new(conn);

    let reply = client.type_of("bar", "$.name").await.unwrap();
    assert_eq!(reply, Some(DialectReply::Many(vec!["string".to_string()])));
}

#[tokio::test]
async fn test_json_type_missing_key_yields_none() {
    let conn = MockConnection::new().reply_with(RespValue::Null);
    let mut client = JsonClient::new(conn);

    let reply = client.type_of("missing", ".").await.unwrap();
    assert_eq!(reply, None);
}
