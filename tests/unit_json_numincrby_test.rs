mod common;

use bytes::Bytes;
use common::MockConnection;
use spinel_json::{JsonClient, NumberReply, RespValue};

#[tokio::test]
async fn test_json_numincrby_legacy_coerces_to_integer() {
    let conn = MockConnection::new().reply_with(RespValue::BulkString(Bytes::from_static(b"1")));
    let mut client = JsonClient::new(conn);

    let reply = client.num_incr_by("test", ".foo", 1.0).await.unwrap();
    assert_eq!(reply, NumberReply::Int(1));

    let conn = client.into_inner();
    assert_eq!(
        conn.sent_tokens(0),
        vec!["JSON.NUMINCRBY", "test", ".foo", "1"]
    );
}

#[tokio::test]
async fn test_json_numincrby_dollar_keeps_raw_array_text() {
    let conn = MockConnection::new().reply_with(RespValue::BulkString(Bytes::from_static(b"[1]")));
    let mut client = JsonClient::new(conn);

    let reply = client.num_incr_by("test", "$..foo", 1.0).await.unwrap();
    assert_eq!(reply, NumberReply::Raw("[1]".to_string()));
}

#[tokio::test]
async fn test_json_numincrby_fractional_number_token_and_truncation() {
    let conn = MockConnection::new().reply_with(RespValue::BulkString(Bytes::from_static(b"2.5")));
    let mut client = JsonClient::new(conn);

    let reply = client.num_incr_by("test", ".foo", 1.5).await.unwrap();
    assert_eq!(reply, NumberReply::Int(2));

    let conn = client.into_inner();
    assert_eq!(
        conn.sent_tokens(0),
        vec!["JSON.NUMINCRBY", "test", ".foo", "1.5"]
    );
}
