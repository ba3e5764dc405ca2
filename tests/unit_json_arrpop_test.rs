mod common;

use bytes::Bytes;
use common::MockConnection;
use spinel_json::{DialectReply, JsonClient, RespValue};

#[tokio::test]
async fn test_json_arrpop_legacy_returns_json_text() {
    let conn = MockConnection::new().reply_with(RespValue::BulkString(Bytes::from_static(b"9")));
    let mut client = JsonClient::new(conn);

    let reply = client.arr_pop("index", ".arr", -1).await.unwrap();
    assert_eq!(reply, DialectReply::Single(Some("9".to_string())));

    let conn = client.into_inner();
    assert_eq!(
        conn.sent_tokens(0),
        vec!["JSON.ARRPOP", "index", ".arr", "-1"]
    );
}

#[tokio::test]
async fn test_json_arrpop_legacy_empty_array_yields_none() {
    let conn = MockConnection::new().reply_with(RespValue::Null);
    let mut client = JsonClient::new(conn);

    let reply = client.arr_pop("null", ".arr", -1).await.unwrap();
    assert_eq!(reply, DialectReply::Single(None));
}

#[tokio::test]
async fn test_json_arrpop_dollar_returns_popped_list() {
    let conn = MockConnection::new().reply_with(RespValue::Array(vec![RespValue::BulkString(
        Bytes::from_static(b"9"),
    )]));
    let mut client = JsonClient::new(conn);

    let reply = client.arr_pop("index", "$..arr", 5).await.unwrap();
    assert_eq!(reply, DialectReply::Many(vec![Some("9".to_string())]));
}

#[tokio::test]
async fn test_json_arrpop_dollar_non_popping_location_is_none() {
    let conn = MockConnection::new().reply_with(RespValue::Array(vec![
        RespValue::BulkString(Bytes::from_static(b"\"last\"")),
        RespValue::Null,
    ]));
    let mut client = JsonClient::new(conn);

    let reply = client.arr_pop("index", "$..arr", -1).await.unwrap();
    assert_eq!(
        reply,
        DialectReply::Many(vec![Some("\"last\"".to_string()), None])
    );
}
