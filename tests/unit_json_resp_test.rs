mod common;

use bytes::Bytes;
use common::MockConnection;
use spinel_json::{JsonClient, RespValue};

#[tokio::test]
async fn test_json_resp_returns_structural_reply_unchanged() {
    let structural = RespValue::Array(vec![
        RespValue::SimpleString("{".to_string()),
        RespValue::BulkString(Bytes::from_static(b"name")),
        RespValue::BulkString(Bytes::from_static(b"Pavan")),
        RespValue::Integer(1800),
    ]);
    let conn = MockConnection::new().reply_with(structural.clone());
    let mut client = JsonClient::new(conn);

    let reply = client.resp("baz", ".").await.unwrap();
    assert_eq!(reply, structural);

    let conn = client.into_inner();
    assert_eq!(conn.sent_tokens(0), vec!["JSON.RESP", "baz", "."]);
}
