mod common;

use bytes::Bytes;
use common::MockConnection;
use spinel_json::{JsonClient, NumberReply, RespValue};

#[tokio::test]
async fn test_json_nummultby_legacy_coerces_to_integer() {
    let conn = MockConnection::new().reply_with(RespValue::BulkString(Bytes::from_static(b"2")));
    let mut client = JsonClient::new(conn);

    let reply = client.num_mult_by("test", ".bar", 2.0).await.unwrap();
    assert_eq!(reply, NumberReply::Int(2));

    let conn = client.into_inner();
    assert_eq!(
        conn.sent_tokens(0),
        vec!["JSON.NUMMULTBY", "test", ".bar", "2"]
    );
}

#[tokio::test]
async fn test_json_nummultby_dollar_keeps_raw_array_text() {
    let conn = MockConnection::new().reply_with(RespValue::BulkString(Bytes::from_static(b"[2]")));
    let mut client = JsonClient::new(conn);

    let reply = client.num_mult_by("test", "$.bar", 2.0).await.unwrap();
    assert_eq!(reply, NumberReply::Raw("[2]".to_string()));
}
