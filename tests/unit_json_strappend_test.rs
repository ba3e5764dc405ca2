mod common;

use common::MockConnection;
use spinel_json::{DialectReply, JsonClient, RespValue};

#[tokio::test]
async fn test_json_strappend_sends_encoded_string() {
    let conn = MockConnection::new().reply_with(RespValue::Integer(6));
    let mut client = JsonClient::new(conn);

    let reply = client.str_append("test", "bar", ".").await.unwrap();
    assert_eq!(reply, DialectReply::Single(6));

    let conn = client.into_inner();
    assert_eq!(
        conn.sent_tokens(0),
        vec!["JSON.STRAPPEND", "test", ".", "\"bar\""]
    );
}

#[tokio::test]
async fn test_json_strappend_dollar_returns_lengths_list() {
    let conn = MockConnection::new().reply_with(RespValue::Array(vec![RespValue::Integer(6)]));
    let mut client = JsonClient::new(conn);

    let reply = client.str_append("test", "bar", "$").await.unwrap();
    assert_eq!(reply, DialectReply::Many(vec![6]));
}
