//! Property-based tests for the codec and the encode/decode laws.

mod common;

use bytes::{Bytes, BytesMut};
use common::MockConnection;
use proptest::prelude::*;
use serde_json::Value;
use spinel_json::core::protocol::{RespFrame, RespFrameCodec};
use spinel_json::{JsonClient, JsonPath, RespValue, SetOptions};
use tokio_util::codec::{Decoder, Encoder};

/// Arbitrary RESP frames, including nested arrays. Simple strings and errors
/// must stay CRLF-free, as on the wire.
fn arb_frame() -> impl Strategy<Value = RespFrame> {
    let leaf = prop_oneof![
        "[^\r\n]{0,64}".prop_map(RespFrame::SimpleString),
        "[^\r\n]{0,64}".prop_map(RespFrame::Error),
        any::<i64>().prop_map(RespFrame::Integer),
        prop::collection::vec(any::<u8>(), 0..64)
            .prop_map(|v| RespFrame::BulkString(Bytes::from(v))),
        Just(RespFrame::Null),
        Just(RespFrame::NullArray),
    ];
    leaf.prop_recursive(3, 64, 8, |inner| {
        prop::collection::vec(inner, 0..8).prop_map(RespFrame::Array)
    })
}

/// Arbitrary JSON documents: scalars, arrays, and objects, nested.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        prop::num::f64::NORMAL.prop_map(|f| serde_json::json!(f)),
        "[a-zA-Z0-9 _-]{0,24}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 100,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    #[test]
    fn test_resp_frame_encode_decode_roundtrip(frame in arb_frame()) {
        let mut codec = RespFrameCodec;
        let mut buf = BytesMut::new();
        codec.encode(frame.clone(), &mut buf).unwrap();

        let decoded = codec.decode(&mut buf).unwrap().expect("complete frame");
        prop_assert_eq!(decoded, frame);
        prop_assert!(buf.is_empty(), "decoder must consume the whole frame");
    }

    #[test]
    fn test_resp_frame_prefix_is_incomplete(frame in arb_frame(), cut in 0usize..64) {
        let mut codec = RespFrameCodec;
        let mut buf = BytesMut::new();
        codec.encode(frame, &mut buf).unwrap();

        // Any strict prefix must decode to "need more data", never an error.
        if buf.len() > 1 {
            let cut = 1 + cut % (buf.len() - 1);
            let mut partial = BytesMut::from(&buf[..cut]);
            prop_assert_eq!(codec.decode(&mut partial).unwrap(), None);
        }
    }

    #[test]
    fn test_json_value_roundtrip_through_client(value in arb_json()) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let reply = Bytes::from(serde_json::to_vec(&value).unwrap());
            let conn = MockConnection::new()
                .reply_with(RespValue::SimpleString("OK".into()))
                .reply_with(RespValue::BulkString(reply));
            let mut client = JsonClient::new(conn);

            client
                .set("k", JsonPath::root(), &value, SetOptions::default())
                .await
                .unwrap();
            let got = client.get("k").await.unwrap();
            assert_eq!(got, Some(value.clone()));

            // The payload token the client sent must decode back to the
            // original value as well.
            let conn = client.into_inner();
            let sent: Value = serde_json::from_slice(&conn.sent[0][3]).unwrap();
            assert_eq!(sent, value);
        });
    }
}
