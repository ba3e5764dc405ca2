// src/core/protocol/resp_value.rs

//! Defines a simplified value type for use within the reply-decoding layer.

use bytes::Bytes;

/// `RespValue` is a simplified version of `RespFrame`.
///
/// It's used as the input to the reply-decoding logic. The decoding layer
/// shouldn't need to worry about the full complexity of the RESP protocol; it
/// only consumes values the transport has already parsed off the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum RespValue {
    SimpleString(String),
    BulkString(Bytes),
    Integer(i64),
    Array(Vec<RespValue>),
    Null,
    NullArray,
    Error(String),
}

impl RespValue {
    /// True for both null shapes. The store replies with a null bulk string
    /// for an absent key and a null array for an absent multi-result.
    pub fn is_null(&self) -> bool {
        matches!(self, RespValue::Null | RespValue::NullArray)
    }
}

/// Implements the conversion from the wire-protocol `RespFrame` to the
/// internal `RespValue` after a reply has been decoded.
impl From<super::RespFrame> for RespValue {
    fn from(frame: super::RespFrame) -> Self {
        match frame {
            super::RespFrame::SimpleString(s) => RespValue::SimpleString(s),
            super::RespFrame::BulkString(b) => RespValue::BulkString(b),
            super::RespFrame::Integer(i) => RespValue::Integer(i),
            // Recursively convert elements of an array.
            super::RespFrame::Array(arr) => {
                RespValue::Array(arr.into_iter().map(Into::into).collect())
            }
            super::RespFrame::Null => RespValue::Null,
            super::RespFrame::NullArray => RespValue::NullArray,
            super::RespFrame::Error(s) => RespValue::Error(s),
        }
    }
}
