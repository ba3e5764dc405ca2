// src/core/commands/json/json_arrindex.rs

use super::path::{IntoJsonPath, JsonPath};
use super::reply::{self, DialectReply};
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;
use serde::Serialize;

/// Represents the `JSON.ARRINDEX` command, which searches an array for the
/// first occurrence of a scalar within the `[start, stop]` slice (0/0 scans
/// the whole array).
#[derive(Debug, Clone, Default)]
pub struct JsonArrIndex {
    pub key: Bytes,
    pub path: JsonPath,
    pub scalar_json: Bytes,
    pub start: i64,
    pub stop: i64,
}

impl JsonArrIndex {
    pub fn new<V: Serialize + ?Sized>(
        key: &str,
        path: impl IntoJsonPath,
        scalar: &V,
        start: i64,
        stop: i64,
    ) -> Result<Self, JsonClientError> {
        Ok(JsonArrIndex {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
            scalar_json: reply::json_encode(scalar)?,
            start,
            stop,
        })
    }

    /// The matched index, -1 when the scalar is absent.
    pub fn decode_reply(&self, reply: RespValue) -> Result<DialectReply<i64>, JsonClientError> {
        reply::shape_reply(reply, self.path.is_dollar(), reply::reply_to_i64)
    }
}

impl CommandSpec for JsonArrIndex {
    fn name(&self) -> &'static str {
        "JSON.ARRINDEX"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
            self.scalar_json.clone(),
            Bytes::from(self.start.to_string()),
            Bytes::from(self.stop.to_string()),
        ]
    }
}
