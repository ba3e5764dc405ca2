// src/core/commands/json/json_arrtrim.rs

use super::path::{IntoJsonPath, JsonPath};
use super::reply::{self, DialectReply};
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;

/// Represents the `JSON.ARRTRIM` command, which trims an array to the
/// inclusive `[start, stop]` slice.
#[derive(Debug, Clone, Default)]
pub struct JsonArrTrim {
    pub key: Bytes,
    pub path: JsonPath,
    pub start: i64,
    pub stop: i64,
}

impl JsonArrTrim {
    pub fn new(key: &str, path: impl IntoJsonPath, start: i64, stop: i64) -> Self {
        JsonArrTrim {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
            start,
            stop,
        }
    }

    pub fn decode_reply(&self, reply: RespValue) -> Result<DialectReply<i64>, JsonClientError> {
        reply::shape_reply(reply, self.path.is_dollar(), reply::reply_to_i64)
    }
}

impl CommandSpec for JsonArrTrim {
    fn name(&self) -> &'static str {
        "JSON.ARRTRIM"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
            Bytes::from(self.start.to_string()),
            Bytes::from(self.stop.to_string()),
        ]
    }
}
