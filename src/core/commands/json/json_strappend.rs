// src/core/commands/json/json_strappend.rs

use super::path::{IntoJsonPath, JsonPath};
use super::reply::{self, DialectReply};
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;

/// Represents the `JSON.STRAPPEND` command. The appended string travels as
/// JSON text, like every other document payload.
#[derive(Debug, Clone, Default)]
pub struct JsonStrAppend {
    pub key: Bytes,
    pub path: JsonPath,
    pub value_json: Bytes,
}

impl JsonStrAppend {
    pub fn new(key: &str, value: &str, path: impl IntoJsonPath) -> Result<Self, JsonClientError> {
        Ok(JsonStrAppend {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
            value_json: reply::json_encode(value)?,
        })
    }

    /// New string length, per matched location under the dollar dialect.
    pub fn decode_reply(&self, reply: RespValue) -> Result<DialectReply<i64>, JsonClientError> {
        reply::shape_reply(reply, self.path.is_dollar(), reply::reply_to_i64)
    }
}

impl CommandSpec for JsonStrAppend {
    fn name(&self) -> &'static str {
        "JSON.STRAPPEND"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
            self.value_json.clone(),
        ]
    }
}
