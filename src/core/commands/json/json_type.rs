// src/core/commands/json/json_type.rs

use super::path::{IntoJsonPath, JsonPath};
use super::reply::{self, DialectReply};
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonType {
    pub key: Bytes,
    pub path: JsonPath,
}

impl JsonType {
    pub fn new(key: &str, path: impl IntoJsonPath) -> Self {
        JsonType {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
        }
    }

    /// A type name under the legacy dialect, a list of type names under the
    /// dollar dialect, `None` for a missing key.
    pub fn decode_reply(
        &self,
        reply: RespValue,
    ) -> Result<Option<DialectReply<String>>, JsonClientError> {
        if reply.is_null() {
            return Ok(None);
        }
        reply::shape_reply(reply, self.path.is_dollar(), reply::reply_to_string).map(Some)
    }
}

impl CommandSpec for JsonType {
    fn name(&self) -> &'static str {
        "JSON.TYPE"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
        ]
    }
}
