// src/core/commands/json/json_objkeys.rs

use super::path::{IntoJsonPath, JsonPath};
use super::reply::{self, DialectReply};
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;

/// Represents the `JSON.OBJKEYS` command.
///
/// The wire reply is already list-shaped in both dialects: a flat list of key
/// names under the legacy dialect, one list per matched location under the
/// dollar dialect. The dialect only picks which of the two the typed result
/// is.
#[derive(Debug, Clone, Default)]
pub struct JsonObjKeys {
    pub key: Bytes,
    pub path: JsonPath,
}

impl JsonObjKeys {
    pub fn new(key: &str, path: impl IntoJsonPath) -> Self {
        JsonObjKeys {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
        }
    }

    pub fn decode_reply(
        &self,
        reply: RespValue,
    ) -> Result<DialectReply<Vec<String>>, JsonClientError> {
        reply::shape_reply(reply, self.path.is_dollar(), reply::reply_to_string_list)
    }
}

impl CommandSpec for JsonObjKeys {
    fn name(&self) -> &'static str {
        "JSON.OBJKEYS"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
        ]
    }
}
