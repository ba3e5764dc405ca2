// src/core/commands/json/json_objlen.rs

use super::path::{IntoJsonPath, JsonPath};
use super::reply::{self, DialectReply};
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonObjLen {
    pub key: Bytes,
    pub path: JsonPath,
}

impl JsonObjLen {
    pub fn new(key: &str, path: impl IntoJsonPath) -> Self {
        JsonObjLen {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
        }
    }

    pub fn decode_reply(&self, reply: RespValue) -> Result<DialectReply<i64>, JsonClientError> {
        reply::shape_reply(reply, self.path.is_dollar(), reply::reply_to_i64)
    }
}

impl CommandSpec for JsonObjLen {
    fn name(&self) -> &'static str {
        "JSON.OBJLEN"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
        ]
    }
}
