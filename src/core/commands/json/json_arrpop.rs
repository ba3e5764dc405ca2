// src/core/commands/json/json_arrpop.rs

use super::path::{IntoJsonPath, JsonPath};
use super::reply::{self, DialectReply};
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;

/// Represents the `JSON.ARRPOP` command. Index -1 pops the last element.
///
/// Popped elements are returned as JSON text; a location that had nothing to
/// pop yields `None`.
#[derive(Debug, Clone, Default)]
pub struct JsonArrPop {
    pub key: Bytes,
    pub path: JsonPath,
    pub index: i64,
}

impl JsonArrPop {
    pub fn new(key: &str, path: impl IntoJsonPath, index: i64) -> Self {
        JsonArrPop {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
            index,
        }
    }

    pub fn decode_reply(
        &self,
        reply: RespValue,
    ) -> Result<DialectReply<Option<String>>, JsonClientError> {
        reply::shape_reply(reply, self.path.is_dollar(), reply::reply_to_opt_string)
    }
}

impl CommandSpec for JsonArrPop {
    fn name(&self) -> &'static str {
        "JSON.ARRPOP"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
            Bytes::from(self.index.to_string()),
        ]
    }
}
