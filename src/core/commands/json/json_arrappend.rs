// src/core/commands/json/json_arrappend.rs

use super::path::{IntoJsonPath, JsonPath};
use super::reply::{self, DialectReply};
use crate::core::commands::command_spec::CommandSpec;
use crate::core::{JsonClientError, RespValue};
use bytes::Bytes;
use serde::Serialize;

/// Represents the `JSON.ARRAPPEND` command. Each value is serialized to its
/// own JSON-text token.
#[derive(Debug, Clone, Default)]
pub struct JsonArrAppend {
    pub key: Bytes,
    pub path: JsonPath,
    pub values_json: Vec<Bytes>,
}

impl JsonArrAppend {
    pub fn new<V: Serialize>(
        key: &str,
        path: impl IntoJsonPath,
        values: &[V],
    ) -> Result<Self, JsonClientError> {
        if values.is_empty() {
            return Err(JsonClientError::InvalidArgument(
                "wrong number of arguments for 'JSON.ARRAPPEND': at least one value is required"
                    .to_string(),
            ));
        }
        Ok(JsonArrAppend {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.into_json_path(),
            values_json: values
                .iter()
                .map(reply::json_encode)
                .collect::<Result<_, _>>()?,
        })
    }

    /// New array length, per matched location under the dollar dialect.
    pub fn decode_reply(&self, reply: RespValue) -> Result<DialectReply<i64>, JsonClientError> {
        reply::shape_reply(reply, self.path.is_dollar(), reply::reply_to_i64)
    }
}

impl CommandSpec for JsonArrAppend {
    fn name(&self) -> &'static str {
        "JSON.ARRAPPEND"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![
            self.key.clone(),
            Bytes::copy_from_slice(self.path.as_str().as_bytes()),
        ];
        args.extend(self.values_json.iter().cloned());
        args
    }
}
